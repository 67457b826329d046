// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # plan-lite Core
//!
//! Parser and data model for the plan-lite floor-plan format: a wall count
//! line followed by one `x1 y1 x2 y2` centerline per wall.
//!
//! ## Overview
//!
//! - **Plan parsing**: byte-level line scanning with [memchr](https://docs.rs/memchr)
//!   and per-token float parsing with [fast-float](https://docs.rs/fast-float)
//! - **Data model**: [`WallSegment`] and [`PlanDocument`], retained verbatim
//!   for downstream wall and floor construction
//! - **Diagnostics**: recoverable input problems ([`Diagnostic`]) are
//!   aggregated and returned, never thrown
//!
//! ## Quick Start
//!
//! ```rust
//! use plan_lite_core::parse_plan;
//!
//! let text = "4\n0 0 1000 0\n1000 0 1000 1000\n1000 1000 0 1000\n0 1000 0 0";
//! let outcome = parse_plan(text).unwrap();
//! assert_eq!(outcome.document.segments.len(), 4);
//! assert!(outcome.diagnostics.is_empty());
//! ```
//!
//! Malformed coordinate tokens parse to `NaN` and the segment is kept: wall
//! generation later skips it, but the floor-polygon builder still sees the
//! document exactly as written.

pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticReport};
pub use error::{Error, Result};
pub use parser::{parse_plan, ParseOutcome};
pub use types::{PlanDocument, Point2D, WallSegment, CLOSURE_TOLERANCE};
