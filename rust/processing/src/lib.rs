// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! plan-lite Processing
//!
//! The seam between the geometry core and the external renderer. Assembles
//! a plan text into a shared scene group: all wall placements are appended
//! synchronously, then the floor arrives whenever its texture resolves.
//!
//! ```rust
//! use plan_lite_processing::{assemble_plan, PlanConfig};
//!
//! let text = "4\n0 0 1000 0\n1000 0 1000 1000\n1000 1000 0 1000\n0 1000 0 0";
//! let assembly = assemble_plan(text, &PlanConfig::default()).unwrap();
//! assert_eq!(assembly.group.borrow().wall_count(), 4);
//! assert!(assembly.report.is_clean());
//! ```
//!
//! The texture fetch is the only asynchronous step. [`PendingFloor::resolve`]
//! attaches the floor on success and reports a fetch failure as a
//! diagnostic; resolving against a torn-down scene is a silent no-op.

pub mod error;
pub mod pipeline;
pub mod scene;
pub mod texture;

pub use error::{Error, Result};
pub use pipeline::{assemble_plan, Assembly, PendingFloor, PlanConfig};
pub use scene::{SceneGroup, SharedGroup};
pub use texture::{Texture, TextureError, TextureLoader};
