// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal pipeline errors
///
/// Recoverable input problems travel as diagnostics in the assembly
/// report instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(#[from] plan_lite_core::Error),

    #[error("Geometry error: {0}")]
    GeometryError(#[from] plan_lite_geometry::Error),
}
