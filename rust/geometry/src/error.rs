// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use plan_lite_core::WallSegment;
use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during geometry derivation
#[derive(Error, Debug)]
pub enum Error {
    /// A segment carries a non-finite coordinate; the wall is skipped and
    /// processing continues with the remaining segments.
    #[error("Invalid wall coordinates: {0:?}")]
    NonFiniteCoordinate(WallSegment),

    #[error("Plan has no segments; cannot derive a floor polygon")]
    EmptyPlan,

    #[error("Floor triangulation failed: {0}")]
    TriangulationFailed(String),

    #[error("Core parser error: {0}")]
    CoreError(#[from] plan_lite_core::Error),
}
