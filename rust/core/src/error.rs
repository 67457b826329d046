// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for plan parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal parse errors
///
/// Everything else about a malformed plan is recoverable and reported as a
/// [`crate::Diagnostic`]; only a plan with no usable count line is rejected.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Plan text is empty")]
    EmptyPlan,

    #[error("First line is not a wall count: {line:?}")]
    InvalidCount { line: String },
}
