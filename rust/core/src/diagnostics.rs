// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structured diagnostics for recoverable input problems
//!
//! Nothing in the plan pipeline throws for bad input: a malformed wall line
//! is skipped, a count mismatch is advisory, an open loop still gets a
//! floor. Each such event becomes a [`Diagnostic`] aggregated into a
//! [`DiagnosticReport`] returned next to the results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single recoverable input problem
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A wall line contained a non-numeric or missing token; the segment is
    /// retained with `NaN` coordinates and excluded from wall generation.
    MalformedCoordinate {
        /// 1-based line number in the plan text
        line: usize,
        /// The offending raw line
        raw: String,
    },
    /// Declared wall count differs from the parsed segment count.
    /// The declared count is advisory; all parsed segments are still used.
    CountMismatch { declared: usize, parsed: usize },
    /// Consecutive segments do not join: segment `segment + 1`'s start is
    /// `gap` plan units away from segment `segment`'s end.
    OpenLoop { segment: usize, gap: f64 },
    /// The floor texture could not be fetched; the floor never appears.
    TextureFetchFailed { url: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedCoordinate { line, raw } => {
                write!(f, "Invalid wall coordinates on line {}: {:?}", line, raw)
            }
            Diagnostic::CountMismatch { declared, parsed } => {
                write!(f, "Wall count mismatch: declared {}, parsed {}", declared, parsed)
            }
            Diagnostic::OpenLoop { segment, gap } => {
                write!(f, "Wall list does not close after segment {} (gap {:.3})", segment, gap)
            }
            Diagnostic::TextureFetchFailed { url, reason } => {
                write!(f, "Floor texture fetch failed for {}: {}", url, reason)
            }
        }
    }
}

/// Append-only collection of diagnostics for one processing pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticReport {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record a batch of diagnostics
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// True if nothing was reported
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// True if the report is empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate over recorded diagnostics
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}
