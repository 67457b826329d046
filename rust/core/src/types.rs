// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for floor-plan documents

use crate::diagnostics::Diagnostic;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Default tolerance when checking that consecutive wall segments join
pub const CLOSURE_TOLERANCE: f64 = 1e-6;

/// A 2D point in plan units (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One wall centerline, given by two endpoints in plan units
///
/// Coordinates may be `NaN` when the source line had malformed tokens; such
/// a segment is excluded from wall generation but stays in the document so
/// the floor-polygon builder sees the raw list unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WallSegment {
    pub start: Point2D,
    pub end: Point2D,
}

impl WallSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point2D::new(x1, y1),
            end: Point2D::new(x2, y2),
        }
    }

    /// Center-to-center length, without any thickness pad
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Direction angle in radians, `atan2(dy, dx)`
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }

    pub fn midpoint(&self) -> Point2D {
        Point2D::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// True when all four coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// A parsed plan: the declared wall count plus the ordered segment list
///
/// The declared count is advisory (soft invariant, surfaced as a
/// [`Diagnostic::CountMismatch`] when violated); the segment list is
/// authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanDocument {
    /// Wall count from the first line of the plan text
    pub declared_count: usize,
    /// Segments in document order
    pub segments: Vec<WallSegment>,
}

impl PlanDocument {
    pub fn new(declared_count: usize, segments: Vec<WallSegment>) -> Self {
        Self {
            declared_count,
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check the polygon-closure precondition: segment `i`'s end must
    /// coincide with segment `i + 1`'s start (wrapping last to first),
    /// within `tolerance` plan units.
    ///
    /// Segments with non-finite coordinates are skipped; their joins cannot
    /// be measured and they already carry their own diagnostic.
    pub fn validate_closure(&self, tolerance: f64) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if self.segments.len() < 2 {
            return diagnostics;
        }

        for (i, segment) in self.segments.iter().enumerate() {
            let next = &self.segments[(i + 1) % self.segments.len()];
            if !segment.end.is_finite() || !next.start.is_finite() {
                continue;
            }
            let gap = segment.end.distance_to(&next.start);
            if gap > tolerance {
                diagnostics.push(Diagnostic::OpenLoop { segment: i, gap });
            }
        }
        diagnostics
    }

    /// Serialize the segments back to the `x1 y1 x2 y2` wall-line format,
    /// count line included. Re-parsing the result reproduces the document.
    pub fn to_plan_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "{}", self.segments.len());
        for segment in &self.segments {
            let _ = writeln!(
                text,
                "{} {} {} {}",
                segment.start.x, segment.start.y, segment.end.x, segment.end.y
            );
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> PlanDocument {
        PlanDocument::new(
            4,
            vec![
                WallSegment::new(0.0, 0.0, 1000.0, 0.0),
                WallSegment::new(1000.0, 0.0, 1000.0, 1000.0),
                WallSegment::new(1000.0, 1000.0, 0.0, 1000.0),
                WallSegment::new(0.0, 1000.0, 0.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_segment_length_and_angle() {
        let segment = WallSegment::new(0.0, 0.0, 3.0, 4.0);
        assert_relative_eq!(segment.length(), 5.0);
        assert_relative_eq!(segment.angle(), (4.0f64).atan2(3.0));

        let mid = segment.midpoint();
        assert_relative_eq!(mid.x, 1.5);
        assert_relative_eq!(mid.y, 2.0);
    }

    #[test]
    fn test_segment_finiteness() {
        assert!(WallSegment::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!WallSegment::new(0.0, f64::NAN, 1.0, 1.0).is_finite());
        assert!(!WallSegment::new(f64::INFINITY, 0.0, 1.0, 1.0).is_finite());
    }

    #[test]
    fn test_closure_quiet_on_square() {
        assert!(square().validate_closure(CLOSURE_TOLERANCE).is_empty());
    }

    #[test]
    fn test_closure_flags_gap() {
        let mut doc = square();
        // Break the joint between segments 1 and 2
        doc.segments[2].start = Point2D::new(1000.0, 1005.0);

        let diagnostics = doc.validate_closure(CLOSURE_TOLERANCE);
        assert_eq!(diagnostics.len(), 1);
        match &diagnostics[0] {
            Diagnostic::OpenLoop { segment, gap } => {
                assert_eq!(*segment, 1);
                assert_relative_eq!(*gap, 5.0);
            }
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }

    #[test]
    fn test_closure_skips_nan_joins() {
        let mut doc = square();
        doc.segments[1] = WallSegment::new(f64::NAN, 0.0, f64::NAN, f64::NAN);

        // Joins touching the NaN segment are unmeasurable and skipped;
        // the remaining joins still close.
        assert!(doc.validate_closure(CLOSURE_TOLERANCE).is_empty());
    }

    #[test]
    fn test_plan_text_round_trip() {
        let doc = square();
        let text = doc.to_plan_text();
        assert!(text.starts_with("4\n"));
        assert!(text.contains("1000 0 1000 1000"));
    }
}
