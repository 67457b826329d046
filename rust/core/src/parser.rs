// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan text parser
//!
//! Byte-level line scanning with memchr and per-token float parsing with
//! fast-float. Pure and deterministic: the same text always yields the same
//! document and the same diagnostics.

use crate::diagnostics::Diagnostic;
use crate::error::{Error, Result};
use crate::types::{PlanDocument, WallSegment};

/// Result of parsing one plan text
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The parsed document; every wall line becomes a segment, malformed
    /// tokens and all
    pub document: PlanDocument,
    /// Recoverable problems found while parsing, in document order
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a plan text into a [`PlanDocument`]
///
/// Format: first line an integer wall count `n`, then one wall per line as
/// four whitespace-separated reals `x1 y1 x2 y2`.
///
/// The count is advisory; a mismatch with the actual number of wall lines
/// only produces a [`Diagnostic::CountMismatch`]. A wall line with
/// non-numeric, missing, or extra tokens produces a
/// [`Diagnostic::MalformedCoordinate`] and is retained with `NaN` in the
/// unparseable slots. The only fatal errors are an empty plan and an
/// unparseable count line.
pub fn parse_plan(text: &str) -> Result<ParseOutcome> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyPlan);
    }

    let mut lines = scan_lines(trimmed);

    let (_, count_line) = lines.next().ok_or(Error::EmptyPlan)?;
    let declared_count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| Error::InvalidCount {
            line: count_line.trim().to_string(),
        })?;

    let mut segments = Vec::with_capacity(declared_count);
    let mut diagnostics = Vec::new();

    for (line_number, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (segment, well_formed) = parse_wall_line(line);
        if !well_formed {
            diagnostics.push(Diagnostic::MalformedCoordinate {
                line: line_number,
                raw: line.to_string(),
            });
        }
        segments.push(segment);
    }

    if segments.len() != declared_count {
        diagnostics.push(Diagnostic::CountMismatch {
            declared: declared_count,
            parsed: segments.len(),
        });
    }

    Ok(ParseOutcome {
        document: PlanDocument::new(declared_count, segments),
        diagnostics,
    })
}

/// Iterate over lines with their 1-based line numbers, splitting on `\n`
/// via SIMD-accelerated byte search
fn scan_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut line_number = 0;
    let mut breaks = memchr::memchr_iter(b'\n', bytes);
    let mut done = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        line_number += 1;
        match breaks.next() {
            Some(end) => {
                let line = &text[start..end];
                start = end + 1;
                Some((line_number, line))
            }
            None => {
                done = true;
                Some((line_number, &text[start..]))
            }
        }
    })
}

/// Parse one wall line into a segment
///
/// Returns the segment plus a well-formedness flag. Each of the four slots
/// is parsed independently; a token that is not a complete real number
/// yields `NaN` for that slot, matching the retain-but-invalidate rule.
fn parse_wall_line(line: &str) -> (WallSegment, bool) {
    let mut coords = [f64::NAN; 4];
    let mut well_formed = true;
    let mut tokens = line.split_ascii_whitespace();

    for slot in coords.iter_mut() {
        match tokens.next() {
            Some(token) => match parse_coordinate(token) {
                Some(value) => *slot = value,
                None => well_formed = false,
            },
            None => well_formed = false,
        }
    }

    // Trailing tokens are ignored but flagged
    if tokens.next().is_some() {
        well_formed = false;
    }

    (
        WallSegment::new(coords[0], coords[1], coords[2], coords[3]),
        well_formed,
    )
}

/// Parse a single coordinate token; the whole token must be consumed
#[inline]
fn parse_coordinate(token: &str) -> Option<f64> {
    match fast_float::parse_partial::<f64, _>(token) {
        Ok((value, consumed)) if consumed == token.len() && value.is_finite() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SQUARE: &str = "4\n0 0 1000 0\n1000 0 1000 1000\n1000 1000 0 1000\n0 1000 0 0";

    #[test]
    fn test_parse_square() {
        let outcome = parse_plan(SQUARE).unwrap();
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.document.declared_count, 4);
        assert_eq!(outcome.document.segments.len(), 4);

        let first = &outcome.document.segments[0];
        assert_relative_eq!(first.start.x, 0.0);
        assert_relative_eq!(first.end.x, 1000.0);
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let text = format!("\n\n  {}  \n\n", SQUARE);
        let outcome = parse_plan(&text).unwrap();
        assert_eq!(outcome.document.segments.len(), 4);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_count_mismatch_is_advisory() {
        let text = "4\n0 0 1000 0\n1000 0 1000 1000\n1000 1000 0 1000";
        let outcome = parse_plan(text).unwrap();

        // All three segments are still returned
        assert_eq!(outcome.document.segments.len(), 3);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(matches!(
            outcome.diagnostics[0],
            Diagnostic::CountMismatch { declared: 4, parsed: 3 }
        ));
    }

    #[test]
    fn test_malformed_token_becomes_nan_but_segment_is_kept() {
        let text = "2\n0 0 abc 0\n1000 0 1000 1000";
        let outcome = parse_plan(text).unwrap();

        assert_eq!(outcome.document.segments.len(), 2);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(matches!(
            outcome.diagnostics[0],
            Diagnostic::MalformedCoordinate { line: 2, .. }
        ));

        let bad = &outcome.document.segments[0];
        assert!(bad.end.x.is_nan());
        assert!(bad.start.is_finite());
        assert!(outcome.document.segments[1].is_finite());
    }

    #[test]
    fn test_missing_tokens_pad_with_nan() {
        let text = "1\n0 0 1000";
        let outcome = parse_plan(text).unwrap();

        let segment = &outcome.document.segments[0];
        assert!(segment.end.y.is_nan());
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[test]
    fn test_extra_tokens_are_ignored_but_flagged() {
        let text = "1\n0 0 1000 0 99";
        let outcome = parse_plan(text).unwrap();

        let segment = &outcome.document.segments[0];
        assert!(segment.is_finite());
        assert_relative_eq!(segment.end.x, 1000.0);
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[test]
    fn test_partial_numeric_token_is_malformed() {
        // "12abc" must not parse as 12
        let text = "1\n12abc 0 1000 0";
        let outcome = parse_plan(text).unwrap();
        assert!(outcome.document.segments[0].start.x.is_nan());
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[test]
    fn test_scientific_notation_and_negatives() {
        let text = "1\n-1.5e2 0 1.5e2 0";
        let outcome = parse_plan(text).unwrap();
        let segment = &outcome.document.segments[0];
        assert_relative_eq!(segment.start.x, -150.0);
        assert_relative_eq!(segment.end.x, 150.0);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_plan_is_fatal() {
        assert!(matches!(parse_plan("   \n  "), Err(Error::EmptyPlan)));
    }

    #[test]
    fn test_bad_count_line_is_fatal() {
        assert!(matches!(
            parse_plan("walls\n0 0 1 1"),
            Err(Error::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_round_trip_reproduces_document() {
        let outcome = parse_plan(SQUARE).unwrap();
        let text = outcome.document.to_plan_text();
        let reparsed = parse_plan(&text).unwrap();

        assert_eq!(reparsed.document.segments, outcome.document.segments);
        assert!(reparsed.diagnostics.is_empty());
    }
}
