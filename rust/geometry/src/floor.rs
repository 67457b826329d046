// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor polygon derivation and the floor surface descriptor
//!
//! The floor outline is the `start` point of every segment in document
//! order, closed by repeating the first vertex. This relies on the input
//! convention that the wall list traces the boundary in order; gaps are
//! surfaced by `PlanDocument::validate_closure`, not here. No
//! deduplication, no convexity or self-intersection checks.

use crate::error::{Error, Result};
use plan_lite_core::{PlanDocument, Point2D};
use serde::{Deserialize, Serialize};

/// Texture-space repeats per plan unit; fixed, independent of polygon extent
pub const FLOOR_TEXTURE_REPEAT: f64 = 0.005;

/// Vertical offset of the floor below the wall bases, avoiding z-fighting
pub const FLOOR_DROP: f64 = -1.0;

/// A closed 2D outline: the last vertex repeats the first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorPolygon {
    pub vertices: Vec<Point2D>,
}

impl FloorPolygon {
    /// Number of distinct boundary vertices (closing vertex excluded)
    pub fn boundary_len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Triangulate the outline with earcutr
    ///
    /// A convenience for renderers that consume raw triangles; the assembly
    /// pipeline hands over the untriangulated polygon. The closing vertex
    /// is dropped before triangulation so earcut sees each corner once.
    pub fn triangulate(&self) -> Result<Triangulation> {
        if self.boundary_len() < 3 {
            return Err(Error::TriangulationFailed(
                "Polygon must have at least 3 vertices".to_string(),
            ));
        }

        let mut flattened = Vec::with_capacity(self.boundary_len() * 2);
        for p in &self.vertices[..self.boundary_len()] {
            flattened.push(p.x);
            flattened.push(p.y);
        }

        let indices = earcutr::earcut(&flattened, &[], 2)
            .map_err(|e| Error::TriangulationFailed(format!("{:?}", e)))?;

        Ok(Triangulation {
            points: self.vertices[..self.boundary_len()].to_vec(),
            indices,
        })
    }
}

/// Triangulated floor outline
#[derive(Debug, Clone)]
pub struct Triangulation {
    /// Boundary vertices, closing vertex excluded
    pub points: Vec<Point2D>,
    /// Triangle indices into `points`
    pub indices: Vec<usize>,
}

impl Triangulation {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Texture wrap mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextureWrap {
    /// Tile in both axes; the floor uses this
    Repeat,
    Clamp,
}

/// Everything a renderer needs to instantiate the floor surface
///
/// The polygon lies in the horizontal plane at `vertical_offset`, slightly
/// below the wall bases. Built only after the floor texture resolves; until
/// then no floor is visible. The repeat factor is a resolution-independent
/// tiling rule, not a scale-to-fit rule: it does not change with polygon
/// extent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorDescriptor {
    pub polygon: FloorPolygon,
    pub texture_url: String,
    pub wrap: TextureWrap,
    /// Texture repeats per plan unit in both axes
    pub repeat: f64,
    /// World-Y placement of the floor plane
    pub vertical_offset: f64,
    pub double_sided: bool,
}

impl FloorDescriptor {
    pub fn new(polygon: FloorPolygon, texture_url: impl Into<String>) -> Self {
        Self {
            polygon,
            texture_url: texture_url.into(),
            wrap: TextureWrap::Repeat,
            repeat: FLOOR_TEXTURE_REPEAT,
            vertical_offset: FLOOR_DROP,
            double_sided: true,
        }
    }
}

/// Derive the closed floor outline from a plan document
///
/// Takes the `start` point of every segment in document order and appends
/// the first vertex again to close the ring. An empty document is rejected:
/// there is no meaningful degenerate floor.
pub fn build_floor(document: &PlanDocument) -> Result<FloorPolygon> {
    if document.segments.is_empty() {
        return Err(Error::EmptyPlan);
    }

    let mut vertices: Vec<Point2D> = document
        .segments
        .iter()
        .map(|segment| segment.start)
        .collect();
    vertices.push(vertices[0]);

    Ok(FloorPolygon { vertices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_lite_core::WallSegment;

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
    fn test_square_floor_outline() {
        let polygon = build_floor(&square()).unwrap();

        let expected = [
            (0.0, 0.0),
            (1000.0, 0.0),
            (1000.0, 1000.0),
            (0.0, 1000.0),
            (0.0, 0.0),
        ];
        assert_eq!(polygon.vertices.len(), expected.len());
        for (vertex, (x, y)) in polygon.vertices.iter().zip(expected) {
            assert_eq!((vertex.x, vertex.y), (x, y));
        }
        assert_eq!(polygon.boundary_len(), 4);
    }

    #[test]
    fn test_floor_uses_start_points_only() {
        // End points never contribute vertices, even when segments do not
        // join; deriving the outline stays mechanical.
        let doc = PlanDocument::new(
            2,
            vec![
                WallSegment::new(0.0, 0.0, 50.0, 50.0),
                WallSegment::new(100.0, 0.0, 0.0, 0.0),
            ],
        );
        let polygon = build_floor(&doc).unwrap();
        assert_eq!(polygon.vertices[1], Point2D::new(100.0, 0.0));
        assert_eq!(polygon.vertices.len(), 3);
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let doc = PlanDocument::new(0, vec![]);
        assert!(matches!(build_floor(&doc), Err(Error::EmptyPlan)));
    }

    #[test]
    fn test_triangulate_square() {
        let polygon = build_floor(&square()).unwrap();
        let triangulation = polygon.triangulate().unwrap();

        assert_eq!(triangulation.points.len(), 4);
        assert_eq!(triangulation.triangle_count(), 2);
    }

    #[test]
    fn test_triangulate_rejects_degenerate_outline() {
        let doc = PlanDocument::new(2, square().segments[..2].to_vec());
        let polygon = build_floor(&doc).unwrap();
        assert!(matches!(
            polygon.triangulate(),
            Err(Error::TriangulationFailed(_))
        ));
    }

    #[test]
    fn test_repeat_factor_is_scale_independent() {
        let small = FloorDescriptor::new(build_floor(&square()).unwrap(), "tex.jpg");

        let mut doubled = square();
        for segment in &mut doubled.segments {
            segment.start.x *= 2.0;
            segment.start.y *= 2.0;
            segment.end.x *= 2.0;
            segment.end.y *= 2.0;
        }
        let large = FloorDescriptor::new(build_floor(&doubled).unwrap(), "tex.jpg");

        assert_eq!(small.repeat, large.repeat);
        assert_eq!(large.repeat, FLOOR_TEXTURE_REPEAT);
        assert_eq!(large.wrap, TextureWrap::Repeat);
    }

    #[test]
    fn test_descriptor_defaults() {
        let descriptor = FloorDescriptor::new(build_floor(&square()).unwrap(), "brick.jpg");
        assert_eq!(descriptor.vertical_offset, FLOOR_DROP);
        assert!(descriptor.double_sided);
        assert_eq!(descriptor.texture_url, "brick.jpg");
    }
}
