// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall placement derivation
//!
//! Each valid segment becomes one box placement: centered on the segment
//! midpoint at half wall height, sized to the segment length plus a
//! thickness pad (so adjoining walls overlap at corners instead of leaving
//! gaps), and yawed to align the box's long axis with the segment.
//!
//! Plan coordinates are horizontal: plan `x` maps to world `x`, plan `y`
//! maps to world `z`, and world `y` is up.

use crate::error::{Error, Result};
use crate::material::FaceMaterials;
use nalgebra::Point3;
use plan_lite_core::WallSegment;
use serde::{Deserialize, Serialize};

/// Wall height in plan units, shared by all walls
pub const WALL_HEIGHT: f64 = 300.0;

/// Wall thickness in plan units; also the per-wall length pad
pub const WALL_THICKNESS: f64 = 20.0;

/// A 3D point in plan units (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_nalgebra(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(p: &Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// Everything a renderer needs to instantiate one wall box
///
/// Computed once per valid segment and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WallPlacement {
    /// Box center: segment midpoint at half wall height
    pub center: Point3D,
    /// Box extent along its long axis: segment length plus the thickness pad
    pub length: f64,
    pub height: f64,
    pub thickness: f64,
    /// Rotation about the vertical axis, `-atan2(dy, dx)`, in radians
    pub yaw: f64,
    /// Six-slot assignment with the cap material on the top face
    pub materials: FaceMaterials,
}

impl WallPlacement {
    /// Box dimensions as `(length, height, thickness)`
    pub fn dimensions(&self) -> (f64, f64, f64) {
        (self.length, self.height, self.thickness)
    }
}

/// Derive the placement for one wall segment
///
/// Returns [`Error::NonFiniteCoordinate`] when any of the four coordinates
/// is not finite; the caller skips that wall and continues. A zero-length
/// segment is valid and still gets the thickness pad, yielding a
/// thickness-by-thickness stub.
pub fn build_wall(segment: &WallSegment) -> Result<WallPlacement> {
    if !segment.is_finite() {
        return Err(Error::NonFiniteCoordinate(*segment));
    }

    let mid = segment.midpoint();
    let dx = segment.end.x - segment.start.x;
    let dy = segment.end.y - segment.start.y;

    Ok(WallPlacement {
        center: Point3D::new(mid.x, WALL_HEIGHT / 2.0, mid.y),
        length: dx.hypot(dy) + WALL_THICKNESS,
        height: WALL_HEIGHT,
        thickness: WALL_THICKNESS,
        yaw: -dy.atan2(dx),
        materials: FaceMaterials::wall_default(),
    })
}
