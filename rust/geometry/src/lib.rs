// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! plan-lite Geometry
//!
//! Derives renderable primitives from a parsed floor plan: one extruded box
//! placement per wall segment (with a distinct top-cap material) and a
//! closed, texture-tiled floor polygon built from the segment start points.
//! Triangulation of the floor uses earcutr and is offered as a convenience
//! for renderers; the assembly pipeline hands over the untriangulated
//! polygon.

pub mod error;
pub mod floor;
pub mod material;
pub mod wall;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use error::{Error, Result};
pub use floor::{build_floor, FloorDescriptor, FloorPolygon, TextureWrap, Triangulation};
pub use floor::{FLOOR_DROP, FLOOR_TEXTURE_REPEAT};
pub use material::{BoxFace, FaceMaterials, Material};
pub use wall::{build_wall, Point3D, WallPlacement, WALL_HEIGHT, WALL_THICKNESS};
