// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-face material assignment for wall boxes
//!
//! A wall box carries six materials in conventional box-face order. The top
//! face gets a distinct cap material so wall tops read clearly from above;
//! the other five faces share the wall surface material.

use serde::{Deserialize, Serialize};

/// A renderer-agnostic material: a name and an RGBA color
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Material {
    pub name: String,
    /// RGBA, each channel in 0.0..=1.0
    pub color: [f32; 4],
}

impl Material {
    pub fn new(name: impl Into<String>, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// White standard material used on five of the six wall faces
    pub fn wall_surface() -> Self {
        Self::new("wall-surface", [1.0, 1.0, 1.0, 1.0])
    }

    /// Black cap material used on the top face only
    pub fn wall_cap() -> Self {
        Self::new("wall-cap", [0.0, 0.0, 0.0, 1.0])
    }
}

/// Box faces in conventional material-slot order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BoxFace {
    PosX = 0,
    NegX = 1,
    /// Top face
    PosY = 2,
    /// Bottom face
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl BoxFace {
    pub const ALL: [BoxFace; 6] = [
        BoxFace::PosX,
        BoxFace::NegX,
        BoxFace::PosY,
        BoxFace::NegY,
        BoxFace::PosZ,
        BoxFace::NegZ,
    ];
}

/// Six-slot material assignment, indexed by [`BoxFace`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaceMaterials {
    slots: [Material; 6],
}

impl FaceMaterials {
    /// All six faces share one material
    pub fn uniform(material: Material) -> Self {
        Self {
            slots: std::array::from_fn(|_| material.clone()),
        }
    }

    /// The standard wall assignment: cap on top, surface elsewhere
    pub fn wall_default() -> Self {
        let mut materials = Self::uniform(Material::wall_surface());
        materials.slots[BoxFace::PosY as usize] = Material::wall_cap();
        materials
    }

    pub fn face(&self, face: BoxFace) -> &Material {
        &self.slots[face as usize]
    }

    pub fn set_face(&mut self, face: BoxFace, material: Material) {
        self.slots[face as usize] = material;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_default_puts_cap_on_top_only() {
        let materials = FaceMaterials::wall_default();
        let cap = Material::wall_cap();
        let surface = Material::wall_surface();

        for face in BoxFace::ALL {
            let expected = if face == BoxFace::PosY { &cap } else { &surface };
            assert_eq!(materials.face(face), expected, "face {:?}", face);
        }
    }

    #[test]
    fn test_face_slot_order_matches_convention() {
        assert_eq!(BoxFace::PosX as usize, 0);
        assert_eq!(BoxFace::PosY as usize, 2);
        assert_eq!(BoxFace::NegZ as usize, 5);
    }
}
