// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The shared scene group
//!
//! The single shared resource of the pipeline: a parent group the wall path
//! and the floor path both append to. It is only ever appended to, never
//! read-modify-written, so the two paths are order-independent. Insertion
//! order is not significant to the renderer; in practice all walls land
//! before the floor because wall assembly is synchronous.

use plan_lite_geometry::{FloorDescriptor, WallPlacement};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the scene group (single-threaded model)
pub type SharedGroup = Rc<RefCell<SceneGroup>>;

/// Parent group of renderable primitives consumed by the external renderer
#[derive(Debug, Clone, Default, Serialize)]
pub struct SceneGroup {
    walls: Vec<WallPlacement>,
    floor: Option<FloorDescriptor>,
}

impl SceneGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle for the append-only paths
    pub fn shared() -> SharedGroup {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Append one wall placement
    pub fn push_wall(&mut self, wall: WallPlacement) {
        self.walls.push(wall);
    }

    /// Attach the floor once its texture has resolved
    pub fn set_floor(&mut self, floor: FloorDescriptor) {
        self.floor = Some(floor);
    }

    pub fn walls(&self) -> &[WallPlacement] {
        &self.walls
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn floor(&self) -> Option<&FloorDescriptor> {
        self.floor.as_ref()
    }

    /// Serialize the group as the renderer-facing JSON payload
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
