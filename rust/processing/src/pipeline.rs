// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene assembly pipeline
//!
//! text → parsed document → wall placements + floor polygon → shared group.
//! Wall assembly is synchronous and skip-and-continue: a segment with
//! non-finite coordinates is skipped and its diagnostic (already recorded
//! by the parser) stands; every other segment still gets a wall. The floor
//! is deferred behind the texture fetch and attached by
//! [`PendingFloor::resolve`].

use crate::error::Result;
use crate::scene::{SceneGroup, SharedGroup};
use crate::texture::TextureLoader;
use plan_lite_core::{parse_plan, Diagnostic, DiagnosticReport, CLOSURE_TOLERANCE};
use plan_lite_geometry::{build_floor, build_wall, FloorDescriptor, FloorPolygon};
use std::rc::{Rc, Weak};

/// Assembly parameters
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// URL of the floor texture resource
    pub floor_texture_url: String,
    /// Tolerance for the polygon-closure precondition, in plan units
    pub closure_tolerance: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            floor_texture_url:
                "https://threejs.org/examples/textures/brick_diffuse.jpg".to_string(),
            closure_tolerance: CLOSURE_TOLERANCE,
        }
    }
}

/// Result of assembling one plan
#[derive(Debug)]
pub struct Assembly {
    /// The shared group; all wall placements are already appended
    pub group: SharedGroup,
    /// The deferred floor, waiting on its texture
    pub pending_floor: PendingFloor,
    /// Everything recoverable that went wrong, in processing order
    pub report: DiagnosticReport,
}

/// A floor whose texture has not resolved yet
///
/// Holds only a weak handle to the group: if the scene is torn down before
/// the fetch completes, resolution quietly discards the floor.
#[derive(Debug)]
pub struct PendingFloor {
    group: Weak<std::cell::RefCell<SceneGroup>>,
    polygon: FloorPolygon,
    texture_url: String,
}

impl PendingFloor {
    /// The outline the floor will be built from
    pub fn polygon(&self) -> &FloorPolygon {
        &self.polygon
    }

    /// Fetch the texture and attach the floor to the group
    ///
    /// On success the floor descriptor is appended and `None` is returned.
    /// On fetch failure the floor never appears and the diagnostic is
    /// returned for the caller's report. No retries either way. A dead
    /// group handle makes the append a no-op.
    pub async fn resolve(self, loader: &dyn TextureLoader) -> Option<Diagnostic> {
        match loader.load(&self.texture_url).await {
            Ok(texture) => {
                if let Some(group) = self.group.upgrade() {
                    group
                        .borrow_mut()
                        .set_floor(FloorDescriptor::new(self.polygon, texture.url));
                }
                None
            }
            Err(err) => {
                tracing::warn!(url = %self.texture_url, error = %err, "floor texture fetch failed");
                Some(Diagnostic::TextureFetchFailed {
                    url: self.texture_url,
                    reason: err.to_string(),
                })
            }
        }
    }
}

/// Assemble a plan text into a scene group
///
/// Parses the text, validates the closure precondition, appends one wall
/// placement per valid segment, and derives the floor polygon. Walls are in
/// the group before this function returns, so they precede the floor in
/// every observable ordering. Fatal only for an unusable count line or a
/// plan with no segments at all; everything else is a diagnostic.
pub fn assemble_plan(text: &str, config: &PlanConfig) -> Result<Assembly> {
    let outcome = parse_plan(text)?;
    let document = outcome.document;

    let mut report = DiagnosticReport::new();
    for diagnostic in &outcome.diagnostics {
        tracing::warn!(%diagnostic, "plan parse diagnostic");
    }
    report.extend(outcome.diagnostics);
    report.extend(document.validate_closure(config.closure_tolerance));

    let group = SceneGroup::shared();
    for (index, segment) in document.segments.iter().enumerate() {
        match build_wall(segment) {
            Ok(placement) => group.borrow_mut().push_wall(placement),
            Err(err) => {
                // The parser already recorded the malformed line; here the
                // wall is just skipped.
                tracing::warn!(segment = index, error = %err, "skipping wall");
            }
        }
    }

    let polygon = build_floor(&document)?;
    let pending_floor = PendingFloor {
        group: Rc::downgrade(&group),
        polygon,
        texture_url: config.floor_texture_url.clone(),
    };

    Ok(Assembly {
        group,
        pending_floor,
        report,
    })
}
