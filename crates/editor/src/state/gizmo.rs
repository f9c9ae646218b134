//! Transform binding for the on-screen manipulator.
//!
//! Binds drags to the selected tube by id, never by list index, and opens
//! exactly one undo entry per drag. The host viewport reports raw deltas;
//! the binding dispatches them according to the active transform mode.

use shared::{TransformMode, TubeId};

use super::scene::SceneState;

/// Rotation drags snap to this grid (degrees)
pub const ROTATION_SNAP_DEG: f64 = 45.0;

/// State of an in-progress manipulator drag
#[derive(Default)]
pub struct GizmoState {
    /// Tube bound for the current drag
    target: Option<TubeId>,
    /// Whether a drag is in progress
    dragging: bool,
}

impl GizmoState {
    /// Bind to the current selection and open one undo entry for the drag.
    /// Returns false (and binds nothing) when nothing is selected.
    pub fn begin_drag(&mut self, scene: &mut SceneState) -> bool {
        let Some(id) = scene.doc.selected.clone() else {
            tracing::debug!("begin_drag: no selection");
            return false;
        };
        if scene.get_tube(&id).is_none() {
            return false;
        }

        scene.begin_drag();
        self.target = Some(id);
        self.dragging = true;
        true
    }

    /// Feed a drag delta to the bound tube according to the active mode.
    ///
    /// Translate: world-space offsets. Rotate: degree deltas, snapped to the
    /// 45° grid. Scale: per-axis factors.
    pub fn drag(&mut self, scene: &mut SceneState, dx: f64, dy: f64, dz: f64) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(id) = self.target.clone() else {
            return false;
        };

        match scene.doc.view.transform_mode {
            TransformMode::Translate => scene.translate_tube(&id, dx, dy, dz),
            TransformMode::Rotate => scene.rotate_tube(
                &id,
                snap_angle(dx),
                snap_angle(dy),
                snap_angle(dz),
            ),
            TransformMode::Scale => scene.scale_tube(&id, dx, dy, dz),
        }
    }

    /// Release the binding
    pub fn end_drag(&mut self) {
        self.target = None;
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn target(&self) -> Option<&TubeId> {
        self.target.as_ref()
    }
}

/// Quantize an angle delta to the rotation snap grid
fn snap_angle(deg: f64) -> f64 {
    (deg / ROTATION_SNAP_DEG).round() * ROTATION_SNAP_DEG
}
