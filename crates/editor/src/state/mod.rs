pub mod gizmo;
pub mod scene;

pub use gizmo::GizmoState;
pub use scene::{short_id, tube_display_name, SceneState};

use crate::preview::JointPreview;

/// Combined application state, owned by a single controller.
///
/// The scene store is the only durable piece; the gizmo binding and the
/// joint preview are ephemeral and never enter history.
#[derive(Default)]
pub struct AppState {
    pub scene: SceneState,
    pub gizmo: GizmoState,
    /// Current overlap preview, replaced wholesale on every refresh
    pub preview: Option<JointPreview>,
}
