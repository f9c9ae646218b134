//! JSON command protocol.
//!
//! The control surface (UI, scripts, tests) drives the editor exclusively
//! through these commands; the core never sees a widget or a pointer event.

use serde::{Deserialize, Serialize};
use shared::{Transform, TransformMode};

use crate::harness::TestHarness;
use crate::state::scene::tube_display_name;

/// A command the control surface can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Add a tube with default dimensions at the origin
    AddTube,
    /// Remove a tube by ID
    RemoveTube {
        id: String,
    },
    /// Remove the selected tube
    RemoveSelected,
    /// Select a tube; null or missing id deselects (pointer-miss)
    Select {
        #[serde(default)]
        id: Option<String>,
    },
    /// Set cross-section width (both axes for square tubes)
    SetWidth {
        id: String,
        value: f64,
    },
    /// Set cross-section height (no effect on square tubes)
    SetHeight {
        id: String,
        value: f64,
    },
    /// Set tube length
    SetLength {
        id: String,
        value: f64,
    },
    /// Set wall thickness
    SetThickness {
        id: String,
        value: f64,
    },
    /// Switch between square and rectangular cross-sections
    SetKind {
        id: String,
        square: bool,
    },
    /// Replace a tube's transform wholesale
    SetTransform {
        id: String,
        transform: Transform,
    },
    /// One gizmo drag against the selection (translate/rotate/scale
    /// depending on the active mode)
    Drag {
        dx: f64,
        dy: f64,
        dz: f64,
    },
    /// Switch the manipulator mode
    SetTransformMode {
        mode: TransformMode,
    },
    /// Toggle wireframe display
    SetWireframe {
        on: bool,
    },
    /// Camera orbit/zoom happened; recompute the overlap preview
    CameraChanged,
    /// Cut the selected tube against all neighbors
    CutJoint,
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    /// Clear the entire scene.
    Clear,
    /// Inspect the scene: list all tubes.
    Inspect,
    /// Export the scene as JSON.
    ExportScene,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Map a dimension-setter result into a response
fn dimension_response(result: Result<bool, shared::DimensionError>) -> CommandResponse {
    match result {
        Ok(changed) => CommandResponse::ok_with_data(serde_json::json!({ "changed": changed })),
        Err(e) => CommandResponse::err(e.to_string()),
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::AddTube => {
            let id = harness.add_tube();
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        AgentCommand::RemoveTube { id } => {
            let removed = harness.remove_tube(&id);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        AgentCommand::RemoveSelected => {
            let removed = harness.remove_selected();
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        AgentCommand::Select { id } => {
            let selected = harness.select(id.as_deref());
            CommandResponse::ok_with_data(serde_json::json!({ "selected": selected }))
        }

        AgentCommand::SetWidth { id, value } => {
            dimension_response(harness.app.scene.set_width(&id, value))
        }

        AgentCommand::SetHeight { id, value } => {
            dimension_response(harness.app.scene.set_height(&id, value))
        }

        AgentCommand::SetLength { id, value } => {
            dimension_response(harness.app.scene.set_length(&id, value))
        }

        AgentCommand::SetThickness { id, value } => {
            dimension_response(harness.app.scene.set_thickness(&id, value))
        }

        AgentCommand::SetKind { id, square } => {
            dimension_response(harness.app.scene.set_kind(&id, square))
        }

        AgentCommand::SetTransform { id, transform } => {
            let applied = harness.app.scene.set_transform(&id, transform);
            if applied {
                harness.refresh_preview();
            }
            CommandResponse::ok_with_data(serde_json::json!({ "applied": applied }))
        }

        AgentCommand::Drag { dx, dy, dz } => {
            let moved = harness.drag_selected(dx, dy, dz);
            CommandResponse::ok_with_data(serde_json::json!({
                "moved": moved,
                "preview": harness.app.preview.is_some(),
            }))
        }

        AgentCommand::SetTransformMode { mode } => {
            harness.app.scene.set_transform_mode(mode);
            CommandResponse::ok()
        }

        AgentCommand::SetWireframe { on } => {
            harness.app.scene.set_wireframe(on);
            CommandResponse::ok()
        }

        AgentCommand::CameraChanged => {
            harness.camera_changed();
            CommandResponse::ok_with_data(serde_json::json!({
                "preview": harness.app.preview.is_some(),
            }))
        }

        AgentCommand::CutJoint => {
            let cut = harness.cut_joint();
            CommandResponse::ok_with_data(serde_json::json!({ "cut": cut }))
        }

        AgentCommand::Undo => {
            let success = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        AgentCommand::Redo => {
            let success = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        AgentCommand::Clear => {
            harness.clear();
            CommandResponse::ok()
        }

        AgentCommand::Inspect => {
            let tubes: Vec<serde_json::Value> = harness
                .app
                .scene
                .doc
                .tubes
                .iter()
                .map(|tube| {
                    serde_json::json!({
                        "id": tube.id,
                        "name": tube_display_name(tube),
                        "width": tube.spec.width(),
                        "height": tube.spec.height(),
                        "length": tube.spec.length,
                        "thickness": tube.spec.thickness,
                        "position": tube.transform.position,
                        "visible": tube.visible,
                        "cut_count": tube.cuts.len(),
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "tube_count": tubes.len(),
                "selected": harness.app.scene.doc.selected,
                "tubes": tubes,
            }))
        }

        AgentCommand::ExportScene => {
            let json = harness.export_scene_json();
            CommandResponse::ok_with_data(serde_json::json!({ "scene_json": json }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
