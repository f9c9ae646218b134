//! Factory functions for creating test data.
//!
//! Convenient helpers to construct tubes and ready-made scenes used in tests
//! and by the command-surface examples.

use shared::{JointCut, SceneDescription, Transform, Tube, TubeId, TubeSpec};

/// Tube with default dimensions at the origin
pub fn default_tube(id: &str, name: &str) -> Tube {
    Tube {
        id: id.to_string(),
        name: name.to_string(),
        spec: TubeSpec::default(),
        transform: Transform::new(),
        visible: true,
        cuts: Vec::new(),
    }
}

/// Tube with default dimensions at a position
pub fn tube_at(id: &str, name: &str, position: [f64; 3]) -> Tube {
    let mut tube = default_tube(id, name);
    tube.transform.position = position;
    tube
}

/// Tube with default dimensions and a rotation (degrees)
pub fn rotated_tube(id: &str, name: &str, rotation: [f64; 3]) -> Tube {
    let mut tube = default_tube(id, name);
    tube.transform.rotation = rotation;
    tube
}

/// Two tubes crossing at the origin: "a" runs along Z, "b" is yawed 90° so
/// its length runs along X. Their walls interpenetrate.
pub fn crossing_scene() -> SceneDescription {
    SceneDescription {
        tubes: vec![
            default_tube("a", "Tube 1"),
            rotated_tube("b", "Tube 2", [0.0, 90.0, 0.0]),
        ],
        ..SceneDescription::default()
    }
}

/// Two tubes far apart: "a" at the origin, "b" translated well clear of it.
pub fn disjoint_scene() -> SceneDescription {
    SceneDescription {
        tubes: vec![
            default_tube("a", "Tube 1"),
            tube_at("b", "Tube 2", [10.0, 0.0, 0.0]),
        ],
        ..SceneDescription::default()
    }
}

/// Record a joint cut of `tool_id` into `base_id`, freezing both transforms
/// as they stand. Unknown ids leave the scene unchanged.
pub fn with_cut(mut scene: SceneDescription, base_id: &str, tool_id: &str) -> SceneDescription {
    let tool = scene
        .tubes
        .iter()
        .find(|t| t.id == tool_id)
        .map(|t| (t.spec, t.transform));
    let base_transform = scene
        .tubes
        .iter()
        .find(|t| t.id == base_id)
        .map(|t| t.transform);

    if let (Some((tool_spec, tool_transform)), Some(base_transform)) = (tool, base_transform) {
        if let Some(base) = scene.tubes.iter_mut().find(|t| t.id == base_id) {
            base.cuts.push(JointCut {
                id: format!("cut-{}-{}", base_id, tool_id),
                tool_spec,
                tool_transform,
                base_transform,
            });
        }
    }
    scene
}

/// Ids of all tubes in store order
pub fn tube_ids(scene: &SceneDescription) -> Vec<TubeId> {
    scene.tubes.iter().map(|t| t.id.clone()).collect()
}
