//! CSG build layer.
//!
//! Realizes each tube's solid from the pure-data scene description: the base
//! profile from its spec, then every recorded joint cut replayed in order.
//! The description stays authoritative; solids and meshes are derived here
//! and cached by [`SolidCache`].

mod cache;
pub mod mesh_extraction;
pub mod tube;

pub use cache::SolidCache;
pub use mesh_extraction::{extract_mesh_data, PREVIEW_COLOR, SELECTED_COLOR, TUBE_COLOR};

use std::collections::HashMap;

use shared::{SceneDescription, Tube, TubeId};

use crate::csg::Solid;
use crate::render::mesh::MeshData;

/// Realize a tube's local-space solid.
///
/// Cut replay follows the recorded order: transform into the world frame the
/// tube had when the cut was made, subtract the frozen tool solid, transform
/// back. Later cuts see the result of earlier ones.
pub fn realize_tube(tube: &Tube) -> Result<Solid, String> {
    let mut solid = tube::tube_solid(&tube.spec).map_err(|e| e.to_string())?;

    for cut in &tube.cuts {
        if !cut.base_transform.is_invertible() {
            tracing::warn!(cut = %cut.id, "skipping cut with non-invertible base transform");
            continue;
        }
        let tool = match tube::tube_solid(&cut.tool_spec) {
            Ok(tool) => tool,
            Err(e) => {
                tracing::warn!(cut = %cut.id, "skipping cut with invalid tool profile: {e}");
                continue;
            }
        };

        let world = solid.transformed(&cut.base_transform);
        let tool_world = tool.transformed(&cut.tool_transform);
        solid = world.subtract(&tool_world).inverse_transformed(&cut.base_transform);
    }

    Ok(solid)
}

/// Products of one build pass over the scene
pub struct SceneBuild {
    /// Realized local-space solids for every tube, visible or not
    pub solids: HashMap<TubeId, Solid>,
    /// Render meshes for visible tubes (selection tinted)
    pub meshes: HashMap<TubeId, MeshData>,
    /// Build errors per tube id
    pub errors: HashMap<TubeId, String>,
}

/// Build solids and meshes for the whole scene.
///
/// Hidden tubes still get solids (the joint engine and preview consult them)
/// but produce no render mesh.
pub fn build_scene(scene: &SceneDescription) -> SceneBuild {
    let mut solids: HashMap<TubeId, Solid> = HashMap::new();
    let mut meshes: HashMap<TubeId, MeshData> = HashMap::new();
    let mut errors: HashMap<TubeId, String> = HashMap::new();

    for tube in &scene.tubes {
        let solid = match realize_tube(tube) {
            Ok(solid) => solid,
            Err(msg) => {
                errors.insert(tube.id.clone(), msg);
                continue;
            }
        };

        if tube.visible {
            let selected = scene.selected.as_deref() == Some(tube.id.as_str());
            let color = if selected { SELECTED_COLOR } else { TUBE_COLOR };
            if let Some(mesh) = extract_mesh_data(&solid, color) {
                meshes.insert(tube.id.clone(), mesh);
            }
        }

        solids.insert(tube.id.clone(), solid);
    }

    SceneBuild {
        solids,
        meshes,
        errors,
    }
}
