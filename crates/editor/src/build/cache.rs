//! Solid/mesh cache management

use std::collections::HashMap;

use shared::{SceneDescription, TubeId};

use super::build_scene;
use crate::csg::Solid;
use crate::render::aabb::Aabb;
use crate::render::mesh::MeshData;

/// Cached build products, rebuilt when the scene version moves.
///
/// Selection is part of the scene description and bumps the version, so the
/// version alone keys the cache.
pub struct SolidCache {
    solids: HashMap<TubeId, Solid>,
    meshes: HashMap<TubeId, MeshData>,
    aabbs: HashMap<TubeId, Aabb>,
    errors: HashMap<TubeId, String>,
    version: u64,
    rebuild_count: u64,
}

impl Default for SolidCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SolidCache {
    pub fn new() -> Self {
        Self {
            solids: HashMap::new(),
            meshes: HashMap::new(),
            aabbs: HashMap::new(),
            errors: HashMap::new(),
            version: u64::MAX, // force first rebuild
            rebuild_count: 0,
        }
    }

    /// Check if the cache matches a scene version
    pub fn is_valid(&self, scene_version: u64) -> bool {
        self.version == scene_version
    }

    /// Rebuild all derived products from the scene
    pub fn rebuild(&mut self, scene: &SceneDescription, version: u64) {
        let build = build_scene(scene);

        self.aabbs = build
            .solids
            .iter()
            .filter_map(|(id, solid)| {
                solid
                    .bounds()
                    .map(|(min, max)| (id.clone(), Aabb::from_bounds(min, max)))
            })
            .collect();
        self.solids = build.solids;
        self.meshes = build.meshes;
        self.errors = build.errors;
        self.version = version;
        self.rebuild_count += 1;
    }

    /// Realized local-space solid for a tube
    pub fn solid(&self, id: &str) -> Option<&Solid> {
        self.solids.get(id)
    }

    /// Local-space AABB for a tube
    pub fn aabb(&self, id: &str) -> Option<&Aabb> {
        self.aabbs.get(id)
    }

    /// Render mesh for a tube
    pub fn mesh(&self, id: &str) -> Option<&MeshData> {
        self.meshes.get(id)
    }

    /// All render meshes
    pub fn meshes(&self) -> &HashMap<TubeId, MeshData> {
        &self.meshes
    }

    /// Build errors per tube
    pub fn errors(&self) -> &HashMap<TubeId, String> {
        &self.errors
    }

    /// Rebuild counter
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}
