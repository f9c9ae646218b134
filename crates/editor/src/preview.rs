//! Overlap preview.
//!
//! Recomputed on every transform-control or camera-control change: a cheap
//! world-space AABB broad phase over the other tubes in store order, then an
//! exact boolean intersection for the FIRST hit only. At most one pairwise
//! preview is shown; the feedback answers "is there an overlap", not "where
//! are all overlaps".

use shared::{SceneDescription, TubeId};

use crate::build::{extract_mesh_data, SolidCache, PREVIEW_COLOR};
use crate::render::aabb::world_matrix;
use crate::render::mesh::MeshData;
use crate::state::AppState;

/// Ephemeral intersection mesh between the selected tube and one neighbor
pub struct JointPreview {
    /// Selected tube
    pub a: TubeId,
    /// First overlapping neighbor
    pub b: TubeId,
    /// World-space intersection mesh (drawn as a wireframe overlay)
    pub mesh: MeshData,
}

/// Recompute the preview from the current scene and build cache.
///
/// The cache must be fresh for the scene's version; stale entries would pair
/// AABBs with outdated solids.
pub fn refresh_preview(app: &mut AppState, cache: &SolidCache) {
    app.preview = compute_preview(&app.scene.doc, cache);
}

/// Scan for the first overlapping neighbor and build its intersection mesh.
pub fn compute_preview(scene: &SceneDescription, cache: &SolidCache) -> Option<JointPreview> {
    let selected_id = scene.selected.as_deref()?;
    let selected = scene.tubes.iter().find(|t| t.id == selected_id)?;

    let sel_solid = cache.solid(selected_id)?;
    let sel_aabb = cache.aabb(selected_id)?;
    let sel_world_aabb = sel_aabb.transformed(&world_matrix(&selected.transform));

    for other in &scene.tubes {
        if other.id == selected_id {
            continue;
        }
        let (Some(solid), Some(aabb)) = (cache.solid(&other.id), cache.aabb(&other.id)) else {
            continue;
        };

        let other_world_aabb = aabb.transformed(&world_matrix(&other.transform));
        if !sel_world_aabb.intersects(&other_world_aabb) {
            continue;
        }

        // First AABB hit wins; the exact intersection runs once.
        let intersection = sel_solid
            .transformed(&selected.transform)
            .intersect(&solid.transformed(&other.transform));

        let mesh = extract_mesh_data(&intersection, PREVIEW_COLOR);
        tracing::debug!(
            a = %selected_id,
            b = %other.id,
            empty = mesh.is_none(),
            "overlap preview recomputed"
        );
        return mesh.map(|mesh| JointPreview {
            a: selected_id.to_string(),
            b: other.id.clone(),
            mesh,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn fresh_cache(scene: &SceneDescription) -> SolidCache {
        let mut cache = SolidCache::new();
        cache.rebuild(scene, 1);
        cache
    }

    #[test]
    fn test_no_selection_no_preview() {
        let mut scene = fixtures::crossing_scene();
        scene.selected = None;
        let cache = fresh_cache(&scene);
        assert!(compute_preview(&scene, &cache).is_none());
    }

    #[test]
    fn test_disjoint_no_preview() {
        let mut scene = fixtures::disjoint_scene();
        scene.selected = Some("a".to_string());
        let cache = fresh_cache(&scene);
        assert!(compute_preview(&scene, &cache).is_none());
    }

    #[test]
    fn test_crossing_tubes_produce_preview() {
        let mut scene = fixtures::crossing_scene();
        scene.selected = Some("a".to_string());
        let cache = fresh_cache(&scene);

        let preview = compute_preview(&scene, &cache).expect("expected a preview");
        assert_eq!(preview.a, "a");
        assert_eq!(preview.b, "b");
        assert!(!preview.mesh.is_empty());
    }

    #[test]
    fn test_first_hit_wins() {
        // two overlapping neighbors; only the first in store order is paired
        let mut scene = fixtures::crossing_scene();
        let mut third = fixtures::default_tube("c", "Tube 3");
        third.transform.position = [0.2, 0.0, 0.0];
        scene.tubes.push(third);
        scene.selected = Some("a".to_string());

        let cache = fresh_cache(&scene);
        let preview = compute_preview(&scene, &cache).expect("expected a preview");
        assert_eq!(preview.b, "b");
    }

    #[test]
    fn test_refresh_replaces_wholesale() {
        let mut app = AppState::default();
        let a = app.scene.add_tube();
        app.scene.add_tube();
        app.scene.select(Some(&a));

        let mut cache = SolidCache::new();
        cache.rebuild(&app.scene.doc, app.scene.version());
        refresh_preview(&mut app, &cache);
        assert!(app.preview.is_some());

        // deselect: preview must clear on the next refresh
        app.scene.select(None);
        cache.rebuild(&app.scene.doc, app.scene.version());
        refresh_preview(&mut app, &cache);
        assert!(app.preview.is_none());
    }
}
