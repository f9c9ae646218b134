//! Headless harness for programmatic scene manipulation.
//!
//! Owns the application state and the build cache, sequencing them the way a
//! host front end would (store mutation first, then a rebuild of the derived
//! solids, then the preview refresh).

use shared::{DimensionError, SceneDescription, Transform, TubeId, TubeSpec};

use crate::build::SolidCache;
use crate::preview;
use crate::render::mesh::MeshData;
use crate::state::AppState;
use crate::validation::MeshValidator;

/// Headless controller: application state plus derived build products
pub struct TestHarness {
    pub app: AppState,
    cache: SolidCache,
}

impl TestHarness {
    /// Create a new empty harness.
    pub fn new() -> Self {
        Self {
            app: AppState::default(),
            cache: SolidCache::new(),
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Add a tube with default dimensions and return its ID
    pub fn add_tube(&mut self) -> TubeId {
        self.app.scene.add_tube()
    }

    /// Add a default tube at a position
    pub fn add_tube_at(&mut self, position: [f64; 3]) -> TubeId {
        let transform = Transform {
            position,
            ..Transform::new()
        };
        self.app
            .scene
            .add_tube_with(TubeSpec::default(), transform)
            .unwrap_or_default()
    }

    /// Add a tube with an explicit profile and transform
    pub fn add_tube_with(
        &mut self,
        spec: TubeSpec,
        transform: Transform,
    ) -> Result<TubeId, DimensionError> {
        self.app.scene.add_tube_with(spec, transform)
    }

    /// Remove a tube by ID
    pub fn remove_tube(&mut self, id: &str) -> bool {
        self.app.scene.remove_tube(id)
    }

    /// Remove the selected tube
    pub fn remove_selected(&mut self) -> bool {
        self.app.scene.remove_selected()
    }

    /// Select a tube (None deselects) and refresh the preview
    pub fn select(&mut self, id: Option<&str>) -> bool {
        let changed = self.app.scene.select(id);
        self.refresh_preview();
        changed
    }

    // ── Transform binding ─────────────────────────────────────

    /// One complete gizmo drag: bind, apply the delta, release.
    ///
    /// The preview refreshes afterwards, as it would on every
    /// transform-control change in the host viewport.
    pub fn drag_selected(&mut self, dx: f64, dy: f64, dz: f64) -> bool {
        if !self.app.gizmo.begin_drag(&mut self.app.scene) {
            return false;
        }
        let moved = self.app.gizmo.drag(&mut self.app.scene, dx, dy, dz);
        self.app.gizmo.end_drag();
        self.refresh_preview();
        moved
    }

    /// Camera orbit/zoom happened: recompute the preview only.
    pub fn camera_changed(&mut self) {
        self.refresh_preview();
    }

    // ── Joint engine ──────────────────────────────────────────

    /// Cut the selected tube against all neighbors
    pub fn cut_joint(&mut self) -> bool {
        let cut = self.app.scene.cut_joint();
        if cut {
            self.refresh_preview();
        }
        cut
    }

    // ── History ───────────────────────────────────────────────

    /// Undo the last operation
    pub fn undo(&mut self) -> bool {
        if self.app.scene.can_undo() {
            self.app.scene.undo();
            self.refresh_preview();
            true
        } else {
            false
        }
    }

    /// Redo the last undone operation
    pub fn redo(&mut self) -> bool {
        if self.app.scene.can_redo() {
            self.app.scene.redo();
            self.refresh_preview();
            true
        } else {
            false
        }
    }

    // ── Build + preview ───────────────────────────────────────

    /// Rebuild derived solids when the scene version moved
    pub fn rebuild(&mut self) {
        let version = self.app.scene.version();
        if !self.cache.is_valid(version) {
            self.cache.rebuild(&self.app.scene.doc, version);
        }
    }

    /// Recompute the overlap preview; returns whether one is showing
    pub fn refresh_preview(&mut self) -> bool {
        self.rebuild();
        preview::refresh_preview(&mut self.app, &self.cache);
        self.app.preview.is_some()
    }

    // ── Inspection ────────────────────────────────────────────

    /// Number of tubes in the scene
    pub fn tube_count(&self) -> usize {
        self.app.scene.doc.tubes.len()
    }

    /// Number of render meshes after the last rebuild
    pub fn visible_mesh_count(&self) -> usize {
        self.cache.meshes().len()
    }

    /// Render mesh for a tube
    pub fn mesh_of(&self, id: &str) -> Option<&MeshData> {
        self.cache.mesh(id)
    }

    /// Realized solid volume for a tube
    pub fn volume_of(&self, id: &str) -> Option<f64> {
        self.cache.solid(id).map(|s| s.volume())
    }

    /// Create a validator for a tube's mesh
    pub fn validate_mesh(&self, id: &str) -> Option<MeshValidator<'_>> {
        self.cache.mesh(id).map(MeshValidator::new)
    }

    /// Build errors from the last rebuild
    pub fn errors(&self) -> &std::collections::HashMap<TubeId, String> {
        self.cache.errors()
    }

    // ── Scene exchange ────────────────────────────────────────

    /// Export the current scene as JSON
    pub fn export_scene_json(&self) -> String {
        serde_json::to_string_pretty(&self.app.scene.doc).unwrap_or_default()
    }

    /// Load a scene from a JSON string, validating every tube profile
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        let doc: SceneDescription =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        for tube in &doc.tubes {
            tube.spec
                .validate()
                .map_err(|e| format!("tube {}: {e}", tube.id))?;
        }
        self.app.scene.set_scene(doc);
        self.refresh_preview();
        Ok(())
    }

    /// Clear the entire scene
    pub fn clear(&mut self) {
        self.app.scene.clear();
        self.app.preview = None;
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_empty() {
        let h = TestHarness::new();
        assert_eq!(h.tube_count(), 0);
    }

    #[test]
    fn test_add_and_build() {
        let mut h = TestHarness::new();
        let id = h.add_tube();
        h.rebuild();
        assert_eq!(h.visible_mesh_count(), 1);
        assert!(h.mesh_of(&id).is_some());
        assert!(h.errors().is_empty());
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut h = TestHarness::new();
        h.add_tube();
        assert_eq!(h.tube_count(), 1);
        assert!(h.undo());
        assert_eq!(h.tube_count(), 0);
        assert!(h.redo());
        assert_eq!(h.tube_count(), 1);
    }

    #[test]
    fn test_undo_empty_returns_false() {
        let mut h = TestHarness::new();
        assert!(!h.undo());
        assert!(!h.redo());
    }

    #[test]
    fn test_cut_joint_reduces_volume() {
        let mut h = TestHarness::new();
        let a = h.add_tube();
        let b = h.add_tube();
        h.select(Some(&b));
        h.app.scene.set_transform_mode(shared::TransformMode::Rotate);
        h.drag_selected(0.0, 90.0, 0.0);
        h.select(Some(&a));
        h.rebuild();
        let before = h.volume_of(&a).unwrap();

        assert!(h.cut_joint());
        h.rebuild();
        let after = h.volume_of(&a).unwrap();
        assert!(after < before - 1e-4, "{after} should be below {before}");
    }

    #[test]
    fn test_cut_joint_disjoint_keeps_volume() {
        let mut h = TestHarness::new();
        let a = h.add_tube();
        h.add_tube_at([10.0, 0.0, 0.0]);
        h.select(Some(&a));
        h.rebuild();
        let before = h.volume_of(&a).unwrap();

        assert!(h.cut_joint());
        h.rebuild();
        let after = h.volume_of(&a).unwrap();
        assert!((after - before).abs() < 1e-3);
    }

    #[test]
    fn test_cut_undo_restores_volume() {
        let mut h = TestHarness::new();
        let a = h.add_tube();
        let b = h.add_tube();
        h.app.scene.rotate_tube(&b, 0.0, 90.0, 0.0);
        h.select(Some(&a));
        h.rebuild();
        let before = h.volume_of(&a).unwrap();

        h.cut_joint();
        h.undo();
        h.rebuild();
        let restored = h.volume_of(&a).unwrap();
        assert!((restored - before).abs() < 1e-3);
    }

    #[test]
    fn test_preview_appears_on_drag_into_overlap() {
        let mut h = TestHarness::new();
        let a = h.add_tube();
        h.add_tube_at([10.0, 0.0, 0.0]);
        h.select(Some(&a));
        assert!(h.app.preview.is_none());

        // drag the selected tube onto its neighbor
        assert!(h.drag_selected(9.5, 0.0, 0.0));
        assert!(h.app.preview.is_some());

        // and away again
        assert!(h.drag_selected(-9.5, 0.0, 0.0));
        assert!(h.app.preview.is_none());
    }

    #[test]
    fn test_camera_change_refreshes_preview() {
        let mut h = TestHarness::new();
        let a = h.add_tube();
        h.add_tube();
        h.app.scene.select(Some(&a));
        assert!(h.app.preview.is_none());
        h.camera_changed();
        assert!(h.app.preview.is_some());
    }

    #[test]
    fn test_export_load_roundtrip() {
        let mut h = TestHarness::new();
        h.add_tube();
        let json = h.export_scene_json();

        let mut h2 = TestHarness::new();
        h2.load_scene_json(&json).unwrap();
        assert_eq!(h2.tube_count(), 1);
    }

    #[test]
    fn test_load_rejects_invalid_spec() {
        let mut h = TestHarness::new();
        let json = r#"{"tubes":[{"id":"x","name":"Bad","spec":{"kind":{"type":"square","size":1.0},"length":3.0,"thickness":0.9},"transform":{"position":[0,0,0],"rotation":[0,0,0],"scale":[1,1,1]},"visible":true}],"selected":null}"#;
        assert!(h.load_scene_json(json).is_err());
        assert_eq!(h.tube_count(), 0);
    }

    #[test]
    fn test_rebuild_only_when_version_moves() {
        let mut h = TestHarness::new();
        h.add_tube();
        h.rebuild();
        let count = h.cache.rebuild_count();
        h.rebuild();
        assert_eq!(h.cache.rebuild_count(), count);
        h.add_tube();
        h.rebuild();
        assert_eq!(h.cache.rebuild_count(), count + 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut h = TestHarness::new();
        let a = h.add_tube();
        h.add_tube();
        h.select(Some(&a));
        h.clear();
        assert_eq!(h.tube_count(), 0);
        assert!(h.app.preview.is_none());
    }
}
