//! View toggle operations
//!
//! Not undoable on their own, but captured by snapshots of real mutations.

use shared::TransformMode;

use super::SceneState;

impl SceneState {
    /// Toggle wireframe display
    pub fn set_wireframe(&mut self, wireframe: bool) {
        if self.doc.view.wireframe != wireframe {
            self.doc.view.wireframe = wireframe;
            self.version += 1;
        }
    }

    /// Switch the active manipulator mode
    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        if self.doc.view.transform_mode != mode {
            self.doc.view.transform_mode = mode;
            self.version += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_bump_version_once() {
        let mut s = SceneState::default();
        let v0 = s.version();
        s.set_wireframe(true);
        assert_eq!(s.version(), v0 + 1);
        s.set_wireframe(true);
        assert_eq!(s.version(), v0 + 1);
    }

    #[test]
    fn test_mode_switch() {
        let mut s = SceneState::default();
        s.set_transform_mode(TransformMode::Rotate);
        assert_eq!(s.doc.view.transform_mode, TransformMode::Rotate);
        assert!(!s.can_undo());
    }
}
