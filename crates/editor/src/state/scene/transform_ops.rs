//! Transform/drag operations

use shared::Transform;

use super::SceneState;

impl SceneState {
    /// Save undo state once at the beginning of a drag operation
    pub fn begin_drag(&mut self) {
        self.save_undo();
        self.redo_stack.clear();
        self.version += 1;
    }

    /// Apply a translation delta to a tube's transform
    pub fn translate_tube(&mut self, id: &str, dx: f64, dy: f64, dz: f64) -> bool {
        if let Some(tube) = self.get_tube_mut(id) {
            tube.transform.position[0] += dx;
            tube.transform.position[1] += dy;
            tube.transform.position[2] += dz;
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// Apply a rotation delta in degrees (about X, Y, Z)
    pub fn rotate_tube(&mut self, id: &str, rx: f64, ry: f64, rz: f64) -> bool {
        if let Some(tube) = self.get_tube_mut(id) {
            tube.transform.rotation[0] += rx;
            tube.transform.rotation[1] += ry;
            tube.transform.rotation[2] += rz;
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// Multiply the tube's scale by per-axis factors. Zero factors are
    /// rejected to keep the transform invertible.
    pub fn scale_tube(&mut self, id: &str, fx: f64, fy: f64, fz: f64) -> bool {
        if fx == 0.0 || fy == 0.0 || fz == 0.0 {
            tracing::debug!(%id, "scale_tube: zero factor rejected");
            return false;
        }
        if let Some(tube) = self.get_tube_mut(id) {
            tube.transform.scale[0] *= fx;
            tube.transform.scale[1] *= fy;
            tube.transform.scale[2] *= fz;
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// Replace a tube's transform wholesale. Non-invertible transforms
    /// (any zero scale) are rejected.
    pub fn set_transform(&mut self, id: &str, transform: Transform) -> bool {
        if !transform.is_invertible() {
            tracing::debug!(%id, "set_transform: non-invertible transform rejected");
            return false;
        }
        if let Some(tube) = self.get_tube_mut(id) {
            tube.transform = transform;
            self.version += 1;
            true
        } else {
            false
        }
    }
}
