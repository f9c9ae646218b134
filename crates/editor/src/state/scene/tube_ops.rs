//! Tube CRUD and dimension operations

use shared::{DimensionError, SceneDescription, Transform, Tube, TubeId, TubeSpec};

use super::SceneState;

impl SceneState {
    /// Add a tube with default dimensions at the origin
    pub fn add_tube(&mut self) -> TubeId {
        self.add_tube_with(TubeSpec::default(), Transform::new())
            .unwrap_or_default()
    }

    /// Add a tube with an explicit profile and transform
    pub fn add_tube_with(
        &mut self,
        spec: TubeSpec,
        transform: Transform,
    ) -> Result<TubeId, DimensionError> {
        spec.validate()?;

        self.save_undo();
        self.redo_stack.clear();

        let id = uuid::Uuid::new_v4().to_string();
        let name = format!("Tube {}", self.doc.tubes.len() + 1);
        self.doc.tubes.push(Tube {
            id: id.clone(),
            name,
            spec,
            transform,
            visible: true,
            cuts: Vec::new(),
        });

        self.version += 1;
        Ok(id)
    }

    /// Remove a tube by ID, clearing the selection if it pointed at it
    pub fn remove_tube(&mut self, id: &str) -> bool {
        if self.get_tube(id).is_none() {
            return false;
        }

        self.save_undo();
        self.redo_stack.clear();

        self.doc.tubes.retain(|t| t.id != id);
        if self.doc.selected.as_deref() == Some(id) {
            self.doc.selected = None;
        }

        self.version += 1;
        true
    }

    /// Remove the selected tube
    pub fn remove_selected(&mut self) -> bool {
        match self.doc.selected.clone() {
            Some(id) => self.remove_tube(&id),
            None => false,
        }
    }

    /// Change the selection. `None` deselects; an unknown id is a no-op.
    ///
    /// Selection changes are not undoable on their own, but snapshots of
    /// real mutations carry the selection along.
    pub fn select(&mut self, id: Option<&str>) -> bool {
        let target = match id {
            Some(id) => {
                if self.get_tube(id).is_none() {
                    tracing::debug!(%id, "select: unknown tube");
                    return false;
                }
                Some(id.to_string())
            }
            None => None,
        };
        if self.doc.selected != target {
            self.doc.selected = target;
            self.version += 1;
        }
        true
    }

    /// Apply a profile change, validating the result before committing.
    ///
    /// A committed change invalidates any recorded joint cuts: the tube is
    /// regenerated from its dimensions alone.
    fn change_spec(
        &mut self,
        id: &str,
        change: impl FnOnce(&mut TubeSpec) -> bool,
    ) -> Result<bool, DimensionError> {
        let Some(tube) = self.get_tube(id) else {
            tracing::debug!(%id, "spec change: unknown tube");
            return Ok(false);
        };

        let mut spec = tube.spec;
        if !change(&mut spec) {
            return Ok(false);
        }
        spec.validate()?;

        self.save_undo();
        self.redo_stack.clear();

        if let Some(tube) = self.get_tube_mut(id) {
            tube.spec = spec;
            tube.cuts.clear();
        }

        self.version += 1;
        Ok(true)
    }

    /// Set the cross-section width (both axes for square tubes)
    pub fn set_width(&mut self, id: &str, width: f64) -> Result<bool, DimensionError> {
        self.change_spec(id, |spec| {
            spec.set_width(width);
            true
        })
    }

    /// Set the cross-section height. No effect on square tubes.
    pub fn set_height(&mut self, id: &str, height: f64) -> Result<bool, DimensionError> {
        self.change_spec(id, |spec| spec.set_height(height))
    }

    /// Set the tube length
    pub fn set_length(&mut self, id: &str, length: f64) -> Result<bool, DimensionError> {
        self.change_spec(id, |spec| {
            spec.length = length;
            true
        })
    }

    /// Set the wall thickness
    pub fn set_thickness(&mut self, id: &str, thickness: f64) -> Result<bool, DimensionError> {
        self.change_spec(id, |spec| {
            spec.thickness = thickness;
            true
        })
    }

    /// Switch the cross-section kind, keeping the current width
    pub fn set_kind(&mut self, id: &str, square: bool) -> Result<bool, DimensionError> {
        self.change_spec(id, |spec| {
            let kind = if square {
                spec.kind.to_square()
            } else {
                spec.kind.to_rectangular()
            };
            if kind == spec.kind {
                return false;
            }
            spec.kind = kind;
            true
        })
    }

    /// Toggle tube visibility
    pub fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        if let Some(tube) = self.get_tube_mut(id) {
            if tube.visible != visible {
                tube.visible = visible;
                self.version += 1;
            }
            true
        } else {
            false
        }
    }

    /// Replace the whole scene
    pub fn set_scene(&mut self, doc: SceneDescription) {
        self.save_undo();
        self.redo_stack.clear();
        self.doc = doc;
        self.version += 1;
    }

    /// Clear the scene
    pub fn clear(&mut self) {
        self.set_scene(SceneDescription::default());
    }
}
