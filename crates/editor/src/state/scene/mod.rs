//! Scene state management
//!
//! The tube list, selection, and view toggles live in one pure-data
//! description with snapshot-based undo/redo history.

mod display;
mod history;
mod joint_ops;
mod transform_ops;
mod tube_ops;
mod view_ops;

pub use display::{short_id, tube_display_name};

use shared::{SceneDescription, Tube, TubeId};

/// Scene state with tubes and undo/redo history
#[derive(Default)]
pub struct SceneState {
    /// Current editable state
    pub doc: SceneDescription,
    /// Undo stack - previous states
    pub(crate) undo_stack: Vec<SceneDescription>,
    /// Redo stack - undone states
    pub(crate) redo_stack: Vec<SceneDescription>,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get a tube by ID
    pub fn get_tube(&self, id: &str) -> Option<&Tube> {
        self.doc.tubes.iter().find(|t| t.id == id)
    }

    /// Get mutable tube by ID
    pub fn get_tube_mut(&mut self, id: &str) -> Option<&mut Tube> {
        self.doc.tubes.iter_mut().find(|t| t.id == id)
    }

    /// The currently selected tube, if any
    pub fn selected_tube(&self) -> Option<&Tube> {
        self.doc
            .selected
            .as_deref()
            .and_then(|id| self.get_tube(id))
    }

    /// Currently selected tube id
    pub fn selected_id(&self) -> Option<&TubeId> {
        self.doc.selected.as_ref()
    }

    /// Bump version without saving undo
    pub fn notify_mutated(&mut self) {
        self.version += 1;
    }

    /// Save current state to undo stack
    pub(crate) fn save_undo(&mut self) {
        self.undo_stack.push(self.doc.clone());
        if self.undo_stack.len() > 100 {
            self.undo_stack.remove(0);
        }
    }
}
