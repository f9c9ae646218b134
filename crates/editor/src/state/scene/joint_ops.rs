//! Joint engine: recording CSG subtractions against neighbor tubes

use shared::JointCut;

use super::SceneState;

impl SceneState {
    /// Cut the selected tube against every other tube in the scene.
    ///
    /// Records one [`JointCut`] per neighbor, in tube-list (insertion) order,
    /// freezing each tool's profile and world transform plus the selected
    /// tube's own world transform. The build layer replays the records:
    /// selected solid to world space, subtract each tool, back to local
    /// space. Every neighbor is subtracted unconditionally; disjoint tools
    /// simply remove nothing.
    ///
    /// Silent no-op (no mutation, no history entry) when nothing is
    /// selected, the selected tube cannot be realized, or there is no
    /// eligible neighbor.
    pub fn cut_joint(&mut self) -> bool {
        let Some(sel_id) = self.doc.selected.clone() else {
            tracing::debug!("cut_joint: no selection");
            return false;
        };
        let Some(selected) = self.get_tube(&sel_id) else {
            tracing::debug!(id = %sel_id, "cut_joint: selected tube missing");
            return false;
        };
        if selected.spec.validate().is_err() || !selected.transform.is_invertible() {
            tracing::debug!(id = %sel_id, "cut_joint: selected tube has no realizable solid");
            return false;
        }
        let base_transform = selected.transform;

        let cuts: Vec<JointCut> = self
            .doc
            .tubes
            .iter()
            .filter(|t| t.id != sel_id && t.spec.validate().is_ok())
            .map(|t| JointCut {
                id: uuid::Uuid::new_v4().to_string(),
                tool_spec: t.spec,
                tool_transform: t.transform,
                base_transform,
            })
            .collect();

        if cuts.is_empty() {
            tracing::debug!(id = %sel_id, "cut_joint: no neighbor to cut against");
            return false;
        }

        self.save_undo();
        self.redo_stack.clear();

        if let Some(tube) = self.get_tube_mut(&sel_id) {
            tube.cuts.extend(cuts);
        }

        self.version += 1;
        tracing::info!(id = %sel_id, "joint cut recorded");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Transform;

    #[test]
    fn test_cut_without_selection_is_noop() {
        let mut s = SceneState::default();
        s.add_tube();
        s.add_tube();
        let version = s.version();
        assert!(!s.cut_joint());
        assert_eq!(s.version(), version);
        assert!(s.doc.tubes.iter().all(|t| t.cuts.is_empty()));
    }

    #[test]
    fn test_cut_without_neighbor_is_noop() {
        let mut s = SceneState::default();
        let id = s.add_tube();
        s.select(Some(&id));
        let depth = s.undo_stack.len();
        assert!(!s.cut_joint());
        assert_eq!(s.undo_stack.len(), depth);
    }

    #[test]
    fn test_cut_records_all_neighbors_in_order() {
        let mut s = SceneState::default();
        let a = s.add_tube();
        let b = s.add_tube();
        let c = s.add_tube();
        s.translate_tube(&b, 1.0, 0.0, 0.0);
        s.translate_tube(&c, 2.0, 0.0, 0.0);
        s.select(Some(&a));

        assert!(s.cut_joint());
        let cuts = &s.get_tube(&a).unwrap().cuts;
        assert_eq!(cuts.len(), 2);
        assert_eq!(cuts[0].tool_transform.position, [1.0, 0.0, 0.0]);
        assert_eq!(cuts[1].tool_transform.position, [2.0, 0.0, 0.0]);
        // neighbors untouched
        assert!(s.get_tube(&b).unwrap().cuts.is_empty());
        assert!(s.get_tube(&c).unwrap().cuts.is_empty());
    }

    #[test]
    fn test_cut_freezes_base_transform() {
        let mut s = SceneState::default();
        let a = s.add_tube();
        s.add_tube();
        s.translate_tube(&a, 0.0, 3.0, 0.0);
        s.select(Some(&a));
        assert!(s.cut_joint());
        assert_eq!(
            s.get_tube(&a).unwrap().cuts[0].base_transform.position,
            [0.0, 3.0, 0.0]
        );
    }

    #[test]
    fn test_cut_is_undoable() {
        let mut s = SceneState::default();
        let a = s.add_tube();
        s.add_tube();
        s.select(Some(&a));
        assert!(s.cut_joint());

        s.undo();
        assert!(s.get_tube(&a).unwrap().cuts.is_empty());
        s.redo();
        assert_eq!(s.get_tube(&a).unwrap().cuts.len(), 1);
    }

    #[test]
    fn test_repeated_cut_appends() {
        let mut s = SceneState::default();
        let a = s.add_tube();
        s.add_tube();
        s.select(Some(&a));
        assert!(s.cut_joint());
        assert!(s.cut_joint());
        assert_eq!(s.get_tube(&a).unwrap().cuts.len(), 2);
    }

    #[test]
    fn test_cut_skips_noninvertible_selected() {
        let mut s = SceneState::default();
        let a = s.add_tube();
        s.add_tube();
        s.select(Some(&a));
        // force a degenerate transform past the public API
        if let Some(t) = s.get_tube_mut(&a) {
            t.transform = Transform {
                scale: [1.0, 0.0, 1.0],
                ..Transform::new()
            };
        }
        assert!(!s.cut_joint());
    }
}
