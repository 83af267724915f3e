//! Persisted board state and the transitions that rewrite it.
//!
//! Transitions mutate a `CanvasState` in place and either succeed completely or return an error
//! having changed nothing observable; the store runs them on a working copy.

use crate::error::{CanvasError, Result};
use crate::model::{
    BrainWritingMatrix, ConceptCard, Crazy8sSlot, DrawingNode, HmwCard, Identified, MindMapEdge,
    MindMapNode, PersonaTemplate,
};
use pinboard_core::{
    Bounds, CanvasItem, CellAssignment, Error, GridColumn, GridConfig, ItemKind, Position,
    get_cell_bounds,
};
use pinboard_layout::strategy::cluster::{is_child_of, same_label};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Padding between a group's border and the bounding box of its children.
pub const GROUP_PADDING: f64 = 20.0;

/// Everything that is saved with a board and covered by undo/redo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasState {
    pub sticky_notes: Vec<CanvasItem>,
    pub mind_map_nodes: Vec<MindMapNode>,
    pub mind_map_edges: Vec<MindMapEdge>,
    pub drawing_nodes: Vec<DrawingNode>,
    pub concept_cards: Vec<ConceptCard>,
    pub persona_templates: Vec<PersonaTemplate>,
    pub hmw_cards: Vec<HmwCard>,
    pub crazy8s_slots: Vec<Crazy8sSlot>,
    pub brain_writing_matrices: Vec<BrainWritingMatrix>,
    pub grid_columns: Vec<GridColumn>,
}

pub(crate) fn find_mut<'a, T: Identified>(items: &'a mut [T], id: &str) -> Result<&'a mut T> {
    items
        .iter_mut()
        .find(|i| i.id() == id)
        .ok_or_else(|| CanvasError::not_found(T::KIND, id))
}

pub(crate) fn remove<T: Identified>(items: &mut Vec<T>, id: &str) -> Result<T> {
    let idx = items
        .iter()
        .position(|i| i.id() == id)
        .ok_or_else(|| CanvasError::not_found(T::KIND, id))?;
    Ok(items.remove(idx))
}

pub(crate) fn insert_unique<T: Identified>(items: &mut Vec<T>, item: T) -> Result<()> {
    if items.iter().any(|i| i.id() == item.id()) {
        return Err(Error::DuplicateId {
            kind: T::KIND,
            id: item.id().to_string(),
        }
        .into());
    }
    items.push(item);
    Ok(())
}

fn relative_to(position: Position, origin: Position) -> Position {
    Position::new(position.x - origin.x, position.y - origin.y)
}

impl CanvasState {
    pub fn sticky_note(&self, id: &str) -> Option<&CanvasItem> {
        self.sticky_notes.iter().find(|i| i.id == id)
    }

    /// Removes a note; deleting a group also deletes every note inside it.
    pub fn delete_sticky_note(&mut self, id: &str) -> Result<()> {
        let removed = remove(&mut self.sticky_notes, id)?;
        if removed.is_group() {
            self.sticky_notes.retain(|i| i.parent_id.as_deref() != Some(id));
        }
        Ok(())
    }

    /// Wraps the given top-level notes in a new group and returns the group's id.
    ///
    /// The group is sized to the children's bounding box plus [`GROUP_PADDING`] on every side and
    /// children are rewritten to group-relative positions.
    pub fn group_sticky_notes(&mut self, ids: &[String]) -> Result<String> {
        for id in ids {
            if self.sticky_note(id).is_none() {
                return Err(CanvasError::not_found(CanvasItem::KIND, id.clone()));
            }
        }
        let wanted: FxHashSet<&str> = ids.iter().map(String::as_str).collect();
        let selected: Vec<usize> = self
            .sticky_notes
            .iter()
            .enumerate()
            .filter(|(_, i)| {
                wanted.contains(i.id.as_str()) && !i.is_group() && i.parent_id.is_none()
            })
            .map(|(idx, _)| idx)
            .collect();
        if selected.len() < 2 {
            return Err(CanvasError::GroupTooSmall {
                count: selected.len(),
            });
        }

        let boxes = selected.iter().map(|&i| self.sticky_notes[i].bounds());
        let Some(bbox) = Bounds::union_all(boxes) else {
            return Err(CanvasError::GroupTooSmall { count: 0 });
        };
        let mut group = CanvasItem::new("");
        group.kind = ItemKind::Group;
        group.position = Position::new(bbox.x - GROUP_PADDING, bbox.y - GROUP_PADDING);
        group.width = bbox.width + 2.0 * GROUP_PADDING;
        group.height = bbox.height + 2.0 * GROUP_PADDING;

        for &idx in &selected {
            let child = &mut self.sticky_notes[idx];
            child.grouped_from = Some(child.position);
            child.position = relative_to(child.position, group.position);
            child.parent_id = Some(group.id.clone());
        }
        let group_id = group.id.clone();
        tracing::debug!(group_id = %group_id, children = selected.len(), "grouped notes");
        self.sticky_notes.push(group);
        Ok(group_id)
    }

    /// Inverse of [`Self::group_sticky_notes`]: children go back to absolute positions and the
    /// group shell is removed.
    ///
    /// A child that has not moved relative to an unmoved group gets its pre-group position back
    /// bit for bit; `(x - g) + g` is not exact in floating point.
    pub fn ungroup(&mut self, group_id: &str) -> Result<()> {
        let group = self
            .sticky_note(group_id)
            .ok_or_else(|| CanvasError::not_found(CanvasItem::KIND, group_id))?;
        if !group.is_group() {
            return Err(CanvasError::NotAGroup {
                id: group_id.to_string(),
            });
        }
        let origin = group.position;
        for child in self
            .sticky_notes
            .iter_mut()
            .filter(|i| i.parent_id.as_deref() == Some(group_id))
        {
            child.position = match child.grouped_from.take() {
                Some(before) if relative_to(before, origin) == child.position => before,
                _ => Position::new(child.position.x + origin.x, child.position.y + origin.y),
            };
            child.parent_id = None;
        }
        self.sticky_notes.retain(|i| i.id != group_id);
        Ok(())
    }

    /// Effective grid for a step whose static grid is `base`: the board's own columns win once
    /// any have been defined.
    pub fn effective_grid(&self, base: &GridConfig) -> GridConfig {
        if self.grid_columns.is_empty() {
            base.clone()
        } else {
            base.with_columns(self.grid_columns.clone())
        }
    }

    /// Removes a column and reflows the notes that were in it.
    ///
    /// Notes move to the left neighbor, else the right one, landing at the neighbor cell's
    /// padded top-left. With no neighbor left they lose their cell assignment and keep their
    /// position.
    pub fn remove_grid_column(&mut self, column_id: &str, rows: &GridConfig) -> Result<()> {
        let idx = self
            .grid_columns
            .iter()
            .position(|c| c.id == column_id)
            .ok_or_else(|| CanvasError::ColumnNotFound {
                id: column_id.to_string(),
            })?;
        let neighbor = idx
            .checked_sub(1)
            .or_else(|| (idx + 1 < self.grid_columns.len()).then_some(idx + 1))
            .map(|n| self.grid_columns[n].id.clone());
        self.grid_columns.remove(idx);
        let grid = rows.with_columns(self.grid_columns.clone());

        let mut moved = 0usize;
        for note in &mut self.sticky_notes {
            let Some(cell) = note.cell_assignment.as_ref() else {
                continue;
            };
            if cell.col.as_deref() != Some(column_id) {
                continue;
            }
            let row = cell.row.clone();
            let target = neighbor
                .as_deref()
                .and_then(|col| get_cell_bounds(&grid, &row, col).map(|b| (col, b)));
            match target {
                Some((col, bounds)) => {
                    note.position = bounds
                        .top_left()
                        .offset(grid.cell_padding, grid.cell_padding);
                    note.cell_assignment = Some(CellAssignment::cell(row, col));
                }
                None => note.cell_assignment = None,
            }
            moved += 1;
        }
        tracing::debug!(column_id, ?neighbor, moved, "removed grid column");
        Ok(())
    }

    /// Renames cluster `old` to `new`.
    ///
    /// If a child of `old` already reads `new`, it becomes the cluster's parent: its tag is
    /// cleared, the other children are relabeled and the old parent note joins the cluster as a
    /// child. Otherwise the children are relabeled and the old parent's text is renamed so it
    /// still holds the cluster together.
    pub fn rename_cluster(&mut self, old: &str, new: &str) {
        if same_label(old, new) || new.trim().is_empty() {
            return;
        }
        let promoted = self
            .sticky_notes
            .iter()
            .position(|i| is_child_of(i, old) && same_label(&i.text, new));
        let old_parent = self
            .sticky_notes
            .iter()
            .position(|i| !i.is_group() && !is_child_of(i, old) && same_label(&i.text, old));

        for (idx, note) in self.sticky_notes.iter_mut().enumerate() {
            if Some(idx) == promoted {
                note.cluster = None;
            } else if is_child_of(note, old) {
                note.cluster = Some(new.to_string());
            } else if Some(idx) == old_parent {
                if promoted.is_some() {
                    note.cluster = Some(new.to_string());
                } else {
                    note.text = new.to_string();
                }
            }
        }
        tracing::debug!(old, new, promoted = promoted.is_some(), "renamed cluster");
    }

    /// Removes a mind-map node, its descendants and every edge touching any of them.
    pub fn delete_mind_map_node(&mut self, id: &str) -> Result<()> {
        if !self.mind_map_nodes.iter().any(|n| n.id == id) {
            return Err(CanvasError::not_found(MindMapNode::KIND, id));
        }
        let mut doomed: FxHashSet<String> = FxHashSet::default();
        doomed.insert(id.to_string());
        // Parent links form a forest; iterate until no new descendant is found.
        loop {
            let before = doomed.len();
            for node in &self.mind_map_nodes {
                if let Some(parent) = node.parent_id.as_deref() {
                    if doomed.contains(parent) {
                        doomed.insert(node.id.clone());
                    }
                }
            }
            if doomed.len() == before {
                break;
            }
        }
        self.mind_map_nodes.retain(|n| !doomed.contains(&n.id));
        self.mind_map_edges
            .retain(|e| !doomed.contains(&e.source) && !doomed.contains(&e.target));
        Ok(())
    }

    pub fn add_mind_map_edge(&mut self, edge: MindMapEdge) -> Result<()> {
        for end in [&edge.source, &edge.target] {
            if !self.mind_map_nodes.iter().any(|n| &n.id == end) {
                return Err(CanvasError::not_found(MindMapNode::KIND, end.clone()));
            }
        }
        insert_unique(&mut self.mind_map_edges, edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, text: &str, x: f64, y: f64) -> CanvasItem {
        CanvasItem::with_id(id, text).at(x, y)
    }

    #[test]
    fn group_box_pads_the_children() {
        let mut state = CanvasState {
            sticky_notes: vec![note("a", "A", 0.0, 0.0), note("b", "B", 300.0, 200.0)],
            ..CanvasState::default()
        };
        let gid = state
            .group_sticky_notes(&["a".to_string(), "b".to_string()])
            .expect("grouped");
        let group = state.sticky_note(&gid).expect("group");
        assert_eq!(group.position, Position::new(-20.0, -20.0));
        assert_eq!((group.width, group.height), (500.0, 340.0));
        let b = state.sticky_note("b").expect("b");
        assert_eq!(b.position, Position::new(320.0, 220.0));
        assert_eq!(b.parent_id.as_deref(), Some(gid.as_str()));
    }

    #[test]
    fn ungroup_restores_fractional_positions_exactly() {
        let original = vec![
            note("a", "A", 0.1, 0.7),
            note("b", "B", 123.456789, -0.3),
            note("c", "C", -17.33, 0.001),
        ];
        let mut state = CanvasState {
            sticky_notes: original.clone(),
            ..CanvasState::default()
        };
        let ids: Vec<String> = original.iter().map(|n| n.id.clone()).collect();
        let gid = state.group_sticky_notes(&ids).expect("grouped");
        state.ungroup(&gid).expect("ungrouped");
        assert_eq!(state.sticky_notes, original);
    }

    #[test]
    fn grouping_one_note_is_rejected() {
        let mut state = CanvasState {
            sticky_notes: vec![note("a", "A", 0.0, 0.0)],
            ..CanvasState::default()
        };
        let err = state.group_sticky_notes(&["a".to_string()]).unwrap_err();
        assert!(matches!(err, CanvasError::GroupTooSmall { count: 1 }));
        let err = state.ungroup("a").unwrap_err();
        assert!(matches!(err, CanvasError::NotAGroup { .. }));
    }

    #[test]
    fn deleting_a_group_deletes_its_children() {
        let mut state = CanvasState {
            sticky_notes: vec![
                note("a", "A", 0.0, 0.0),
                note("b", "B", 10.0, 10.0),
                note("c", "C", 900.0, 900.0),
            ],
            ..CanvasState::default()
        };
        let gid = state
            .group_sticky_notes(&["a".to_string(), "b".to_string()])
            .expect("grouped");
        state.delete_sticky_note(&gid).expect("deleted");
        let ids: Vec<&str> = state.sticky_notes.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn rename_without_promotion_renames_the_parent() {
        let mut state = CanvasState {
            sticky_notes: vec![
                note("p", "Fruit", 0.0, 0.0),
                note("c", "Apple", 0.0, 0.0).in_cluster("fruit"),
            ],
            ..CanvasState::default()
        };
        state.rename_cluster("Fruit", "Produce");
        assert_eq!(state.sticky_notes[0].text, "Produce");
        assert_eq!(state.sticky_notes[0].cluster, None);
        assert_eq!(state.sticky_notes[1].cluster.as_deref(), Some("Produce"));
    }

    #[test]
    fn mind_map_delete_cascades() {
        let root = MindMapNode::new("root", Position::ORIGIN);
        let child = MindMapNode::child_of(&root, "child", Position::ORIGIN);
        let grandchild = MindMapNode::child_of(&child, "grandchild", Position::ORIGIN);
        let other = MindMapNode::new("other", Position::ORIGIN);
        let mut state = CanvasState {
            mind_map_nodes: vec![
                root.clone(),
                grandchild.clone(),
                child.clone(),
                other.clone(),
            ],
            ..CanvasState::default()
        };
        state
            .add_mind_map_edge(MindMapEdge::new(&root.id, &child.id))
            .expect("edge");
        state
            .add_mind_map_edge(MindMapEdge::new(&other.id, &grandchild.id))
            .expect("edge");

        state.delete_mind_map_node(&child.id).expect("deleted");
        let ids: Vec<&str> = state.mind_map_nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec![root.id.as_str(), other.id.as_str()]);
        assert!(state.mind_map_edges.is_empty());
    }

    #[test]
    fn edges_need_both_ends() {
        let mut state = CanvasState::default();
        let err = state
            .add_mind_map_edge(MindMapEdge::new("x", "y"))
            .unwrap_err();
        assert!(matches!(err, CanvasError::ItemNotFound { .. }));
    }
}
