use crate::error::{CanvasError, Result};
use crate::history::History;
use crate::model::{
    BrainWritingMatrix, ConceptCard, Crazy8sSlot, DrawingNode, HmwCard, Identified, MindMapEdge,
    MindMapNode, PersonaTemplate,
};
use crate::state::{CanvasState, find_mut, insert_unique, remove};
use pinboard_core::{
    CanvasItem, CellCoord, GridColumn, GridConfig, LayoutConfig, Placement, Position,
    dimensions_for_text,
};
use pinboard_layout::{
    PlacementMetadata, compute_canvas_position, compute_theme_sort_positions, derive_placement,
    relayout_siblings,
};

/// The board a workshop session edits.
///
/// Every user edit goes through [`CanvasStore::commit`]: the transition runs on a copy of the
/// persisted state, the previous state is pushed to history unless nothing changed, and the
/// board is marked dirty. Hydration (`set_*`, [`CanvasStore::load_state`]) is never dirty and
/// clears history instead.
#[derive(Debug, Clone, Default)]
pub struct CanvasStore {
    state: CanvasState,
    history: History,
    is_dirty: bool,
    highlighted_cell: Option<CellCoord>,
}

impl CanvasStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn sticky_notes(&self) -> &[CanvasItem] {
        &self.state.sticky_notes
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn highlighted_cell(&self) -> Option<&CellCoord> {
        self.highlighted_cell.as_ref()
    }

    /// Transient UI state; not persisted and not undoable.
    pub fn set_highlighted_cell(&mut self, cell: Option<CellCoord>) {
        self.highlighted_cell = cell;
    }

    /// Applies a user edit. On error the board is left untouched.
    fn commit<T>(&mut self, edit: impl FnOnce(&mut CanvasState) -> Result<T>) -> Result<T> {
        let mut next = self.state.clone();
        let out = edit(&mut next)?;
        let previous = std::mem::replace(&mut self.state, next);
        self.history.record(previous, &self.state);
        self.is_dirty = true;
        Ok(out)
    }

    // Sticky notes.

    pub fn add_sticky_note(&mut self, note: CanvasItem) -> Result<()> {
        self.commit(|s| insert_unique(&mut s.sticky_notes, note))
    }

    /// Adds `note` where the layout engine puts it for `step_id` and returns its id.
    ///
    /// The note is sized to its text. Ring and zone members already on the board are re-laid
    /// so the spacing stays even.
    pub fn place_sticky_note(
        &mut self,
        step_id: &str,
        mut note: CanvasItem,
        metadata: &PlacementMetadata,
        config: &LayoutConfig,
    ) -> Result<String> {
        self.commit(|s| {
            let grid = config.step(step_id).grid.as_ref().map(|g| s.effective_grid(g));
            let placement = compute_canvas_position(
                step_id,
                metadata,
                &s.sticky_notes,
                config,
                grid.as_ref(),
            );
            let siblings = relayout_siblings(step_id, &placement, &s.sticky_notes, config);
            for (id, position) in siblings {
                find_mut(&mut s.sticky_notes, &id)?.position = position;
            }

            let size = dimensions_for_text(&note.text);
            note = note.sized(size);
            note.apply_placement(&placement);
            if note.cluster.is_none() {
                note.cluster = metadata
                    .cluster
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string);
            }
            let id = note.id.clone();
            insert_unique(&mut s.sticky_notes, note)?;
            Ok(id)
        })
    }

    pub fn update_sticky_note(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut CanvasItem),
    ) -> Result<()> {
        self.commit(|s| {
            update(find_mut(&mut s.sticky_notes, id)?);
            Ok(())
        })
    }

    /// Moves a note and re-derives its ring/zone/cell/quadrant tag from where it landed.
    pub fn move_sticky_note(
        &mut self,
        id: &str,
        position: Position,
        step_id: &str,
        config: &LayoutConfig,
    ) -> Result<()> {
        self.commit(|s| {
            let grid = config.step(step_id).grid.as_ref().map(|g| s.effective_grid(g));
            let mut moved = find_mut(&mut s.sticky_notes, id)?.clone();
            moved.position = position;
            let placement =
                derive_placement(step_id, &moved, &s.sticky_notes, config, grid.as_ref());
            find_mut(&mut s.sticky_notes, id)?.apply_placement(&placement);
            Ok(())
        })
    }

    pub fn delete_sticky_note(&mut self, id: &str) -> Result<()> {
        self.commit(|s| s.delete_sticky_note(id))
    }

    /// Moves several notes at once as one undo step. Unknown ids are skipped.
    pub fn batch_update_positions(&mut self, updates: &[(String, Position)]) -> Result<()> {
        self.commit(|s| {
            for (id, position) in updates {
                match find_mut(&mut s.sticky_notes, id) {
                    Ok(note) => note.position = *position,
                    Err(_) => tracing::debug!(item_id = %id, "batch move skipped unknown note"),
                }
            }
            Ok(())
        })
    }

    /// Re-flows a ring board by cluster ("tidy up by theme").
    pub fn apply_theme_sort(&mut self, step_id: &str, config: &LayoutConfig) -> Result<()> {
        self.commit(|s| {
            let placements = compute_theme_sort_positions(&s.sticky_notes, step_id, config)?;
            for p in placements {
                let placement = Placement::in_cell(p.position, p.cell_assignment);
                find_mut(&mut s.sticky_notes, &p.id)?.apply_placement(&placement);
            }
            Ok(())
        })
    }

    // Previews.

    pub fn confirm_preview(&mut self, id: &str) -> Result<()> {
        self.commit(|s| {
            let note = find_mut(&mut s.sticky_notes, id)?;
            note.is_preview = false;
            note.preview_reason = None;
            Ok(())
        })
    }

    /// Deletes a suggested note. Notes that are not previews are kept.
    pub fn reject_preview(&mut self, id: &str) -> Result<()> {
        self.commit(|s| {
            let note = find_mut(&mut s.sticky_notes, id)?;
            if !note.is_preview {
                tracing::debug!(item_id = %id, "reject ignored: note is not a preview");
                return Ok(());
            }
            s.delete_sticky_note(id)
        })
    }

    pub fn confirm_all_previews(&mut self) -> Result<()> {
        self.commit(|s| {
            for note in s.sticky_notes.iter_mut().filter(|n| n.is_preview) {
                note.is_preview = false;
                note.preview_reason = None;
            }
            Ok(())
        })
    }

    // Groups and clusters.

    pub fn group_sticky_notes(&mut self, ids: &[String]) -> Result<String> {
        self.commit(|s| s.group_sticky_notes(ids))
    }

    pub fn ungroup(&mut self, group_id: &str) -> Result<()> {
        self.commit(|s| s.ungroup(group_id))
    }

    pub fn rename_cluster(&mut self, old: &str, new: &str) -> Result<()> {
        self.commit(|s| {
            s.rename_cluster(old, new);
            Ok(())
        })
    }

    // Grid columns.

    pub fn add_grid_column(&mut self, column: GridColumn) -> Result<()> {
        self.commit(|s| {
            if s.grid_columns.iter().any(|c| c.id == column.id) {
                return Err(pinboard_core::Error::DuplicateId {
                    kind: "grid column",
                    id: column.id,
                }
                .into());
            }
            s.grid_columns.push(column);
            Ok(())
        })
    }

    pub fn update_grid_column(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut GridColumn),
    ) -> Result<()> {
        self.commit(|s| {
            let column = s
                .grid_columns
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| CanvasError::ColumnNotFound { id: id.to_string() })?;
            update(column);
            Ok(())
        })
    }

    /// Removes a column; `rows` supplies the row layout, origin and padding of the step's grid.
    pub fn remove_grid_column(&mut self, id: &str, rows: &GridConfig) -> Result<()> {
        self.commit(|s| s.remove_grid_column(id, rows))
    }

    // Mind map.

    pub fn add_mind_map_node(&mut self, node: MindMapNode) -> Result<()> {
        self.commit(|s| insert_unique(&mut s.mind_map_nodes, node))
    }

    pub fn update_mind_map_node(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut MindMapNode),
    ) -> Result<()> {
        self.commit(|s| {
            update(find_mut(&mut s.mind_map_nodes, id)?);
            Ok(())
        })
    }

    pub fn delete_mind_map_node(&mut self, id: &str) -> Result<()> {
        self.commit(|s| s.delete_mind_map_node(id))
    }

    pub fn add_mind_map_edge(&mut self, edge: MindMapEdge) -> Result<()> {
        self.commit(|s| s.add_mind_map_edge(edge))
    }

    pub fn delete_mind_map_edge(&mut self, id: &str) -> Result<()> {
        self.commit(|s| remove(&mut s.mind_map_edges, id).map(drop))
    }

    // Other artifacts.

    pub fn add_drawing_node(&mut self, node: DrawingNode) -> Result<()> {
        self.commit(|s| insert_unique(&mut s.drawing_nodes, node))
    }

    pub fn update_drawing_node(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut DrawingNode),
    ) -> Result<()> {
        self.commit(|s| {
            update(find_mut(&mut s.drawing_nodes, id)?);
            Ok(())
        })
    }

    pub fn delete_drawing_node(&mut self, id: &str) -> Result<()> {
        self.commit(|s| remove(&mut s.drawing_nodes, id).map(drop))
    }

    pub fn add_concept_card(&mut self, card: ConceptCard) -> Result<()> {
        self.commit(|s| insert_unique(&mut s.concept_cards, card))
    }

    pub fn update_concept_card(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut ConceptCard),
    ) -> Result<()> {
        self.commit(|s| {
            update(find_mut(&mut s.concept_cards, id)?);
            Ok(())
        })
    }

    pub fn delete_concept_card(&mut self, id: &str) -> Result<()> {
        self.commit(|s| remove(&mut s.concept_cards, id).map(drop))
    }

    pub fn add_persona_template(&mut self, persona: PersonaTemplate) -> Result<()> {
        self.commit(|s| insert_unique(&mut s.persona_templates, persona))
    }

    pub fn update_persona_template(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut PersonaTemplate),
    ) -> Result<()> {
        self.commit(|s| {
            update(find_mut(&mut s.persona_templates, id)?);
            Ok(())
        })
    }

    pub fn delete_persona_template(&mut self, id: &str) -> Result<()> {
        self.commit(|s| remove(&mut s.persona_templates, id).map(drop))
    }

    pub fn add_hmw_card(&mut self, card: HmwCard) -> Result<()> {
        self.commit(|s| insert_unique(&mut s.hmw_cards, card))
    }

    pub fn update_hmw_card(&mut self, id: &str, update: impl FnOnce(&mut HmwCard)) -> Result<()> {
        self.commit(|s| {
            update(find_mut(&mut s.hmw_cards, id)?);
            Ok(())
        })
    }

    pub fn delete_hmw_card(&mut self, id: &str) -> Result<()> {
        self.commit(|s| remove(&mut s.hmw_cards, id).map(drop))
    }

    /// Updates a Crazy 8s slot, creating it on first write.
    pub fn update_crazy8s_slot(
        &mut self,
        slot_id: &str,
        update: impl FnOnce(&mut Crazy8sSlot),
    ) -> Result<()> {
        self.commit(|s| {
            let slot = match s.crazy8s_slots.iter().position(|c| c.id() == slot_id) {
                Some(idx) => &mut s.crazy8s_slots[idx],
                None => {
                    s.crazy8s_slots.push(Crazy8sSlot {
                        slot_id: slot_id.to_string(),
                        ..Crazy8sSlot::default()
                    });
                    let last = s.crazy8s_slots.len() - 1;
                    &mut s.crazy8s_slots[last]
                }
            };
            update(slot);
            Ok(())
        })
    }

    pub fn update_brain_writing_cell(
        &mut self,
        matrix_id: &str,
        round: usize,
        participant: usize,
        text: &str,
    ) -> Result<()> {
        self.commit(|s| {
            let matrix = find_mut(&mut s.brain_writing_matrices, matrix_id)?;
            matrix.set_cell(round, participant, text);
            Ok(())
        })
    }

    // Hydration: replaces collections wholesale, never dirty, always clears history.

    fn hydrate(&mut self, load: impl FnOnce(&mut CanvasState)) {
        load(&mut self.state);
        self.history.clear();
    }

    pub fn set_sticky_notes(&mut self, notes: Vec<CanvasItem>) {
        self.hydrate(|s| s.sticky_notes = notes);
    }

    pub fn set_mind_map(&mut self, nodes: Vec<MindMapNode>, edges: Vec<MindMapEdge>) {
        self.hydrate(|s| {
            s.mind_map_nodes = nodes;
            s.mind_map_edges = edges;
        });
    }

    pub fn set_drawing_nodes(&mut self, nodes: Vec<DrawingNode>) {
        self.hydrate(|s| s.drawing_nodes = nodes);
    }

    pub fn set_concept_cards(&mut self, cards: Vec<ConceptCard>) {
        self.hydrate(|s| s.concept_cards = cards);
    }

    pub fn set_persona_templates(&mut self, personas: Vec<PersonaTemplate>) {
        self.hydrate(|s| s.persona_templates = personas);
    }

    pub fn set_hmw_cards(&mut self, cards: Vec<HmwCard>) {
        self.hydrate(|s| s.hmw_cards = cards);
    }

    pub fn set_crazy8s_slots(&mut self, slots: Vec<Crazy8sSlot>) {
        self.hydrate(|s| s.crazy8s_slots = slots);
    }

    pub fn set_brain_writing_matrices(&mut self, matrices: Vec<BrainWritingMatrix>) {
        self.hydrate(|s| s.brain_writing_matrices = matrices);
    }

    pub fn set_grid_columns(&mut self, columns: Vec<GridColumn>) {
        self.hydrate(|s| s.grid_columns = columns);
    }

    /// Replaces the whole board, e.g. after loading a saved session. Clears history.
    pub fn load_state(&mut self, state: CanvasState) {
        self.hydrate(|s| *s = state);
    }

    /// Parses a saved board (camelCase JSON) and loads it.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let state: CanvasState =
            serde_json::from_str(json).map_err(pinboard_core::Error::from)?;
        self.load_state(state);
        Ok(())
    }

    // History.

    pub fn undo(&mut self) -> bool {
        let current = self.state.clone();
        match self.history.undo(current) {
            Some(previous) => {
                self.state = previous;
                self.is_dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = self.state.clone();
        match self.history.redo(current) {
            Some(next) => {
                self.state = next;
                self.is_dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
