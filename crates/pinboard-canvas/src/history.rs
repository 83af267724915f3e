use crate::state::CanvasState;
use std::collections::VecDeque;

/// Maximum number of undo snapshots kept.
pub const MAX_HISTORY: usize = 50;

/// Snapshot undo/redo over the persisted canvas state.
///
/// Snapshots are whole states, not diffs. A push whose state serializes identically to the state
/// it replaces is dropped, so no-op edits never become undo steps.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: VecDeque<CanvasState>,
    future: Vec<CanvasState>,
}

fn same_snapshot(a: &CanvasState, b: &CanvasState) -> bool {
    match (serde_json::to_string(a), serde_json::to_string(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `previous` as an undo step for the transition to `current`.
    ///
    /// Returns `false` (and records nothing) when the transition changed nothing.
    pub fn record(&mut self, previous: CanvasState, current: &CanvasState) -> bool {
        if same_snapshot(&previous, current) {
            tracing::trace!("state unchanged; history push skipped");
            return false;
        }
        self.push_past(previous);
        self.future.clear();
        tracing::trace!(depth = self.past.len(), "history push");
        true
    }

    fn push_past(&mut self, state: CanvasState) {
        self.past.push_back(state);
        while self.past.len() > MAX_HISTORY {
            self.past.pop_front();
        }
    }

    /// State to restore for an undo; `current` moves to the redo stack.
    pub fn undo(&mut self, current: CanvasState) -> Option<CanvasState> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: CanvasState) -> Option<CanvasState> {
        let next = self.future.pop()?;
        self.push_past(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
