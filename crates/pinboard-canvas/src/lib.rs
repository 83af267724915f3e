#![forbid(unsafe_code)]

//! Undoable in-memory store for a workshop board.
//!
//! [`CanvasStore`] owns the persisted [`CanvasState`] and routes every user edit through the
//! placement engine in `pinboard-layout` and a bounded snapshot [`History`].

pub mod error;
pub mod history;
pub mod model;
pub mod state;
pub mod store;

pub use error::{CanvasError, Result};
pub use history::{History, MAX_HISTORY};
pub use model::{
    BrainWritingMatrix, ConceptCard, Crazy8sSlot, DrawingNode, HmwCard, Identified, MindMapEdge,
    MindMapNode, PersonaTemplate,
};
pub use state::{CanvasState, GROUP_PADDING};
pub use store::CanvasStore;
