#![forbid(unsafe_code)]

//! `pinboard` places sticky notes on a design-thinking workshop canvas, headlessly.
//!
//! The data model and coordinate primitives are re-exported at the crate root; placement lives in
//! [`layout`]. A typical integration:
//! 1. build a [`LayoutConfig`] (or use [`LayoutConfig::workshop`])
//! 2. call [`layout::compute_canvas_position`] for each extracted artifact
//! 3. persist the returned [`Placement`] on the item
//!
//! # Features
//!
//! - `canvas` (default): the undoable board store (`pinboard::canvas`)

pub use pinboard_core::*;

pub mod layout {
    pub use pinboard_layout::{
        PersonaCategory, PlacementMetadata, PlacementRequest, ThemeSortPlacement,
        compute_canvas_position, compute_theme_sort_positions, derive_placement,
        migrate_to_rings, place, relayout_siblings,
    };
}

#[cfg(feature = "canvas")]
pub mod canvas {
    pub use pinboard_canvas::*;
}
