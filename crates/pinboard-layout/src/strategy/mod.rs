//! One placement strategy per layout family.
//!
//! Strategies return `None` when they cannot honor a request (unknown id, missing layout); the
//! dispatcher then degrades to the step's fallback.

pub mod category;
pub mod cluster;
pub mod fallback;
pub mod grid;
pub mod quadrant;
pub mod ring;
pub mod zone;

use pinboard_core::model::{CARD_HEIGHT, CARD_WIDTH};
use pinboard_core::{Bounds, CanvasItem, Position};

/// Gutter between cards in the 2-column quadrant/category stagger.
pub const STAGGER_GUTTER: f64 = 20.0;

/// 2-column wrapping grid anchored at `base`; slot `index` never moves once assigned.
pub fn two_column_stagger(base: Position, index: usize) -> Position {
    let col = (index % 2) as f64;
    let row = (index / 2) as f64;
    base.offset(
        col * (CARD_WIDTH + STAGGER_GUTTER),
        row * (CARD_HEIGHT + STAGGER_GUTTER),
    )
}

/// Canvas-space bounds of an item, resolving a group-relative position through its parent group.
pub fn absolute_bounds(item: &CanvasItem, items: &[CanvasItem]) -> Bounds {
    let mut bounds = item.bounds();
    if let Some(group) = item
        .parent_id
        .as_deref()
        .and_then(|pid| items.iter().find(|g| g.id == pid))
    {
        bounds.x += group.position.x;
        bounds.y += group.position.y;
    }
    bounds
}
