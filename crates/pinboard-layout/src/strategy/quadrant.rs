use super::two_column_stagger;
use pinboard_core::{CanvasItem, Placement, Position, Quadrant};

/// Top-left anchor of the first card in a quadrant.
pub fn base_offset(quadrant: Quadrant) -> Position {
    match quadrant.corner() {
        (true, false) => Position::new(80.0, -300.0),
        (true, true) => Position::new(-420.0, -300.0),
        (false, false) => Position::new(80.0, 80.0),
        (false, true) => Position::new(-420.0, 80.0),
    }
}

/// Append-only: existing cards in the quadrant keep their slots.
pub fn place(quadrant: Quadrant, existing: &[CanvasItem]) -> Placement {
    let count = existing
        .iter()
        .filter(|i| i.quadrant == Some(quadrant))
        .count();
    Placement::in_quadrant(two_column_stagger(base_offset(quadrant), count), quadrant)
}
