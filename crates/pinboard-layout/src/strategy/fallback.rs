use pinboard_core::{CanvasItem, FallbackLayout, Placement, Position};

pub const STAGGER_ORIGIN: Position = Position::new(50.0, 50.0);
pub const STAGGER_STEP: f64 = 30.0;
pub const STAGGER_COLUMNS: usize = 4;

/// Always produces a position; indexed purely by how many items are already on the board.
pub fn place(layout: &FallbackLayout, existing: &[CanvasItem]) -> Placement {
    let n = existing.len();
    let position = match layout {
        FallbackLayout::Stagger => STAGGER_ORIGIN.offset(
            (n % STAGGER_COLUMNS) as f64 * STAGGER_STEP,
            (n / STAGGER_COLUMNS) as f64 * STAGGER_STEP,
        ),
        FallbackLayout::HorizontalRow { origin, spacing } => origin.offset(n as f64 * spacing, 0.0),
    };
    Placement::free(position)
}
