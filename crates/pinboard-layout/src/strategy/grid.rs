use pinboard_core::{CanvasItem, CellAssignment, GridConfig, Placement, get_cell_bounds};

pub const CELL_STAGGER_X: f64 = 20.0;
pub const CELL_STAGGER_Y: f64 = 15.0;

/// Diagonal cascade inside the cell. Unbounded: a crowded cell visually overflows.
pub fn place(
    grid: &GridConfig,
    row: &str,
    col: &str,
    existing: &[CanvasItem],
) -> Option<Placement> {
    let bounds = get_cell_bounds(grid, row, col)?;
    let count = existing
        .iter()
        .filter(|i| i.cell_assignment.as_ref().is_some_and(|c| c.is_cell(row, col)))
        .count() as f64;
    let position = bounds.top_left().offset(
        grid.cell_padding + count * CELL_STAGGER_X,
        grid.cell_padding + count * CELL_STAGGER_Y,
    );
    Some(Placement::in_cell(position, CellAssignment::cell(row, col)))
}
