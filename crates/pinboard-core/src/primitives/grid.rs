use crate::config::GridConfig;
use crate::geom::{Bounds, Position};
use crate::model::CellAssignment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: String,
    pub col: String,
}

impl CellCoord {
    pub fn new(row: impl Into<String>, col: impl Into<String>) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
        }
    }
}

impl From<CellCoord> for CellAssignment {
    fn from(c: CellCoord) -> Self {
        CellAssignment::cell(c.row, c.col)
    }
}

/// Pixel rectangle of a cell; `None` when either id is not configured.
pub fn get_cell_bounds(config: &GridConfig, row: &str, col: &str) -> Option<Bounds> {
    let mut y = config.origin.y;
    let mut height = None;
    for r in &config.rows {
        if r.id == row {
            height = Some(r.height);
            break;
        }
        y += r.height;
    }
    let mut x = config.origin.x;
    let mut width = None;
    for c in &config.columns {
        if c.id == col {
            width = Some(c.width);
            break;
        }
        x += c.width;
    }
    Some(Bounds::new(x, y, width?, height?))
}

/// The cell containing `position`, or `None` before the origin or past the last row/column.
pub fn position_to_cell(config: &GridConfig, position: Position) -> Option<CellCoord> {
    let row = locate(
        config.origin.y,
        position.y,
        config.rows.iter().map(|r| (r.id.as_str(), r.height)),
    )?;
    let col = locate(
        config.origin.x,
        position.x,
        config.columns.iter().map(|c| (c.id.as_str(), c.width)),
    )?;
    Some(CellCoord::new(row, col))
}

fn locate<'a>(
    start: f64,
    value: f64,
    spans: impl Iterator<Item = (&'a str, f64)>,
) -> Option<&'a str> {
    if value < start {
        return None;
    }
    let mut edge = start;
    for (id, size) in spans {
        let next = edge + size;
        if value < next {
            return Some(id);
        }
        edge = next;
    }
    None
}

/// Top-left of the containing cell plus padding; positions outside the grid are left alone.
pub fn snap_to_cell(config: &GridConfig, position: Position) -> Position {
    position_to_cell(config, position)
        .and_then(|cell| get_cell_bounds(config, &cell.row, &cell.col))
        .map(|b| b.top_left().offset(config.cell_padding, config.cell_padding))
        .unwrap_or(position)
}
