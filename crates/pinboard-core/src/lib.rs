#![forbid(unsafe_code)]

//! Canvas data model + coordinate primitives (headless).
//!
//! Everything in this crate is plain data or a pure function:
//! - `model`: the placeable items and their placement tags
//! - `config`: per-step ring/grid/zone layouts, passed explicitly into every layout call
//! - `primitives`: quadrant, grid-cell, ring and empathy-zone math
//! - `sizing`: text length to card footprint

pub mod config;
pub mod error;
pub mod geom;
pub mod model;
pub mod primitives;
pub mod sizing;

pub use config::{
    FallbackLayout, GridColumn, GridConfig, GridRow, LayoutConfig, Ring, RingConfig, StepLayout,
    ZoneConfig,
};
pub use error::{Error, Result};
pub use geom::{Bounds, Position, Size};
pub use model::{
    CanvasItem, CellAssignment, ItemKind, NoteColor, Placement, PlacementFamily, Quadrant,
    QuadrantKind,
};
pub use primitives::grid::{CellCoord, get_cell_bounds, position_to_cell, snap_to_cell};
pub use primitives::quadrant::detect_quadrant;
pub use primitives::ring::{detect_ring, distribute_cards_on_ring};
pub use primitives::zone::{distribute_cards_in_zone, get_zone_for_position};
pub use sizing::dimensions_for_text;
