#![forbid(unsafe_code)]

//! Deterministic canvas placement (headless).
//!
//! Two entry points:
//! - [`compute_canvas_position`]: where one new item goes, given its placement metadata
//! - [`compute_theme_sort_positions`]: re-flow a whole ring board by cluster
//!
//! Both are pure functions of their inputs; callers persist the results.

pub mod derive;
pub mod dispatch;
pub mod reorganize;
pub mod request;
pub mod strategy;

pub use derive::{derive_placement, migrate_to_rings};
pub use dispatch::{compute_canvas_position, place, relayout_siblings};
pub use reorganize::{ThemeSortPlacement, compute_theme_sort_positions};
pub use request::{PlacementMetadata, PlacementRequest};
pub use strategy::category::PersonaCategory;
