//! Pure geometric conversions between semantic zone identifiers and pixel space.

pub mod grid;
pub mod quadrant;
pub mod ring;
pub mod zone;
