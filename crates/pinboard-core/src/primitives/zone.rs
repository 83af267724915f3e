use crate::config::ZoneConfig;
use crate::geom::{Bounds, Position, Size};

/// Vertical space reserved for the zone label above the first row of cards.
pub const ZONE_HEADER_OFFSET: f64 = 40.0;

/// Zone containing `position`. Zones are not expected to overlap; if they do, the first
/// configured one wins.
pub fn get_zone_for_position(position: Position, config: &ZoneConfig) -> Option<&str> {
    config
        .zones
        .iter()
        .find(|(_, b)| b.contains(position))
        .map(|(id, _)| id.as_str())
}

/// Number of card columns that fit across a zone (at least one).
pub fn zone_columns(bounds: &Bounds, card_size: Size, padding: f64) -> usize {
    let usable = bounds.width - 2.0 * padding;
    let cols = (usable / (card_size.width + padding)).floor();
    if cols.is_finite() && cols >= 1.0 {
        cols as usize
    } else {
        1
    }
}

/// Packs cards left-to-right, top-to-bottom below the zone header.
///
/// Rows may run past the bottom of the zone; columns never run past its width.
pub fn distribute_cards_in_zone(
    count: usize,
    bounds: &Bounds,
    card_size: Size,
    padding: f64,
) -> Vec<Position> {
    let cols = zone_columns(bounds, card_size, padding);
    (0..count)
        .map(|i| {
            let col = (i % cols) as f64;
            let row = (i / cols) as f64;
            Position::new(
                bounds.x + padding + col * (card_size.width + padding),
                bounds.y + ZONE_HEADER_OFFSET + row * (card_size.height + padding),
            )
        })
        .collect()
}
