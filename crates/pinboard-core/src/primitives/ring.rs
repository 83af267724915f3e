use crate::config::RingConfig;
use crate::geom::Position;
use crate::model::{CARD_HEIGHT, CARD_WIDTH};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Positions closer than this to the center belong to the innermost ring.
pub const CENTER_SNAP_DISTANCE: f64 = 10.0;

/// Angle of slot `index` out of `count`, starting at 12 o'clock and going clockwise on screen.
pub fn slot_angle(index: usize, count: usize) -> f64 {
    -FRAC_PI_2 + TAU * index as f64 / count.max(1) as f64
}

/// Point on a circle for a given angle (screen coordinates: +Y is down).
pub fn polar(center: Position, radius: f64, angle: f64) -> Position {
    Position::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Evenly spaces `count` card top-left corners around a circle.
pub fn distribute_cards_on_ring(count: usize, radius: f64, center: Position) -> Vec<Position> {
    (0..count)
        .map(|i| {
            polar(center, radius, slot_angle(i, count))
                .offset(-CARD_WIDTH / 2.0, -CARD_HEIGHT / 2.0)
        })
        .collect()
}

/// Ring whose band contains `position`.
///
/// Near-center positions resolve to the innermost ring and anything past the outermost radius
/// falls back to the outermost ring.
pub fn detect_ring(position: Position, config: &RingConfig) -> &str {
    let distance = position.distance_to(config.center());
    if distance < CENTER_SNAP_DISTANCE {
        return &config.innermost().id;
    }
    config
        .rings()
        .iter()
        .find(|r| r.radius > distance)
        .unwrap_or_else(|| config.outermost())
        .id
        .as_str()
}
