use crate::geom::Position;
use crate::model::{Quadrant, QuadrantKind};

/// Classifies an item by the sign of its center relative to the canvas origin.
///
/// Negative Y is the top half (high power), negative X the left half. Zero counts as
/// bottom/right.
pub fn detect_quadrant(position: Position, width: f64, height: f64, kind: QuadrantKind) -> Quadrant {
    let cx = position.x + width / 2.0;
    let cy = position.y + height / 2.0;
    Quadrant::from_corner(kind, cy < 0.0, cx < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_interest_corners() {
        let k = QuadrantKind::PowerInterest;
        assert_eq!(
            detect_quadrant(Position::new(100.0, -300.0), 160.0, 100.0, k),
            Quadrant::HighPowerHighInterest
        );
        assert_eq!(
            detect_quadrant(Position::new(-400.0, -300.0), 160.0, 100.0, k),
            Quadrant::HighPowerLowInterest
        );
        assert_eq!(
            detect_quadrant(Position::new(100.0, 200.0), 160.0, 100.0, k),
            Quadrant::LowPowerHighInterest
        );
        assert_eq!(
            detect_quadrant(Position::new(-400.0, 200.0), 160.0, 100.0, k),
            Quadrant::LowPowerLowInterest
        );
    }

    #[test]
    fn uses_center_not_corner() {
        // Top-left is left of the origin but the center is not.
        assert_eq!(
            detect_quadrant(Position::new(-50.0, -60.0), 160.0, 100.0, QuadrantKind::EmpathyMap),
            Quadrant::Thinks
        );
        // Exactly on the axes counts as bottom/right.
        assert_eq!(
            detect_quadrant(Position::new(-80.0, -50.0), 160.0, 100.0, QuadrantKind::EmpathyMap),
            Quadrant::Feels
        );
    }
}
