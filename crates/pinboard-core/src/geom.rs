use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

/// Top-left pixel coordinate in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance_to(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_point(self) -> Point {
        euclid::point2(self.x, self.y)
    }
}

impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle: top-left corner plus dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position_size(position: Position, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Half-open containment: the left/top edges belong to the rectangle, the right/bottom
    /// edges belong to whatever sits next to it.
    pub fn contains(&self, position: Position) -> bool {
        self.to_rect().contains(position.to_point())
    }

    /// True when the interiors overlap; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.to_rect().intersects(&other.to_rect())
    }

    /// Smallest rectangle covering every input, `None` for an empty iterator.
    pub fn union_all(bounds: impl IntoIterator<Item = Bounds>) -> Option<Bounds> {
        let mut it = bounds.into_iter();
        let first = it.next()?.to_rect();
        let rect = it.fold(first, |acc, b| acc.union(&b.to_rect()));
        Some(Self::from_rect(rect))
    }

    pub fn to_rect(&self) -> Rect {
        euclid::rect(self.x, self.y, self.width, self.height)
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains(Position::new(0.0, 0.0)));
        assert!(b.contains(Position::new(9.999, 9.999)));
        assert!(!b.contains(Position::new(10.0, 5.0)));
        assert!(!b.contains(Position::new(5.0, 10.0)));
    }

    #[test]
    fn touching_rectangles_do_not_intersect() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Bounds::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn union_all_covers_inputs() {
        let u = Bounds::union_all([
            Bounds::new(-10.0, 5.0, 20.0, 10.0),
            Bounds::new(30.0, -40.0, 5.0, 5.0),
        ])
        .expect("non-empty");
        assert_eq!(u, Bounds::new(-10.0, -40.0, 45.0, 55.0));
        assert!(Bounds::union_all(std::iter::empty()).is_none());
    }
}
