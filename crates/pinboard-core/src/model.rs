use crate::geom::{Bounds, Position, Size};
use serde::{Deserialize, Serialize};

pub const CARD_WIDTH: f64 = 160.0;
pub const CARD_HEIGHT: f64 = 100.0;
pub const DEFAULT_CARD_SIZE: Size = Size::new(CARD_WIDTH, CARD_HEIGHT);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Yellow,
    Pink,
    Blue,
    Green,
    Orange,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Note,
    Group,
}

/// Which quadrant vocabulary a board speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadrantKind {
    PowerInterest,
    EmpathyMap,
}

/// One of the eight fixed semantic quadrants. Both vocabularies share the same four corners of
/// the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    HighPowerHighInterest,
    HighPowerLowInterest,
    LowPowerHighInterest,
    LowPowerLowInterest,
    Says,
    Thinks,
    Feels,
    Does,
}

impl Quadrant {
    pub const ALL: [Quadrant; 8] = [
        Quadrant::HighPowerHighInterest,
        Quadrant::HighPowerLowInterest,
        Quadrant::LowPowerHighInterest,
        Quadrant::LowPowerLowInterest,
        Quadrant::Says,
        Quadrant::Thinks,
        Quadrant::Feels,
        Quadrant::Does,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::HighPowerHighInterest => "high-power-high-interest",
            Quadrant::HighPowerLowInterest => "high-power-low-interest",
            Quadrant::LowPowerHighInterest => "low-power-high-interest",
            Quadrant::LowPowerLowInterest => "low-power-low-interest",
            Quadrant::Says => "says",
            Quadrant::Thinks => "thinks",
            Quadrant::Feels => "feels",
            Quadrant::Does => "does",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == id)
    }

    pub fn kind(self) -> QuadrantKind {
        match self {
            Quadrant::HighPowerHighInterest
            | Quadrant::HighPowerLowInterest
            | Quadrant::LowPowerHighInterest
            | Quadrant::LowPowerLowInterest => QuadrantKind::PowerInterest,
            Quadrant::Says | Quadrant::Thinks | Quadrant::Feels | Quadrant::Does => {
                QuadrantKind::EmpathyMap
            }
        }
    }

    /// `(is_top, is_left)` relative to the canvas origin.
    pub fn corner(self) -> (bool, bool) {
        match self {
            Quadrant::HighPowerHighInterest | Quadrant::Thinks => (true, false),
            Quadrant::HighPowerLowInterest | Quadrant::Says => (true, true),
            Quadrant::LowPowerHighInterest | Quadrant::Feels => (false, false),
            Quadrant::LowPowerLowInterest | Quadrant::Does => (false, true),
        }
    }

    pub fn from_corner(kind: QuadrantKind, is_top: bool, is_left: bool) -> Self {
        match (kind, is_top, is_left) {
            (QuadrantKind::PowerInterest, true, false) => Quadrant::HighPowerHighInterest,
            (QuadrantKind::PowerInterest, true, true) => Quadrant::HighPowerLowInterest,
            (QuadrantKind::PowerInterest, false, false) => Quadrant::LowPowerHighInterest,
            (QuadrantKind::PowerInterest, false, true) => Quadrant::LowPowerLowInterest,
            (QuadrantKind::EmpathyMap, true, false) => Quadrant::Thinks,
            (QuadrantKind::EmpathyMap, true, true) => Quadrant::Says,
            (QuadrantKind::EmpathyMap, false, false) => Quadrant::Feels,
            (QuadrantKind::EmpathyMap, false, true) => Quadrant::Does,
        }
    }
}

/// Row/column bookkeeping written by the row-based layouts.
///
/// Grid layouts set both ids; ring, empathy-zone and category layouts store their id in `row` and
/// leave `col` empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellAssignment {
    pub row: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<String>,
}

impl CellAssignment {
    pub fn row(row: impl Into<String>) -> Self {
        Self {
            row: row.into(),
            col: None,
        }
    }

    pub fn cell(row: impl Into<String>, col: impl Into<String>) -> Self {
        Self {
            row: row.into(),
            col: Some(col.into()),
        }
    }

    pub fn is_cell(&self, row: &str, col: &str) -> bool {
        self.row == row && self.col.as_deref() == Some(col)
    }
}

/// The layout family an item's tags say it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementFamily {
    Quadrant,
    /// Ring, empathy zone or persona category: an id in `cellAssignment.row` only.
    Row,
    /// Journey-map style grid: both `row` and `col`.
    Cell,
    Free,
}

/// Result of a placement decision: where the item goes and the tags that go with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrant: Option<Quadrant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_assignment: Option<CellAssignment>,
}

impl Placement {
    pub fn free(position: Position) -> Self {
        Self {
            position,
            quadrant: None,
            cell_assignment: None,
        }
    }

    pub fn in_quadrant(position: Position, quadrant: Quadrant) -> Self {
        Self {
            position,
            quadrant: Some(quadrant),
            cell_assignment: None,
        }
    }

    pub fn in_cell(position: Position, cell: CellAssignment) -> Self {
        Self {
            position,
            quadrant: None,
            cell_assignment: Some(cell),
        }
    }
}

/// The atomic placeable unit (a sticky note, or a group shell).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasItem {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub color: NoteColor,
    #[serde(default, rename = "type")]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Absolute position when the item was grouped. Ungrouping restores it verbatim while the
    /// item and its group are where grouping left them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouped_from: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrant: Option<Quadrant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_assignment: Option<CellAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_preview: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_reason: Option<String>,
}

impl CanvasItem {
    /// New note with a fresh UUID, default size and color, at the origin.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), text)
    }

    pub fn with_id(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            position: Position::ORIGIN,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            color: NoteColor::default(),
            kind: ItemKind::Note,
            parent_id: None,
            grouped_from: None,
            quadrant: None,
            cell_assignment: None,
            cluster: None,
            is_preview: false,
            preview_reason: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn sized(mut self, size: Size) -> Self {
        self.width = size.width;
        self.height = size.height;
        self
    }

    pub fn in_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    pub fn with_placement(mut self, placement: &Placement) -> Self {
        self.apply_placement(placement);
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_position_size(self.position, self.size())
    }

    pub fn is_group(&self) -> bool {
        self.kind == ItemKind::Group
    }

    pub fn cluster_name(&self) -> Option<&str> {
        self.cluster.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Writes a placement, replacing every layout tag so an item never mixes families.
    pub fn apply_placement(&mut self, placement: &Placement) {
        self.position = placement.position;
        self.quadrant = placement.quadrant;
        self.cell_assignment = placement.cell_assignment.clone();
    }

    pub fn placement_family(&self) -> PlacementFamily {
        if self.quadrant.is_some() {
            return PlacementFamily::Quadrant;
        }
        match &self.cell_assignment {
            Some(CellAssignment { col: Some(_), .. }) => PlacementFamily::Cell,
            Some(_) => PlacementFamily::Row,
            None => PlacementFamily::Free,
        }
    }

    /// Row id when this item carries a ring/zone/category tag.
    pub fn row_tag(&self) -> Option<&str> {
        match &self.cell_assignment {
            Some(CellAssignment { row, col: None }) => Some(row.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_and_omits_empty_tags() {
        let item = CanvasItem::with_id("n1", "Hello").at(10.0, 20.0);
        assert_eq!(
            serde_json::to_value(&item).expect("serialize"),
            json!({
                "id": "n1",
                "text": "Hello",
                "position": { "x": 10.0, "y": 20.0 },
                "width": 160.0,
                "height": 100.0,
                "color": "yellow",
                "type": "note"
            })
        );
    }

    #[test]
    fn deserializes_persisted_shape() {
        let item: CanvasItem = serde_json::from_value(json!({
            "id": "n2",
            "text": "Ops lead",
            "position": { "x": -40.0, "y": 12.5 },
            "width": 200.0,
            "height": 120.0,
            "quadrant": "high-power-low-interest",
            "isPreview": true,
            "previewReason": "suggested by facilitator"
        }))
        .expect("deserialize");
        assert_eq!(item.quadrant, Some(Quadrant::HighPowerLowInterest));
        assert_eq!(item.color, NoteColor::Yellow);
        assert!(item.is_preview);
        assert_eq!(item.placement_family(), PlacementFamily::Quadrant);
    }

    #[test]
    fn apply_placement_replaces_previous_family() {
        let mut item = CanvasItem::with_id("n", "x").with_placement(&Placement::in_quadrant(
            Position::new(1.0, 2.0),
            Quadrant::Says,
        ));
        item.apply_placement(&Placement::in_cell(
            Position::new(3.0, 4.0),
            CellAssignment::cell("actions", "awareness"),
        ));
        assert_eq!(item.quadrant, None);
        assert_eq!(item.placement_family(), PlacementFamily::Cell);

        item.apply_placement(&Placement::free(Position::new(0.0, 0.0)));
        assert_eq!(item.placement_family(), PlacementFamily::Free);
    }

    #[test]
    fn quadrant_ids_round_trip_through_from_id() {
        for q in Quadrant::ALL {
            assert_eq!(Quadrant::from_id(q.as_str()), Some(q));
            let (top, left) = q.corner();
            assert_eq!(Quadrant::from_corner(q.kind(), top, left), q);
        }
        assert_eq!(Quadrant::from_id("pains"), None);
    }
}
