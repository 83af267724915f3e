use super::two_column_stagger;
use pinboard_core::{CanvasItem, CellAssignment, Placement, Position};
use serde::{Deserialize, Serialize};

/// The six persona sections cards can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaCategory {
    Demographics,
    Goals,
    Pains,
    Gains,
    Motivations,
    Behaviors,
}

impl PersonaCategory {
    pub const ALL: [PersonaCategory; 6] = [
        PersonaCategory::Demographics,
        PersonaCategory::Goals,
        PersonaCategory::Pains,
        PersonaCategory::Gains,
        PersonaCategory::Motivations,
        PersonaCategory::Behaviors,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonaCategory::Demographics => "demographics",
            PersonaCategory::Goals => "goals",
            PersonaCategory::Pains => "pains",
            PersonaCategory::Gains => "gains",
            PersonaCategory::Motivations => "motivations",
            PersonaCategory::Behaviors => "behaviors",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == id)
    }

    /// Three columns by two rows of 400px blocks.
    pub fn base_offset(self) -> Position {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Position::new(50.0 + (idx % 3) as f64 * 400.0, 50.0 + (idx / 3) as f64 * 400.0)
    }
}

pub fn place(category: PersonaCategory, existing: &[CanvasItem]) -> Placement {
    let id = category.as_str();
    let count = existing.iter().filter(|i| i.row_tag() == Some(id)).count();
    Placement::in_cell(
        two_column_stagger(category.base_offset(), count),
        CellAssignment::row(id),
    )
}
