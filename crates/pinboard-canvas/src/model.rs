//! Board artifacts other than sticky notes.
//!
//! These are plain records; the store owns their collections and their lifecycles.

use pinboard_core::{CanvasItem, Position};
use serde::{Deserialize, Serialize};

/// Anything the store can look up by id.
pub trait Identified {
    /// Label used in [`crate::CanvasError::ItemNotFound`].
    const KIND: &'static str;

    fn id(&self) -> &str;
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Identified for CanvasItem {
    const KIND: &'static str = "sticky note";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapNode {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(default)]
    pub level: u32,
    pub position: Position,
}

impl MindMapNode {
    pub fn new(label: impl Into<String>, position: Position) -> Self {
        Self {
            id: new_id(),
            label: label.into(),
            parent_id: None,
            theme_color: None,
            level: 0,
            position,
        }
    }

    /// A node one level below `parent`.
    pub fn child_of(parent: &MindMapNode, label: impl Into<String>, position: Position) -> Self {
        Self {
            parent_id: Some(parent.id.clone()),
            level: parent.level + 1,
            ..Self::new(label, position)
        }
    }
}

impl Identified for MindMapNode {
    const KIND: &'static str = "mind map node";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl MindMapEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Identified for MindMapEdge {
    const KIND: &'static str = "mind map edge";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A sketch placed on the canvas. The vector payload is opaque to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingNode {
    pub id: String,
    pub drawing_id: String,
    #[serde(default)]
    pub image_url: String,
    pub position: Position,
    pub width: f64,
    pub height: f64,
}

impl Identified for DrawingNode {
    const KIND: &'static str = "drawing node";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConceptCard {
    pub id: String,
    pub title: String,
    pub elevator_pitch: String,
    pub usp: String,
    pub position: Position,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl ConceptCard {
    pub fn new(title: impl Into<String>, position: Position) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            position,
            ..Self::default()
        }
    }
}

impl Identified for ConceptCard {
    const KIND: &'static str = "concept card";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonaTemplate {
    pub id: String,
    pub name: String,
    pub archetype: String,
    pub quote: String,
    pub position: Position,
}

impl PersonaTemplate {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            position,
            ..Self::default()
        }
    }
}

impl Identified for PersonaTemplate {
    const KIND: &'static str = "persona template";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A "How might we ..." reframing card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HmwCard {
    pub id: String,
    pub statement: String,
    pub position: Position,
}

impl HmwCard {
    pub fn new(statement: impl Into<String>, position: Position) -> Self {
        Self {
            id: new_id(),
            statement: statement.into(),
            position,
        }
    }
}

impl Identified for HmwCard {
    const KIND: &'static str = "HMW card";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Crazy8sSlot {
    pub slot_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Identified for Crazy8sSlot {
    const KIND: &'static str = "Crazy 8s slot";

    fn id(&self) -> &str {
        &self.slot_id
    }
}

/// Rounds by participants grid of idea text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrainWritingMatrix {
    pub id: String,
    pub cells: Vec<Vec<String>>,
}

impl BrainWritingMatrix {
    /// Writes one cell, growing the matrix with empty cells as needed.
    pub fn set_cell(&mut self, round: usize, participant: usize, text: impl Into<String>) {
        if self.cells.len() <= round {
            self.cells.resize_with(round + 1, Vec::new);
        }
        let row = &mut self.cells[round];
        if row.len() <= participant {
            row.resize_with(participant + 1, String::new);
        }
        row[participant] = text.into();
    }

    pub fn cell(&self, round: usize, participant: usize) -> Option<&str> {
        self.cells
            .get(round)
            .and_then(|r| r.get(participant))
            .map(String::as_str)
    }
}

impl Identified for BrainWritingMatrix {
    const KIND: &'static str = "brain-writing matrix";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brain_writing_grows_on_write() {
        let mut m = BrainWritingMatrix::default();
        m.set_cell(2, 1, "idea");
        assert_eq!(m.cells.len(), 3);
        assert_eq!(m.cell(2, 1), Some("idea"));
        assert_eq!(m.cell(2, 0), Some(""));
        assert_eq!(m.cell(0, 0), None);
    }

    #[test]
    fn child_nodes_sit_one_level_down() {
        let root = MindMapNode::new("Onboarding", Position::ORIGIN);
        let child = MindMapNode::child_of(&root, "Signup", Position::new(200.0, 0.0));
        assert_eq!(child.level, 1);
        assert_eq!(child.parent_id.as_deref(), Some(root.id.as_str()));
    }
}
