use crate::strategy::category::PersonaCategory;
use pinboard_core::{GridConfig, Quadrant, StepLayout};
use serde::{Deserialize, Serialize};

/// Semantic placement hints as they arrive from the extraction layer.
///
/// Every field is optional and any combination is tolerated; usually at most one layout
/// family's fields are populated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A resolved placement request. Variants are listed in dispatch priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementRequest {
    Ring { ring_id: String },
    Zone { zone_id: String },
    Quadrant(Quadrant),
    Cell { row: String, col: String },
    Category(PersonaCategory),
    Cluster { name: String },
    Fallback,
}

impl PlacementRequest {
    /// Picks the first applicable strategy for `metadata` on a step.
    ///
    /// `grid` is the effective grid (caller override, else the step's static grid).
    pub fn classify(
        metadata: &PlacementMetadata,
        step: &StepLayout,
        grid: Option<&GridConfig>,
    ) -> Self {
        let quadrant = non_empty(&metadata.quadrant);

        if let Some(rings) = &step.rings {
            // `quadrant` is accepted as a legacy alias for the ring id.
            let ring = non_empty(&metadata.ring)
                .or(quadrant)
                .filter(|id| rings.contains(id));
            if let Some(ring_id) = ring {
                return Self::Ring {
                    ring_id: ring_id.to_string(),
                };
            }
        }

        if let (Some(zones), Some(zone_id)) = (&step.empathy_zones, quadrant) {
            if zones.zone(zone_id).is_some() {
                return Self::Zone {
                    zone_id: zone_id.to_string(),
                };
            }
        }

        if let Some(q) = quadrant.and_then(Quadrant::from_id) {
            return Self::Quadrant(q);
        }

        if let (Some(row), Some(col), Some(grid)) =
            (non_empty(&metadata.row), non_empty(&metadata.col), grid)
        {
            if grid.has_row(row) && grid.has_column(col) {
                return Self::Cell {
                    row: row.to_string(),
                    col: col.to_string(),
                };
            }
        }

        if let Some(category) = non_empty(&metadata.category).and_then(PersonaCategory::from_id) {
            return Self::Category(category);
        }

        if let Some(name) = non_empty(&metadata.cluster) {
            return Self::Cluster {
                name: name.to_string(),
            };
        }

        Self::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinboard_core::LayoutConfig;

    fn meta(f: impl FnOnce(&mut PlacementMetadata)) -> PlacementMetadata {
        let mut m = PlacementMetadata::default();
        f(&mut m);
        m
    }

    #[test]
    fn ring_wins_over_quadrant_on_ring_steps() {
        let config = LayoutConfig::workshop();
        let step = config.step("stakeholder-mapping");
        let m = meta(|m| {
            m.ring = Some("outer".into());
            m.quadrant = Some("high-power-high-interest".into());
        });
        assert_eq!(
            PlacementRequest::classify(&m, step, None),
            PlacementRequest::Ring {
                ring_id: "outer".into()
            }
        );

        // Legacy alias.
        let m = meta(|m| m.quadrant = Some("inner".into()));
        assert_eq!(
            PlacementRequest::classify(&m, step, None),
            PlacementRequest::Ring {
                ring_id: "inner".into()
            }
        );

        // Unknown ring ids fall through to the quadrant vocabulary.
        let m = meta(|m| m.quadrant = Some("high-power-high-interest".into()));
        assert_eq!(
            PlacementRequest::classify(&m, step, None),
            PlacementRequest::Quadrant(Quadrant::HighPowerHighInterest)
        );
    }

    #[test]
    fn zones_only_apply_on_zone_steps() {
        let config = LayoutConfig::workshop();
        let m = meta(|m| m.quadrant = Some("says".into()));
        assert_eq!(
            PlacementRequest::classify(&m, config.step("sense-making"), None),
            PlacementRequest::Zone {
                zone_id: "says".into()
            }
        );
        assert_eq!(
            PlacementRequest::classify(&m, config.step("challenge"), None),
            PlacementRequest::Quadrant(Quadrant::Says)
        );
        let m = meta(|m| m.quadrant = Some("pains".into()));
        assert_eq!(
            PlacementRequest::classify(&m, config.step("challenge"), None),
            PlacementRequest::Fallback
        );
    }

    #[test]
    fn cell_requires_both_ids_in_the_grid() {
        let config = LayoutConfig::workshop();
        let step = config.step("journey-mapping");
        let grid = step.grid.as_ref();
        let m = meta(|m| {
            m.row = Some("actions".into());
            m.col = Some("decision".into());
        });
        assert_eq!(
            PlacementRequest::classify(&m, step, grid),
            PlacementRequest::Cell {
                row: "actions".into(),
                col: "decision".into()
            }
        );
        let m = meta(|m| m.row = Some("actions".into()));
        assert_eq!(
            PlacementRequest::classify(&m, step, grid),
            PlacementRequest::Fallback
        );
        let m = meta(|m| {
            m.row = Some("actions".into());
            m.col = Some("gone".into());
            m.cluster = Some("Checkout".into());
        });
        assert_eq!(
            PlacementRequest::classify(&m, step, grid),
            PlacementRequest::Cluster {
                name: "Checkout".into()
            }
        );
    }

    #[test]
    fn blank_fields_are_ignored() {
        let config = LayoutConfig::workshop();
        let m = meta(|m| {
            m.quadrant = Some("  ".into());
            m.category = Some(String::new());
            m.cluster = Some(" ".into());
        });
        assert_eq!(
            PlacementRequest::classify(&m, config.step("persona"), None),
            PlacementRequest::Fallback
        );
    }

    #[test]
    fn metadata_deserializes_from_camel_case_json() {
        let m: PlacementMetadata =
            serde_json::from_str(r#"{ "category": "goals", "cluster": "Money" }"#).expect("json");
        assert_eq!(m.category.as_deref(), Some("goals"));
        assert_eq!(m.cluster.as_deref(), Some("Money"));
        assert_eq!(m.ring, None);
    }
}
