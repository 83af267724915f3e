//! Per-step layout configuration.
//!
//! Layouts are read-only inputs handed to every placement call; nothing in the engine reads a
//! global. [`LayoutConfig::workshop`] provides the built-in ten-step workshop, and
//! [`LayoutConfig::from_json_str`] loads (and validates) a custom one.

use crate::error::{Error, Result};
use crate::geom::{Bounds, Position};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub id: String,
    pub radius: f64,
}

impl Ring {
    pub fn new(id: impl Into<String>, radius: f64) -> Self {
        Self {
            id: id.into(),
            radius,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawRingConfig {
    rings: Vec<Ring>,
    #[serde(default)]
    center: Position,
}

/// Concentric rings ordered inner to outer around a shared center.
///
/// Always holds at least one ring with strictly ascending positive radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRingConfig")]
pub struct RingConfig {
    rings: Vec<Ring>,
    center: Position,
}

impl TryFrom<RawRingConfig> for RingConfig {
    type Error = Error;

    fn try_from(raw: RawRingConfig) -> Result<Self> {
        Self::new(raw.rings, raw.center)
    }
}

impl RingConfig {
    pub fn new(rings: Vec<Ring>, center: Position) -> Result<Self> {
        if rings.is_empty() {
            return Err(Error::EmptyRingConfig);
        }
        let mut seen = BTreeSet::new();
        let mut previous = 0.0;
        for ring in &rings {
            if !seen.insert(ring.id.as_str()) {
                return Err(Error::DuplicateId {
                    kind: "ring",
                    id: ring.id.clone(),
                });
            }
            if !ring.radius.is_finite() || ring.radius <= previous {
                return Err(Error::RingRadiiNotAscending {
                    ring_id: ring.id.clone(),
                    radius: ring.radius,
                });
            }
            previous = ring.radius;
        }
        Ok(Self { rings, center })
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn ring(&self, id: &str) -> Option<&Ring> {
        self.rings.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ring(id).is_some()
    }

    pub fn innermost(&self) -> &Ring {
        &self.rings[0]
    }

    pub fn outermost(&self) -> &Ring {
        &self.rings[self.rings.len() - 1]
    }

    /// Radius halfway between a ring and the next-inner ring (or the center).
    ///
    /// Items sit on this circle so they never straddle a ring boundary.
    pub fn band_midpoint(&self, id: &str) -> Option<f64> {
        let idx = self.rings.iter().position(|r| r.id == id)?;
        let inner = if idx == 0 {
            0.0
        } else {
            self.rings[idx - 1].radius
        };
        Some((self.rings[idx].radius + inner) / 2.0)
    }

    /// Ring that grouped clusters default to: `middle` when configured, else the middle index.
    pub fn default_cluster_ring(&self) -> &Ring {
        self.ring("middle")
            .unwrap_or(&self.rings[self.rings.len() / 2])
    }

    /// Ring that standalone items default to: `outer` when configured, else the outermost.
    pub fn default_standalone_ring(&self) -> &Ring {
        self.ring("outer").unwrap_or_else(|| self.outermost())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub id: String,
    pub label: String,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridColumn {
    pub id: String,
    pub label: String,
    pub width: f64,
}

impl GridColumn {
    pub fn new(id: impl Into<String>, label: impl Into<String>, width: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width,
        }
    }
}

/// Journey-map style grid: static rows, (usually user-editable) columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub rows: Vec<GridRow>,
    pub columns: Vec<GridColumn>,
    #[serde(default)]
    pub origin: Position,
    #[serde(default = "default_cell_padding")]
    pub cell_padding: f64,
}

fn default_cell_padding() -> f64 {
    10.0
}

impl GridConfig {
    /// Same rows, origin and padding; the given columns replace the configured ones.
    pub fn with_columns(&self, columns: Vec<GridColumn>) -> Self {
        Self {
            rows: self.rows.clone(),
            columns,
            origin: self.origin,
            cell_padding: self.cell_padding,
        }
    }

    pub fn has_row(&self, id: &str) -> bool {
        self.rows.iter().any(|r| r.id == id)
    }

    pub fn has_column(&self, id: &str) -> bool {
        self.columns.iter().any(|c| c.id == id)
    }

    fn validate(&self) -> Result<()> {
        let mut rows = BTreeSet::new();
        for row in &self.rows {
            if !rows.insert(row.id.as_str()) {
                return Err(Error::DuplicateId {
                    kind: "grid row",
                    id: row.id.clone(),
                });
            }
            if !(row.height.is_finite() && row.height > 0.0) {
                return Err(Error::InvalidDimension {
                    what: format!("height of grid row `{}`", row.id),
                    value: row.height,
                });
            }
        }
        let mut cols = BTreeSet::new();
        for col in &self.columns {
            if !cols.insert(col.id.as_str()) {
                return Err(Error::DuplicateId {
                    kind: "grid column",
                    id: col.id.clone(),
                });
            }
            if !(col.width.is_finite() && col.width > 0.0) {
                return Err(Error::InvalidDimension {
                    what: format!("width of grid column `{}`", col.id),
                    value: col.width,
                });
            }
        }
        Ok(())
    }
}

/// Named rectangular regions (says/thinks/feels/does/pains/gains).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    pub zones: IndexMap<String, Bounds>,
    #[serde(default = "default_zone_padding")]
    pub card_padding: f64,
}

fn default_zone_padding() -> f64 {
    20.0
}

impl ZoneConfig {
    pub fn zone(&self, id: &str) -> Option<&Bounds> {
        self.zones.get(id)
    }

    fn validate(&self) -> Result<()> {
        for (id, b) in &self.zones {
            for (what, value) in [("width", b.width), ("height", b.height)] {
                if !(value.is_finite() && value > 0.0) {
                    return Err(Error::InvalidDimension {
                        what: format!("{what} of zone `{id}`"),
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

/// What happens to an item no metadata-driven strategy claims.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FallbackLayout {
    /// 4-column cascade from `(50, 50)`.
    #[default]
    Stagger,
    /// One left-to-right row with fixed spacing.
    HorizontalRow { origin: Position, spacing: f64 },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rings: Option<RingConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empathy_zones: Option<ZoneConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridConfig>,
    #[serde(default)]
    pub fallback: FallbackLayout,
}

impl StepLayout {
    pub fn has_rings(&self) -> bool {
        self.rings.is_some()
    }

    pub fn has_empathy_zones(&self) -> bool {
        self.empathy_zones.is_some()
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default)]
    pub steps: IndexMap<String, StepLayout>,
    /// Also accept a note whose text is a prefix of a cluster name as that cluster's parent.
    #[serde(default = "default_true")]
    pub legacy_cluster_prefix_match: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            steps: IndexMap::new(),
            legacy_cluster_prefix_match: true,
        }
    }
}

static NO_LAYOUT: StepLayout = StepLayout {
    rings: None,
    empathy_zones: None,
    grid: None,
    fallback: FallbackLayout::Stagger,
};

impl LayoutConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for step in self.steps.values() {
            if let Some(grid) = &step.grid {
                grid.validate()?;
            }
            if let Some(zones) = &step.empathy_zones {
                zones.validate()?;
            }
        }
        Ok(())
    }

    pub fn with_step(mut self, step_id: impl Into<String>, layout: StepLayout) -> Self {
        self.steps.insert(step_id.into(), layout);
        self
    }

    /// Layout for a step; unknown steps get the plain stagger layout.
    pub fn step(&self, step_id: &str) -> &StepLayout {
        self.steps.get(step_id).unwrap_or(&NO_LAYOUT)
    }

    /// Ring layout a caller requires; absence is a configuration error, never a guess.
    pub fn ring_config(&self, step_id: &str) -> Result<&RingConfig> {
        match self.step(step_id).rings.as_ref() {
            Some(rings) => Ok(rings),
            None => {
                tracing::warn!(step_id, "ring layout requested for a step without rings");
                Err(Error::MissingRingConfig {
                    step_id: step_id.to_string(),
                })
            }
        }
    }

    /// The built-in ten-step design thinking workshop.
    pub fn workshop() -> Self {
        let stakeholder_rings = RingConfig {
            rings: vec![
                Ring::new("inner", 200.0),
                Ring::new("middle", 400.0),
                Ring::new("outer", 600.0),
            ],
            center: Position::ORIGIN,
        };

        let zone = |x: f64, y: f64| Bounds::new(x, y, 420.0, 360.0);
        let empathy_zones = ZoneConfig {
            zones: [
                ("says", zone(-660.0, -390.0)),
                ("thinks", zone(-210.0, -390.0)),
                ("feels", zone(240.0, -390.0)),
                ("does", zone(-660.0, 0.0)),
                ("pains", zone(-210.0, 0.0)),
                ("gains", zone(240.0, 0.0)),
            ]
            .into_iter()
            .map(|(id, b)| (id.to_string(), b))
            .collect(),
            card_padding: default_zone_padding(),
        };

        let row = |id: &str, label: &str| GridRow {
            id: id.to_string(),
            label: label.to_string(),
            height: 150.0,
        };
        let journey_grid = GridConfig {
            rows: vec![
                row("actions", "Actions"),
                row("goals", "Goals"),
                row("barriers", "Barriers"),
                row("touchpoints", "Touchpoints"),
                row("emotions", "Emotions"),
                row("moments", "Moments of truth"),
                row("opportunities", "Opportunities"),
            ],
            columns: vec![
                GridColumn::new("awareness", "Awareness", 240.0),
                GridColumn::new("consideration", "Consideration", 240.0),
                GridColumn::new("decision", "Decision", 240.0),
                GridColumn::new("onboarding", "Onboarding", 240.0),
                GridColumn::new("retention", "Retention", 240.0),
            ],
            origin: Position::ORIGIN,
            cell_padding: default_cell_padding(),
        };

        Self::default()
            .with_step("challenge", StepLayout::default())
            .with_step(
                "stakeholder-mapping",
                StepLayout {
                    rings: Some(stakeholder_rings),
                    ..StepLayout::default()
                },
            )
            .with_step(
                "user-research",
                StepLayout {
                    fallback: FallbackLayout::HorizontalRow {
                        origin: Position::new(50.0, 50.0),
                        spacing: 500.0,
                    },
                    ..StepLayout::default()
                },
            )
            .with_step(
                "sense-making",
                StepLayout {
                    empathy_zones: Some(empathy_zones),
                    ..StepLayout::default()
                },
            )
            .with_step("persona", StepLayout::default())
            .with_step(
                "journey-mapping",
                StepLayout {
                    grid: Some(journey_grid),
                    ..StepLayout::default()
                },
            )
            .with_step("reframe", StepLayout::default())
            .with_step("ideation", StepLayout::default())
            .with_step("concept", StepLayout::default())
            .with_step("validate", StepLayout::default())
    }
}
