//! "Tidy up by theme": re-flows a whole ring board by cluster.
//!
//! Every cluster (a parent note plus the notes tagged with its text) gets one angular slot on a
//! ring; standalone notes get a slot of their own. Clusters keep the ring their parent already
//! sits in, otherwise grouped clusters go to the middle ring and standalone notes to the outer
//! one.
//!
//! Angular order within a ring is first-encounter order in the input, so re-running the sort on
//! its own output reproduces the same board.

use crate::strategy::cluster::{cluster_child_position, find_parent};
use indexmap::IndexMap;
use pinboard_core::primitives::ring::{polar, slot_angle};
use pinboard_core::{Bounds, CanvasItem, CellAssignment, LayoutConfig, Position, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSortPlacement {
    pub id: String,
    pub position: Position,
    pub cell_assignment: CellAssignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ClusterKey {
    Named(String),
    Standalone(String),
}

#[derive(Debug, Default)]
struct ThemeCluster<'a> {
    lead: Option<&'a CanvasItem>,
    children: Vec<&'a CanvasItem>,
}

fn label_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Groups the top-level notes of a board into clusters, in first-encounter order.
fn partition<'a>(items: &'a [CanvasItem], prefix_match: bool) -> Vec<ThemeCluster<'a>> {
    let board: Vec<&CanvasItem> = items
        .iter()
        .filter(|i| !i.is_group() && i.parent_id.is_none())
        .collect();

    let mut names: IndexMap<String, &str> = IndexMap::new();
    for item in board.iter().copied() {
        if let Some(name) = item.cluster_name() {
            names.entry(label_key(name)).or_insert(name);
        }
    }

    // A note leads at most one cluster; leading takes precedence over its own tag.
    let mut claimed: FxHashSet<&str> = FxHashSet::default();
    let mut leads: IndexMap<&str, String> = IndexMap::new();
    for (key, name) in &names {
        let parent = find_parent(
            name,
            board
                .iter()
                .copied()
                .filter(|i| !claimed.contains(i.id.as_str())),
            prefix_match,
        );
        if let Some(parent) = parent {
            claimed.insert(parent.id.as_str());
            leads.insert(parent.id.as_str(), key.clone());
        }
    }
    let led: FxHashSet<&str> = leads.values().map(String::as_str).collect();

    let mut clusters: IndexMap<ClusterKey, ThemeCluster<'a>> = IndexMap::new();
    for item in board {
        if let Some(key) = leads.get(item.id.as_str()) {
            clusters
                .entry(ClusterKey::Named(key.clone()))
                .or_default()
                .lead = Some(item);
            continue;
        }
        match item.cluster_name().map(label_key) {
            Some(key) if led.contains(key.as_str()) => {
                clusters
                    .entry(ClusterKey::Named(key))
                    .or_default()
                    .children
                    .push(item);
            }
            orphan => {
                if let Some(cluster) = orphan {
                    tracing::warn!(
                        item_id = %item.id,
                        cluster = %cluster,
                        "cluster has no parent note; sorting item as standalone"
                    );
                }
                clusters.insert(
                    ClusterKey::Standalone(item.id.clone()),
                    ThemeCluster {
                        lead: Some(item),
                        children: Vec::new(),
                    },
                );
            }
        }
    }
    clusters.into_values().collect()
}

/// Final position and ring of every note on a ring board, grouped by cluster.
///
/// Fails with [`pinboard_core::Error::MissingRingConfig`] when `step_id` has no ring layout.
pub fn compute_theme_sort_positions(
    items: &[CanvasItem],
    step_id: &str,
    config: &LayoutConfig,
) -> Result<Vec<ThemeSortPlacement>> {
    let rings = config.ring_config(step_id)?;
    let clusters = partition(items, config.legacy_cluster_prefix_match);

    let mut by_ring: IndexMap<&str, Vec<&ThemeCluster<'_>>> = rings
        .rings()
        .iter()
        .map(|r| (r.id.as_str(), Vec::new()))
        .collect();
    for cluster in &clusters {
        let Some(lead) = cluster.lead else {
            continue;
        };
        let ring_id = match lead.row_tag().filter(|r| rings.contains(r)) {
            Some(r) => r,
            None if cluster.children.is_empty() => rings.default_standalone_ring().id.as_str(),
            None => rings.default_cluster_ring().id.as_str(),
        };
        if let Some(slot) = by_ring.get_mut(ring_id) {
            slot.push(cluster);
        }
    }

    let mut out = Vec::with_capacity(items.len());
    for (ring_id, members) in by_ring {
        let Some(radius) = rings.band_midpoint(ring_id) else {
            continue;
        };
        let n = members.len();
        for (k, cluster) in members.into_iter().enumerate() {
            let Some(lead) = cluster.lead else {
                continue;
            };
            let anchor = polar(rings.center(), radius, slot_angle(k, n));
            let lead_pos = anchor.offset(-lead.width / 2.0, -lead.height / 2.0);
            let lead_bounds = Bounds::from_position_size(lead_pos, lead.size());
            out.push(ThemeSortPlacement {
                id: lead.id.clone(),
                position: lead_pos,
                cell_assignment: CellAssignment::row(ring_id),
            });
            for (j, child) in cluster.children.iter().enumerate() {
                out.push(ThemeSortPlacement {
                    id: child.id.clone(),
                    position: cluster_child_position(&lead_bounds, j),
                    cell_assignment: CellAssignment::row(ring_id),
                });
            }
        }
    }

    tracing::debug!(
        step_id,
        clusters = clusters.len(),
        placed = out.len(),
        "theme sort computed"
    );
    Ok(out)
}
