use crate::request::{PlacementMetadata, PlacementRequest};
use crate::strategy::{category, cluster, fallback, grid, quadrant, ring, zone};
use pinboard_core::{CanvasItem, GridConfig, LayoutConfig, Placement, Position};

/// Where a new item goes on `step_id`, given its metadata and the items already on the board.
///
/// Never fails and never mutates `existing`: every request that no strategy can honor ends in
/// the step's fallback layout. `grid_override` (typically the board's user-edited columns) takes
/// priority over the step's static grid.
pub fn compute_canvas_position(
    step_id: &str,
    metadata: &PlacementMetadata,
    existing: &[CanvasItem],
    config: &LayoutConfig,
    grid_override: Option<&GridConfig>,
) -> Placement {
    let step = config.step(step_id);
    let grid = grid_override.or(step.grid.as_ref());
    let request = PlacementRequest::classify(metadata, step, grid);
    tracing::debug!(step_id, ?request, "classified placement request");
    place(step_id, &request, existing, config, grid_override)
}

/// Runs the strategy for an already-classified request.
pub fn place(
    step_id: &str,
    request: &PlacementRequest,
    existing: &[CanvasItem],
    config: &LayoutConfig,
    grid_override: Option<&GridConfig>,
) -> Placement {
    let step = config.step(step_id);
    let grid_config = grid_override.or(step.grid.as_ref());

    let placed = match request {
        PlacementRequest::Ring { ring_id } => step
            .rings
            .as_ref()
            .and_then(|rings| ring::place(rings, ring_id, existing)),
        PlacementRequest::Zone { zone_id } => step
            .empathy_zones
            .as_ref()
            .and_then(|zones| zone::place(zones, zone_id, existing)),
        PlacementRequest::Quadrant(q) => Some(quadrant::place(*q, existing)),
        PlacementRequest::Cell { row, col } => {
            grid_config.and_then(|g| grid::place(g, row, col, existing))
        }
        PlacementRequest::Category(c) => Some(category::place(*c, existing)),
        PlacementRequest::Cluster { name } => cluster::place(
            name,
            existing,
            step.rings.as_ref(),
            config.legacy_cluster_prefix_match,
        ),
        PlacementRequest::Fallback => None,
    };

    placed.unwrap_or_else(|| {
        if !matches!(request, PlacementRequest::Fallback) {
            tracing::debug!(step_id, ?request, "strategy declined; using fallback layout");
        }
        fallback::place(&step.fallback, existing)
    })
}

/// New positions for the existing members of the ring or zone `placement` joins.
///
/// Ring and zone layouts re-lay every member when one is added so spacing stays even; the
/// dispatcher only returns the newcomer's slot, this returns everyone else's. Empty for every
/// other layout family.
pub fn relayout_siblings(
    step_id: &str,
    placement: &Placement,
    existing: &[CanvasItem],
    config: &LayoutConfig,
) -> Vec<(String, Position)> {
    let step = config.step(step_id);
    let Some(row) = placement
        .cell_assignment
        .as_ref()
        .filter(|c| c.col.is_none())
        .map(|c| c.row.as_str())
    else {
        return Vec::new();
    };

    let (members, slots): (Vec<&CanvasItem>, Option<Vec<Position>>) =
        match (&step.rings, &step.empathy_zones) {
            (Some(rings), _) if rings.contains(row) => {
                let members: Vec<&CanvasItem> = ring::members(row, existing).collect();
                let slots = ring::slots(rings, row, members.len() + 1);
                (members, slots)
            }
            (_, Some(zones)) if zones.zone(row).is_some() => {
                let members: Vec<&CanvasItem> = zone::members(row, existing).collect();
                let slots = zone::slots(zones, row, members.len() + 1);
                (members, slots)
            }
            _ => return Vec::new(),
        };

    let Some(slots) = slots else {
        return Vec::new();
    };
    members
        .into_iter()
        .zip(slots)
        .map(|(item, position)| (item.id.clone(), position))
        .collect()
}
