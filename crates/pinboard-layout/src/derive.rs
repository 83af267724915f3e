//! Position-to-zone direction: which ring/zone/cell/quadrant an item now sits in.

use crate::strategy::absolute_bounds;
use crate::strategy::category::PersonaCategory;
use pinboard_core::{
    CanvasItem, CellAssignment, GridConfig, LayoutConfig, Placement, Result, detect_quadrant,
    detect_ring, get_zone_for_position, position_to_cell,
};

/// Re-derives an item's layout tags from where it currently is, e.g. after a drag.
///
/// The position itself is kept. On ring, zone and grid steps the item's center decides the tag;
/// elsewhere a quadrant-tagged item is re-classified within its own vocabulary and persona
/// category tags are kept as they are.
pub fn derive_placement(
    step_id: &str,
    item: &CanvasItem,
    items: &[CanvasItem],
    config: &LayoutConfig,
    grid_override: Option<&GridConfig>,
) -> Placement {
    let step = config.step(step_id);
    let bounds = absolute_bounds(item, items);
    let center = bounds.center();
    let position = item.position;

    if let Some(rings) = &step.rings {
        let ring_id = detect_ring(center, rings);
        return Placement::in_cell(position, CellAssignment::row(ring_id));
    }

    if let Some(zones) = &step.empathy_zones {
        return match get_zone_for_position(center, zones) {
            Some(zone_id) => Placement::in_cell(position, CellAssignment::row(zone_id)),
            None => Placement::free(position),
        };
    }

    if let Some(grid) = grid_override.or(step.grid.as_ref()) {
        return match position_to_cell(grid, center) {
            Some(cell) => Placement::in_cell(position, cell.into()),
            None => Placement::free(position),
        };
    }

    if let Some(q) = item.quadrant {
        let q = detect_quadrant(bounds.top_left(), bounds.width, bounds.height, q.kind());
        return Placement::in_quadrant(position, q);
    }

    match item.row_tag().and_then(PersonaCategory::from_id) {
        Some(category) => Placement::in_cell(position, CellAssignment::row(category.as_str())),
        None => Placement::free(position),
    }
}

/// Assigns every top-level note on a ring step to the ring its center falls in.
///
/// Used when boards placed with the older quadrant layout are opened on a ring step. Fails when
/// the step has no ring layout.
pub fn migrate_to_rings(
    step_id: &str,
    items: &[CanvasItem],
    config: &LayoutConfig,
) -> Result<Vec<(String, CellAssignment)>> {
    let rings = config.ring_config(step_id)?;
    let assignments = items
        .iter()
        .filter(|i| !i.is_group() && i.parent_id.is_none())
        .map(|i| {
            let ring_id = detect_ring(i.bounds().center(), rings);
            (i.id.clone(), CellAssignment::row(ring_id))
        })
        .collect();
    Ok(assignments)
}
