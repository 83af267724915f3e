use pinboard_core::{
    CanvasItem, CellAssignment, Placement, Position, RingConfig, distribute_cards_on_ring,
};

/// Top-level items currently tagged with `ring_id`, in board order. Grouped notes hold
/// group-relative positions and keep them.
pub fn members<'a>(
    ring_id: &'a str,
    items: &'a [CanvasItem],
) -> impl Iterator<Item = &'a CanvasItem> {
    items
        .iter()
        .filter(move |i| i.parent_id.is_none() && i.row_tag() == Some(ring_id))
}

/// `count` evenly spaced slots on the ring's band-midpoint circle.
pub fn slots(rings: &RingConfig, ring_id: &str, count: usize) -> Option<Vec<Position>> {
    let radius = rings.band_midpoint(ring_id)?;
    Some(distribute_cards_on_ring(count, radius, rings.center()))
}

/// Re-lays the ring for one more member and hands the new member the last slot.
pub fn place(rings: &RingConfig, ring_id: &str, existing: &[CanvasItem]) -> Option<Placement> {
    let count = members(ring_id, existing).count();
    let position = slots(rings, ring_id, count + 1)?.pop()?;
    Some(Placement::in_cell(position, CellAssignment::row(ring_id)))
}
