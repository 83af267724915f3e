use pinboard_core::model::DEFAULT_CARD_SIZE;
use pinboard_core::{
    CanvasItem, CellAssignment, Placement, Position, ZoneConfig, distribute_cards_in_zone,
};

/// Top-level items tagged with `zone_id`.
pub fn members<'a>(
    zone_id: &'a str,
    items: &'a [CanvasItem],
) -> impl Iterator<Item = &'a CanvasItem> {
    items
        .iter()
        .filter(move |i| i.parent_id.is_none() && i.row_tag() == Some(zone_id))
}

pub fn slots(zones: &ZoneConfig, zone_id: &str, count: usize) -> Option<Vec<Position>> {
    let bounds = zones.zone(zone_id)?;
    Some(distribute_cards_in_zone(
        count,
        bounds,
        DEFAULT_CARD_SIZE,
        zones.card_padding,
    ))
}

pub fn place(zones: &ZoneConfig, zone_id: &str, existing: &[CanvasItem]) -> Option<Placement> {
    let count = members(zone_id, existing).count();
    let position = slots(zones, zone_id, count + 1)?.pop()?;
    Some(Placement::in_cell(position, CellAssignment::row(zone_id)))
}
