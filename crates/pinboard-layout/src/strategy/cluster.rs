//! Children placed relative to the note that names their cluster.
//!
//! Cluster membership is a soft, text-matched relation: a child carries `cluster: "Fruit"` and the
//! parent is whichever note reads "Fruit" (compared case-insensitively). The same slot math is
//! shared with the reorganizer so incremental and batch layouts agree.

use super::{absolute_bounds, ring};
use pinboard_core::model::{CARD_HEIGHT, CARD_WIDTH};
use pinboard_core::{Bounds, CanvasItem, Placement, Position, RingConfig};

pub const CLUSTER_COLUMNS: usize = 3;
pub const CLUSTER_GUTTER: f64 = 15.0;

/// Case-insensitive label comparison used for every cluster/text match.
pub fn same_label(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

pub fn is_child_of(item: &CanvasItem, name: &str) -> bool {
    item.cluster_name().is_some_and(|c| same_label(c, name))
}

/// The note holding cluster `name` together.
///
/// Exact text matches win. With `prefix_match`, a note whose text is a prefix of the cluster name
/// also qualifies (older boards were tagged with longer cluster names than their parent notes).
pub fn find_parent<'a, I>(name: &str, items: I, prefix_match: bool) -> Option<&'a CanvasItem>
where
    I: IntoIterator<Item = &'a CanvasItem>,
    I::IntoIter: Clone,
{
    let mut candidates = items
        .into_iter()
        .filter(move |i| !i.is_group() && !is_child_of(i, name));
    if let Some(exact) = candidates.clone().find(|i| same_label(&i.text, name)) {
        return Some(exact);
    }
    if !prefix_match {
        return None;
    }
    let wanted = name.trim().to_lowercase();
    candidates.find(|i| {
        let text = i.text.trim().to_lowercase();
        !text.is_empty() && wanted.starts_with(&text)
    })
}

/// Top-left of the `index`-th child in the block centered under `parent`.
pub fn cluster_child_position(parent: &Bounds, index: usize) -> Position {
    let cols = CLUSTER_COLUMNS as f64;
    let block_width = cols * CARD_WIDTH + (cols - 1.0) * CLUSTER_GUTTER;
    let col = (index % CLUSTER_COLUMNS) as f64;
    let row = (index / CLUSTER_COLUMNS) as f64;
    Position::new(
        parent.center().x - block_width / 2.0 + col * (CARD_WIDTH + CLUSTER_GUTTER),
        parent.bottom() + CLUSTER_GUTTER + row * (CARD_HEIGHT + CLUSTER_GUTTER),
    )
}

/// `None` when no parent note exists, so the caller can fall back.
pub fn place(
    name: &str,
    existing: &[CanvasItem],
    rings: Option<&RingConfig>,
    prefix_match: bool,
) -> Option<Placement> {
    let parent = find_parent(name, existing, prefix_match)?;

    // A ring-assigned parent pulls its children onto the same ring.
    if let Some(rings) = rings {
        if let Some(ring_id) = parent.row_tag().filter(|r| rings.contains(r)) {
            return ring::place(rings, ring_id, existing);
        }
    }

    let index = existing.iter().filter(|i| is_child_of(i, name)).count();
    let parent_bounds = absolute_bounds(parent, existing);
    Some(Placement::free(cluster_child_position(&parent_bounds, index)))
}
