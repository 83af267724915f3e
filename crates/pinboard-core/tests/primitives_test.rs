use pinboard_core::config::{GridColumn, GridConfig, GridRow};
use pinboard_core::primitives::ring::slot_angle;
use pinboard_core::{
    Bounds, Position, Quadrant, QuadrantKind, Size, detect_quadrant, distribute_cards_in_zone,
    distribute_cards_on_ring, get_cell_bounds, position_to_cell,
};
use proptest::prelude::*;
use std::f64::consts::TAU;

fn flipped(q: Quadrant) -> Quadrant {
    match q {
        Quadrant::HighPowerHighInterest => Quadrant::LowPowerLowInterest,
        Quadrant::LowPowerLowInterest => Quadrant::HighPowerHighInterest,
        Quadrant::HighPowerLowInterest => Quadrant::LowPowerHighInterest,
        Quadrant::LowPowerHighInterest => Quadrant::HighPowerLowInterest,
        Quadrant::Says => Quadrant::Feels,
        Quadrant::Feels => Quadrant::Says,
        Quadrant::Thinks => Quadrant::Does,
        Quadrant::Does => Quadrant::Thinks,
    }
}

fn arb_grid() -> impl Strategy<Value = GridConfig> {
    (
        prop::collection::vec(20.0f64..300.0, 1..7),
        prop::collection::vec(20.0f64..400.0, 1..8),
        -500.0f64..500.0,
        -500.0f64..500.0,
    )
        .prop_map(|(heights, widths, ox, oy)| GridConfig {
            rows: heights
                .into_iter()
                .enumerate()
                .map(|(i, height)| GridRow {
                    id: format!("r{i}"),
                    label: format!("Row {i}"),
                    height,
                })
                .collect(),
            columns: widths
                .into_iter()
                .enumerate()
                .map(|(i, w)| GridColumn::new(format!("c{i}"), format!("Col {i}"), w))
                .collect(),
            origin: Position::new(ox, oy),
            cell_padding: 10.0,
        })
}

proptest! {
    #[test]
    fn quadrant_classification_is_origin_symmetric(
        cx in prop_oneof![-5000.0f64..-0.001, 0.001f64..5000.0],
        cy in prop_oneof![-5000.0f64..-0.001, 0.001f64..5000.0],
        w in 1.0f64..400.0,
        h in 1.0f64..400.0,
    ) {
        for kind in [QuadrantKind::PowerInterest, QuadrantKind::EmpathyMap] {
            let q = detect_quadrant(Position::new(cx - w / 2.0, cy - h / 2.0), w, h, kind);
            let mirrored = detect_quadrant(Position::new(-cx - w / 2.0, -cy - h / 2.0), w, h, kind);
            prop_assert_eq!(mirrored, flipped(q));
            prop_assert_eq!(q.kind(), kind);
        }
    }

    #[test]
    fn cell_bounds_top_left_maps_back_to_cell(grid in arb_grid(), r in 0usize..7, c in 0usize..8) {
        let row = &grid.rows[r % grid.rows.len()].id;
        let col = &grid.columns[c % grid.columns.len()].id;
        let bounds = get_cell_bounds(&grid, row, col).expect("configured cell");
        let cell = position_to_cell(&grid, bounds.top_left()).expect("inside grid");
        prop_assert_eq!(&cell.row, row);
        prop_assert_eq!(&cell.col, col);
    }

    #[test]
    fn ring_distribution_is_even_and_on_radius(
        n in 1usize..40,
        radius in 1.0f64..2000.0,
        cx in -1000.0f64..1000.0,
        cy in -1000.0f64..1000.0,
    ) {
        let center = Position::new(cx, cy);
        let points = distribute_cards_on_ring(n, radius, center);
        prop_assert_eq!(points.len(), n);
        for (i, p) in points.iter().enumerate() {
            let mid = p.offset(80.0, 50.0);
            prop_assert!((mid.distance_to(center) - radius).abs() < 1e-6 * radius.max(1.0));
            let angle = (mid.y - cy).atan2(mid.x - cx);
            let expected = slot_angle(i, n);
            let diff = (angle - expected).rem_euclid(TAU);
            prop_assert!(diff < 1e-6 || (TAU - diff) < 1e-6, "slot {} off by {}", i, diff);
        }
    }

    #[test]
    fn zone_packing_never_overlaps(
        count in 0usize..30,
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        width in 300.0f64..1200.0,
        height in 100.0f64..800.0,
        cw in 40.0f64..200.0,
        ch in 30.0f64..150.0,
        padding in 1.0f64..30.0,
    ) {
        let bounds = Bounds::new(x, y, width, height);
        let card = Size::new(cw, ch);
        let cards: Vec<Bounds> = distribute_cards_in_zone(count, &bounds, card, padding)
            .into_iter()
            .map(|p| Bounds::from_position_size(p, card))
            .collect();
        prop_assert_eq!(cards.len(), count);
        for (i, a) in cards.iter().enumerate() {
            prop_assert!(a.x >= bounds.x);
            prop_assert!(a.right() <= bounds.right() + 1e-9);
            for b in &cards[i + 1..] {
                prop_assert!(!a.intersects(b));
            }
        }
    }
}

#[test]
fn zone_packing_overflows_height_not_width() {
    let bounds = Bounds::new(0.0, 0.0, 400.0, 200.0);
    let card = Size::new(160.0, 100.0);
    let cards = distribute_cards_in_zone(6, &bounds, card, 20.0);
    let last = cards.last().expect("six cards");
    assert!(last.y + card.height > bounds.bottom());
    assert!(cards.iter().all(|p| p.x + card.width <= bounds.right()));
}
