use crate::geom::Size;

const SIZE_STEPS: [(usize, Size); 3] = [
    (40, Size::new(160.0, 100.0)),
    (80, Size::new(200.0, 120.0)),
    (140, Size::new(240.0, 150.0)),
];
const LARGEST: Size = Size::new(280.0, 180.0);

/// Card footprint for a label. Counts characters, not bytes; longer text never gets a smaller box.
pub fn dimensions_for_text(text: &str) -> Size {
    let len = text.chars().count();
    SIZE_STEPS
        .iter()
        .find(|(max, _)| len <= *max)
        .map(|(_, size)| *size)
        .unwrap_or(LARGEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(dimensions_for_text(&"a".repeat(40)), Size::new(160.0, 100.0));
        assert_eq!(dimensions_for_text(&"a".repeat(41)), Size::new(200.0, 120.0));
        assert_eq!(dimensions_for_text(&"a".repeat(140)), Size::new(240.0, 150.0));
        assert_eq!(dimensions_for_text(&"a".repeat(141)), Size::new(280.0, 180.0));
        assert_eq!(dimensions_for_text(""), Size::new(160.0, 100.0));
    }

    #[test]
    fn counts_characters() {
        // 40 three-byte characters is still a short label.
        assert_eq!(dimensions_for_text(&"€".repeat(40)), Size::new(160.0, 100.0));
    }

    #[test]
    fn grows_monotonically() {
        let sizes: Vec<Size> = [10, 50, 100, 200]
            .into_iter()
            .map(|n| dimensions_for_text(&"x".repeat(n)))
            .collect();
        for pair in sizes.windows(2) {
            assert!(pair[0].width <= pair[1].width);
            assert!(pair[0].height <= pair[1].height);
        }
    }
}
