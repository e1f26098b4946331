use super::*;
use chrono::NaiveDate;

fn entries() -> Vec<DiaryEntry> {
    [(2025, 9, 10), (2025, 9, 22), (2025, 10, 5)]
        .iter()
        .enumerate()
        .map(|(i, &(y, m, d))| DiaryEntry {
            id: format!("{}", 40 + i),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            sketch_id: String::new(),
            thumbnail_url: None,
            content_blocks: vec![],
        })
        .collect()
}

#[test]
fn resize_keeps_positions_and_refreshes_heights() {
    let mut frozen = FrozenLayout::new(entries(), LayoutConfig::default(), 11);
    assert!(!frozen.is_frozen());
    assert!(frozen.height(ViewMode::Network).is_none());

    let first = frozen.layout(Viewport::new(1280.0, 800.0).unwrap()).clone();
    assert!(frozen.is_frozen());
    assert_eq!(first.network_height, 1600.0);

    let resized = frozen.layout(Viewport::new(700.0, 500.0).unwrap()).clone();
    assert_eq!(resized.nodes, first.nodes);
    assert_eq!(resized.months, first.months);
    assert_eq!(resized.network_height, 1000.0);
    assert_eq!(resized.calendar_height, first.calendar_height);
    assert_eq!(frozen.height(ViewMode::Network), Some(1000.0));
}

#[test]
fn same_viewport_twice_is_identical() {
    let mut frozen = FrozenLayout::new(entries(), LayoutConfig::default(), 11);
    let viewport = Viewport::new(1280.0, 800.0).unwrap();
    let a = frozen.layout(viewport).clone();
    let b = frozen.layout(viewport).clone();
    assert_eq!(a, b);
}
