use super::*;

#[test]
fn heading_is_centred_vertically() {
    let vp = Viewport::new(1000.0, 800.0).unwrap();
    let pos = heading_positions(vp);
    assert_eq!(pos.len(), 7);
    let first = pos[0].1.y;
    let last = pos[6].1.y;
    assert!(((first + last) / 2.0 - 400.0).abs() < 1e-9);
    assert!(pos.iter().all(|(_, p)| p.x == 500.0));
}

#[test]
fn scene_has_curve_and_glyph_labels() {
    let scene = statement_scene(Viewport::new(1000.0, 800.0).unwrap());
    assert_eq!(scene.ops.len(), 1);
    assert_eq!(scene.labels.len(), 7);
    assert!(!PARAGRAPHS.is_empty());
}
