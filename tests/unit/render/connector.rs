use chrono::NaiveDate;

use super::*;

fn node(id: &str, network: (f64, f64), calendar: (f64, f64)) -> DateNode {
    let date = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
    DateNode {
        id: id.to_string(),
        date,
        display_date: "25/09/10".to_string(),
        month_index: 0,
        network_x: network.0,
        network_y: network.1,
        calendar_x: calendar.0,
        calendar_y: calendar.1,
        thumbnail_url: None,
    }
}

fn nodes() -> Vec<DateNode> {
    vec![
        node("1", (0.0, 0.0), (100.0, 50.0)),
        node("2", (200.0, 0.0), (300.0, 50.0)),
    ]
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn idle_animator_is_complete_and_empty() {
    let mut anim = ConnectorAnimator::new(ConnectorConfig::default(), Signals::new());
    let frame = anim.frame(ms(0));
    assert!(frame.state.is_complete());
    assert!(frame.value.points.is_empty());
}

#[test]
fn first_load_strokes_in_quadratically_and_fires_intro_once() {
    let signals = Signals::new();
    let mut anim = ConnectorAnimator::new(ConnectorConfig::default(), signals.clone());
    anim.update(&nodes(), ViewMode::Network, ms(1000));

    let f = anim.frame(ms(1100));
    assert!((f.value.alpha - 0.25).abs() < 1e-9);
    assert_eq!(f.state, FrameState::Running);
    assert_eq!(f.value.points[0], Point::new(0.0, 0.0));

    let f = anim.frame(ms(1400));
    assert_eq!(f.value.alpha, 1.0);
    assert_eq!(f.state, FrameState::Running);
    assert!(!signals.intro_complete());

    let f = anim.frame(ms(1700));
    assert!(f.state.is_complete());
    assert!(signals.intro_complete());
    assert!(!anim.is_initial_load());
}

#[test]
fn mode_change_morphs_persisting_nodes() {
    let mut anim = ConnectorAnimator::new(ConnectorConfig::default(), Signals::new());
    anim.update(&nodes(), ViewMode::Network, ms(0));
    let _ = anim.frame(ms(700));

    anim.update(&nodes(), ViewMode::Calendar, ms(1000));
    let mid = anim.frame(ms(1350));
    assert_eq!(mid.value.alpha, 1.0);
    assert_eq!(mid.value.morph, 0.5);
    assert_eq!(mid.value.points[0], Point::new(50.0, 25.0));
    assert_eq!(mid.value.points[1], Point::new(250.0, 25.0));
    assert_eq!(mid.state, FrameState::Running);

    let end = anim.frame(ms(1700));
    assert!(end.state.is_complete());
    assert_eq!(end.value.points[1], Point::new(300.0, 50.0));
}

#[test]
fn new_nodes_appear_at_their_target() {
    let mut anim = ConnectorAnimator::new(ConnectorConfig::default(), Signals::new());
    anim.update(&nodes(), ViewMode::Network, ms(0));
    let _ = anim.frame(ms(700));

    let mut changed = nodes();
    changed[1] = node("3", (10.0, 10.0), (20.0, 20.0));
    anim.update(&changed, ViewMode::Calendar, ms(1000));
    let mid = anim.frame(ms(1350));
    assert_eq!(mid.value.points[1], Point::new(20.0, 20.0));
}

#[test]
fn frame_path_is_deterministic_and_drawable() {
    let mut a = ConnectorAnimator::new(ConnectorConfig::default(), Signals::new());
    let mut b = ConnectorAnimator::new(ConnectorConfig::default(), Signals::new());
    a.update(&nodes(), ViewMode::Calendar, ms(0));
    b.update(&nodes(), ViewMode::Calendar, ms(0));
    let fa = a.frame(ms(800)).value;
    let fb = b.frame(ms(800)).value;
    assert_eq!(fa.path, fb.path);

    let mut scene = Scene::new();
    fa.draw(&mut scene, a.config());
    assert_eq!(scene.ops.len(), 1);
}
