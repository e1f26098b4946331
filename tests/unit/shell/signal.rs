use super::*;

#[test]
fn view_mode_last_value_wins_across_clones() {
    let a = Signals::new();
    let b = a.clone();
    assert_eq!(b.view_mode(), ViewMode::Network);
    a.set_view_mode(ViewMode::Calendar);
    a.set_view_mode(ViewMode::Network);
    a.set_view_mode(ViewMode::Calendar);
    assert_eq!(b.view_mode(), ViewMode::Calendar);
    assert_eq!(b.toggle_view_mode(), ViewMode::Network);
    assert_eq!(a.view_mode(), ViewMode::Network);
}

#[tokio::test]
async fn subscribers_observe_changes() {
    let signals = Signals::new();
    let mut rx = signals.subscribe_view_mode();
    signals.set_view_mode(ViewMode::Calendar);
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), ViewMode::Calendar);

    signals.set_view_mode(ViewMode::Calendar);
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn intro_fires_once() {
    let signals = Signals::new();
    let mut rx = signals.subscribe_intro();
    assert!(!signals.intro_complete());
    assert!(signals.complete_intro());
    assert!(!signals.complete_intro());
    rx.changed().await.unwrap();
    assert!(*rx.borrow_and_update());
    assert!(!rx.has_changed().unwrap());
}
