use chrono::NaiveDate;

use super::*;
use crate::content::model::DiaryEntry;

fn entries() -> Vec<DiaryEntry> {
    ["id43", "id42", "id41"]
        .iter()
        .enumerate()
        .map(|(i, id)| DiaryEntry {
            id: (*id).to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 20 - i as u32).unwrap(),
            sketch_id: format!("sk-{id}"),
            thumbnail_url: None,
            content_blocks: vec![],
        })
        .collect()
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn shell() -> TransitionShell {
    TransitionShell::new(NeighborWindow::around(&entries(), "id42").unwrap())
}

#[test]
fn click_prev_navigates_after_delay_once() {
    let mut s = shell();
    assert!(s.click(Role::Prev, ms(100)));
    assert_eq!(s.due(), Some(ms(900)));
    assert_eq!(s.tick(ms(899)), None);
    assert_eq!(s.tick(ms(900)), Some(Route::diary("id41")));
    assert_eq!(s.tick(ms(2000)), None);
    assert_eq!(s.direction(), Some(Direction::Prev));
}

#[test]
fn reentrant_clicks_are_ignored() {
    let mut s = shell();
    assert!(s.click(Role::Next, ms(0)));
    assert!(!s.click(Role::Prev, ms(10)));
    assert_eq!(s.tick(ms(800)), Some(Route::diary("id43")));
}

#[test]
fn only_populated_side_roles_start_a_slide() {
    let mut s = shell();
    assert!(!s.click(Role::Current, ms(0)));
    assert!(!s.click(Role::NextNext, ms(0)));

    let mut edge = TransitionShell::new(NeighborWindow::around(&entries(), "id43").unwrap());
    assert!(!edge.click(Role::Next, ms(0)));
    assert_eq!(edge.state(), &TransitionState::Idle);
}

#[test]
fn cancel_and_new_window_reset_to_idle() {
    let mut s = shell();
    s.click(Role::Next, ms(0));
    s.cancel();
    assert_eq!(s.tick(ms(800)), None);

    s.click(Role::Prev, ms(0));
    let _ = s.tick(ms(800));
    s.set_window(NeighborWindow::around(&entries(), "id41").unwrap());
    assert_eq!(s.direction(), None);
    assert_eq!(s.window().current().unwrap().id, "id41");
}

#[test]
fn styles_follow_the_slide() {
    let vp = Viewport::new(1200.0, 800.0).unwrap();
    let mut s = shell();
    assert!(s.slot_style(Role::Next, vp).interactive);
    s.click(Role::Next, ms(0));
    let next = s.slot_style(Role::Next, vp);
    assert_eq!(next.slot, 0);
    assert!(!next.interactive);
}
