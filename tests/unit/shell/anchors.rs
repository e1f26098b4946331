use super::*;

fn wide() -> Viewport {
    Viewport::new(1000.0, 800.0).unwrap()
}

fn narrow() -> Viewport {
    Viewport::new(400.0, 800.0).unwrap()
}

#[test]
fn slide_shifts_and_clamps_slots() {
    assert_eq!(displayed_slot(Role::Next, None), 1);
    assert_eq!(displayed_slot(Role::Next, Some(Direction::Next)), 0);
    assert_eq!(displayed_slot(Role::Current, Some(Direction::Next)), -1);
    assert_eq!(displayed_slot(Role::PrevPrev, Some(Direction::Next)), -2);
    assert_eq!(displayed_slot(Role::NextNext, Some(Direction::Prev)), 2);
    assert_eq!(displayed_slot(Role::PrevPrev, Some(Direction::Prev)), -1);
}

#[test]
fn wide_anchors_run_along_the_bottom() {
    let vp = wide();
    let xs: Vec<f64> = (-2..=2).map(|s| anchor_for(s, vp).at.x).collect();
    assert_eq!(xs, vec![-500.0, 350.0, 500.0, 650.0, 1000.0]);
    assert!((-2..=2).all(|s| anchor_for(s, vp).at.y == 800.0 - 32.0));
    assert_eq!(anchor_for(0, vp).v_align, VAlign::Bottom);
}

#[test]
fn narrow_anchors_move_to_the_top() {
    let vp = narrow();
    let a = anchor_for(1, vp);
    assert_eq!(a.at, Point::new(400.0 - 32.0, 80.0));
    assert_eq!(a.h_align, HAlign::End);
    assert_eq!(anchor_for(-1, vp).at, Point::new(32.0, 80.0));
    assert_eq!(anchor_for(-2, vp).h_align, HAlign::End);
    assert_eq!(anchor_for(0, vp).v_align, VAlign::Top);
}

#[test]
fn idle_styles() {
    let vp = wide();
    let center = slot_style(Role::Current, None, vp);
    assert_eq!((center.opacity, center.font_px), (1.0, 32.0));
    assert!(!center.interactive);
    assert_eq!(center.color, Rgba8::BLACK);

    let next = slot_style(Role::Next, None, vp);
    assert_eq!((next.opacity, next.font_px), (0.7, 24.0));
    assert!(next.interactive);
    assert_eq!(next.color, Rgba8::GRAY);

    let hidden = slot_style(Role::NextNext, None, vp);
    assert!(!hidden.visible);
    assert_eq!(hidden.opacity, 0.0);
    assert!(!hidden.interactive);
}

#[test]
fn nothing_is_interactive_mid_slide() {
    let vp = wide();
    assert!(
        Role::ALL
            .iter()
            .all(|&r| !slot_style(r, Some(Direction::Prev), vp).interactive)
    );
    let incoming = slot_style(Role::NextNext, Some(Direction::Next), vp);
    assert!(incoming.visible);
    assert_eq!(incoming.opacity, 0.7);
}

#[test]
fn only_adjacent_roles_start_a_slide() {
    assert_eq!(Direction::from_role(Role::Next), Some(Direction::Next));
    assert_eq!(Direction::from_role(Role::Prev), Some(Direction::Prev));
    for role in [Role::PrevPrev, Role::Current, Role::NextNext] {
        assert_eq!(Direction::from_role(role), None);
    }
}
