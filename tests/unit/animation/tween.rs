use super::*;

#[test]
fn tween_hits_endpoints_and_midpoint() {
    let t = Tween::start(
        Point::new(0.0, 0.0),
        Point::new(100.0, 50.0),
        Duration::from_millis(700),
        Ease::InOutCubic,
    );
    assert_eq!(t.sample(Duration::ZERO), Point::new(0.0, 0.0));
    assert_eq!(t.sample(Duration::from_millis(350)), Point::new(50.0, 25.0));
    assert_eq!(t.sample(Duration::from_millis(700)), Point::new(100.0, 50.0));
    assert_eq!(t.sample(Duration::from_secs(5)), Point::new(100.0, 50.0));
    assert!(!t.is_complete(Duration::from_millis(699)));
    assert!(t.is_complete(Duration::from_millis(700)));
}

#[test]
fn zero_duration_is_complete() {
    let t = Tween::start(1.0, 2.0, Duration::ZERO, Ease::Linear);
    assert!(t.is_complete(Duration::ZERO));
    assert_eq!(t.sample(Duration::ZERO), 2.0);
    assert_eq!(progress(Duration::from_millis(3), Duration::ZERO), 1.0);
}

#[test]
fn approach_converges_without_overshoot() {
    let target = 100.0;
    let mut v = 0.0;
    for _ in 0..200 {
        let next = approach(&v, &target, 0.08);
        assert!(next > v && next < target);
        v = next;
    }
    assert!((target - v) < 0.01);
}
