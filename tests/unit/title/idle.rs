use super::*;

#[test]
fn idles_after_timeout_and_resets_on_input() {
    let mut t = IdleTimer::new(Duration::from_secs(30), Duration::ZERO);
    assert!(!t.is_idle(Duration::from_secs(29)));
    assert!(t.is_idle(Duration::from_secs(30)));

    t.reset(Duration::from_secs(31));
    assert!(!t.is_idle(Duration::from_secs(60)));
    assert!(t.is_idle(Duration::from_secs(61)));
}

#[test]
fn stale_input_does_not_rewind() {
    let mut t = IdleTimer::new(Duration::from_secs(30), Duration::ZERO);
    t.reset(Duration::from_secs(40));
    t.reset(Duration::from_secs(10));
    assert!(!t.is_idle(Duration::from_secs(69)));
}

#[test]
fn starts_counting_from_arming_time() {
    let t = IdleTimer::new(Duration::from_secs(30), Duration::from_secs(100));
    assert!(!t.is_idle(Duration::from_secs(100)));
    assert!(!t.is_idle(Duration::from_secs(129)));
    assert!(t.is_idle(Duration::from_secs(130)));
}
