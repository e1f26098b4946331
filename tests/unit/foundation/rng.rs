use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn unit_draws_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
        let r = rng.range(0.2, 0.8);
        assert!((0.2..0.8).contains(&r));
    }
}

#[test]
fn different_seeds_diverge() {
    assert_ne!(Rng64::new(1).next_u64(), Rng64::new(2).next_u64());
}
