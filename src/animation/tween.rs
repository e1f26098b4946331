use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::core::{Point, Vec2},
};

/// Linear interpolation between two values.
pub trait Lerp: Sized {
    /// Value at `t` between `a` (t = 0) and `b` (t = 1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Normalized progress of `elapsed` through `duration`, clamped to `[0, 1]`.
///
/// A zero duration is complete immediately.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// A single eased transition from one value to another, sampled by elapsed time.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    /// Value at `elapsed = 0`.
    pub from: T,
    /// Value once complete.
    pub to: T,
    /// Length of the transition.
    pub duration: Duration,
    /// Timing curve.
    pub ease: Ease,
}

impl<T: Lerp + Clone> Tween<T> {
    /// Start a tween.
    pub fn start(from: T, to: T, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
        }
    }

    /// Eased progress at `elapsed`.
    pub fn eased(&self, elapsed: Duration) -> f64 {
        self.ease.apply(progress(elapsed, self.duration))
    }

    /// Value at `elapsed`.
    pub fn sample(&self, elapsed: Duration) -> T {
        if self.is_complete(elapsed) {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.eased(elapsed))
    }

    /// Return `true` once `elapsed` reaches the duration.
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// One step of exponential smoothing: move `current` a `factor` of the way to `target`.
pub fn approach<T: Lerp>(current: &T, target: &T, factor: f64) -> T {
    T::lerp(current, target, factor.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
