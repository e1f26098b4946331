use crate::foundation::core::{BezPath, Point};

/// Seed multiplier applied to a node's numeric id.
pub const SEED_STEP: f64 = 0.1;

/// Control point of a "hand-drawn" quadratic between two points.
///
/// The offset from the segment midpoint depends only on `seed` and `scale`,
/// so equal inputs always produce the same curve.
pub fn rough_control_point(from: Point, to: Point, seed: f64, scale: f64) -> Point {
    let mid = from.midpoint(to);
    let dx = (seed.sin() * 10.0 + (seed * 0.3).cos() * 5.0) * scale;
    let dy = ((seed * 0.2).cos() * 10.0 + (seed * 0.4).sin() * 5.0) * scale;
    Point::new(mid.x + dx, mid.y + dy)
}

/// Append a rough quadratic from the current point `from` to `to`.
pub fn rough_quad_to(path: &mut BezPath, from: Point, to: Point, seed: f64, scale: f64) {
    path.quad_to(rough_control_point(from, to, seed, scale), to);
}

/// Polyline of rough curves through `points`, one segment per consecutive pair.
///
/// `seed_of(i)` supplies the seed of the segment starting at point `i`.
pub fn rough_polyline(
    points: &[Point],
    scale: f64,
    mut seed_of: impl FnMut(usize) -> f64,
) -> BezPath {
    let mut path = BezPath::new();
    for (i, pair) in points.windows(2).enumerate() {
        path.move_to(pair[0]);
        rough_quad_to(&mut path, pair[0], pair[1], seed_of(i), scale);
    }
    path
}

/// Seed for the connector leaving a node: the id's leading decimal digits
/// times [`SEED_STEP`], or `index` times [`SEED_STEP`] when the id has none.
pub fn curve_seed(id: &str, index: usize) -> f64 {
    let trimmed = id.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    match rest[..digits_len].parse::<f64>() {
        Ok(v) if digits_len > 0 => sign * v * SEED_STEP,
        _ => index as f64 * SEED_STEP,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/curve.rs"]
mod tests;
