use derive_more::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

/// Degrees in a full turn. Also the slot width of a wheel with no items.
pub const FULL_TURN: f64 = 360.0;

/// Floor below which lengths and spans are treated as zero.
pub const EPSILON: f64 = 1.0e-9;

/// A 2-D vector in y-up space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Add, Sub, Mul, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector for a clockwise angle measured from "up".
    pub fn from_degrees(angle: f64) -> Self {
        let rad = angle.to_radians();
        Self::new(rad.sin(), rad.cos())
    }

    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_degenerate(self) -> bool {
        let len = self.length_squared();
        len.is_nan() || len <= EPSILON
    }

    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        (len > EPSILON).then(|| Self::new(self.x / len, self.y / len))
    }

    /// Component-wise division, `None` if either divisor component is near zero.
    pub fn div_components(self, divisor: Self) -> Option<Self> {
        (divisor.x.abs() > EPSILON && divisor.y.abs() > EPSILON)
            .then(|| Self::new(self.x / divisor.x, self.y / divisor.y))
    }
}

/// Wraps `value` into `[min, max)`. A span that is not strictly positive, or a
/// non-finite value, collapses to `min`.
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.is_nan() || span <= EPSILON || !value.is_finite() {
        return min;
    }
    let wrapped = (value - min).rem_euclid(span) + min;
    // rem_euclid can round up to the span for tiny negative inputs
    if wrapped >= max { min } else { wrapped }
}

pub fn wrap_degrees(angle: f64) -> f64 {
    wrap(angle, 0.0, FULL_TURN)
}

/// Signed angle in degrees from `from` to `to`, counterclockwise positive,
/// in `[-180, 180]`.
pub fn signed_angle(from: Vec2, to: Vec2) -> f64 {
    let cross = from.x * to.y - from.y * to.x;
    let dot = from.x * to.x + from.y * to.y;
    cross.atan2(dot).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1.0e-9
    }

    #[test]
    fn wrap_stays_in_range_and_is_idempotent() {
        let samples = [
            -1080.5, -360.0, -359.9, -90.0, -1.0e-15, 0.0, 45.0, 359.999, 360.0, 725.25, 1.0e7,
        ];
        for a in samples {
            let w = wrap_degrees(a);
            assert!((0.0..FULL_TURN).contains(&w), "{a} wrapped to {w}");
            assert_eq!(wrap_degrees(w), w);
        }
        assert!(approx(wrap_degrees(-90.0), 270.0));
        assert!(approx(wrap_degrees(725.25), 5.25));
    }

    #[test]
    fn wrap_degenerate_range_returns_min() {
        assert_eq!(wrap(42.0, 10.0, 10.0), 10.0);
        assert_eq!(wrap(42.0, 10.0, 5.0), 10.0);
        assert_eq!(wrap(f64::NAN, 0.0, 360.0), 0.0);
        assert_eq!(wrap(f64::INFINITY, 0.0, 360.0), 0.0);
        assert_eq!(wrap(42.0, 0.0, f64::NAN), 0.0);
        assert!(Vec2::new(f64::NAN, 1.0).is_degenerate());
        assert!(!Vec2::UP.is_degenerate());
    }

    #[test]
    fn wrap_arbitrary_range() {
        assert!(approx(wrap(-0.5, -1.0, 1.0), -0.5));
        assert!(approx(wrap(1.5, -1.0, 1.0), -0.5));
        assert!(approx(wrap(1.0, -1.0, 1.0), -1.0));
    }

    #[test]
    fn signed_angle_is_counterclockwise_positive() {
        assert!(approx(signed_angle(Vec2::UP, Vec2::new(-1.0, 0.0)), 90.0));
        assert!(approx(signed_angle(Vec2::UP, Vec2::new(1.0, 0.0)), -90.0));
        assert!(approx(signed_angle(Vec2::UP, Vec2::UP), 0.0));
        assert!(approx(signed_angle(Vec2::UP, Vec2::new(0.0, -1.0)).abs(), 180.0));
    }

    #[test]
    fn from_degrees_measures_clockwise_from_up() {
        let right = Vec2::from_degrees(90.0);
        assert!(approx(right.x, 1.0) && approx(right.y, 0.0));
        let up = Vec2::from_degrees(0.0);
        assert!(approx(up.x, 0.0) && approx(up.y, 1.0));
    }

    #[test]
    fn normalization_guards_zero_length() {
        assert_eq!(Vec2::ZERO.normalized(), None);
        let n = Vec2::new(3.0, 4.0).normalized().unwrap();
        assert!(approx(n.length(), 1.0));
        assert_eq!(Vec2::new(1.0, 1.0).div_components(Vec2::new(0.0, 2.0)), None);
        assert_eq!(
            Vec2::new(1.0, 1.0).div_components(Vec2::new(2.0, 4.0)),
            Some(Vec2::new(0.5, 0.25))
        );
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }
}
