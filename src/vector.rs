/*
 * Vector Module
 *
 * This module defines the Vector3 type used for every position, velocity and
 * steering force in the simulation, plus the scalar helpers the flocking rules
 * need (angle between two headings, linear interpolation).
 *
 * Operators give the pure forms (`a + b`, `v * 2.0`), the compound-assignment
 * operators and the named methods `normalize`, `set_magnitude` and `limit`
 * give the in-place forms.
 */

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Magnitudes below this are treated as zero when normalizing.
pub const EPSILON: f32 = 1.0e-6;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Uniformly random vector with each component in `min..max` of that axis.
    pub fn random_in<R: Rng + ?Sized>(rng: &mut R, min: Vector3, max: Vector3) -> Self {
        Self::new(
            rng.gen_range(min.x..max.x),
            rng.gen_range(min.y..max.y),
            rng.gen_range(min.z..max.z),
        )
    }

    /// Random direction drawn from the unit cube and normalized.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut v = Self::random_in(rng, Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        v.normalize();
        v
    }

    #[inline]
    pub fn dot(self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    // Leaves near-zero vectors untouched instead of dividing by ~0.
    pub fn normalize(&mut self) {
        let m = self.magnitude();
        if m.abs() < EPSILON {
            return;
        }
        *self /= m;
    }

    pub fn set_magnitude(&mut self, magnitude: f32) {
        self.normalize();
        *self *= magnitude;
    }

    pub fn limit(&mut self, max: f32) {
        if self.magnitude() <= max {
            return;
        }
        self.set_magnitude(max);
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn with_magnitude(mut self, magnitude: f32) -> Self {
        self.set_magnitude(magnitude);
        self
    }

    pub fn limited(mut self, max: f32) -> Self {
        self.limit(max);
        self
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vector3, b: Vector3) -> f32 {
    (a - b).magnitude()
}

/// Angle in radians between two vectors, in `[0, π]`.
///
/// Computed as `atan2(|a × b|, a · b)` so that parallel vectors give exactly
/// `0.0` instead of the small residue `acos` leaves near 1. A zero-length
/// operand also gives `0.0`, and the result is never NaN for finite input.
pub fn angle_between(a: Vector3, b: Vector3) -> f32 {
    let theta = a.cross(b).magnitude().atan2(a.dot(b));
    if theta.is_nan() {
        return 0.0;
    }
    theta
}

/// Linear interpolation from `a` to `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Dividing by zero yields non-finite components; callers guard.
impl Div<f32> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1.0e-4
    }

    #[test]
    fn normalize_produces_unit_length() {
        let v = Vector3::new(3.0, 4.0, 12.0).normalized();
        assert!(close(v.magnitude(), 1.0));
    }

    #[test]
    fn normalize_is_noop_below_epsilon() {
        let tiny = Vector3::new(1.0e-8, -1.0e-8, 0.0);
        assert_eq!(tiny.normalized(), tiny);
        assert_eq!(Vector3::ZERO.normalized(), Vector3::ZERO);
    }

    #[test]
    fn set_magnitude_scales_direction() {
        let mut v = Vector3::new(0.0, 2.0, 0.0);
        v.set_magnitude(5.0);
        assert_eq!(v, Vector3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn limit_bounds_magnitude_and_keeps_short_vectors() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let dir = Vector3::random_unit(&mut rng);
            let k = rng.gen_range(0.0..50.0);
            let l = rng.gen_range(0.0..20.0);
            let scaled = dir * k;
            let limited = scaled.limited(l);
            assert!(limited.magnitude() <= l + 1.0e-4);
            if scaled.magnitude() <= l {
                assert_eq!(limited, scaled);
            }
        }
    }

    #[test]
    fn mutating_forms_match_pure_forms() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, -1.0);

        let mut m = a;
        m += b;
        assert_eq!(m, a + b);
        m -= b;
        assert_eq!(m, a);
        m *= 3.0;
        assert_eq!(m, a * 3.0);
        m /= 3.0;
        assert!(close(distance(m, a), 0.0));
        assert_eq!(-a, a * -1.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 6.0, 3.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn angle_between_parallel_is_zero() {
        assert_eq!(angle_between(Vector3::new(3.0, 4.0, 0.0), Vector3::new(3.0, 4.0, 0.0)), 0.0);

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let v = Vector3::random_in(&mut rng, Vector3::new(-9.0, -9.0, -9.0), Vector3::new(9.0, 9.0, 9.0));
            assert_eq!(angle_between(v, v), 0.0, "v = {:?}", v);
        }
    }

    #[test]
    fn angle_between_known_angles() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 2.0, 0.0);
        assert!(close(angle_between(x, y), std::f32::consts::FRAC_PI_2));
        assert!(close(angle_between(x, -x), std::f32::consts::PI));
    }

    #[test]
    fn angle_between_never_nan() {
        let zero = Vector3::ZERO;
        let v = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(angle_between(zero, v), 0.0);
        assert_eq!(angle_between(v, zero), 0.0);
        assert_eq!(angle_between(zero, zero), 0.0);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let a = Vector3::random_in(&mut rng, Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
            let b = a * rng.gen_range(-4.0..4.0);
            assert!(!angle_between(a, b).is_nan());
        }
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
