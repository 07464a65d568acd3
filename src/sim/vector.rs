//! 2D vector value type
//!
//! Thin wrapper over `glam::DVec2`. Derived operations return new vectors;
//! `add_assign`/`sub_assign` mutate in place for accumulation loops.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A 2D vector with `f64` components
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2d(DVec2);

impl Vector2d {
    pub const ZERO: Self = Self(DVec2::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Underlying glam vector (for renderers that speak glam)
    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        self.0
    }

    #[inline]
    pub fn add(&self, other: Vector2d) -> Vector2d {
        Self(self.0 + other.0)
    }

    #[inline]
    pub fn subtract(&self, other: Vector2d) -> Vector2d {
        self.add(other.negate())
    }

    #[inline]
    pub fn scale_by(&self, scalar: f64) -> Vector2d {
        Self(self.0 * scalar)
    }

    #[inline]
    pub fn inner_product(&self, other: Vector2d) -> f64 {
        self.0.dot(other.0)
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.inner_product(*self)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction
    ///
    /// Fails with [`SimError::ZeroLengthVector`] when the norm is zero or not
    /// finite, instead of producing NaN components.
    pub fn normalize(&self) -> Result<Vector2d, SimError> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(SimError::ZeroLengthVector);
        }
        Ok(self.scale_by(1.0 / norm))
    }

    #[inline]
    pub fn negate(&self) -> Vector2d {
        Self(-self.0)
    }

    #[inline]
    pub fn distance_to(&self, other: Vector2d) -> f64 {
        self.subtract(other).norm()
    }

    /// In-place `self += other`
    #[inline]
    pub fn add_assign(&mut self, other: Vector2d) {
        self.0 += other.0;
    }

    /// In-place `self -= other`
    #[inline]
    pub fn sub_assign(&mut self, other: Vector2d) {
        self.0 -= other.0;
    }
}

impl From<DVec2> for Vector2d {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Vector2d> for DVec2 {
    fn from(v: Vector2d) -> Self {
        v.0
    }
}

impl Add for Vector2d {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vector2d::add(&self, rhs)
    }
}

impl Sub for Vector2d {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2d {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale_by(rhs)
    }
}

impl Neg for Vector2d {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl AddAssign for Vector2d {
    fn add_assign(&mut self, rhs: Self) {
        Vector2d::add_assign(self, rhs);
    }
}

impl SubAssign for Vector2d {
    fn sub_assign(&mut self, rhs: Self) {
        Vector2d::sub_assign(self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_arithmetic() {
        let a = Vector2d::new(3.0, 4.0);
        let b = Vector2d::new(1.0, -2.0);

        assert_eq!(a + b, Vector2d::new(4.0, 2.0));
        assert_eq!(a - b, Vector2d::new(2.0, 6.0));
        assert_eq!(a.subtract(b), a.add(b.negate()));
        assert_eq!(a * 2.0, Vector2d::new(6.0, 8.0));
        assert_eq!(-a, Vector2d::new(-3.0, -4.0));
        assert!((a.inner_product(b) - (-5.0)).abs() < 1e-12);
        assert!((a.magnitude_squared() - 25.0).abs() < 1e-12);
        assert!((a.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_in_place_accumulation() {
        let mut acc = Vector2d::ZERO;
        acc.add_assign(Vector2d::new(1.0, 2.0));
        acc += Vector2d::new(0.5, 0.5);
        acc.sub_assign(Vector2d::new(1.0, 0.0));
        acc -= Vector2d::new(0.0, 1.0);
        assert_eq!(acc, Vector2d::new(0.5, 1.5));
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert!(matches!(
            Vector2d::ZERO.normalize(),
            Err(SimError::ZeroLengthVector)
        ));
        assert!(Vector2d::new(f64::NAN, 1.0).normalize().is_err());
    }

    #[test]
    fn test_normalize_direction() {
        let n = Vector2d::new(0.0, -7.5).normalize().unwrap();
        assert!((n.x()).abs() < 1e-12);
        assert!((n.y() + 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn normalized_has_unit_norm(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
            prop_assume!(x.abs() > 1e-6 || y.abs() > 1e-6);
            let n = Vector2d::new(x, y).normalize().unwrap();
            prop_assert!((n.norm() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn distance_is_symmetric(
            ax in -1.0e4f64..1.0e4, ay in -1.0e4f64..1.0e4,
            bx in -1.0e4f64..1.0e4, by in -1.0e4f64..1.0e4
        ) {
            let a = Vector2d::new(ax, ay);
            let b = Vector2d::new(bx, by);
            prop_assert_eq!(a.distance_to(b), b.distance_to(a));
        }
    }
}
