//! Closed-form real-root solver for `a·x² + b·x + c = 0`
//!
//! Used by the overlap corrector to find the exact time of impact.

use crate::consts::QUADRATIC_EPSILON;
use crate::error::SimError;

/// Coefficients of a quadratic equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Real roots of a quadratic: zero, one or two values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roots {
    values: [f64; 2],
    len: usize,
}

impl Roots {
    const NONE: Self = Self {
        values: [0.0; 2],
        len: 0,
    };

    fn one(x: f64) -> Self {
        Self {
            values: [x, 0.0],
            len: 1,
        }
    }

    fn two(plus: f64, minus: f64) -> Self {
        Self {
            values: [plus, minus],
            len: 2,
        }
    }

    /// Roots in solver order: the `+` branch first, then the `−` branch
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }
}

impl QuadraticEquation {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Discriminant `b² − 4ac`
    #[inline]
    pub fn delta(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// True when `a` is too close to zero for the closed form
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a.abs() < QUADRATIC_EPSILON
    }

    /// Number of distinct real roots (0, 1 or 2)
    ///
    /// A discriminant within a tolerance scaled to `b²` and `4ac` counts as
    /// zero, so near-tangent contacts report a single double root.
    pub fn number_of_real_roots(&self) -> usize {
        let delta = self.delta();
        let scale = (self.b * self.b).max((4.0 * self.a * self.c).abs());
        if delta.abs() <= QUADRATIC_EPSILON * scale {
            1
        } else if delta < 0.0 {
            0
        } else {
            2
        }
    }

    /// Real roots of the equation
    ///
    /// Returns [`SimError::DegenerateQuadratic`] when `a` is (near) zero.
    pub fn roots(&self) -> Result<Roots, SimError> {
        if self.is_degenerate() {
            return Err(SimError::DegenerateQuadratic { a: self.a });
        }

        let first_term = -self.b / (2.0 * self.a);
        let roots = match self.number_of_real_roots() {
            0 => Roots::NONE,
            1 => Roots::one(first_term),
            _ => {
                let last_term = self.delta().sqrt() / (2.0 * self.a);
                Roots::two(first_term + last_term, first_term - last_term)
            }
        };
        Ok(roots)
    }
}
