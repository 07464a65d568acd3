//! Circular bodies and their capability traits
//!
//! A single concrete [`Body`] implements the small capability contracts the
//! rest of the kernel is written against: [`MassPoint`] for mass-derived
//! quantities, [`Collidable`] for circle overlap tests, [`Movable`] for
//! per-tick integration and [`Drawable`] for the read-only render view.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::Vector2d;
use super::world::Bounds;

/// Opaque display tag, packed `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// CSS hex form, e.g. `#1a2b3c`
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// Source of fresh colors for new bodies and contact tagging
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Palette {
    /// Uniform random 24-bit color
    #[default]
    Random,
    /// Rotate through a fixed list (deterministic without touching the RNG)
    Cycle { colors: Vec<Color>, next: usize },
}

impl Palette {
    pub fn cycle(colors: Vec<Color>) -> Self {
        Palette::Cycle { colors, next: 0 }
    }

    pub fn next_color<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Color {
        match self {
            Palette::Random => Color(rng.random::<u32>() & 0x00ff_ffff),
            Palette::Cycle { colors, next } => {
                if colors.is_empty() {
                    return Color::default();
                }
                let color = colors[*next % colors.len()];
                *next = (*next + 1) % colors.len();
                color
            }
        }
    }
}

/// Mass-bearing entity
pub trait MassPoint {
    fn mass(&self) -> f64;
    fn velocity(&self) -> Vector2d;

    fn momentum(&self) -> Vector2d {
        self.velocity() * self.mass()
    }

    fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity().magnitude_squared()
    }
}

/// Circle that can take part in collision checks
pub trait Collidable {
    fn position(&self) -> Vector2d;
    fn radius(&self) -> f64;

    /// Strict overlap: centers closer than the sum of radii
    fn overlaps<O: Collidable + ?Sized>(&self, other: &O) -> bool {
        self.position().distance_to(other.position()) < self.radius() + other.radius()
    }

    /// Interpenetration depth (0 when apart or exactly touching)
    fn penetration<O: Collidable + ?Sized>(&self, other: &O) -> f64 {
        let gap = self.position().distance_to(other.position()) - (self.radius() + other.radius());
        (-gap).max(0.0)
    }
}

/// Entity advanced once per tick
pub trait Movable {
    fn integrate(&mut self, bounds: Bounds);
}

/// Read-only view consumed by renderers
pub trait Drawable: Collidable {
    fn color(&self) -> Color;
}

/// A circular body in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vector2d,
    pub vel: Vector2d,
    pub radius: f64,
    pub color: Color,
    /// `k` in `mass = k·π·r²`
    pub mass_coefficient: f64,
    /// Retired bodies keep their slot but no longer interact
    #[serde(default = "default_exists")]
    pub exists: bool,
}

fn default_exists() -> bool {
    true
}

impl Body {
    pub fn new(pos: Vector2d, vel: Vector2d, radius: f64, color: Color, mass_coefficient: f64) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            mass_coefficient,
            exists: true,
        }
    }

    /// Typed copy of the full body state, taken before two-sided resolution
    #[inline]
    pub fn snapshot(&self) -> Body {
        *self
    }

    /// Would the next step carry the leading edge past `[0, width] × [0, height]`?
    ///
    /// Returns per-axis flags.
    pub fn crosses_bounds(&self, bounds: Bounds) -> (bool, bool) {
        let next = self.pos + self.vel;
        let cross_x = next.x() + self.radius > bounds.width || next.x() - self.radius < 0.0;
        let cross_y = next.y() + self.radius > bounds.height || next.y() - self.radius < 0.0;
        (cross_x, cross_y)
    }
}

impl MassPoint for Body {
    #[inline]
    fn mass(&self) -> f64 {
        self.mass_coefficient * std::f64::consts::PI * self.radius * self.radius
    }

    #[inline]
    fn velocity(&self) -> Vector2d {
        self.vel
    }
}

impl Collidable for Body {
    #[inline]
    fn position(&self) -> Vector2d {
        self.pos
    }

    #[inline]
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Movable for Body {
    /// Reflect off the walls, then advance by one tick of velocity
    fn integrate(&mut self, bounds: Bounds) {
        let (cross_x, cross_y) = self.crosses_bounds(bounds);
        if cross_x {
            self.vel = Vector2d::new(-self.vel.x(), self.vel.y());
        }
        if cross_y {
            self.vel = Vector2d::new(self.vel.x(), -self.vel.y());
        }
        self.pos += self.vel;
    }
}

impl Drawable for Body {
    #[inline]
    fn color(&self) -> Color {
        self.color
    }
}
