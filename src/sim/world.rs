//! World arena and randomized initialization
//!
//! Bodies live in a `Vec` indexed by [`BodyId`]. Slots are never reused or
//! reordered, so the pairwise scan in the tick always runs in the same order.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, Collidable, MassPoint, Palette};
use super::vector::Vector2d;
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::error::SimError;
use crate::settings::SimSettings;

/// Axis-aligned world rectangle `[0, width] × [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Is the whole circle inside the rectangle?
    pub fn contains_circle(&self, center: Vector2d, radius: f64) -> bool {
        center.x() - radius >= 0.0
            && center.x() + radius <= self.width
            && center.y() - radius >= 0.0
            && center.y() + radius <= self.height
    }
}

/// Stable index of a body in its world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub usize);

/// System-wide physical totals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemTotals {
    pub kinetic_energy: f64,
    pub momentum: Vector2d,
}

impl SystemTotals {
    /// Add one body's contribution
    pub fn accumulate<M: MassPoint + ?Sized>(&mut self, body: &M) {
        self.kinetic_energy += body.kinetic_energy();
        self.momentum.add_assign(body.momentum());
    }
}

/// Owns the body collection plus the random source used for colors
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    pub rng: Pcg32,
    pub palette: Palette,
    /// Ticks advanced so far
    pub time_ticks: u64,
}

impl World {
    /// Empty world with a seeded generator
    pub fn new(seed: u64) -> Self {
        Self {
            bodies: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            palette: Palette::default(),
            time_ticks: 0,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Append a body, returning its stable id
    pub fn spawn(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Mark a body non-existent; its slot stays so ids remain valid
    pub fn retire(&mut self, id: BodyId) -> bool {
        match self.bodies.get_mut(id.0) {
            Some(body) if body.exists => {
                body.exists = false;
                log::debug!("Retired body {}", id.0);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    /// All slots, retired ones included, in iteration order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Live bodies with their ids
    pub fn live(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.exists)
            .map(|(i, b)| (BodyId(i), b))
    }

    /// Number of slots (live and retired)
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Kinetic energy and momentum of all live bodies, without stepping
    pub fn system_totals(&self) -> SystemTotals {
        let mut totals = SystemTotals::default();
        for (_, body) in self.live() {
            totals.accumulate(body);
        }
        totals
    }

    /// Worst interpenetration depth between any two live bodies
    pub fn max_overlap(&self) -> f64 {
        let mut worst: f64 = 0.0;
        for (i, a) in self.live() {
            for (j, b) in self.live() {
                if j <= i {
                    continue;
                }
                worst = worst.max(a.penetration(b));
            }
        }
        worst
    }
}

/// Populate `world` with `settings.body_count` non-overlapping bodies
///
/// Radii, velocity components and positions are drawn from `rng`; colors
/// from the world's palette. Every body lies fully inside `settings.bounds`.
/// Existing bodies are kept and new ones avoid them too.
pub fn initialize<R: Rng + ?Sized>(
    world: &mut World,
    settings: &SimSettings,
    rng: &mut R,
) -> Result<(), SimError> {
    settings.validate()?;

    let (r_min, r_max) = settings.radius_range;
    let (v_min, v_max) = settings.velocity_range;
    let bounds = settings.bounds;

    for index in 0..settings.body_count {
        let radius = rng.random_range(r_min..=r_max);
        let vel = Vector2d::new(
            rng.random_range(v_min..=v_max),
            rng.random_range(v_min..=v_max),
        );

        let mut placed = None;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let pos = Vector2d::new(
                rng.random_range(radius..=bounds.width - radius),
                rng.random_range(radius..=bounds.height - radius),
            );
            let clear = world
                .live()
                .all(|(_, other)| pos.distance_to(other.pos) >= radius + other.radius);
            if clear {
                placed = Some(pos);
                break;
            }
        }

        let Some(pos) = placed else {
            return Err(SimError::Placement {
                index,
                attempts: MAX_PLACEMENT_ATTEMPTS,
            });
        };

        let color = world.palette.next_color(rng);
        world.spawn(Body::new(pos, vel, radius, color, settings.mass_coefficient));
    }

    log::info!(
        "Initialized world: {} bodies in {}x{}",
        world.len(),
        bounds.width,
        bounds.height
    );
    Ok(())
}
