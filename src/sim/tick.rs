//! Simulation tick
//!
//! One tick walks the bodies in slot order. For each live body it adds the
//! body's energy and momentum to the running totals, hands it to the render
//! hook, integrates it, then scans the whole world for contacts. Corrections
//! land immediately, so later bodies in the same tick see them.

use serde::{Deserialize, Serialize};

use super::body::{Body, Color, Movable};
use super::collision::{is_colliding, pair_mut, resolve_pair};
use super::overlap::correct_overlap;
use super::vector::Vector2d;
use super::world::{BodyId, Bounds, SystemTotals, World, initialize};
use crate::error::SimError;
use crate::settings::SimSettings;

/// A detected contact between two bodies during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    /// Body whose scan found the contact
    pub first: BodyId,
    pub second: BodyId,
    /// Fresh color shared by both bodies
    pub color: Color,
    /// Time of impact applied by overlap correction, if any
    pub time_of_impact: Option<f64>,
    /// Whether an elastic impulse was applied
    pub resolved: bool,
}

/// Aggregate results of one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick number (1-based)
    pub tick: u64,
    pub total_kinetic_energy: f64,
    pub total_momentum: Vector2d,
    pub contacts: Vec<ContactEvent>,
}

/// Advance the world by one tick
pub fn tick(world: &mut World, bounds: Bounds) -> TickReport {
    tick_with(world, bounds, |_, _| {})
}

/// Advance the world by one tick, calling `draw` for each live body before
/// it moves
pub fn tick_with<F>(world: &mut World, bounds: Bounds, mut draw: F) -> TickReport
where
    F: FnMut(BodyId, &Body),
{
    world.time_ticks += 1;
    let mut totals = SystemTotals::default();
    let mut contacts = Vec::new();
    let count = world.len();

    for i in 0..count {
        let body = &world.bodies()[i];
        if !body.exists {
            continue;
        }
        totals.accumulate(body);
        draw(BodyId(i), body);

        world.bodies_mut()[i].integrate(bounds);

        for j in 0..count {
            if i == j {
                continue;
            }
            let bodies = world.bodies();
            if !bodies[j].exists || !is_colliding(&bodies[i], &bodies[j]) {
                continue;
            }
            let event = handle_contact(world, BodyId(i), BodyId(j));
            apply_contact(world, &event);
            contacts.push(event);
        }
    }

    log::trace!(
        "Tick {}: energy={:.4} momentum=({:.4}, {:.4}) contacts={}",
        world.time_ticks,
        totals.kinetic_energy,
        totals.momentum.x(),
        totals.momentum.y(),
        contacts.len()
    );

    TickReport {
        tick: world.time_ticks,
        total_kinetic_energy: totals.kinetic_energy,
        total_momentum: totals.momentum,
        contacts,
    }
}

/// Correct overlap and resolve velocities for one detected pair
fn handle_contact(world: &mut World, first: BodyId, second: BodyId) -> ContactEvent {
    let (a, b) = pair_mut(world.bodies_mut(), first.0, second.0);

    let time_of_impact = correct_overlap(a, b);
    let resolved = match resolve_pair(a, b) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::warn!(
                "Skipping impulse for bodies {} and {}: {}",
                first.0,
                second.0,
                e
            );
            false
        }
    };

    let color = world.palette.next_color(&mut world.rng);
    log::debug!(
        "Contact {} <-> {} (toi={:?}, resolved={})",
        first.0,
        second.0,
        time_of_impact,
        resolved
    );

    ContactEvent {
        first,
        second,
        color,
        time_of_impact,
        resolved,
    }
}

/// Tag both bodies of a contact with the event's color
pub fn apply_contact(world: &mut World, event: &ContactEvent) {
    for id in [event.first, event.second] {
        if let Some(body) = world.get_mut(id) {
            body.color = event.color;
        }
    }
}

/// A world plus the settings it was built from
#[derive(Debug, Clone)]
pub struct Simulation {
    pub settings: SimSettings,
    pub world: World,
}

impl Simulation {
    /// Validate `settings` and build an initialized world seeded from them
    pub fn new(settings: SimSettings) -> Result<Self, SimError> {
        let mut world = World::new(settings.seed);
        let mut rng = world.rng.clone();
        initialize(&mut world, &settings, &mut rng)?;
        world.rng = rng;
        Ok(Self { settings, world })
    }

    pub fn bounds(&self) -> Bounds {
        self.settings.bounds
    }

    /// Advance one tick
    pub fn step(&mut self) -> TickReport {
        tick(&mut self.world, self.settings.bounds)
    }

    /// Advance `ticks` ticks, returning the last report
    pub fn run(&mut self, ticks: u64) -> TickReport {
        let mut report = TickReport::default();
        for _ in 0..ticks {
            report = self.step();
        }
        report
    }
}
