//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One fixed step per tick, driven from outside
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod overlap;
pub mod quadratic;
pub mod tick;
pub mod vector;
pub mod world;

pub use body::{Body, Collidable, Color, Drawable, MassPoint, Movable, Palette};
pub use collision::{colliding_pairs, is_colliding, resolve_pair};
pub use overlap::correct_overlap;
pub use quadratic::{QuadraticEquation, Roots};
pub use tick::{ContactEvent, Simulation, TickReport, apply_contact, tick, tick_with};
pub use vector::Vector2d;
pub use world::{BodyId, Bounds, SystemTotals, World, initialize};
