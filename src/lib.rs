//! Elastic Pit - a box of bouncing circles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, collisions, world, tick)
//! - `settings`: Constructor parameters and presets
//! - `error`: Crate-wide error type
//!
//! Rendering, input and frame scheduling belong to the host; it calls
//! [`sim::tick`] once per frame and reads bodies and totals back.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::{Preset, SimSettings};

/// Simulation constants
pub mod consts {
    /// Default world size (pixels)
    pub const DEFAULT_WORLD_WIDTH: f64 = 1024.0;
    pub const DEFAULT_WORLD_HEIGHT: f64 = 768.0;

    /// Default population
    pub const DEFAULT_BODY_COUNT: usize = 40;
    pub const DEFAULT_RADIUS_MIN: f64 = 10.0;
    pub const DEFAULT_RADIUS_MAX: f64 = 30.0;

    /// Per-component velocity range (pixels per tick)
    pub const DEFAULT_VELOCITY_MIN: f64 = -2.0;
    pub const DEFAULT_VELOCITY_MAX: f64 = 2.0;

    /// `k` in `mass = k·π·r²`
    pub const DEFAULT_MASS_COEFFICIENT: f64 = 1.0;

    /// Tries per body before initialization gives up on placement
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

    /// Relative tolerance for the discriminant and floor for `|a|`
    pub const QUADRATIC_EPSILON: f64 = 1e-12;
}
