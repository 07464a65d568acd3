//! Simulation settings
//!
//! Plain constructor parameters with serde support so a host can keep them
//! in whatever store it likes (JSON helpers provided).

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::sim::Bounds;

/// Crowding presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    Sparse,
    #[default]
    Standard,
    Crowded,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Sparse => "Sparse",
            Preset::Standard => "Standard",
            Preset::Crowded => "Crowded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sparse" => Some(Preset::Sparse),
            "standard" | "default" => Some(Preset::Standard),
            "crowded" => Some(Preset::Crowded),
            _ => None,
        }
    }

    /// Body count for this preset
    pub fn body_count(&self) -> usize {
        match self {
            Preset::Sparse => 10,
            Preset::Standard => DEFAULT_BODY_COUNT,
            Preset::Crowded => 120,
        }
    }

    /// Radius range for this preset
    pub fn radius_range(&self) -> (f64, f64) {
        match self {
            Preset::Sparse => (20.0, 40.0),
            Preset::Standard => (DEFAULT_RADIUS_MIN, DEFAULT_RADIUS_MAX),
            Preset::Crowded => (6.0, 18.0),
        }
    }
}

/// Everything needed to build and initialize a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSettings {
    /// Bodies created at initialization
    pub body_count: usize,
    /// Inclusive radius range `[min, max]`
    pub radius_range: (f64, f64),
    /// Inclusive range for each velocity component
    pub velocity_range: (f64, f64),
    /// `k` in `mass = k·π·r²`
    pub mass_coefficient: f64,
    pub bounds: Bounds,
    /// Seed for the world RNG
    #[serde(default)]
    pub seed: u64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            radius_range: (DEFAULT_RADIUS_MIN, DEFAULT_RADIUS_MAX),
            velocity_range: (DEFAULT_VELOCITY_MIN, DEFAULT_VELOCITY_MAX),
            mass_coefficient: DEFAULT_MASS_COEFFICIENT,
            bounds: Bounds::new(DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT),
            seed: 0,
        }
    }
}

impl SimSettings {
    /// Settings from a crowding preset (other fields at defaults)
    pub fn from_preset(preset: Preset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        self.body_count = preset.body_count();
        self.radius_range = preset.radius_range();
    }

    /// Reject configurations the kernel cannot run
    pub fn validate(&self) -> Result<(), SimError> {
        let (r_min, r_max) = self.radius_range;
        let (v_min, v_max) = self.velocity_range;

        if !(r_min.is_finite() && r_max.is_finite()) || r_min <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "radius range must be positive and finite, got [{}, {}]",
                r_min, r_max
            )));
        }
        if r_min > r_max {
            return Err(SimError::InvalidConfig(format!(
                "radius range is inverted: [{}, {}]",
                r_min, r_max
            )));
        }
        if !(v_min.is_finite() && v_max.is_finite()) || v_min > v_max {
            return Err(SimError::InvalidConfig(format!(
                "velocity range must be finite and ordered, got [{}, {}]",
                v_min, v_max
            )));
        }
        if !self.mass_coefficient.is_finite() || self.mass_coefficient <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "mass coefficient must be positive, got {}",
                self.mass_coefficient
            )));
        }
        let Bounds { width, height } = self.bounds;
        if !(width.is_finite() && height.is_finite()) || width < 2.0 * r_max || height < 2.0 * r_max {
            return Err(SimError::InvalidConfig(format!(
                "world {}x{} cannot hold a body of radius {}",
                width, height, r_max
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: SimSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
