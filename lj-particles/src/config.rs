// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Simulation configuration
//!
//! All run-wide constants are bundled into one immutable
//! [`SimulationConfig`] handed to the world at construction. Use
//! [`SimulationConfig::builder`] to override individual fields; `build()`
//! validates the combination.

use crate::error::{Result, SimError};
use crate::particle::Color;
use crate::potential::LennardJones;

/// Rectangular simulation domain `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Domain width
    pub width: f64,
    /// Domain height
    pub height: f64,
}

impl Bounds {
    /// Create validated bounds
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] unless both extents are positive
    /// and finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(SimError::invalid(format!(
                "bounds must be positive and finite, got {} x {}",
                width, height
            )));
        }
        Ok(Bounds { width, height })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            width: 700.0,
            height: 700.0,
        }
    }
}

/// What to do with a particle whose speed exceeds the speed limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedLimitPolicy {
    /// Cap the speed at the limit
    #[default]
    Clamp,
    /// Replace the speed by `speed % (limit + 10)`
    ///
    /// Reproduces the legacy damping behaviour. Speeds between the limit and
    /// `limit + 10` pass through unchanged.
    Modulo,
}

impl SpeedLimitPolicy {
    /// Apply the policy to `speed`
    pub fn apply(self, speed: f64, limit: f64) -> f64 {
        // NaN passes through untouched so the finiteness check still sees it.
        if !(speed > limit) {
            return speed;
        }
        match self {
            SpeedLimitPolicy::Clamp => limit,
            SpeedLimitPolicy::Modulo => speed % (limit + 10.0),
        }
    }
}

/// Initial velocity assigned to randomly placed particles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InitialMotion {
    /// Zero velocity
    #[default]
    AtRest,
    /// Fixed speed with a uniformly random heading
    RandomHeading {
        /// Initial speed of every particle
        speed: f64,
    },
}

/// Immutable run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Domain extents
    pub bounds: Bounds,
    /// Interaction constants
    pub lj: LennardJones,
    /// Number of randomly placed particles
    pub particle_count: usize,
    /// Radius of every randomly placed particle
    pub radius: f64,
    /// Color of every randomly placed particle
    pub color: Color,
    /// Speed above which `speed_limit_policy` kicks in
    pub speed_limit: f64,
    /// How over-limit speeds are reduced
    pub speed_limit_policy: SpeedLimitPolicy,
    /// Scale applied to each position update
    pub speed_multiplier: f64,
    /// Velocity of randomly placed particles
    pub initial_motion: InitialMotion,
    /// Placement seed; `None` draws one from the thread RNG
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Start a builder from the default configuration
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder {
            config: SimulationConfig::default(),
        }
    }

    /// Check every field and their combination
    pub fn validate(&self) -> Result<()> {
        Bounds::new(self.bounds.width, self.bounds.height)?;
        LennardJones::new(self.lj.epsilon(), self.lj.sigma())?;

        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(SimError::invalid(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if 2.0 * self.radius >= self.bounds.width.min(self.bounds.height) {
            return Err(SimError::invalid(format!(
                "particle diameter {} does not fit in {} x {} bounds",
                2.0 * self.radius,
                self.bounds.width,
                self.bounds.height
            )));
        }
        // INFINITY is allowed and disables the limit.
        if !(self.speed_limit > 0.0) {
            return Err(SimError::invalid(format!(
                "speed_limit must be positive, got {}",
                self.speed_limit
            )));
        }
        if !(self.speed_multiplier > 0.0 && self.speed_multiplier.is_finite()) {
            return Err(SimError::invalid(format!(
                "speed_multiplier must be positive and finite, got {}",
                self.speed_multiplier
            )));
        }
        if let InitialMotion::RandomHeading { speed } = self.initial_motion {
            if !(speed >= 0.0 && speed.is_finite()) {
                return Err(SimError::invalid(format!(
                    "initial speed must be non-negative and finite, got {}",
                    speed
                )));
            }
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            bounds: Bounds::default(),
            lj: LennardJones::default(),
            particle_count: 2,
            radius: 10.0,
            color: Color::default(),
            speed_limit: 10.0,
            speed_limit_policy: SpeedLimitPolicy::default(),
            speed_multiplier: 1.0,
            initial_motion: InitialMotion::default(),
            seed: None,
        }
    }
}

/// Builder for [`SimulationConfig`]
///
/// # Examples
///
/// ```
/// use lj_particles::config::{SimulationConfig, SpeedLimitPolicy};
///
/// let config = SimulationConfig::builder()
///     .bounds(1200.0, 800.0)
///     .constants(0.65, 0.3166)
///     .particle_count(25)
///     .speed_limit(5.0, SpeedLimitPolicy::Modulo)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(config.particle_count, 25);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Domain extents
    pub fn bounds(mut self, width: f64, height: f64) -> Self {
        self.config.bounds = Bounds { width, height };
        self
    }

    /// LJ constants, validated in `build()`
    pub fn constants(mut self, epsilon: f64, sigma: f64) -> Self {
        self.config.lj = LennardJones { epsilon, sigma };
        self
    }

    /// Number of randomly placed particles
    pub fn particle_count(mut self, count: usize) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Particle radius
    pub fn radius(mut self, radius: f64) -> Self {
        self.config.radius = radius;
        self
    }

    /// Particle color
    pub fn color(mut self, color: Color) -> Self {
        self.config.color = color;
        self
    }

    /// Speed limit and the policy enforcing it
    pub fn speed_limit(mut self, limit: f64, policy: SpeedLimitPolicy) -> Self {
        self.config.speed_limit = limit;
        self.config.speed_limit_policy = policy;
        self
    }

    /// Remove the speed limit
    pub fn unlimited_speed(mut self) -> Self {
        self.config.speed_limit = f64::INFINITY;
        self
    }

    /// Position update multiplier
    pub fn speed_multiplier(mut self, multiplier: f64) -> Self {
        self.config.speed_multiplier = multiplier;
        self
    }

    /// Initial velocity policy
    pub fn initial_motion(mut self, motion: InitialMotion) -> Self {
        self.config.initial_motion = motion;
        self
    }

    /// Fixed placement seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<SimulationConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_radius() {
        let err = SimulationConfig::builder()
            .bounds(100.0, 40.0)
            .radius(20.0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn test_rejects_bad_constants() {
        assert!(SimulationConfig::builder().constants(-1.0, 1.0).build().is_err());
        assert!(SimulationConfig::builder().constants(1.0, 0.0).build().is_err());
    }

    #[test]
    fn test_rejects_bad_speed_settings() {
        assert!(SimulationConfig::builder()
            .speed_limit(0.0, SpeedLimitPolicy::Clamp)
            .build()
            .is_err());
        assert!(SimulationConfig::builder()
            .speed_limit(f64::NAN, SpeedLimitPolicy::Clamp)
            .build()
            .is_err());
        assert!(SimulationConfig::builder().speed_multiplier(0.0).build().is_err());
        assert!(SimulationConfig::builder()
            .initial_motion(InitialMotion::RandomHeading { speed: -1.0 })
            .build()
            .is_err());
    }

    #[test]
    fn test_unlimited_speed_is_valid() {
        let config = SimulationConfig::builder().unlimited_speed().build().unwrap();
        assert!(config.speed_limit.is_infinite());
    }

    #[test]
    fn test_speed_limit_policies() {
        assert_eq!(SpeedLimitPolicy::Clamp.apply(3.0, 5.0), 3.0);
        assert_eq!(SpeedLimitPolicy::Clamp.apply(12.0, 5.0), 5.0);
        assert_eq!(SpeedLimitPolicy::Modulo.apply(12.0, 5.0), 12.0);
        assert_eq!(SpeedLimitPolicy::Modulo.apply(17.0, 5.0), 2.0);
        assert_eq!(SpeedLimitPolicy::Clamp.apply(1e9, f64::INFINITY), 1e9);
    }
}
