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
//! World management
//!
//! The World owns the particle sequence and the run configuration, and
//! advances them one tick at a time. Particles are created once, either
//! placed at random from the configuration or supplied explicitly, and are
//! never added or removed afterwards.

use crate::config::{InitialMotion, SimulationConfig};
use crate::error::{Result, SimError};
use crate::math::{Point2, PolarVector};
use crate::particle::{Particle, ParticleSnapshot};
use crate::step::{self, Energy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// The simulation container
///
/// # Examples
///
/// ```
/// use lj_particles::{SimulationConfig, World};
///
/// let config = SimulationConfig::builder().particle_count(10).seed(42).build().unwrap();
/// let mut world = World::new(config).unwrap();
/// let energy = world.step().unwrap();
/// assert_eq!(world.tick(), 1);
/// assert!(energy.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct World {
    config: SimulationConfig,
    particles: Vec<Particle>,
    energy: Energy,
    tick: u64,
    poisoned_at: Option<u64>,
}

impl World {
    /// Create a world with `config.particle_count` randomly placed particles
    ///
    /// Centers are drawn uniformly from `[radius, bound - radius]` on each
    /// axis. Overlapping placements are not rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration fails
    /// validation.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let r = config.radius;

        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            let x = rng.random_range(r..=config.bounds.width - r);
            let y = rng.random_range(r..=config.bounds.height - r);
            let mut particle = Particle::with_color(Point2::new(x, y), r, config.color)?;

            if let InitialMotion::RandomHeading { speed } = config.initial_motion {
                let angle = rng.random_range(0.0..TAU);
                particle.set_velocity(PolarVector::new(angle, speed));
            }
            particles.push(particle);
        }

        log::info!(
            "created world with {} particles in {} x {} (seed {})",
            particles.len(),
            config.bounds.width,
            config.bounds.height,
            seed
        );

        Ok(World::assemble(config, particles))
    }

    /// Create a world from explicitly placed particles
    ///
    /// `config.particle_count`, `radius`, `color`, `initial_motion` and
    /// `seed` are ignored; the particles are used as given.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration fails
    /// validation, or a particle is non-finite or does not fit the domain.
    pub fn with_particles(config: SimulationConfig, particles: Vec<Particle>) -> Result<Self> {
        config.validate()?;

        for (index, particle) in particles.iter().enumerate() {
            if !particle.is_valid() {
                return Err(SimError::invalid(format!(
                    "particle {} has non-finite state",
                    index
                )));
            }
            if 2.0 * particle.radius() >= config.bounds.width.min(config.bounds.height) {
                return Err(SimError::invalid(format!(
                    "particle {} with radius {} does not fit the bounds",
                    index,
                    particle.radius()
                )));
            }
        }

        log::info!(
            "created world with {} explicit particles in {} x {}",
            particles.len(),
            config.bounds.width,
            config.bounds.height
        );

        Ok(World::assemble(config, particles))
    }

    fn assemble(config: SimulationConfig, particles: Vec<Particle>) -> Self {
        let (potential, coincident) = step::pair_potential(&particles, &config.lj);
        if coincident > 0 {
            // Coincident pairs never separate on their own.
            log::warn!(
                "{} coincident particle pair(s) at start; they exchange no force",
                coincident
            );
        }
        let energy = Energy {
            kinetic: particles.iter().map(Particle::kinetic_energy).sum(),
            potential,
        };
        World {
            config,
            particles,
            energy,
            tick: 0,
            poisoned_at: None,
        }
    }

    /// Advance the simulation by one tick and return the new energy
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonFinite`] if the tick left any particle or the
    /// energy non-finite. The world is then poisoned and every later call
    /// returns [`SimError::Poisoned`] without touching the state.
    pub fn step(&mut self) -> Result<Energy> {
        if let Some(tick) = self.poisoned_at {
            return Err(SimError::Poisoned { tick });
        }

        let energy = step::step(&mut self.particles, &self.config);
        self.tick += 1;
        self.energy = energy;

        let bad_particle = self.particles.iter().position(|p| !p.is_valid());
        if bad_particle.is_some() || !energy.is_valid() {
            log::warn!(
                "non-finite state at tick {} (particle {:?}, energy {:?})",
                self.tick,
                bad_particle,
                energy
            );
            self.poisoned_at = Some(self.tick);
            return Err(SimError::NonFinite {
                tick: self.tick,
                index: bad_particle,
            });
        }

        log::debug!(
            "tick {}: kinetic {:.6e}, potential {:.6e}, total {:.6e}",
            self.tick,
            energy.kinetic,
            energy.potential,
            energy.total()
        );
        Ok(energy)
    }

    /// Run `ticks` steps, stopping at the first error
    pub fn run(&mut self, ticks: u64) -> Result<Energy> {
        for _ in 0..ticks {
            self.step()?;
        }
        Ok(self.energy)
    }

    /// Particles in pair-enumeration order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Rendering snapshots of every particle
    pub fn snapshots(&self) -> Vec<ParticleSnapshot> {
        self.particles.iter().map(Particle::snapshot).collect()
    }

    /// Energy of the most recent tick
    ///
    /// Before the first tick this is the energy of the initial state: the
    /// pair potential of the starting positions plus the kinetic energy of
    /// the initial velocities.
    pub fn energy(&self) -> Energy {
        self.energy
    }

    /// Number of completed ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Run configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the world has no particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
