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
//! # LJ Particles
//!
//! A 2D simulation of point particles interacting through the
//! Lennard-Jones potential, with reflecting walls and per-tick energy
//! bookkeeping. Rendering and event handling are left to the host through
//! the [`host::Renderer`] and [`host::EventSource`] traits.
//!
//! ## Features
//!
//! - **Polar velocities**: headings and speeds composed with compass-convention
//!   vector addition
//! - **Lennard-Jones forces**: equal and opposite impulses for every pair,
//!   with coincident pairs made inert instead of singular
//! - **Reflecting walls**: repeated reflection keeps every particle inside
//!   the domain, however far it overshot
//! - **Fault detection**: NaN/infinite state is reported as an error and
//!   stops the world
//!
//! ## Example
//!
//! ```rust
//! use lj_particles::{SimulationConfig, World};
//! use lj_particles::host::{run, EnergyLog, TickBudget};
//!
//! let config = SimulationConfig::builder()
//!     .particle_count(20)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let mut world = World::new(config).unwrap();
//!
//! let mut energy = EnergyLog::new();
//! let summary = run(&mut world, &mut energy, &mut TickBudget::new(100)).unwrap();
//! assert_eq!(summary.ticks, 100);
//! ```

#![warn(missing_docs)]

/// Run configuration
pub mod config;

/// Error types
pub mod error;

/// Host loop and presentation seams
pub mod host;

/// Polar vector arithmetic
pub mod math;

/// Particle state and wall reflection
pub mod particle;

/// Lennard-Jones potential and force
pub mod potential;

/// Single tick orchestration
pub mod step;

/// Simulation world
pub mod world;

pub use config::{Bounds, InitialMotion, SimulationConfig, SpeedLimitPolicy};
pub use error::{Result, SimError};
pub use particle::{Color, Particle, ParticleSnapshot};
pub use potential::LennardJones;
pub use step::Energy;
pub use world::World;
