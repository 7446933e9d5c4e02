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
//! One simulation tick
//!
//! A tick runs two sequential passes over the particle sequence:
//!
//! 1. **Pair pass**: every unordered pair `(a, b)` with `a` before `b`
//!    receives equal and opposite LJ impulses along the line joining their
//!    centers. Velocities are updated in place, so later pairs see the
//!    impulses already applied by earlier ones. Pair potential energy is
//!    summed here.
//! 2. **Integration pass**: each particle is speed-limited, wrapped back into
//!    the domain if it escaped, advanced with explicit Euler, and reflected
//!    at the walls. Kinetic energy is summed from the final speeds.
//!
//! Particles have unit mass and the timestep is one tick, so a force is
//! added to the velocity unchanged. All pairs are evaluated directly,
//! O(n²) per tick.

use crate::config::{Bounds, SimulationConfig};
use crate::math::{angle_between, distance};
use crate::particle::Particle;
use crate::potential::{LennardJones, MIN_SEPARATION};
use std::f64::consts::PI;

/// Aggregate energy of one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Energy {
    /// Sum of 0.5 * speed² over all particles
    pub kinetic: f64,
    /// Sum of the LJ potential over all pairs
    pub potential: f64,
}

impl Energy {
    /// Kinetic plus potential energy
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }

    /// Check if both terms are finite
    pub fn is_valid(&self) -> bool {
        self.kinetic.is_finite() && self.potential.is_finite()
    }
}

/// Apply LJ impulses to every pair and return the summed potential energy
///
/// Returns `(potential, coincident_pairs)`, where `coincident_pairs`
/// counts pairs closer than [`MIN_SEPARATION`]; those exchange no impulse.
pub fn apply_pair_forces(particles: &mut [Particle], lj: &LennardJones) -> (f64, usize) {
    let mut potential = 0.0;
    let mut coincident = 0;

    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];

        for b in tail.iter_mut() {
            let r = distance(a.position(), b.position());
            if r < MIN_SEPARATION {
                coincident += 1;
                continue;
            }

            let f = lj.force(r);
            let theta = angle_between(a.position(), b.position());

            // theta points from a to b; a repulsive (positive) force pushes
            // a away from b and b away from a.
            a.apply_impulse(theta + PI, f);
            b.apply_impulse(theta, f);

            potential += lj.potential(r);
        }
    }

    (potential, coincident)
}

/// Sum the pair potential without touching any velocity
///
/// Returns `(potential, coincident_pairs)` with the same pair rules as
/// [`apply_pair_forces`].
pub fn pair_potential(particles: &[Particle], lj: &LennardJones) -> (f64, usize) {
    let mut potential = 0.0;
    let mut coincident = 0;

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let r = distance(a.position(), b.position());
            if r < MIN_SEPARATION {
                coincident += 1;
            } else {
                potential += lj.potential(r);
            }
        }
    }

    (potential, coincident)
}

/// Speed-limit, wrap, advance, and reflect one particle
pub fn integrate_particle(particle: &mut Particle, config: &SimulationConfig) {
    let limited = config
        .speed_limit_policy
        .apply(particle.speed(), config.speed_limit);
    particle.set_speed(limited);

    wrap_into(particle, &config.bounds);
    particle.advance(config.speed_multiplier);
    particle.bounce(&config.bounds);
}

/// Fold a runaway position back into the domain modulo its extents
fn wrap_into(particle: &mut Particle, bounds: &Bounds) {
    let mut pos = particle.position();
    if pos.x < 0.0 || pos.x > bounds.width {
        pos.x = pos.x.rem_euclid(bounds.width);
    }
    if pos.y < 0.0 || pos.y > bounds.height {
        pos.y = pos.y.rem_euclid(bounds.height);
    }
    particle.set_position(pos);
}

/// Run one full tick over `particles`
pub fn step(particles: &mut [Particle], config: &SimulationConfig) -> Energy {
    let (potential, coincident) = apply_pair_forces(particles, &config.lj);
    if coincident > 0 {
        log::debug!(
            "{} coincident particle pair(s) closer than {:e}; no force applied",
            coincident,
            MIN_SEPARATION
        );
    }

    let mut kinetic = 0.0;
    for particle in particles.iter_mut() {
        integrate_particle(particle, config);
        kinetic += particle.kinetic_energy();
    }

    Energy { kinetic, potential }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpeedLimitPolicy;
    use crate::math::{Point2, PolarVector};
    use std::f64::consts::FRAC_PI_2;

    fn pair(ax: f64, bx: f64) -> Vec<Particle> {
        vec![
            Particle::new(Point2::new(ax, 350.0), 10.0).unwrap(),
            Particle::new(Point2::new(bx, 350.0), 10.0).unwrap(),
        ]
    }

    #[test]
    fn test_repulsive_pair_moves_apart() {
        let lj = LennardJones::default();
        let mut particles = pair(300.0, 400.0);
        let (potential, coincident) = apply_pair_forces(&mut particles, &lj);

        assert_eq!(coincident, 0);
        assert!((potential - lj.potential(100.0)).abs() < 1e-12);

        let f = lj.force(100.0);
        assert!(f > 0.0);
        assert!((particles[0].speed() - f).abs() < 1e-9);
        assert!((particles[1].speed() - f).abs() < 1e-9);
        // a heads toward -x, b toward +x.
        assert!((particles[0].angle().sin() + 1.0).abs() < 1e-12);
        assert!((particles[1].angle() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_attractive_pair_moves_together() {
        let lj = LennardJones::default();
        let mut particles = pair(200.0, 550.0);
        apply_pair_forces(&mut particles, &lj);
        assert!(lj.force(350.0) < 0.0);
        assert!(particles[0].angle().sin() > 0.999);
        assert!(particles[1].angle().sin() < -0.999);
    }

    #[test]
    fn test_momentum_is_balanced() {
        let lj = LennardJones::default();
        let mut particles = vec![
            Particle::new(Point2::new(100.0, 120.0), 5.0).unwrap(),
            Particle::new(Point2::new(260.0, 300.0), 5.0).unwrap(),
            Particle::new(Point2::new(400.0, 150.0), 5.0).unwrap(),
        ];
        apply_pair_forces(&mut particles, &lj);

        let (mut px, mut py) = (0.0, 0.0);
        for p in &particles {
            px += p.angle().sin() * p.speed();
            py += p.angle().cos() * p.speed();
        }
        assert!(px.abs() < 1e-9, "net x momentum {}", px);
        assert!(py.abs() < 1e-9, "net y momentum {}", py);
    }

    #[test]
    fn test_coincident_pair_is_skipped() {
        let lj = LennardJones::default();
        let mut particles = pair(300.0, 300.0);
        let (potential, coincident) = apply_pair_forces(&mut particles, &lj);
        assert_eq!(coincident, 1);
        assert_eq!(potential, 0.0);
        assert_eq!(particles[0].speed(), 0.0);
        assert_eq!(particles[1].speed(), 0.0);
    }

    #[test]
    fn test_pair_potential_matches_force_pass() {
        let lj = LennardJones::default();
        let mut particles = vec![
            Particle::new(Point2::new(100.0, 120.0), 5.0).unwrap(),
            Particle::new(Point2::new(260.0, 300.0), 5.0).unwrap(),
            Particle::new(Point2::new(260.0, 300.0), 5.0).unwrap(),
        ];
        let before = particles.clone();
        let (potential, coincident) = pair_potential(&particles, &lj);
        assert_eq!(coincident, 1);

        assert_eq!(apply_pair_forces(&mut particles, &lj), (potential, coincident));
        assert_ne!(particles, before);
    }

    #[test]
    fn test_wrap_folds_runaway_positions() {
        let bounds = Bounds::new(700.0, 500.0).unwrap();
        let mut p = Particle::new(Point2::new(1500.0, -120.0), 10.0).unwrap();
        wrap_into(&mut p, &bounds);
        assert!((p.position().x - 100.0).abs() < 1e-9);
        assert!((p.position().y - 380.0).abs() < 1e-9);
    }

    #[test]
    fn test_integrate_applies_speed_limit() {
        let config = SimulationConfig::builder()
            .speed_limit(2.0, SpeedLimitPolicy::Clamp)
            .build()
            .unwrap();
        let mut p = Particle::new(Point2::new(350.0, 350.0), 10.0)
            .unwrap()
            .moving(PolarVector::new(FRAC_PI_2, 5.0));
        integrate_particle(&mut p, &config);
        assert_eq!(p.speed(), 2.0);
        assert!((p.position().x - 352.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_energy_of_empty_and_single() {
        let config = SimulationConfig::default();
        let mut none: Vec<Particle> = Vec::new();
        assert_eq!(step(&mut none, &config), Energy::default());

        let mut one = vec![Particle::new(Point2::new(350.0, 350.0), 10.0)
            .unwrap()
            .moving(PolarVector::new(0.0, 2.0))];
        let energy = step(&mut one, &config);
        assert_eq!(energy.potential, 0.0);
        assert!((energy.kinetic - 2.0).abs() < 1e-12);
    }
}
