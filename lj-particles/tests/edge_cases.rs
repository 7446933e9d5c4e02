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
//! Edge case tests
//!
//! Degenerate geometry, extreme constants, and rejected configurations.

use lj_particles::math::{Point2, PolarVector};
use lj_particles::{Particle, SimError, SimulationConfig, SpeedLimitPolicy, World};

#[test]
fn test_coincident_particles_do_not_produce_nan() {
    let config = SimulationConfig::builder().build().unwrap();
    let particles = vec![
        Particle::new(Point2::new(200.0, 200.0), 10.0).unwrap(),
        Particle::new(Point2::new(200.0, 200.0), 10.0).unwrap(),
        Particle::new(Point2::new(500.0, 450.0), 10.0).unwrap(),
    ];
    let mut world = World::with_particles(config, particles).unwrap();

    for _ in 0..10 {
        let energy = world.step().unwrap();
        assert!(energy.is_valid());
    }
    assert!(world.particles().iter().all(Particle::is_valid));
}

#[test]
fn test_coincident_pair_alone_stays_at_rest() {
    let config = SimulationConfig::builder().build().unwrap();
    let particles = vec![
        Particle::new(Point2::new(300.0, 300.0), 10.0).unwrap(),
        Particle::new(Point2::new(300.0, 300.0), 10.0).unwrap(),
    ];
    let mut world = World::with_particles(config, particles).unwrap();
    let energy = world.step().unwrap();

    assert_eq!(energy.kinetic, 0.0);
    assert_eq!(energy.potential, 0.0);
    for p in world.particles() {
        assert_eq!(p.position(), Point2::new(300.0, 300.0));
    }
}

#[test]
fn test_overflowing_force_is_reported_as_non_finite() {
    let config = SimulationConfig::builder()
        .constants(1e300, 250.0)
        .unlimited_speed()
        .build()
        .unwrap();
    let particles = vec![
        Particle::new(Point2::new(100.0, 100.0), 10.0).unwrap(),
        Particle::new(Point2::new(100.001, 100.0), 10.0).unwrap(),
    ];
    let mut world = World::with_particles(config, particles).unwrap();

    match world.step() {
        Err(SimError::NonFinite { tick, index }) => {
            assert_eq!(tick, 1);
            assert!(index.is_some());
        }
        other => panic!("expected NonFinite, got {:?}", other),
    }

    // The world refuses to advance any further.
    assert_eq!(world.step(), Err(SimError::Poisoned { tick: 1 }));
    assert_eq!(world.tick(), 1);
}

#[test]
fn test_clamp_tames_overflowing_force() {
    // Same setup, but a finite speed limit caps the infinite impulse.
    let config = SimulationConfig::builder()
        .constants(1e300, 250.0)
        .speed_limit(10.0, SpeedLimitPolicy::Clamp)
        .build()
        .unwrap();
    let particles = vec![
        Particle::new(Point2::new(100.0, 100.0), 10.0).unwrap(),
        Particle::new(Point2::new(100.001, 100.0), 10.0).unwrap(),
    ];
    let mut world = World::with_particles(config, particles).unwrap();

    // Positions stay finite, but the pair potential itself overflows.
    let err = world.step().unwrap_err();
    assert_eq!(err, SimError::NonFinite { tick: 1, index: None });
}

#[test]
fn test_modulo_policy_wraps_speed() {
    let config = SimulationConfig::builder()
        .speed_limit(5.0, SpeedLimitPolicy::Modulo)
        .build()
        .unwrap();
    let particle = Particle::new(Point2::new(350.0, 350.0), 10.0)
        .unwrap()
        .moving(PolarVector::new(std::f64::consts::FRAC_PI_2, 17.0));
    let mut world = World::with_particles(config, vec![particle]).unwrap();

    world.step().unwrap();
    let p = &world.particles()[0];
    assert!((p.speed() - 2.0).abs() < 1e-12);
    assert!((p.position().x - 352.0).abs() < 1e-9);
}

#[test]
fn test_runaway_position_is_wrapped_before_moving() {
    let config = SimulationConfig::builder().build().unwrap();
    let mut particle = Particle::new(Point2::new(350.0, 350.0), 10.0).unwrap();
    particle.set_position(Point2::new(1e12, -3.5e9));
    let mut world = World::with_particles(config, vec![particle]).unwrap();

    world.step().unwrap();
    let bounds = world.config().bounds;
    assert!(world.particles()[0].is_inside(&bounds));
}

#[test]
fn test_invalid_configs_are_rejected() {
    let bad = [
        SimulationConfig::builder().bounds(0.0, 100.0),
        SimulationConfig::builder().bounds(100.0, f64::INFINITY),
        SimulationConfig::builder().constants(0.0, 1.0),
        SimulationConfig::builder().radius(-1.0),
        SimulationConfig::builder().bounds(30.0, 30.0).radius(15.0),
        SimulationConfig::builder().speed_multiplier(f64::NAN),
    ];
    for builder in bad {
        match builder.build() {
            Err(SimError::InvalidConfig(_)) => {}
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }
}

#[test]
fn test_world_new_validates_hand_built_config() {
    let mut config = SimulationConfig::default();
    config.radius = 400.0;
    assert!(matches!(World::new(config), Err(SimError::InvalidConfig(_))));
}

#[test]
fn test_non_finite_particle_rejected_at_construction() {
    let config = SimulationConfig::default();
    let mut particle = Particle::new(Point2::new(10.0, 10.0), 5.0).unwrap();
    particle.set_velocity(PolarVector::new(f64::NAN, 1.0));
    assert!(World::with_particles(config, vec![particle]).is_err());
}

#[test]
fn test_close_pair_without_speed_limit_stays_total() {
    let config = SimulationConfig::builder()
        .bounds(700.0, 700.0)
        .constants(0.001, 250.0)
        .unlimited_speed()
        .build()
        .unwrap();
    let particles = vec![
        Particle::new(Point2::new(300.0, 350.0), 10.0).unwrap(),
        Particle::new(Point2::new(301.0, 350.0), 10.0).unwrap(),
    ];
    let mut world = World::with_particles(config, particles).unwrap();
    let bounds = world.config().bounds;

    for _ in 0..5 {
        match world.step() {
            Ok(energy) => {
                assert!(energy.is_valid());
                assert!(world.particles().iter().all(|p| p.is_inside(&bounds)));
            }
            Err(SimError::NonFinite { .. }) => break,
            Err(other) => panic!("unexpected error {:?}", other),
        }
    }
}
