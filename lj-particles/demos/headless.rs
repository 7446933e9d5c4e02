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
//! Headless Lennard-Jones Simulation Example
//!
//! Runs a randomly seeded world through the host loop without a window.
//! A console renderer prints the energy balance periodically, and a tick
//! budget plays the part of the window's quit event.
//!
//! # Running
//!
//! ```bash
//! # 25 particles for 2000 ticks
//! cargo run --example headless --release
//!
//! # Custom parameters
//! cargo run --example headless --release -- --particles 60 --ticks 5000 --seed 9
//!
//! # Legacy modulo damping instead of a clean clamp
//! cargo run --example headless --release -- --policy modulo
//! ```

use lj_particles::host::{run, Frame, Renderer, TickBudget};
use lj_particles::{InitialMotion, SimulationConfig, SpeedLimitPolicy, World};

struct DemoConfig {
    particles: usize,
    ticks: u64,
    seed: u64,
    policy: SpeedLimitPolicy,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            particles: 25,
            ticks: 2000,
            seed: 12345,
            policy: SpeedLimitPolicy::Clamp,
        }
    }
}

/// Prints a one-line energy report every `every` frames
struct ConsoleRenderer {
    every: u64,
}

impl Renderer for ConsoleRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        if frame.tick % self.every != 0 {
            return;
        }
        let fastest = frame
            .particles
            .iter()
            .map(|p| p.speed)
            .fold(0.0, f64::max);
        println!(
            "tick {:>6}  kinetic {:>12.5e}  potential {:>12.5e}  total {:>12.5e}  max speed {:>7.3}",
            frame.tick,
            frame.energy.kinetic,
            frame.energy.potential,
            frame.energy.total(),
            fastest
        );
    }
}

fn parse_args() -> DemoConfig {
    let mut config = DemoConfig::default();
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--particles", Some(v)) => match v.parse() {
                Ok(n) => config.particles = n,
                Err(_) => eprintln!("Warning: Invalid particles '{}', using default", v),
            },
            ("--ticks", Some(v)) => match v.parse() {
                Ok(n) => config.ticks = n,
                Err(_) => eprintln!("Warning: Invalid ticks '{}', using default", v),
            },
            ("--seed", Some(v)) => match v.parse() {
                Ok(n) => config.seed = n,
                Err(_) => eprintln!("Warning: Invalid seed '{}', using default", v),
            },
            ("--policy", Some(v)) => match v.as_str() {
                "clamp" => config.policy = SpeedLimitPolicy::Clamp,
                "modulo" => config.policy = SpeedLimitPolicy::Modulo,
                other => eprintln!("Warning: Unknown policy '{}', using clamp", other),
            },
            (flag, None) => {
                eprintln!("Error: {} requires an argument", flag);
                std::process::exit(1);
            }
            (flag, Some(_)) => {
                eprintln!("Warning: Ignoring unknown flag '{}'", flag);
            }
        }
        i += 2;
    }

    config
}

fn main() {
    println!("==========================================================");
    println!("         Lennard-Jones Particle Simulation (headless)");
    println!("==========================================================");
    println!();

    let demo = parse_args();
    let config = match SimulationConfig::builder()
        .bounds(1200.0, 800.0)
        .constants(0.001, 60.0)
        .particle_count(demo.particles)
        .speed_limit(10.0, demo.policy)
        .initial_motion(InitialMotion::RandomHeading { speed: 0.5 })
        .seed(demo.seed)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Simulation Configuration:");
    println!("  Particles: {}", config.particle_count);
    println!("  Bounds: {} x {}", config.bounds.width, config.bounds.height);
    println!(
        "  Epsilon: {}  Sigma: {}",
        config.lj.epsilon(),
        config.lj.sigma()
    );
    println!("  Speed limit: {} ({:?})", config.speed_limit, config.speed_limit_policy);
    println!("  Ticks: {}", demo.ticks);
    println!("  Random seed: {}", demo.seed);
    println!();

    let mut world = match World::new(config) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut renderer = ConsoleRenderer {
        every: (demo.ticks / 20).max(1),
    };
    let mut budget = TickBudget::new(demo.ticks);

    match run(&mut world, &mut renderer, &mut budget) {
        Ok(summary) => {
            println!();
            println!("Finished {} ticks", summary.ticks);
            println!("  Final total energy: {:.6e}", summary.energy.total());
        }
        Err(e) => {
            eprintln!("Simulation stopped: {}", e);
            std::process::exit(2);
        }
    }
}
