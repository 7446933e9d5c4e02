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
//! Two-Particle Example
//!
//! Places two particles 100 units apart, well inside sigma, and prints
//! their separation and speeds while the repulsion pushes them apart and
//! the walls send them back.
//!
//! # Running
//!
//! ```bash
//! cargo run --example two_particles
//! ```

use lj_particles::math::{distance, Point2};
use lj_particles::{Particle, Result, SimulationConfig, World};

fn main() -> Result<()> {
    let config = SimulationConfig::builder()
        .bounds(700.0, 700.0)
        .constants(0.001, 250.0)
        .unlimited_speed()
        .build()?;
    println!(
        "Equilibrium distance: {:.2}",
        config.lj.equilibrium_distance()
    );

    let particles = vec![
        Particle::new(Point2::new(300.0, 350.0), 10.0)?,
        Particle::new(Point2::new(400.0, 350.0), 10.0)?,
    ];
    let mut world = World::with_particles(config, particles)?;

    println!(
        "{:>5} {:>10} {:>10} {:>10} {:>12}",
        "tick", "distance", "speed a", "speed b", "total E"
    );
    for _ in 0..18 {
        let energy = world.step()?;
        let p = world.particles();
        println!(
            "{:>5} {:>10.3} {:>10.4} {:>10.4} {:>12.5e}",
            world.tick(),
            distance(p[0].position(), p[1].position()),
            p[0].speed(),
            p[1].speed(),
            energy.total()
        );
    }

    Ok(())
}
