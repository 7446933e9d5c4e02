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
//! Host loop and presentation seams
//!
//! The simulation core does not open windows or draw pixels. A host wires
//! a [`World`] to two collaborators:
//!
//! - a [`Renderer`] that receives a [`Frame`] after every tick, and
//! - an [`EventSource`] polled before every tick for a "keep running" signal.
//!
//! [`run`] alternates poll, step, and draw until the event source asks to
//! stop or a step fails.

use crate::error::Result;
use crate::particle::ParticleSnapshot;
use crate::step::Energy;
use crate::world::World;

/// Everything a renderer needs to draw one tick
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Tick that produced this frame
    pub tick: u64,
    /// Particles in pair-enumeration order
    pub particles: &'a [ParticleSnapshot],
    /// Energy of the tick
    pub energy: Energy,
}

/// Consumer of per-tick particle state
pub trait Renderer {
    /// Draw one frame
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Source of the host's "continue running" signal
pub trait EventSource {
    /// Poll pending events; `false` ends the host loop
    fn keep_running(&mut self) -> bool;
}

/// Outcome of a host loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Ticks executed by this call
    pub ticks: u64,
    /// Energy after the last tick (or the world's energy if none ran)
    pub energy: Energy,
}

/// Drive `world` until `events` signals a stop
///
/// # Errors
///
/// Propagates the first [`SimError`](crate::error::SimError) raised by
/// [`World::step`]; the failing tick is not drawn.
pub fn run<R, E>(world: &mut World, renderer: &mut R, events: &mut E) -> Result<RunSummary>
where
    R: Renderer + ?Sized,
    E: EventSource + ?Sized,
{
    let mut ticks = 0;
    let mut snapshots = Vec::with_capacity(world.len());

    while events.keep_running() {
        let energy = world.step()?;
        ticks += 1;

        snapshots.clear();
        snapshots.extend(world.particles().iter().map(|p| p.snapshot()));
        renderer.draw(&Frame {
            tick: world.tick(),
            particles: &snapshots,
            energy,
        });
    }

    Ok(RunSummary {
        ticks,
        energy: world.energy(),
    })
}

/// Event source that stops after a fixed number of ticks
#[derive(Debug, Clone)]
pub struct TickBudget {
    remaining: u64,
}

impl TickBudget {
    /// Allow `ticks` more iterations
    pub fn new(ticks: u64) -> Self {
        TickBudget { remaining: ticks }
    }

    /// Iterations left
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl EventSource for TickBudget {
    fn keep_running(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &Frame<'_>) {}
}

/// Renderer that records the energy of every frame
///
/// Each frame is also logged at debug level.
#[derive(Debug, Clone, Default)]
pub struct EnergyLog {
    history: Vec<(u64, Energy)>,
}

impl EnergyLog {
    /// Create an empty log
    pub fn new() -> Self {
        EnergyLog::default()
    }

    /// Recorded `(tick, energy)` pairs in order
    pub fn history(&self) -> &[(u64, Energy)] {
        &self.history
    }

    /// Largest absolute deviation of total energy from the first frame
    pub fn max_total_drift(&self) -> f64 {
        let Some((_, first)) = self.history.first() else {
            return 0.0;
        };
        let e0 = first.total();
        self.history
            .iter()
            .map(|(_, e)| (e.total() - e0).abs())
            .fold(0.0, f64::max)
    }
}

impl Renderer for EnergyLog {
    fn draw(&mut self, frame: &Frame<'_>) {
        log::debug!(
            "frame {}: {} particles, total energy {:.6e}",
            frame.tick,
            frame.particles.len(),
            frame.energy.total()
        );
        self.history.push((frame.tick, frame.energy));
    }
}

impl<F> EventSource for F
where
    F: FnMut() -> bool,
{
    fn keep_running(&mut self) -> bool {
        self()
    }
}
