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
//! Lennard-Jones pair potential
//!
//! The Lennard-Jones 12-6 potential models a pair of neutral particles that
//! repel strongly at short range and attract weakly at longer range:
//!
//! **V(r) = 4ε [ (σ/r)¹² − (σ/r)⁶ ]**
//!
//! Where:
//! - ε (epsilon) is the depth of the potential well
//! - σ (sigma) is the separation at which the potential crosses zero
//! - r is the distance between the particle centers
//!
//! The force magnitude along the separation is the negated derivative:
//!
//! **F(r) = −dV/dr = 24ε [ 2σ¹²/r¹³ − σ⁶/r⁷ ]**
//!
//! A positive force is repulsive and a negative force is attractive. The
//! force vanishes at the potential minimum r = 2^(1/6)·σ, where V = −ε.
//!
//! # Singularity
//!
//! Both expressions diverge as r → 0. Separations below [`MIN_SEPARATION`]
//! are treated as coincident particles and evaluate to zero force and zero
//! potential, so a degenerate pair never injects NaN or infinity.
//!
//! # References
//!
//! - Jones, J. E. (1924). "On the Determination of Molecular Fields. II."
//!   Proceedings of the Royal Society A, 106(738), 463-477.
//! - Allen, M. P., & Tildesley, D. J. (2017). "Computer Simulation of
//!   Liquids" (2nd ed.), Section 1.4.

use crate::error::{Result, SimError};

/// Separation below which two particles are considered coincident
pub const MIN_SEPARATION: f64 = 1e-9;

/// Lennard-Jones potential energy of a pair at separation `r`
pub fn potential(epsilon: f64, sigma: f64, r: f64) -> f64 {
    if r < MIN_SEPARATION {
        return 0.0;
    }
    let sr6 = (sigma / r).powi(6);
    4.0 * epsilon * (sr6 * sr6 - sr6)
}

/// Lennard-Jones force magnitude at separation `r` (positive = repulsive)
pub fn force(epsilon: f64, sigma: f64, r: f64) -> f64 {
    if r < MIN_SEPARATION {
        return 0.0;
    }
    let sr6 = (sigma / r).powi(6);
    24.0 * epsilon * (2.0 * sr6 * sr6 - sr6) / r
}

/// Separation at which the potential is minimal and the force is zero
pub fn equilibrium_distance(sigma: f64) -> f64 {
    sigma * 2f64.powf(1.0 / 6.0)
}

/// Material constants of a Lennard-Jones interaction
///
/// # Examples
///
/// ```
/// use lj_particles::potential::LennardJones;
///
/// let lj = LennardJones::new(0.001, 250.0).unwrap();
/// let r_min = lj.equilibrium_distance();
/// assert!(lj.force(r_min).abs() < 1e-15);
/// assert!(lj.force(100.0) > 0.0); // repulsive inside the well
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJones {
    pub(crate) epsilon: f64,
    pub(crate) sigma: f64,
}

impl LennardJones {
    /// Create a new interaction after validating both constants
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if either constant is
    /// non-positive, NaN, or infinite.
    pub fn new(epsilon: f64, sigma: f64) -> Result<Self> {
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            return Err(SimError::invalid(format!(
                "epsilon must be positive and finite, got {}",
                epsilon
            )));
        }
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(SimError::invalid(format!(
                "sigma must be positive and finite, got {}",
                sigma
            )));
        }
        Ok(LennardJones { epsilon, sigma })
    }

    /// Depth of the potential well
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Zero-crossing distance of the potential
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Potential energy at separation `r`
    pub fn potential(&self, r: f64) -> f64 {
        potential(self.epsilon, self.sigma, r)
    }

    /// Force magnitude at separation `r` (positive = repulsive)
    pub fn force(&self, r: f64) -> f64 {
        force(self.epsilon, self.sigma, r)
    }

    /// Separation of minimum potential energy
    pub fn equilibrium_distance(&self) -> f64 {
        equilibrium_distance(self.sigma)
    }
}

impl Default for LennardJones {
    fn default() -> Self {
        LennardJones {
            epsilon: 0.001,
            sigma: 250.0,
        }
    }
}
