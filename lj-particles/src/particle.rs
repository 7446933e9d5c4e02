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
//! Particle state, integration, and wall reflection
//!
//! A particle carries a position, a polar velocity, a fixed radius, and a
//! cosmetic color. Mass is implicitly 1, so an LJ force applied for one tick
//! is added to the velocity unchanged.

use crate::config::Bounds;
use crate::error::{Result, SimError};
use crate::math::{Point2, PolarVector};
use std::f64::consts::PI;

/// RGB color used by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Solid blue, the default particle color
    pub const BLUE: Color = Color::new(0, 0, 255);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

/// A snapshot of one particle, handed to renderers each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSnapshot {
    /// Horizontal center coordinate
    pub x: f64,
    /// Vertical center coordinate
    pub y: f64,
    /// Radius
    pub radius: f64,
    /// Fill color
    pub color: Color,
    /// Speed (velocity magnitude)
    pub speed: f64,
    /// Heading in radians (compass convention)
    pub angle: f64,
}

/// A simulated particle
///
/// # Examples
///
/// ```
/// use lj_particles::particle::Particle;
/// use lj_particles::math::{Point2, PolarVector};
/// use std::f64::consts::FRAC_PI_2;
///
/// let mut p = Particle::new(Point2::new(50.0, 50.0), 10.0).unwrap();
/// p.set_velocity(PolarVector::new(FRAC_PI_2, 2.0));
/// p.advance(1.0);
/// assert!((p.position().x - 52.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Point2,
    velocity: PolarVector,
    radius: f64,
    color: Color,
}

impl Particle {
    /// Create a particle at rest with the default color
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the radius is not positive and
    /// finite or the position is not finite.
    pub fn new(position: Point2, radius: f64) -> Result<Self> {
        Particle::with_color(position, radius, Color::default())
    }

    /// Create a particle at rest with an explicit color
    pub fn with_color(position: Point2, radius: f64, color: Color) -> Result<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SimError::invalid(format!(
                "particle radius must be positive and finite, got {}",
                radius
            )));
        }
        if !position.is_valid() {
            return Err(SimError::invalid("particle position must be finite"));
        }
        Ok(Particle {
            position,
            velocity: PolarVector::zero(),
            radius,
            color,
        })
    }

    /// Builder-style velocity assignment
    pub fn moving(mut self, velocity: PolarVector) -> Self {
        self.set_velocity(velocity);
        self
    }

    /// Current center position
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Overwrite the center position
    pub fn set_position(&mut self, position: Point2) {
        self.position = position;
    }

    /// Current polar velocity
    pub fn velocity(&self) -> PolarVector {
        self.velocity
    }

    /// Overwrite the velocity
    ///
    /// A negative magnitude is stored as the equivalent positive magnitude
    /// pointing the opposite way.
    pub fn set_velocity(&mut self, velocity: PolarVector) {
        self.velocity = if velocity.speed < 0.0 {
            PolarVector::new(velocity.angle + PI, -velocity.speed)
        } else {
            velocity
        };
    }

    /// Heading in radians
    pub fn angle(&self) -> f64 {
        self.velocity.angle
    }

    /// Speed (never negative)
    pub fn speed(&self) -> f64 {
        self.velocity.speed
    }

    pub(crate) fn set_speed(&mut self, speed: f64) {
        self.velocity.speed = speed;
    }

    /// Radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Fill color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Add a polar impulse to the velocity
    pub fn apply_impulse(&mut self, angle: f64, magnitude: f64) {
        self.velocity = self.velocity.combine(PolarVector::new(angle, magnitude));
    }

    /// Integrate the position over one tick scaled by `dt_multiplier`
    ///
    /// Explicit Euler with an implicit unit timestep. Screen y grows
    /// downward, so heading 0 decreases y.
    pub fn advance(&mut self, dt_multiplier: f64) {
        let step = self.velocity.speed * dt_multiplier;
        self.position.x += self.velocity.angle.sin() * step;
        self.position.y -= self.velocity.angle.cos() * step;
    }

    /// Reflect the particle back inside `bounds`
    ///
    /// Each wall crossing mirrors the position about the wall and flips the
    /// heading: negated on the vertical walls, `π - angle` on the horizontal
    /// ones. Repeated reflections are folded in closed form, so a
    /// displacement of any finite size ends up with
    /// `radius <= x <= width - radius` (and likewise for y) in constant time.
    ///
    /// Non-finite coordinates, and axes narrower than the particle diameter,
    /// are left untouched.
    pub fn bounce(&mut self, bounds: &Bounds) {
        let r = self.radius;

        if let Some((x, flipped)) = reflect_into(self.position.x, r, bounds.width) {
            self.position.x = x;
            if flipped {
                self.velocity.angle = -self.velocity.angle;
            }
        }

        if let Some((y, flipped)) = reflect_into(self.position.y, r, bounds.height) {
            self.position.y = y;
            if flipped {
                self.velocity.angle = PI - self.velocity.angle;
            }
        }
    }

    /// Kinetic energy with unit mass: 0.5 * speed²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocity.speed * self.velocity.speed
    }

    /// Check that position and velocity are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid()
    }

    /// Whether the particle edge lies within `bounds` on both axes
    pub fn is_inside(&self, bounds: &Bounds) -> bool {
        let r = self.radius;
        self.position.x >= r
            && self.position.x <= bounds.width - r
            && self.position.y >= r
            && self.position.y <= bounds.height - r
    }

    /// Rendering snapshot of the current state
    pub fn snapshot(&self) -> ParticleSnapshot {
        ParticleSnapshot {
            x: self.position.x,
            y: self.position.y,
            radius: self.radius,
            color: self.color,
            speed: self.velocity.speed,
            angle: self.velocity.angle,
        }
    }
}

/// Mirror `coord` back into `[r, extent - r]`
///
/// Returns the folded coordinate and whether it took an odd number of
/// reflections, or `None` when the coordinate is already inside, is
/// non-finite, or the axis cannot hold the particle.
fn reflect_into(coord: f64, r: f64, extent: f64) -> Option<(f64, bool)> {
    let hi = extent - r;
    if !coord.is_finite() || 2.0 * r >= extent || (coord >= r && coord <= hi) {
        return None;
    }

    // Reflections repeat with period 2 * span; the second half of the
    // period is the mirrored leg.
    let span = hi - r;
    let t = (coord - r).rem_euclid(2.0 * span);
    let (offset, flipped) = if t <= span {
        (t, false)
    } else {
        (2.0 * span - t, true)
    };
    Some(((r + offset).clamp(r, hi), flipped))
}
