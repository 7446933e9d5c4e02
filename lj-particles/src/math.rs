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
//! Polar vector arithmetic
//!
//! Velocities are stored as a heading and a magnitude rather than Cartesian
//! components. Headings use the compass convention: angle 0 points toward
//! screen "up" (decreasing y) and angles grow clockwise, so a heading of
//! π/2 points toward increasing x.
//!
//! When a polar vector is decomposed for addition, its components are
//!
//! ```text
//! x = sin(angle) * speed
//! y = cos(angle) * speed
//! ```
//!
//! The reflection rules in [`Particle::bounce`](crate::particle::Particle::bounce)
//! depend on this convention (negate the angle on an x-wall, take `π - angle`
//! on a y-wall), so it must not be swapped for the usual math convention.

use std::f64::consts::FRAC_PI_2;

/// A point in the 2D simulation plane (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Check if both coordinates are finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A vector stored as heading plus magnitude
///
/// # Examples
///
/// ```
/// use lj_particles::math::PolarVector;
/// use std::f64::consts::FRAC_PI_2;
///
/// let east = PolarVector::new(FRAC_PI_2, 3.0);
/// let west = PolarVector::new(-FRAC_PI_2, 3.0);
/// assert!(east.combine(west).speed < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarVector {
    /// Heading in radians (compass convention)
    pub angle: f64,
    /// Magnitude
    pub speed: f64,
}

impl PolarVector {
    /// Create a new polar vector
    pub fn new(angle: f64, speed: f64) -> Self {
        PolarVector { angle, speed }
    }

    /// The zero vector, heading 0
    pub fn zero() -> Self {
        PolarVector::new(0.0, 0.0)
    }

    /// Vector sum of `self` and `other`
    pub fn combine(self, other: PolarVector) -> PolarVector {
        let (angle, speed) = combine(self.angle, self.speed, other.angle, other.speed);
        PolarVector { angle, speed }
    }

    /// Check if both fields are finite
    pub fn is_valid(&self) -> bool {
        self.angle.is_finite() && self.speed.is_finite()
    }
}

/// Sum two polar vectors, returning the resultant `(angle, speed)`
///
/// The returned magnitude is a Euclidean norm and therefore never negative,
/// even when an input magnitude is negative (a negative magnitude simply
/// points the other way). Two zero-length inputs produce a zero-length
/// result with heading `π/2 - atan2(0, 0)`.
pub fn combine(angle1: f64, speed1: f64, angle2: f64, speed2: f64) -> (f64, f64) {
    let x = angle1.sin() * speed1 + angle2.sin() * speed2;
    let y = angle1.cos() * speed1 + angle2.cos() * speed2;
    let speed = x.hypot(y);
    let angle = FRAC_PI_2 - y.atan2(x);
    (angle, speed)
}

/// Heading pointing from `a` toward `b`
pub fn angle_between(a: Point2, b: Point2) -> f64 {
    (b.y - a.y).atan2(b.x - a.x) + FRAC_PI_2
}

/// Euclidean distance between two points
pub fn distance(a: Point2, b: Point2) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
