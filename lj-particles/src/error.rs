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
//! Error types for the simulation core
//!
//! The physics itself has no recoverable failure modes. Errors are raised
//! when a configuration is rejected at construction time, or when a step
//! drives the state to NaN/infinity, after which the world refuses to
//! advance further.

use thiserror::Error;

/// Crate-wide result type alias
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors reported by the simulation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A configuration or particle value was rejected
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A step produced a non-finite position, velocity, or energy
    ///
    /// `index` names the first offending particle, or is `None` when only
    /// the aggregate energy is non-finite.
    #[error("non-finite state after tick {tick} (particle {index:?})")]
    NonFinite {
        /// Tick at which the state was found corrupted
        tick: u64,
        /// Index of the first corrupted particle, if any
        index: Option<usize>,
    },

    /// The world was stepped again after reporting non-finite state
    #[error("world is poisoned since tick {tick} and cannot advance")]
    Poisoned {
        /// Tick at which the world was poisoned
        tick: u64,
    },
}

impl SimError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidConfig(msg.into())
    }
}
