//! Animator Settings
//!
//! Static configuration that decides which animation strategy a scene is
//! played with and how the random-walk generator behaves.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use courtside::settings::{AnimatorSettings, RandomWalkSettings, Strategy};
//!
//! // Default: keyframe interpolation over the authored waypoints
//! let settings = AnimatorSettings::default();
//!
//! // Reproducible random walk, one minute at 60 fps
//! let settings = AnimatorSettings {
//!     strategy: Strategy::RandomWalk,
//!     random_walk: RandomWalkSettings { seed: 7, ..Default::default() },
//! };
//! ```
//!
//! Every field has a serde default, so a scene file only needs to name the
//! values it overrides.

use serde::{Deserialize, Serialize};

use crate::animation::EntityRole;
use crate::errors::{CourtsideError, Result};

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// The animation strategy a scene is played with.
///
/// | Strategy     | Query          | Past the end |
/// |--------------|----------------|--------------|
/// | `Keyframe`   | elapsed millis | freeze       |
/// | `RandomWalk` | frame index    | wrap around  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Linear interpolation between authored waypoints.
    #[default]
    Keyframe,
    /// Precomputed bounded random steps from each entity's first waypoint.
    RandomWalk,
}

// ---------------------------------------------------------------------------
// RandomWalkSettings
// ---------------------------------------------------------------------------

/// Parameters of the random-walk frame generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomWalkSettings {
    /// Number of frames generated per entity.
    pub frame_count: usize,
    /// Fixed magnitude of every x and y step.
    pub step: f64,
    /// Seed of the random source shared by all entities of a scene.
    pub seed: u64,
    /// Depth plane the ball is pinned to.
    pub ball_depth: f64,
    /// Depth plane players are pinned to.
    pub player_depth: f64,
}

impl Default for RandomWalkSettings {
    fn default() -> Self {
        Self {
            frame_count: 3600,
            step: 0.1,
            seed: 0,
            ball_depth: 8.0,
            player_depth: 7.0,
        }
    }
}

impl RandomWalkSettings {
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(CourtsideError::config("random walk frame_count must be at least 1"));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(CourtsideError::config(format!(
                "random walk step must be a positive number (got {})",
                self.step
            )));
        }
        if !self.ball_depth.is_finite() || !self.player_depth.is_finite() {
            return Err(CourtsideError::config("random walk depth planes must be finite"));
        }
        Ok(())
    }

    /// Depth plane for an entity of the given role.
    #[inline]
    #[must_use]
    pub fn depth_for(&self, role: EntityRole) -> f64 {
        if role.is_player() {
            self.player_depth
        } else {
            self.ball_depth
        }
    }
}

// ---------------------------------------------------------------------------
// AnimatorSettings
// ---------------------------------------------------------------------------

/// Top-level settings of a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorSettings {
    pub strategy: Strategy,
    pub random_walk: RandomWalkSettings,
}

impl AnimatorSettings {
    pub fn validate(&self) -> Result<()> {
        match self.strategy {
            Strategy::Keyframe => Ok(()),
            Strategy::RandomWalk => self.random_walk.validate(),
        }
    }
}
