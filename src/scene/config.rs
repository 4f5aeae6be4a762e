use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::animation::{EntityRole, FrameSequence, KeyframeTrack, PositionAnimator, Waypoint};
use crate::errors::{CourtsideError, Result};
use crate::settings::{AnimatorSettings, Strategy};
use crate::utils::time::TimeSource;

/// One animated entity as authored in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub id: String,
    pub role: EntityRole,
    /// Number printed on a player's marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey: Option<u32>,
    pub waypoints: Vec<Waypoint>,
}

impl EntityConfig {
    /// Where the entity stands before anything moves.
    #[must_use]
    pub fn origin(&self) -> Option<Waypoint> {
        self.waypoints.first().copied()
    }
}

/// Static track table of a scene plus the settings it is played with.
///
/// ```json
/// {
///   "name": "Serve",
///   "settings": { "strategy": "keyframe" },
///   "entities": [
///     { "id": "ball", "role": "ball", "waypoints": [
///       { "timestamp": 0, "position": [-3.87, 1, 8] },
///       { "timestamp": 10000, "position": [2.15, 1.5, 8] }
///     ] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub settings: AnimatorSettings,
    pub entities: Vec<EntityConfig>,
}

impl SceneConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading scene from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks what can be checked without building tracks: settings,
    /// unique ids and non-empty waypoint lists.
    pub fn validate(&self) -> Result<()> {
        self.settings.validate()?;

        let mut seen = FxHashSet::default();
        for entity in &self.entities {
            if !seen.insert(entity.id.as_str()) {
                return Err(CourtsideError::DuplicateTrack(entity.id.clone()));
            }
            if entity.waypoints.is_empty() {
                return Err(CourtsideError::config(format!(
                    "entity '{}' has no waypoints",
                    entity.id
                )));
            }
        }
        Ok(())
    }

    /// Latest waypoint timestamp of any entity, 0 for an empty scene.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.entities
            .iter()
            .filter_map(|e| e.waypoints.last())
            .map(|w| w.timestamp)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn entity(&self, id: &str) -> Option<&EntityConfig> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Builds an animator playing every entity with the configured
    /// strategy.
    ///
    /// Random walks start from each entity's first waypoint and draw from
    /// one source seeded with `settings.random_walk.seed`, in entity order.
    pub fn build_animator<S: TimeSource>(&self, time_source: S) -> Result<PositionAnimator<S>> {
        self.validate()?;

        let mut builder = PositionAnimator::builder(time_source);
        match self.settings.strategy {
            Strategy::Keyframe => {
                for entity in &self.entities {
                    let track =
                        KeyframeTrack::from_waypoints(&entity.waypoints).map_err(|e| match e {
                            CourtsideError::ConfigurationError(msg) => {
                                CourtsideError::config(format!("entity '{}': {msg}", entity.id))
                            }
                            other => other,
                        })?;
                    builder.add_track(entity.id.clone(), entity.role, track)?;
                }
            }
            Strategy::RandomWalk => {
                let params = &self.settings.random_walk;
                let mut rng = StdRng::seed_from_u64(params.seed);
                for entity in &self.entities {
                    let origin = entity.waypoints[0].position;
                    let sequence = FrameSequence::generate(origin, entity.role, params, &mut rng)?;
                    builder.add_track(entity.id.clone(), entity.role, sequence)?;
                }
            }
        }

        log::info!(
            "Scene '{}' ready: {} entities, {:?} strategy",
            self.name,
            self.entities.len(),
            self.settings.strategy
        );
        Ok(builder.build())
    }
}
