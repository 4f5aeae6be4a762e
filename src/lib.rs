#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod scene;
pub mod settings;
pub mod utils;

pub use animation::{
    AnimationClock, ClockState, EndPolicy, EntityRole, FrameSequence, KeyframeTrack,
    PositionAnimator, PositionSampler, TimeBase, Waypoint,
};
pub use errors::{CourtsideError, Result};
pub use scene::{EntityConfig, SceneConfig};
pub use settings::{AnimatorSettings, RandomWalkSettings, Strategy};
pub use utils::time::{ManualTimeSource, SystemTimeSource, TimeSource};
