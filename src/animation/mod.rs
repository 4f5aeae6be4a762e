pub mod animator;
pub mod clock;
pub mod random_walk;
pub mod role;
pub mod sampler;
pub mod tracks;
pub mod values;

pub use animator::{AnimatedTrack, AnimatorBuilder, PositionAnimator};
pub use clock::{AnimationClock, ClockState};
pub use random_walk::FrameSequence;
pub use role::EntityRole;
pub use sampler::{EndPolicy, PositionSampler, TimeBase};
pub use tracks::{KeyframeCursor, KeyframeTrack, Waypoint};
pub use values::Interpolatable;
