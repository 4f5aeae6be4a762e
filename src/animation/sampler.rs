//! The strategy seam shared by keyframe tracks and frame sequences.

use std::fmt;

use glam::DVec3;

use crate::animation::tracks::KeyframeCursor;
use crate::errors::{CourtsideError, Result};

/// What the query value passed to a sampler means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBase {
    /// Milliseconds since the clock was last started.
    ElapsedMillis,
    /// Index of the displayed frame since the clock was last started.
    FrameIndex,
}

/// What a sampler returns once the query runs past its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndPolicy {
    /// Hold the last position.
    Freeze,
    /// Restart from the first entry (`query mod len`).
    Wrap,
}

/// A strategy that maps a time or frame query to a position.
///
/// Implementations are pure: the same query always yields the same
/// position, so the render surface may call them in any order.
pub trait PositionSampler: fmt::Debug {
    fn sample(&self, query: u64) -> DVec3;

    /// Same result as [`sample`](Self::sample). Playback passes the cursor
    /// of the previous call so that implementations may skip the search.
    fn sample_sequential(&self, query: u64, _cursor: &mut KeyframeCursor) -> DVec3 {
        self.sample(query)
    }

    fn time_base(&self) -> TimeBase;

    fn end_policy(&self) -> EndPolicy;

    /// Number of keyframes or generated frames.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rejects negative queries from the caller.
pub fn checked_query(query: i64, time_base: TimeBase) -> Result<u64> {
    u64::try_from(query).map_err(|_| {
        let what = match time_base {
            TimeBase::ElapsedMillis => "elapsed time",
            TimeBase::FrameIndex => "frame index",
        };
        CourtsideError::InvalidArgument(format!("{what} must not be negative (got {query})"))
    })
}
