use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::animation::sampler::{EndPolicy, PositionSampler, TimeBase};
use crate::animation::values::Interpolatable;
use crate::errors::{CourtsideError, Result};

const MAX_SCAN_OFFSET: usize = 3;

/// A single authored `(timestamp, position)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Milliseconds since the animation started.
    pub timestamp: u64,
    pub position: DVec3,
}

impl Waypoint {
    #[must_use]
    pub fn new(timestamp: u64, position: DVec3) -> Self {
        Self {
            timestamp,
            position,
        }
    }
}

/// Remembers the segment used by the previous lookup so that playback
/// moving forward frame by frame does not search the whole track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// Linearly interpolated keyframes on a millisecond time axis.
///
/// Construction guarantees at least one keyframe, strictly increasing
/// timestamps and finite values; sampling never fails afterwards.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    times: Vec<u64>,
    values: Vec<T>,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    pub fn new(times: Vec<u64>, values: Vec<T>) -> Result<Self> {
        if times.is_empty() {
            return Err(CourtsideError::config("track has no keyframes"));
        }
        if times.len() != values.len() {
            return Err(CourtsideError::config(format!(
                "track has {} timestamps but {} values",
                times.len(),
                values.len()
            )));
        }
        // Equal neighbours would divide by zero when sampling.
        if let Some(pair) = times.windows(2).find(|w| w[1] <= w[0]) {
            return Err(CourtsideError::config(format!(
                "timestamps must be strictly increasing ({} followed by {})",
                pair[0], pair[1]
            )));
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite_value()) {
            return Err(CourtsideError::config(format!(
                "keyframe {idx} has a non-finite value"
            )));
        }

        Ok(Self { times, values })
    }

    #[must_use]
    pub fn times(&self) -> &[u64] {
        &self.times
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamp of the last keyframe, after which the track is frozen.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.times[self.times.len() - 1]
    }

    /// Stateless sampling.
    ///
    /// Before the first keyframe the first value is returned, after the
    /// last keyframe the last value is returned.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u64) -> T {
        // partition_point finds the first index where t > elapsed, i.e. next_index
        let next_idx = self.times.partition_point(|&t| t <= elapsed_ms);
        if next_idx == 0 {
            return self.values[0];
        }

        self.sample_at_frame(next_idx - 1, elapsed_ms)
    }

    /// Sampling with cursor. Returns exactly what [`sample`](Self::sample)
    /// returns, but sequential lookups cost O(1).
    pub fn sample_with_cursor(&self, elapsed_ms: u64, cursor: &mut KeyframeCursor) -> T {
        let len = self.times.len();
        // Fast path: static data (single keyframe)
        if len == 1 {
            return self.values[0];
        }
        if elapsed_ms < self.times[0] {
            cursor.last_index = 0;
            return self.values[0];
        }

        // Cursor may be stale if it was used with another track.
        let i = cursor.last_index.min(len - 1);

        let found_index = if elapsed_ms >= self.times[i] {
            // Forward scan: each failed step proves elapsed >= times[idx + 1].
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    res = Some(len - 1);
                    break;
                }
                if elapsed_ms < self.times[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Backward scan: elapsed < times[i], so start one segment back.
            let mut res = None;
            for offset in 1..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if elapsed_ms >= self.times[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let final_index = found_index.unwrap_or_else(|| {
            // Large jump: fall back to binary search. elapsed >= times[0]
            // here, so partition_point is at least 1.
            self.times.partition_point(|&t| t <= elapsed_ms) - 1
        });
        cursor.last_index = final_index;

        self.sample_at_frame(final_index, elapsed_ms)
    }

    fn sample_at_frame(&self, index: usize, elapsed_ms: u64) -> T {
        let len = self.times.len();

        // No next frame: freeze on the last value.
        if index >= len - 1 {
            return self.values[len - 1];
        }

        let t0 = self.times[index];
        let t1 = self.times[index + 1];
        let t = (elapsed_ms - t0) as f64 / (t1 - t0) as f64;

        T::interpolate_linear(&self.values[index], &self.values[index + 1], t)
    }
}

impl KeyframeTrack<DVec3> {
    /// Builds a position track from authored waypoints.
    ///
    /// Waypoints must already be ordered by timestamp.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Result<Self> {
        if waypoints.len() == 1 {
            log::warn!("Keyframe track has a single waypoint; it will never move");
        }
        let times = waypoints.iter().map(|w| w.timestamp).collect();
        let values = waypoints.iter().map(|w| w.position).collect();
        Self::new(times, values)
    }
}

impl PositionSampler for KeyframeTrack<DVec3> {
    fn sample(&self, query: u64) -> DVec3 {
        KeyframeTrack::sample(self, query)
    }

    fn sample_sequential(&self, query: u64, cursor: &mut KeyframeCursor) -> DVec3 {
        self.sample_with_cursor(query, cursor)
    }

    fn time_base(&self) -> TimeBase {
        TimeBase::ElapsedMillis
    }

    fn end_policy(&self) -> EndPolicy {
        EndPolicy::Freeze
    }

    fn len(&self) -> usize {
        KeyframeTrack::len(self)
    }
}
