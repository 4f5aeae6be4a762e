use std::cell::Cell;

use glam::DVec3;
use rustc_hash::FxHashMap;

use crate::animation::clock::{AnimationClock, ClockState};
use crate::animation::role::EntityRole;
use crate::animation::sampler::{PositionSampler, TimeBase, checked_query};
use crate::animation::tracks::KeyframeCursor;
use crate::errors::{CourtsideError, Result};
use crate::utils::time::{SystemTimeSource, TimeSource};

/// One animated entity: its id, its role and the strategy that moves it.
#[derive(Debug)]
pub struct AnimatedTrack {
    id: String,
    role: EntityRole,
    sampler: Box<dyn PositionSampler>,
    /// Segment hit by the last playback read.
    cursor: Cell<KeyframeCursor>,
}

impl AnimatedTrack {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn role(&self) -> EntityRole {
        self.role
    }

    #[must_use]
    pub fn sampler(&self) -> &dyn PositionSampler {
        self.sampler.as_ref()
    }

    fn sample_at(&self, clock: &AnimationClock, now_ms: u64) -> DVec3 {
        let query = match self.sampler.time_base() {
            TimeBase::ElapsedMillis => clock.elapsed_millis(now_ms),
            TimeBase::FrameIndex => clock.frame_index(),
        };
        let mut cursor = self.cursor.get();
        let position = self.sampler.sample_sequential(query, &mut cursor);
        self.cursor.set(cursor);
        position
    }
}

/// Collects tracks for a [`PositionAnimator`].
#[derive(Debug)]
pub struct AnimatorBuilder<S: TimeSource> {
    tracks: Vec<AnimatedTrack>,
    lookup: FxHashMap<String, usize>,
    time_source: S,
}

impl<S: TimeSource> AnimatorBuilder<S> {
    /// Registers a track. Ids must be unique within one animator.
    pub fn add_track(
        &mut self,
        id: impl Into<String>,
        role: EntityRole,
        sampler: impl PositionSampler + 'static,
    ) -> Result<&mut Self> {
        let id = id.into();
        if self.lookup.contains_key(&id) {
            return Err(CourtsideError::DuplicateTrack(id));
        }
        if sampler.is_empty() {
            return Err(CourtsideError::config(format!("track '{id}' has no data")));
        }

        self.lookup.insert(id.clone(), self.tracks.len());
        self.tracks.push(AnimatedTrack {
            id,
            role,
            sampler: Box::new(sampler),
            cursor: Cell::default(),
        });
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> PositionAnimator<S> {
        let frame_count = self
            .tracks
            .iter()
            .filter(|t| t.sampler.time_base() == TimeBase::FrameIndex)
            .map(|t| t.sampler.len())
            .max()
            .unwrap_or(0);

        log::info!(
            "Position animator built with {} tracks (frame sequence length: {})",
            self.tracks.len(),
            frame_count
        );

        PositionAnimator {
            tracks: self.tracks,
            lookup: self.lookup,
            clock: AnimationClock::new(),
            time_source: self.time_source,
            frame_count,
        }
    }
}

/// Owns every track of a scene plus the clock that plays them.
///
/// The render surface calls [`tick`](Self::tick) once per displayed frame
/// and then reads [`current_positions`](Self::current_positions). UI code
/// holding the animator drives playback with
/// [`start_animation`](Self::start_animation),
/// [`stop_animation`](Self::stop_animation) and
/// [`toggle_animation`](Self::toggle_animation).
#[derive(Debug)]
pub struct PositionAnimator<S: TimeSource = SystemTimeSource> {
    tracks: Vec<AnimatedTrack>,
    lookup: FxHashMap<String, usize>,
    clock: AnimationClock,
    time_source: S,
    /// Longest frame sequence, 0 when the scene has none.
    frame_count: usize,
}

impl PositionAnimator<SystemTimeSource> {
    #[must_use]
    pub fn system_builder() -> AnimatorBuilder<SystemTimeSource> {
        Self::builder(SystemTimeSource::new())
    }
}

impl<S: TimeSource> PositionAnimator<S> {
    #[must_use]
    pub fn builder(time_source: S) -> AnimatorBuilder<S> {
        AnimatorBuilder {
            tracks: Vec::new(),
            lookup: FxHashMap::default(),
            time_source,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Position of a track at an explicit instant.
    ///
    /// `query` is elapsed milliseconds for keyframe tracks and a frame
    /// index for frame sequences. Independent of the clock.
    pub fn get_position(&self, track_id: &str, query: i64) -> Result<DVec3> {
        let track = self.track(track_id)?;
        let query = checked_query(query, track.sampler.time_base())?;
        Ok(track.sampler.sample(query))
    }

    /// Position of a track at the clock's current instant.
    pub fn current_position(&self, track_id: &str) -> Result<DVec3> {
        let track = self.track(track_id)?;
        Ok(track.sample_at(&self.clock, self.time_source.now_millis()))
    }

    /// Positions of every track at the clock's current instant, in
    /// registration order.
    pub fn current_positions(&self) -> impl Iterator<Item = (&str, EntityRole, DVec3)> + '_ {
        let now_ms = self.time_source.now_millis();
        self.tracks
            .iter()
            .map(move |t| (t.id(), t.role, t.sample_at(&self.clock, now_ms)))
    }

    pub fn track(&self, track_id: &str) -> Result<&AnimatedTrack> {
        self.lookup
            .get(track_id)
            .map(|&idx| &self.tracks[idx])
            .ok_or_else(|| CourtsideError::TrackNotFound(track_id.to_string()))
    }

    pub fn role(&self, track_id: &str) -> Result<EntityRole> {
        self.track(track_id).map(AnimatedTrack::role)
    }

    pub fn track_ids(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(AnimatedTrack::id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    // ========================================================================
    // Playback
    // ========================================================================

    pub fn start_animation(&mut self) {
        let now_ms = self.time_source.now_millis();
        self.clock.start(now_ms);
    }

    pub fn stop_animation(&mut self) {
        let now_ms = self.time_source.now_millis();
        self.clock.stop(now_ms);
    }

    pub fn toggle_animation(&mut self) -> ClockState {
        let now_ms = self.time_source.now_millis();
        self.clock.toggle(now_ms)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    #[must_use]
    pub fn state(&self) -> ClockState {
        self.clock.state()
    }

    /// Advances to the next displayed frame.
    ///
    /// Elapsed time follows the time source on its own; only frame
    /// sequences need a tick. Exhausting them stops the clock.
    pub fn tick(&mut self) {
        if self.frame_count > 0 {
            let now_ms = self.time_source.now_millis();
            self.clock.advance_frame(now_ms, self.frame_count);
        }
    }

    #[must_use]
    pub fn elapsed_millis(&self) -> u64 {
        self.clock.elapsed_millis(self.time_source.now_millis())
    }

    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.clock.frame_index()
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    #[must_use]
    pub fn time_source(&self) -> &S {
        &self.time_source
    }
}
