/// Run state of an [`AnimationClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    /// Not started yet, or stopped in place.
    #[default]
    Idle,
    /// Elapsed time and frame index advance.
    Running,
}

/// The time base of a scene.
///
/// The clock never reads time itself: every transition takes the current
/// timestamp (milliseconds from the owner's time source) as an argument.
/// Stopping keeps the elapsed time and frame index where they were, so the
/// last displayed positions stay on screen until the clock is restarted.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    start_time: Option<u64>,
    state: ClockState,
    held_elapsed: u64,
    frame: u64,
    next_frame: u64,
}

impl AnimationClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from zero, whatever the current state.
    pub fn start(&mut self, now_ms: u64) {
        self.start_time = Some(now_ms);
        self.state = ClockState::Running;
        self.held_elapsed = 0;
        self.frame = 0;
        self.next_frame = 0;
        log::debug!("Animation clock started at {now_ms} ms");
    }

    /// Stops in place. Does nothing when already idle.
    pub fn stop(&mut self, now_ms: u64) {
        if self.state == ClockState::Running {
            self.held_elapsed = self.elapsed_millis(now_ms);
            self.state = ClockState::Idle;
            log::debug!(
                "Animation clock stopped at {} ms elapsed, frame {}",
                self.held_elapsed,
                self.frame
            );
        }
    }

    /// Stops a running clock or restarts an idle one. Returns the new state.
    pub fn toggle(&mut self, now_ms: u64) -> ClockState {
        match self.state {
            ClockState::Running => self.stop(now_ms),
            ClockState::Idle => self.start(now_ms),
        }
        self.state
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Instant of the last start, `None` before the first one.
    #[must_use]
    pub fn start_time(&self) -> Option<u64> {
        self.start_time
    }

    /// Milliseconds since the last start. Held constant while idle.
    #[must_use]
    pub fn elapsed_millis(&self, now_ms: u64) -> u64 {
        match (self.state, self.start_time) {
            (ClockState::Running, Some(start)) => now_ms.saturating_sub(start),
            _ => self.held_elapsed,
        }
    }

    #[inline]
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    /// Moves to the next displayed frame.
    ///
    /// The first call after a start shows frame 0. Once all `frame_count`
    /// frames have been shown the clock stops on the last one.
    pub fn advance_frame(&mut self, now_ms: u64, frame_count: usize) -> u64 {
        if self.state != ClockState::Running {
            return self.frame;
        }

        if self.next_frame >= frame_count as u64 {
            log::debug!("Frame sequence exhausted after {frame_count} frames");
            self.stop(now_ms);
        } else {
            self.frame = self.next_frame;
            self.next_frame += 1;
        }

        self.frame
    }
}
