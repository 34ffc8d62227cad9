/// Seconds stepped by the skip buttons and plain arrow keys.
pub const SKIP_STEP_SECS: f64 = 1.0;

/// Contract the engine requires from the external playback clock.
///
/// The core never owns the clock; it only reads it and requests seeks.
/// Playback progression between seeks is the environment's business.
pub trait PlaybackClock {
    /// Current playhead position in seconds.
    fn current_time(&self) -> f64;
    /// Whether playback is running.
    fn is_playing(&self) -> bool;
    /// Toggle play/pause.
    fn toggle(&mut self);
    /// Request an absolute seek, in seconds.
    fn seek(&mut self, time: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Action produced by the scrub/keyboard surface for the host to apply.
pub enum PreviewAction {
    /// Toggle play/pause on the clock.
    TogglePlay,
    /// Seek the clock to an absolute time in seconds (already clamped).
    Seek(f64),
    /// Leave fullscreen mode; handled by the host, not the clock.
    ExitFullscreen,
}

#[derive(Clone, Copy, Debug)]
/// Transport bookkeeping over an external playback clock.
pub struct Transport {
    total_duration: f64,
}

impl Transport {
    /// Build a transport for a timeline of `total_duration` seconds.
    ///
    /// Negative or non-finite totals collapse to zero.
    pub fn new(total_duration: f64) -> Self {
        let total_duration = if total_duration.is_finite() {
            total_duration.max(0.0)
        } else {
            0.0
        };
        Self { total_duration }
    }

    /// Total timeline duration in seconds.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Clamp a timestamp to `[0, total_duration]`.
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(0.0, self.total_duration)
    }

    /// Playhead progress in `[0, 1]`.
    ///
    /// A zero-duration timeline yields `0.0`, never NaN.
    pub fn progress(&self, current: f64) -> f64 {
        if self.total_duration <= 0.0 {
            return 0.0;
        }
        (current / self.total_duration).clamp(0.0, 1.0)
    }

    /// Step the clock forward by the fixed skip amount, clamped.
    pub fn skip_forward<C: PlaybackClock>(&self, clock: &mut C) {
        clock.seek(self.clamp(clock.current_time() + SKIP_STEP_SECS));
    }

    /// Step the clock back by the fixed skip amount, clamped.
    pub fn skip_back<C: PlaybackClock>(&self, clock: &mut C) {
        clock.seek(self.clamp(clock.current_time() - SKIP_STEP_SECS));
    }

    /// Apply a clock-facing action.
    ///
    /// [`PreviewAction::ExitFullscreen`] is not a clock operation and is
    /// ignored here; the host reacts to it by dropping its
    /// [`crate::FullscreenGuard`].
    pub fn apply<C: PlaybackClock>(&self, clock: &mut C, action: PreviewAction) {
        match action {
            PreviewAction::TogglePlay => clock.toggle(),
            PreviewAction::Seek(t) => clock.seek(self.clamp(t)),
            PreviewAction::ExitFullscreen => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/control/transport.rs"]
mod tests;
