use crate::{
    control::transport::{PreviewAction, SKIP_STEP_SECS},
    eval::resolver::{has_elements, total_duration},
    foundation::core::Fps,
    timeline::model::Track,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Keys the preview surface reacts to.
pub enum PreviewKey {
    /// Toggle play/pause.
    Space,
    /// Step back.
    ArrowLeft,
    /// Step forward.
    ArrowRight,
    /// Jump to the start of the timeline.
    Home,
    /// Jump to the end of the timeline.
    End,
    /// Exit fullscreen.
    Escape,
}

#[derive(Clone, Copy, Debug)]
/// One keyboard event as observed by the host.
pub struct KeyInput {
    /// Which key was pressed.
    pub key: PreviewKey,
    /// Whether the frame-step modifier was held.
    pub frame_step: bool,
    /// Whether a text input currently has focus; suppresses all bindings.
    pub text_input_focused: bool,
}

#[derive(Clone, Copy, Debug)]
/// Converts pointer and keyboard input into timeline-position updates.
///
/// Construction fails on an empty timeline, which disables the whole control
/// surface (a precondition, not an error).
pub struct ScrubController {
    total_duration: f64,
    fps: Fps,
}

impl ScrubController {
    /// Build a controller for a timeline, or `None` when it has no elements.
    pub fn new(tracks: &[Track], fps: Fps) -> Option<Self> {
        if !has_elements(tracks) {
            return None;
        }
        Some(Self {
            total_duration: total_duration(tracks),
            fps,
        })
    }

    /// Total timeline duration the controller clamps against.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Seek target for a single click on the scrub track.
    pub fn click_seek(&self, x: f64, track_left: f64, track_width: f64) -> f64 {
        seek_from_pointer(x, track_left, track_width, self.total_duration)
    }

    /// Begin a drag session at pointer-down.
    ///
    /// The session's very first [`DragSession::seek_at`] must be fed the
    /// pointer's initial down position; there is no dead zone.
    pub fn begin_drag(&self, track_left: f64, track_width: f64) -> DragSession {
        DragSession {
            track_left,
            track_width,
            total_duration: self.total_duration,
        }
    }

    /// Translate a keyboard event into a transport action.
    ///
    /// Arrow keys step by one second, or by exactly one frame when the
    /// modifier is held. All seeks are clamped to `[0, total_duration]`.
    pub fn handle_key(&self, input: KeyInput, current: f64) -> Option<PreviewAction> {
        if input.text_input_focused {
            return None;
        }
        let step = if input.frame_step {
            self.fps.frame_duration_secs()
        } else {
            SKIP_STEP_SECS
        };
        let clamp = |t: f64| t.clamp(0.0, self.total_duration);
        let action = match input.key {
            PreviewKey::Space => PreviewAction::TogglePlay,
            PreviewKey::ArrowRight => PreviewAction::Seek(clamp(current + step)),
            PreviewKey::ArrowLeft => PreviewAction::Seek(clamp(current - step)),
            PreviewKey::Home => PreviewAction::Seek(0.0),
            PreviewKey::End => PreviewAction::Seek(self.total_duration),
            PreviewKey::Escape => PreviewAction::ExitFullscreen,
        };
        Some(action)
    }
}

#[derive(Clone, Copy, Debug)]
/// Transient drag-seek session.
///
/// Created on pointer-down, consulted on every move, dropped on pointer-up;
/// its existence *is* the "is dragging" flag, so no shared mutable state
/// outlives the drag.
pub struct DragSession {
    track_left: f64,
    track_width: f64,
    total_duration: f64,
}

impl DragSession {
    /// Seek target for the pointer at `x`, clamped to the timeline.
    pub fn seek_at(&self, x: f64) -> f64 {
        seek_from_pointer(x, self.track_left, self.track_width, self.total_duration)
    }
}

/// `clamp(0, total, (x - left)/width * total)`, guarding a zero-width track.
fn seek_from_pointer(x: f64, track_left: f64, track_width: f64, total: f64) -> f64 {
    if track_width <= 0.0 || total <= 0.0 {
        return 0.0;
    }
    ((x - track_left) / track_width * total).clamp(0.0, total)
}

#[cfg(test)]
#[path = "../../tests/unit/control/scrub.rs"]
mod tests;
