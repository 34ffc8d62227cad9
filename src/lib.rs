//! Previz is the playback-preview core of a timeline-based media editor.
//!
//! Given a timestamp, it determines which timeline elements are currently
//! visible, composes them into a single frame description, and drives a
//! scrubbing/transport control surface.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `(tracks, catalog, timestamp) -> Vec<ActiveElement>`
//!    (what is active, in input order)
//! 2. **Compose**: `(active, blur candidates, project, preview size) -> Frame`
//!    (a positioned, z-ordered draw list for an external renderer)
//! 3. **Fit**: `(available area, target aspect, mode) -> PreviewDimensions`
//!    (the canvas rectangle the frame is drawn into)
//!
//! Scrubbing and transport ([`ScrubController`], [`Transport`]) produce the
//! timestamp; the playback clock itself is an external collaborator behind
//! the [`PlaybackClock`] trait.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: resolution and composition are pure and
//!   stable for a given input; per-frame state is recomputed, never cached.
//! - **No I/O**: media decoding and rendering belong to external
//!   collaborators; this crate only computes descriptors.
//! - **Degraded conditions are not errors**: missing media, empty timelines,
//!   and unmeasured containers fall back to placeholders, advisories, and
//!   skipped recomputation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod control;
mod eval;
mod foundation;
mod layout;
mod timeline;

pub use compose::frame::{
    ClipTiming, Frame, FrameAdvisory, Layer, LayerContent, MediaRef, ObjectFit, TextPlacement,
    compose_frame,
};
pub use control::fullscreen::{FullscreenGuard, HostEffects};
pub use control::scrub::{DragSession, KeyInput, PreviewKey, ScrubController};
pub use control::transport::{PlaybackClock, PreviewAction, SKIP_STEP_SECS, Transport};
pub use eval::resolver::{
    ActiveElement, blur_candidates, has_elements, resolve_active, total_duration,
};
pub use foundation::core::{Canvas, Edges, Fps, Size, Vec2};
pub use foundation::error::{PrevizError, PrevizResult};
pub use layout::fitter::{
    DEFAULT_GAP, DisplayMode, EmbeddedViewport, FullscreenViewport, PreviewDimensions, fit_preview,
};
pub use timeline::model::{
    BackgroundType, Element, ElementKind, FontStyle, FontWeight, MediaCatalog, MediaItem,
    MediaKind, Project, TEST_MEDIA_ID, TextAlign, TextDecoration, TextStyle, Track,
    validate_timeline,
};
