use crate::foundation::core::{Edges, Size};

/// Default gap between the preview surface and the lower toolbar, in display
/// pixels.
pub const DEFAULT_GAP: f64 = 16.0;

/// Fraction of the available area used by the fullscreen overlay, reserving a
/// visual margin.
const FULLSCREEN_SCALE: f64 = 0.95;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where the preview surface is hosted.
pub enum DisplayMode {
    /// Panel embedded in the editor layout; uses all available space.
    Embedded,
    /// Fullscreen overlay; uses 95% of available space.
    Fullscreen,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
/// Actual on-screen pixel size of the fitted canvas.
///
/// Always preserves the target aspect ratio exactly (within floating-point
/// tolerance); a pure function of (available area, target aspect, mode).
pub struct PreviewDimensions {
    /// Width in display pixels.
    pub width: f64,
    /// Height in display pixels.
    pub height: f64,
}

/// Compute the largest rectangle of `target_aspect` fitting `avail`.
///
/// If the available area is relatively wider than the target, height is the
/// binding constraint; otherwise width is. The result never exceeds the
/// available bounds on either axis.
///
/// Returns `None` when the available area is unmeasured (zero or non-finite)
/// or the aspect is degenerate; callers skip recomputation until a valid
/// measurement exists.
pub fn fit_preview(
    avail: Size,
    target_aspect: f64,
    mode: DisplayMode,
) -> Option<PreviewDimensions> {
    if !avail.is_measurable() || !target_aspect.is_finite() || target_aspect <= 0.0 {
        return None;
    }

    let scale = match mode {
        DisplayMode::Embedded => 1.0,
        DisplayMode::Fullscreen => FULLSCREEN_SCALE,
    };

    let dims = if avail.width / avail.height > target_aspect {
        let height = avail.height * scale;
        PreviewDimensions {
            width: height * target_aspect,
            height,
        }
    } else {
        let width = avail.width * scale;
        PreviewDimensions {
            width,
            height: width / target_aspect,
        }
    };
    Some(dims)
}

#[derive(Clone, Copy, Debug)]
/// Measured geometry of the embedded preview panel.
pub struct EmbeddedViewport {
    /// Host container content box.
    pub container: Size,
    /// Container padding.
    pub padding: Edges,
    /// Measured height of the lower toolbar, when one is present.
    pub toolbar_height: Option<f64>,
    /// Gap between preview surface and toolbar.
    pub gap: f64,
}

impl EmbeddedViewport {
    /// Viewport with no padding, no toolbar, and the default gap.
    pub fn bare(container: Size) -> Self {
        Self {
            container,
            padding: Edges::default(),
            toolbar_height: None,
            gap: DEFAULT_GAP,
        }
    }

    /// Area left for the preview surface after padding, toolbar, and gap.
    ///
    /// The toolbar contributes to the reserved space only when a toolbar
    /// subregion is actually present.
    pub fn available(&self) -> Size {
        let toolbar = self.toolbar_height.unwrap_or(0.0);
        Size {
            width: (self.container.width - self.padding.left - self.padding.right).max(0.0),
            height: (self.container.height
                - self.padding.top
                - self.padding.bottom
                - toolbar
                - self.gap)
                .max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug)]
/// Measured geometry of the fullscreen overlay.
pub struct FullscreenViewport {
    /// Full display surface.
    pub surface: Size,
    /// Fixed band reserved for transport controls and margin.
    pub controls_band: f64,
}

impl FullscreenViewport {
    /// Area left for the preview surface after the controls band.
    pub fn available(&self) -> Size {
        Size {
            width: self.surface.width,
            height: (self.surface.height - self.controls_band).max(0.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fitter.rs"]
mod tests;
