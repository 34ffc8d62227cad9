use crate::foundation::error::{PrevizError, PrevizResult};

pub use kurbo::Vec2;

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Construct a frame rate, rejecting zero terms.
    pub fn new(num: u32, den: u32) -> PrevizResult<Self> {
        if den == 0 {
            return Err(PrevizError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(PrevizError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frame rate as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of a single frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

/// Logical output frame dimensions configured per project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in canvas-space units.
    pub width: u32,
    /// Height in canvas-space units.
    pub height: u32,
}

impl Canvas {
    /// Width-over-height aspect ratio.
    ///
    /// Callers must hold the validated invariant `height > 0`; a zero height
    /// yields an infinite ratio which downstream fitting rejects.
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// A measured display area in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in display pixels.
    pub width: f64,
    /// Height in display pixels.
    pub height: f64,
}

impl Size {
    /// Construct a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both axes are finite and strictly positive.
    ///
    /// A host container reports a zero size before its first layout pass;
    /// such measurements are skipped, not treated as errors.
    pub fn is_measurable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Padding edges in display pixels.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct Edges {
    /// Left padding.
    #[serde(default)]
    pub left: f64,
    /// Right padding.
    #[serde(default)]
    pub right: f64,
    /// Top padding.
    #[serde(default)]
    pub top: f64,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: f64,
}

impl Edges {
    /// Uniform padding on all four edges.
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
}
