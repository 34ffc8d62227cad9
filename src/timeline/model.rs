use std::collections::BTreeMap;

use crate::{
    foundation::core::{Canvas, Fps, Vec2},
    foundation::error::{PrevizError, PrevizResult},
};

/// Sentinel media id meaning "no real media, render a placeholder".
///
/// Elements referencing this id never resolve to a [`MediaItem`] and must
/// still render, never error.
pub const TEST_MEDIA_ID: &str = "test";

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Per-project preview settings.
///
/// Owned by an external project store; read-only from this crate's
/// perspective. A project is a pure data model serializable via Serde (JSON).
pub struct Project {
    /// Logical output canvas.
    pub canvas: Canvas,
    /// Background mode behind the composed media stack.
    #[serde(default)]
    pub background: BackgroundType,
    /// Background color as straight-alpha RGBA8, used when
    /// [`BackgroundType::Color`] is selected.
    #[serde(default = "default_background_color_rgba8")]
    pub background_color_rgba8: [u8; 4],
    /// Blur radius for the blurred-backdrop mode, caller-defined unit.
    #[serde(default = "default_blur_intensity")]
    pub blur_intensity: f64,
    /// Timeline frame rate, used for frame-accurate stepping.
    pub fps: Fps,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Background mode behind the composed media stack.
pub enum BackgroundType {
    /// No background layer.
    #[default]
    None,
    /// Solid color from [`Project::background_color_rgba8`].
    Color,
    /// Blurred copy of the first eligible active media element.
    Blur,
}

fn default_background_color_rgba8() -> [u8; 4] {
    [0, 0, 0, 255]
}

fn default_blur_intensity() -> f64 {
    8.0
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// An ordered lane of timeline elements.
///
/// The track's position in the track list is its implicit z-order for media
/// layers.
pub struct Track {
    /// Track identifier (stable within a timeline).
    pub id: String,
    /// Track name for authoring/debugging.
    #[serde(default)]
    pub name: String,
    /// Suppress audio contribution from this track's elements when `true`.
    #[serde(default)]
    pub muted: bool,
    /// Elements contained in this track, in stored order.
    pub elements: Vec<Element>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A timed object placed on a track.
pub struct Element {
    /// Element identifier (stable within a timeline).
    pub id: String,
    /// Element name for authoring/debugging.
    #[serde(default)]
    pub name: String,
    /// Position on the global timeline, in seconds.
    pub start_time: f64,
    /// Untrimmed duration in seconds.
    pub duration: f64,
    /// Leading trim in seconds; shortens the effective play window without
    /// changing the meaning of `duration`.
    #[serde(default)]
    pub trim_start: f64,
    /// Trailing trim in seconds.
    #[serde(default)]
    pub trim_end: f64,
    /// Opacity in `[0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Rotation in degrees, clockwise positive.
    #[serde(default)]
    pub rotation_deg: f64,
    /// Offset from canvas center, in canvas-space units.
    #[serde(default)]
    pub offset: Vec2,
    /// Variant payload.
    #[serde(flatten)]
    pub kind: ElementKind,
}

fn default_opacity() -> f64 {
    1.0
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Variant payload of an [`Element`].
pub enum ElementKind {
    /// References a [`MediaItem`] in the media catalog.
    Media {
        /// Catalog key, or [`TEST_MEDIA_ID`] for a placeholder.
        media_id: String,
    },
    /// Literal styled text.
    Text {
        /// UTF-8 text content.
        content: String,
        /// Typography settings.
        #[serde(default)]
        style: TextStyle,
    },
}

impl Element {
    /// Effective play window length in seconds after trims.
    pub fn effective_duration(&self) -> f64 {
        (self.duration - self.trim_start - self.trim_end).max(0.0)
    }

    /// Timeline instant at which this element stops being active (exclusive).
    pub fn end_time(&self) -> f64 {
        self.start_time + self.effective_duration()
    }

    /// Whether this element is active at timestamp `t`.
    ///
    /// Active iff `start_time <= t < start_time + effective_duration`; the
    /// upper bound is exclusive.
    pub fn is_active_at(&self, t: f64) -> bool {
        self.start_time <= t && t < self.end_time()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Typography settings for a text element.
pub struct TextStyle {
    /// Font family name resolved by the external renderer.
    pub font_family: String,
    /// Font size in canvas-space units.
    pub font_size: f64,
    /// Text color as straight-alpha RGBA8.
    #[serde(default = "default_text_color_rgba8")]
    pub color_rgba8: [u8; 4],
    /// Background color behind the text box; fully transparent by default.
    #[serde(default)]
    pub background_color_rgba8: [u8; 4],
    /// Horizontal alignment within the text box.
    #[serde(default)]
    pub align: TextAlign,
    /// Font weight.
    #[serde(default)]
    pub weight: FontWeight,
    /// Font style.
    #[serde(default)]
    pub style: FontStyle,
    /// Text decoration.
    #[serde(default)]
    pub decoration: TextDecoration,
}

fn default_text_color_rgba8() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 48.0,
            color_rgba8: default_text_color_rgba8(),
            background_color_rgba8: [0, 0, 0, 0],
            align: TextAlign::default(),
            weight: FontWeight::default(),
            style: FontStyle::default(),
            decoration: TextDecoration::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Align to the left edge.
    Left,
    /// Center horizontally.
    #[default]
    Center,
    /// Align to the right edge.
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Font weight.
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Font style.
pub enum FontStyle {
    /// Upright style.
    #[default]
    Normal,
    /// Italic style.
    Italic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Text decoration.
pub enum TextDecoration {
    /// No decoration.
    #[default]
    None,
    /// Underlined text.
    Underline,
    /// Struck-through text.
    LineThrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Media catalog entry kind.
pub enum MediaKind {
    /// Video file.
    Video,
    /// Still image.
    Image,
    /// Audio file.
    Audio,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// External media catalog entry resolved by a media element's id.
pub struct MediaItem {
    /// Catalog key.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Media kind.
    pub kind: MediaKind,
    /// Source URL handed to the external player collaborator.
    pub url: String,
    /// Optional poster/thumbnail URL (video and image only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Media catalog keyed by stable item ids.
pub struct MediaCatalog {
    items: BTreeMap<String, MediaItem>,
}

impl MediaCatalog {
    /// Build a catalog from items, keyed by each item's id.
    pub fn from_items(items: impl IntoIterator<Item = MediaItem>) -> Self {
        Self {
            items: items.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }

    /// Resolve a media id.
    ///
    /// The [`TEST_MEDIA_ID`] sentinel never resolves, by contract.
    pub fn resolve(&self, media_id: &str) -> Option<&MediaItem> {
        if media_id == TEST_MEDIA_ID {
            return None;
        }
        self.items.get(media_id)
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Project {
    /// Validate project invariants.
    pub fn validate(&self) -> PrevizResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PrevizError::validation("canvas width/height must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(PrevizError::validation("fps must have num>0 and den>0"));
        }
        if !self.blur_intensity.is_finite() || self.blur_intensity < 0.0 {
            return Err(PrevizError::validation(
                "blur_intensity must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

impl Track {
    /// Validate this track and all contained elements.
    pub fn validate(&self) -> PrevizResult<()> {
        if self.id.trim().is_empty() {
            return Err(PrevizError::validation("track id must be non-empty"));
        }
        for el in &self.elements {
            el.validate()?;
        }
        Ok(())
    }
}

impl Element {
    /// Validate element invariants.
    pub fn validate(&self) -> PrevizResult<()> {
        if self.id.trim().is_empty() {
            return Err(PrevizError::validation("element id must be non-empty"));
        }
        for (name, value) in [
            ("start_time", self.start_time),
            ("duration", self.duration),
            ("trim_start", self.trim_start),
            ("trim_end", self.trim_end),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PrevizError::validation(format!(
                    "element '{}' {name} must be finite and >= 0",
                    self.id
                )));
            }
        }
        if self.trim_start + self.trim_end > self.duration {
            return Err(PrevizError::validation(format!(
                "element '{}' trims exceed duration",
                self.id
            )));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(PrevizError::validation(format!(
                "element '{}' opacity must be within [0, 1]",
                self.id
            )));
        }
        if !self.rotation_deg.is_finite() {
            return Err(PrevizError::validation(format!(
                "element '{}' rotation_deg must be finite",
                self.id
            )));
        }
        if !self.offset.x.is_finite() || !self.offset.y.is_finite() {
            return Err(PrevizError::validation(format!(
                "element '{}' offset must be finite",
                self.id
            )));
        }
        match &self.kind {
            ElementKind::Media { media_id } => {
                if media_id.trim().is_empty() {
                    return Err(PrevizError::validation(format!(
                        "element '{}' media_id must be non-empty",
                        self.id
                    )));
                }
            }
            ElementKind::Text { style, .. } => {
                if !style.font_size.is_finite() || style.font_size <= 0.0 {
                    return Err(PrevizError::validation(format!(
                        "element '{}' font_size must be finite and > 0",
                        self.id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Validate every track of a timeline.
pub fn validate_timeline(tracks: &[Track]) -> PrevizResult<()> {
    for track in tracks {
        track.validate()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
