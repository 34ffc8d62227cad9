use crate::{
    eval::resolver::ActiveElement,
    layout::fitter::PreviewDimensions,
    timeline::model::{
        BackgroundType, Element, ElementKind, MediaItem, MediaKind, Project, TextStyle,
    },
};

/// Fixed magnification of the blurred background layer, hiding edge artifacts
/// introduced by the blur.
const BLUR_BACKDROP_SCALE: f64 = 1.1;

/// Z band where text layers start; text always paints above media.
const TEXT_Z_BASE: i32 = 100;

#[derive(Clone, Debug, serde::Serialize)]
/// One composed preview frame: a z-ordered draw list plus an optional
/// advisory for the surrounding UI.
pub struct Frame {
    /// Layers sorted by ascending z; earlier entries paint first.
    pub layers: Vec<Layer>,
    /// Degraded-condition signal, if any. Not an error.
    pub advisory: Option<FrameAdvisory>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Non-error conditions the surrounding UI may want to surface inline.
pub enum FrameAdvisory {
    /// No element is active at the composed timestamp.
    NoActiveElements,
    /// A blurred background was requested but no eligible source is active.
    BlurSourceMissing,
}

#[derive(Clone, Debug, serde::Serialize)]
/// A positioned, z-ordered layer descriptor for an external renderer.
///
/// The compositor performs no I/O; it only computes descriptors.
pub struct Layer {
    /// Paint order; higher z paints above lower z.
    pub z: i32,
    /// Opacity in `[0, 1]`, applied directly by the renderer.
    pub opacity: f64,
    /// Whether the layer participates in pointer interaction.
    pub interactive: bool,
    /// What to draw.
    pub content: LayerContent,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Layer payload variants.
pub enum LayerContent {
    /// Full-canvas blurred backdrop sourced from the first blur candidate in
    /// resolver order. Never interactive.
    BlurBackdrop {
        /// Source media reference.
        media: MediaRef,
        /// Blur radius, caller-defined unit.
        blur_radius: f64,
        /// Magnification applied to hide blur edge artifacts.
        scale: f64,
    },
    /// Full-canvas video surface using the player's native fit.
    Video {
        /// Source media reference.
        media: MediaRef,
        /// Clip-timing parameters for the external video player.
        clip: ClipTiming,
        /// Mute flag inherited from the owning track.
        muted: bool,
    },
    /// Full-canvas image, letterboxed to preserve its aspect.
    Image {
        /// Source media reference.
        media: MediaRef,
        /// Placement policy within the canvas.
        fit: ObjectFit,
    },
    /// Non-visual layer so an external audio player can be attached; emits no
    /// pixels.
    Audio {
        /// Source media reference.
        media: MediaRef,
        /// Clip-timing parameters for the external audio player.
        clip: ClipTiming,
        /// Mute flag inherited from the owning track.
        muted: bool,
    },
    /// Full-canvas decorative fallback for sentinel or unresolved media.
    Placeholder {
        /// Id of the element that failed to resolve.
        element_id: String,
        /// Element display name, for the fallback caption.
        name: String,
    },
    /// Positioned, scaled, rotated text.
    Text {
        /// UTF-8 text content.
        content: String,
        /// Typography settings forwarded to the renderer.
        style: TextStyle,
        /// On-canvas placement.
        placement: TextPlacement,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// How a full-canvas media layer maps its pixels onto the canvas.
pub enum ObjectFit {
    /// Letterbox: scale to fit entirely within the canvas.
    Contain,
    /// Crop: scale to cover the whole canvas.
    Cover,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Content reference handed to an external media player.
pub struct MediaRef {
    /// Catalog id of the media item.
    pub media_id: String,
    /// Source URL.
    pub url: String,
    /// Optional poster/thumbnail URL.
    pub thumbnail_url: Option<String>,
}

impl MediaRef {
    fn from_item(item: &MediaItem) -> Self {
        Self {
            media_id: item.id.clone(),
            url: item.url.clone(),
            thumbnail_url: item.thumbnail_url.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Clip-timing parameters accepted by the external player collaborators.
pub struct ClipTiming {
    /// Element position on the global timeline, in seconds.
    pub clip_start_time: f64,
    /// Leading trim in seconds.
    pub trim_start: f64,
    /// Trailing trim in seconds.
    pub trim_end: f64,
    /// Untrimmed clip duration in seconds.
    pub clip_duration: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// On-canvas placement of a text layer.
///
/// Percentages are relative to the canvas box; `(50, 50)` is the canvas
/// center. The uniform scale maps canvas-space font sizes to preview pixels.
pub struct TextPlacement {
    /// Horizontal anchor position in percent of canvas width.
    pub left_pct: f64,
    /// Vertical anchor position in percent of canvas height.
    pub top_pct: f64,
    /// Uniform scale factor `preview_width / canvas_width`.
    pub scale: f64,
    /// Rotation in degrees, clockwise positive.
    pub rotation_deg: f64,
}

/// Compose the resolved active set into a z-ordered draw list.
///
/// Media and placeholder layers keep resolver order (`z = resolver index`);
/// text layers always paint above all media (`z = 100 + resolver index`). A
/// blurred backdrop, when requested and sourceable, sits below everything and
/// never receives interaction.
#[tracing::instrument(skip_all, fields(active = active.len()))]
pub fn compose_frame(
    active: &[ActiveElement<'_>],
    candidates: &[ActiveElement<'_>],
    project: &Project,
    preview: PreviewDimensions,
) -> Frame {
    if active.is_empty() {
        return Frame {
            layers: Vec::new(),
            advisory: Some(FrameAdvisory::NoActiveElements),
        };
    }

    let mut layers = Vec::with_capacity(active.len() + 1);
    let mut advisory = None;

    if project.background == BackgroundType::Blur {
        // Deterministic "primary" choice: the first candidate in resolver
        // order, not the topmost or nearest-to-playhead.
        match candidates.first().and_then(|c| c.media) {
            Some(item) => layers.push(Layer {
                z: -1,
                opacity: 1.0,
                interactive: false,
                content: LayerContent::BlurBackdrop {
                    media: MediaRef::from_item(item),
                    blur_radius: project.blur_intensity,
                    scale: BLUR_BACKDROP_SCALE,
                },
            }),
            None => advisory = Some(FrameAdvisory::BlurSourceMissing),
        }
    }

    for (index, ae) in active.iter().enumerate() {
        layers.push(compose_element(ae, index, project, preview));
    }

    layers.sort_by_key(|l| l.z);

    Frame { layers, advisory }
}

fn compose_element(
    ae: &ActiveElement<'_>,
    resolver_index: usize,
    project: &Project,
    preview: PreviewDimensions,
) -> Layer {
    let el = ae.element;
    let media_z = resolver_index as i32;

    let (z, content) = match &el.kind {
        ElementKind::Media { .. } => {
            let content = match ae.media {
                Some(item) => match item.kind {
                    MediaKind::Video => LayerContent::Video {
                        media: MediaRef::from_item(item),
                        clip: clip_timing(el),
                        muted: ae.track.muted,
                    },
                    MediaKind::Image => LayerContent::Image {
                        media: MediaRef::from_item(item),
                        fit: ObjectFit::Contain,
                    },
                    MediaKind::Audio => LayerContent::Audio {
                        media: MediaRef::from_item(item),
                        clip: clip_timing(el),
                        muted: ae.track.muted,
                    },
                },
                None => LayerContent::Placeholder {
                    element_id: el.id.clone(),
                    name: el.name.clone(),
                },
            };
            (media_z, content)
        }
        ElementKind::Text { content, style } => {
            let canvas_w = f64::from(project.canvas.width);
            let canvas_h = f64::from(project.canvas.height);
            let placement = TextPlacement {
                left_pct: 50.0 + el.offset.x / canvas_w * 100.0,
                top_pct: 50.0 + el.offset.y / canvas_h * 100.0,
                scale: preview.width / canvas_w,
                rotation_deg: el.rotation_deg,
            };
            (
                TEXT_Z_BASE + media_z,
                LayerContent::Text {
                    content: content.clone(),
                    style: style.clone(),
                    placement,
                },
            )
        }
    };

    Layer {
        z,
        opacity: el.opacity,
        interactive: true,
        content,
    }
}

fn clip_timing(el: &Element) -> ClipTiming {
    ClipTiming {
        clip_start_time: el.start_time,
        trim_start: el.trim_start,
        trim_end: el.trim_end,
        clip_duration: el.duration,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/frame.rs"]
mod tests;
