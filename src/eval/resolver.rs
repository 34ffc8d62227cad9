use crate::timeline::model::{Element, ElementKind, MediaCatalog, MediaItem, MediaKind, Track};

#[derive(Clone, Copy, Debug)]
/// An element active at one resolved instant.
///
/// Derived, ephemeral view borrowed from the timeline for the duration of one
/// resolve→compose pass; never persisted.
pub struct ActiveElement<'a> {
    /// The active element.
    pub element: &'a Element,
    /// The track owning the element.
    pub track: &'a Track,
    /// Resolved catalog entry for media elements; `None` for text elements and
    /// for sentinel or unresolved media ids (placeholder policy, not an
    /// error).
    pub media: Option<&'a MediaItem>,
    /// Index of the owning track in the track list.
    pub track_index: usize,
    /// Index of the element within its track.
    pub element_index: usize,
}

/// Resolve the elements active at `timestamp`.
///
/// Iterates tracks in stored order and elements in stored order within each
/// track, emitting every element whose activity interval contains the
/// timestamp. Output ordering is the `(track, element)` input order; paint
/// re-ordering is the compositor's job.
///
/// Pure function of its inputs; safe to call on every tick while playing.
#[tracing::instrument(skip(tracks, catalog))]
pub fn resolve_active<'a>(
    tracks: &'a [Track],
    catalog: &'a MediaCatalog,
    timestamp: f64,
) -> Vec<ActiveElement<'a>> {
    let mut active = Vec::new();
    for (track_index, track) in tracks.iter().enumerate() {
        for (element_index, element) in track.elements.iter().enumerate() {
            if !element.is_active_at(timestamp) {
                continue;
            }
            let media = match &element.kind {
                ElementKind::Media { media_id } => catalog.resolve(media_id),
                ElementKind::Text { .. } => None,
            };
            active.push(ActiveElement {
                element,
                track,
                media,
                track_index,
                element_index,
            });
        }
    }
    tracing::debug!(count = active.len(), "resolved active elements");
    active
}

/// Filter the resolved set down to blur-background candidates.
///
/// Candidates are media elements whose catalog entry resolved to a video or
/// image; the sentinel id is excluded by construction since it never
/// resolves. Used only when the project background is
/// [`crate::BackgroundType::Blur`].
pub fn blur_candidates<'a>(active: &[ActiveElement<'a>]) -> Vec<ActiveElement<'a>> {
    active
        .iter()
        .filter(|ae| {
            matches!(
                ae.media.map(|m| m.kind),
                Some(MediaKind::Video) | Some(MediaKind::Image)
            )
        })
        .copied()
        .collect()
}

/// Total timeline duration: the furthest effective element end across all
/// tracks, or `0.0` for an empty timeline.
pub fn total_duration(tracks: &[Track]) -> f64 {
    tracks
        .iter()
        .flat_map(|t| t.elements.iter())
        .map(Element::end_time)
        .fold(0.0, f64::max)
}

/// Whether the timeline has any elements at all.
///
/// Scrubbing and transport controls are disabled entirely on an empty
/// timeline; this is a precondition, not an error.
pub fn has_elements(tracks: &[Track]) -> bool {
    tracks.iter().any(|t| !t.elements.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/eval/resolver.rs"]
mod tests;
