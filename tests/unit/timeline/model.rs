use super::*;
use crate::foundation::core::{Canvas, Fps};

fn media_element(id: &str, start: f64, duration: f64, trim_start: f64, trim_end: f64) -> Element {
    Element {
        id: id.to_string(),
        name: String::new(),
        start_time: start,
        duration,
        trim_start,
        trim_end,
        opacity: 1.0,
        rotation_deg: 0.0,
        offset: Vec2::ZERO,
        kind: ElementKind::Media {
            media_id: "clip-1".to_string(),
        },
    }
}

#[test]
fn activity_interval_end_is_exclusive() {
    let el = media_element("e0", 2.0, 3.0, 0.0, 0.0);
    assert!(!el.is_active_at(1.999));
    assert!(el.is_active_at(2.0));
    assert!(el.is_active_at(4.999));
    assert!(!el.is_active_at(5.0));
}

#[test]
fn trims_shorten_the_active_window() {
    let el = media_element("e0", 10.0, 5.0, 1.0, 1.5);
    assert_eq!(el.effective_duration(), 2.5);
    assert_eq!(el.end_time(), 12.5);
    assert!(el.is_active_at(12.499));
    assert!(!el.is_active_at(12.5));
}

#[test]
fn fully_trimmed_element_is_never_active() {
    let el = media_element("e0", 0.0, 2.0, 1.0, 1.0);
    assert_eq!(el.effective_duration(), 0.0);
    assert!(!el.is_active_at(0.0));
}

#[test]
fn element_validation_rejects_bad_data() {
    let mut el = media_element("e0", 0.0, 2.0, 1.5, 1.0);
    assert!(el.validate().is_err()); // trims exceed duration

    el = media_element("e0", 0.0, 2.0, 0.0, 0.0);
    el.opacity = 1.5;
    assert!(el.validate().is_err());

    el = media_element("e0", f64::NAN, 2.0, 0.0, 0.0);
    assert!(el.validate().is_err());

    el = media_element("", 0.0, 2.0, 0.0, 0.0);
    assert!(el.validate().is_err());

    assert!(media_element("e0", 0.0, 2.0, 0.5, 0.5).validate().is_ok());
}

#[test]
fn media_id_must_be_non_empty() {
    let mut el = media_element("e0", 0.0, 1.0, 0.0, 0.0);
    el.kind = ElementKind::Media {
        media_id: " ".to_string(),
    };
    assert!(el.validate().is_err());
}

#[test]
fn catalog_never_resolves_the_sentinel() {
    let catalog = MediaCatalog::from_items([
        MediaItem {
            id: TEST_MEDIA_ID.to_string(),
            name: String::new(),
            kind: MediaKind::Video,
            url: "file:///never.mp4".to_string(),
            thumbnail_url: None,
        },
        MediaItem {
            id: "clip-1".to_string(),
            name: "Clip".to_string(),
            kind: MediaKind::Video,
            url: "file:///clip.mp4".to_string(),
            thumbnail_url: None,
        },
    ]);
    assert!(catalog.resolve(TEST_MEDIA_ID).is_none());
    assert!(catalog.resolve("missing").is_none());
    assert_eq!(catalog.resolve("clip-1").unwrap().name, "Clip");
}

#[test]
fn project_validation() {
    let mut project = Project {
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
        background: BackgroundType::Blur,
        background_color_rgba8: [0, 0, 0, 255],
        blur_intensity: 8.0,
        fps: Fps::new(30, 1).unwrap(),
    };
    assert!(project.validate().is_ok());

    project.blur_intensity = -1.0;
    assert!(project.validate().is_err());

    project.blur_intensity = 8.0;
    project.canvas.height = 0;
    assert!(project.validate().is_err());
}

#[test]
fn timeline_validation_visits_all_tracks() {
    let good = Track {
        id: "t0".to_string(),
        name: String::new(),
        muted: false,
        elements: vec![media_element("e0", 0.0, 1.0, 0.0, 0.0)],
    };
    let bad = Track {
        id: "t1".to_string(),
        name: String::new(),
        muted: false,
        elements: vec![media_element("e1", 0.0, 1.0, 2.0, 0.0)],
    };
    assert!(validate_timeline(&[good.clone()]).is_ok());
    assert!(validate_timeline(&[good, bad]).is_err());
}
