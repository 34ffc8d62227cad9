use super::*;
use crate::foundation::core::Vec2;
use crate::timeline::model::{Element, ElementKind};

fn timeline(total_secs: f64) -> Vec<Track> {
    vec![Track {
        id: "t0".to_string(),
        name: String::new(),
        muted: false,
        elements: vec![Element {
            id: "e0".to_string(),
            name: String::new(),
            start_time: 0.0,
            duration: total_secs,
            trim_start: 0.0,
            trim_end: 0.0,
            opacity: 1.0,
            rotation_deg: 0.0,
            offset: Vec2::ZERO,
            kind: ElementKind::Media {
                media_id: "vid".to_string(),
            },
        }],
    }]
}

fn controller(total_secs: f64, fps: Fps) -> ScrubController {
    ScrubController::new(&timeline(total_secs), fps).unwrap()
}

fn key(k: PreviewKey) -> KeyInput {
    KeyInput {
        key: k,
        frame_step: false,
        text_input_focused: false,
    }
}

#[test]
fn empty_timeline_disables_the_controller() {
    assert!(ScrubController::new(&[], Fps::new(30, 1).unwrap()).is_none());
    let empty_track = vec![Track {
        id: "t0".to_string(),
        name: String::new(),
        muted: false,
        elements: vec![],
    }];
    assert!(ScrubController::new(&empty_track, Fps::new(30, 1).unwrap()).is_none());
}

#[test]
fn click_seek_maps_pointer_to_time() {
    let ctl = controller(10.0, Fps::new(30, 1).unwrap());
    // Track of width 200 starting at x=0.
    assert_eq!(ctl.click_seek(50.0, 0.0, 200.0), 2.5);
    assert_eq!(ctl.click_seek(250.0, 0.0, 200.0), 10.0); // clamped high
    assert_eq!(ctl.click_seek(-10.0, 0.0, 200.0), 0.0); // clamped low
}

#[test]
fn click_seek_accounts_for_track_origin() {
    let ctl = controller(10.0, Fps::new(30, 1).unwrap());
    assert_eq!(ctl.click_seek(150.0, 100.0, 200.0), 2.5);
}

#[test]
fn drag_applies_the_click_formula_from_the_first_position() {
    let ctl = controller(10.0, Fps::new(30, 1).unwrap());
    let session = ctl.begin_drag(0.0, 200.0);
    // No dead zone: the pointer-down position itself seeks.
    assert_eq!(session.seek_at(50.0), 2.5);
    assert_eq!(session.seek_at(60.0), 3.0);
    assert_eq!(session.seek_at(1000.0), 10.0);
}

#[test]
fn zero_width_track_never_divides_by_zero() {
    let ctl = controller(10.0, Fps::new(30, 1).unwrap());
    assert_eq!(ctl.click_seek(50.0, 0.0, 0.0), 0.0);
}

#[test]
fn arrows_step_one_second_clamped() {
    let ctl = controller(10.0, Fps::new(24, 1).unwrap());
    assert_eq!(
        ctl.handle_key(key(PreviewKey::ArrowRight), 0.0),
        Some(PreviewAction::Seek(1.0))
    );
    assert_eq!(
        ctl.handle_key(key(PreviewKey::ArrowRight), 9.7),
        Some(PreviewAction::Seek(10.0))
    );
    assert_eq!(
        ctl.handle_key(key(PreviewKey::ArrowLeft), 0.3),
        Some(PreviewAction::Seek(0.0))
    );
}

#[test]
fn modifier_steps_exactly_one_frame() {
    let ctl = controller(10.0, Fps::new(24, 1).unwrap());
    let input = KeyInput {
        key: PreviewKey::ArrowRight,
        frame_step: true,
        text_input_focused: false,
    };
    assert_eq!(
        ctl.handle_key(input, 0.0),
        Some(PreviewAction::Seek(1.0 / 24.0))
    );
}

#[test]
fn home_end_jump_to_bounds() {
    let ctl = controller(10.0, Fps::new(30, 1).unwrap());
    assert_eq!(
        ctl.handle_key(key(PreviewKey::Home), 5.0),
        Some(PreviewAction::Seek(0.0))
    );
    assert_eq!(
        ctl.handle_key(key(PreviewKey::End), 5.0),
        Some(PreviewAction::Seek(10.0))
    );
}

#[test]
fn space_toggles_and_escape_exits_fullscreen() {
    let ctl = controller(10.0, Fps::new(30, 1).unwrap());
    assert_eq!(
        ctl.handle_key(key(PreviewKey::Space), 0.0),
        Some(PreviewAction::TogglePlay)
    );
    assert_eq!(
        ctl.handle_key(key(PreviewKey::Escape), 0.0),
        Some(PreviewAction::ExitFullscreen)
    );
}

#[test]
fn focused_text_input_suppresses_all_bindings() {
    let ctl = controller(10.0, Fps::new(30, 1).unwrap());
    for k in [
        PreviewKey::Space,
        PreviewKey::ArrowLeft,
        PreviewKey::ArrowRight,
        PreviewKey::Home,
        PreviewKey::End,
        PreviewKey::Escape,
    ] {
        let input = KeyInput {
            key: k,
            frame_step: false,
            text_input_focused: true,
        };
        assert_eq!(ctl.handle_key(input, 5.0), None);
    }
}
