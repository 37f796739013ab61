mod common;

use turntable_core::frames::AvailableFrames;
use turntable_core::navigation::{
    drag_steps, slider_index, step_within, track_ratio, NavKey, NavigationState,
};
use turntable_core::viewer::FrameViewer;

use common::{ok, two_color_config};

fn frames(indices: &[u32]) -> AvailableFrames {
    indices.iter().copied().collect()
}

/// Viewer on `red` with frames [2, 5, 9] loaded and the pass complete.
fn ready_viewer() -> FrameViewer {
    let mut viewer = FrameViewer::new(&two_color_config()).unwrap();
    let requests = viewer.start();
    for req in requests {
        if [2, 5, 9].contains(&req.index) {
            viewer.apply(ok("red", req.index));
        } else {
            viewer.apply(common::missing("red", req.index));
        }
    }
    viewer
}

#[test]
fn test_next_wraps_to_start() {
    let set = frames(&[2, 5, 9]);
    assert_eq!(step_within(&set, Some(9), 1), Some(2));
}

#[test]
fn test_previous_wraps_to_end() {
    let set = frames(&[2, 5, 9]);
    assert_eq!(step_within(&set, Some(2), -1), Some(9));
}

#[test]
fn test_large_steps_wrap() {
    let set = frames(&[2, 5, 9]);
    assert_eq!(step_within(&set, Some(2), 4), Some(5));
    assert_eq!(step_within(&set, Some(2), -7), Some(9));
}

#[test]
fn test_step_from_unknown_snaps_to_first() {
    let set = frames(&[2, 5, 9]);
    assert_eq!(step_within(&set, Some(3), 1), Some(2));
    assert_eq!(step_within(&set, None, -1), Some(2));
}

#[test]
fn test_step_on_empty_is_none() {
    assert_eq!(step_within(&AvailableFrames::new(), Some(1), 1), None);
}

#[test]
fn test_step_extreme_deltas_wrap() {
    let set = frames(&[2, 5, 9]);
    assert_eq!(step_within(&set, Some(5), i64::MAX), Some(9));
    assert_eq!(step_within(&set, Some(5), i64::MIN), Some(9));
    assert_eq!(step_within(&set, Some(9), i64::MAX), Some(2));
}

#[test]
fn test_huge_sensitivity_drag_stays_in_range() {
    let set = frames(&[2, 5, 9]);
    let mut nav = NavigationState::default();
    assert!(nav.begin_drag(0.0));
    let steps = nav.drag_to(1.0, 1e30);
    assert_eq!(steps, i64::MAX);
    assert_eq!(step_within(&set, Some(5), steps), Some(9));
}

#[test]
fn test_slider_index_mapping() {
    assert_eq!(slider_index(5, 0.0), Some(0));
    assert_eq!(slider_index(5, 0.49), Some(1));
    assert_eq!(slider_index(5, 0.5), Some(2));
    assert_eq!(slider_index(5, 1.0), Some(4));
    assert_eq!(slider_index(5, 1.7), Some(4));
    assert_eq!(slider_index(5, -0.3), Some(0));
    assert_eq!(slider_index(1, 0.8), Some(0));
    assert_eq!(slider_index(0, 0.5), None);
}

#[test]
fn test_track_ratio_clamps() {
    assert_eq!(track_ratio(150.0, 100.0, 200.0), 0.25);
    assert_eq!(track_ratio(50.0, 100.0, 200.0), 0.0);
    assert_eq!(track_ratio(400.0, 100.0, 200.0), 1.0);
    assert_eq!(track_ratio(10.0, 0.0, 0.0), 0.0);
}

#[test]
fn test_drag_steps_truncate_toward_zero() {
    assert_eq!(drag_steps(25.0, 0.1), 2);
    assert_eq!(drag_steps(-25.0, 0.1), -2);
    assert_eq!(drag_steps(9.0, 0.1), 0);
}

#[test]
fn test_slow_drag_accumulates() {
    let mut nav = NavigationState::default();
    assert!(nav.begin_drag(0.0));
    assert_eq!(nav.drag_to(6.0, 0.1), 0);
    assert_eq!(nav.drag_to(12.0, 0.1), 1);
    assert_eq!(nav.last_x, 12.0);
}

#[test]
fn test_drag_ignored_while_slider_held() {
    let mut nav = NavigationState::default();
    nav.begin_slider();
    assert!(!nav.begin_drag(0.0));
    assert_eq!(nav.drag_to(100.0, 0.1), 0);
    nav.end_slider();
    assert!(nav.begin_drag(0.0));
    assert_eq!(nav.drag_to(30.0, 0.1), 3);
}

#[test]
fn test_viewer_keyboard_wraparound() {
    let mut viewer = ready_viewer();
    assert_eq!(viewer.current_frame(), Some(2));

    viewer.key(NavKey::ArrowLeft);
    assert_eq!(viewer.current_frame(), Some(9));
    viewer.key(NavKey::ArrowRight);
    assert_eq!(viewer.current_frame(), Some(2));
    viewer.key(NavKey::ArrowRight);
    assert_eq!(viewer.current_frame(), Some(5));
}

#[test]
fn test_viewer_drag_moves_within_available() {
    let mut viewer = ready_viewer();
    viewer.drag_start(100.0);
    viewer.drag_move(120.0);
    assert_eq!(viewer.current_frame(), Some(9));
    viewer.drag_move(130.0);
    assert_eq!(viewer.current_frame(), Some(2));
    viewer.drag_move(110.0);
    assert_eq!(viewer.current_frame(), Some(5));
    viewer.drag_end();
    assert!(!viewer.navigation().dragging);

    viewer.drag_move(300.0);
    assert_eq!(viewer.current_frame(), Some(5));
}

#[test]
fn test_viewer_slider_suppresses_drag() {
    let mut viewer = ready_viewer();
    viewer.slider_press(1.0);
    assert_eq!(viewer.current_frame(), Some(9));

    viewer.drag_start(0.0);
    viewer.drag_move(100.0);
    assert_eq!(viewer.current_frame(), Some(9));

    viewer.slider_move(0.5);
    assert_eq!(viewer.current_frame(), Some(5));
    viewer.slider_release();

    viewer.slider_move(0.0);
    assert_eq!(viewer.current_frame(), Some(5));
}

#[test]
fn test_every_operation_keeps_current_available() {
    let mut viewer = ready_viewer();
    let ops: Vec<Box<dyn Fn(&mut FrameViewer)>> = vec![
        Box::new(|v| v.next()),
        Box::new(|v| v.previous()),
        Box::new(|v| v.slider_seek(0.33)),
        Box::new(|v| v.slider_seek(0.99)),
        Box::new(|v| {
            v.drag_start(0.0);
            v.drag_move(-47.0);
            v.drag_end();
        }),
        Box::new(|v| v.key(NavKey::ArrowRight)),
        Box::new(|v| v.jump_to_position(42)),
    ];
    for round in 0..3 {
        for op in &ops {
            op(&mut viewer);
            let current = viewer.current_frame().unwrap();
            assert!(viewer.available().contains(current), "round {round}: {current}");
        }
    }
}

#[test]
fn test_navigation_noop_when_empty() {
    let mut viewer = FrameViewer::new(&two_color_config()).unwrap();
    for req in viewer.start() {
        viewer.apply(common::missing("red", req.index));
    }
    viewer.next();
    viewer.slider_press(0.5);
    viewer.drag_start(0.0);
    viewer.drag_move(100.0);
    assert_eq!(viewer.current_frame(), None);
    assert!(!viewer.navigation().slider_dragging);
}
