//! Edge case tests for the gesture window: jitter, odd values and timestamps

mod test_helpers;

use head_gesture::{
    gesture_window::{GestureState, GestureWindow, WindowPhase},
    landmarks::Landmark,
};
use test_helpers::{centered_face, EYES};

#[test]
fn test_tracking_jitter_stays_still() {
    let mut window = GestureWindow::default();
    let face = centered_face();

    let mut t = 0;
    for _ in 0..20 {
        let mut jittered = face.clone();
        for i in EYES {
            // Net jitter over four points stays within +-0.004
            jittered[i].x += (rand::random::<f32>() - 0.5) * 0.002;
            jittered[i].y += (rand::random::<f32>() - 0.5) * 0.002;
        }
        window.on_frame(&face, t);
        window.on_frame(&jittered, t + 1001);
        t += 2000;
        assert_eq!(window.current_state(), GestureState::None);
    }
}

#[test]
fn test_non_finite_landmarks_do_not_panic() {
    let mut window = GestureWindow::default();
    let face = centered_face();
    let mut broken = face.clone();
    broken[EYES[0]] = Landmark::new(f32::NAN, f32::INFINITY, 0.0);

    window.on_frame(&face, 0);
    window.on_frame(&broken, 1001);
    let committed = window.on_frame(&face, 1002);
    // NaN compares false on every branch and falls to the tie policy
    assert!(committed.is_some());
}

#[test]
fn test_extreme_timestamps() {
    let mut window = GestureWindow::default();
    let face = centered_face();
    window.on_frame(&face, i64::MIN);
    window.on_frame(&face, i64::MAX);
    assert_eq!(window.phase(), WindowPhase::AwaitingBaseline);

    let mut window = GestureWindow::default();
    window.on_frame(&face, i64::MAX);
    window.on_frame(&face, i64::MIN);
    assert_eq!(window.phase(), WindowPhase::Accumulating);
}

#[test]
fn test_repeated_timestamps_never_close() {
    let mut window = GestureWindow::default();
    let face = centered_face();
    for _ in 0..1000 {
        window.on_frame(&face, 10);
    }
    assert_eq!(window.phase(), WindowPhase::Accumulating);
    assert_eq!(window.frames_in_window(), 999);
}

#[test]
fn test_minimum_length_frame_is_evaluated() {
    let mut window = GestureWindow::default();
    let face = vec![Landmark::new(0.5, 0.5, 0.0); 47];
    let mut moved = face.clone();
    moved[46].x += 0.05;

    window.on_frame(&face, 0);
    window.on_frame(&moved, 1001);
    assert_eq!(window.on_frame(&moved, 1002), Some(GestureState::Shake));
}
