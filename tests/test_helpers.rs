//! Helper functions and utilities for tests
#![allow(dead_code)]

use head_gesture::{
    constants::{LANDMARK_LEFT_INNER, LANDMARK_LEFT_OUTER, LANDMARK_RIGHT_INNER, LANDMARK_RIGHT_OUTER},
    landmarks::{Landmark, LandmarkFrame},
};

/// Number of landmarks in a full face-landmark model output
pub const FULL_FACE: usize = 478;

/// Tracked eye-corner indices in default order
pub const EYES: [usize; 4] = [LANDMARK_LEFT_OUTER, LANDMARK_LEFT_INNER, LANDMARK_RIGHT_INNER, LANDMARK_RIGHT_OUTER];

/// A face with every landmark at the image center
pub fn centered_face() -> LandmarkFrame {
    vec![Landmark::new(0.5, 0.5, 0.0); FULL_FACE]
}

/// A face with every landmark at the origin; deltas from it are exact
pub fn origin_face() -> LandmarkFrame {
    vec![Landmark::default(); FULL_FACE]
}

/// Copy of `face` with the eye landmarks moved by a net `(dx, dy)`, spread evenly
pub fn shifted(face: &[Landmark], dx: f32, dy: f32) -> LandmarkFrame {
    let mut out = face.to_vec();
    for i in EYES {
        out[i].x += dx / 4.0;
        out[i].y += dy / 4.0;
    }
    out
}

/// Copy of `face` with only the left outer eye corner moved by `(dx, dy)`
pub fn nudged(face: &[Landmark], dx: f32, dy: f32) -> LandmarkFrame {
    let mut out = face.to_vec();
    out[LANDMARK_LEFT_OUTER].x += dx;
    out[LANDMARK_LEFT_OUTER].y += dy;
    out
}
