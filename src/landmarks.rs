//! Landmark data delivered by the external face tracker.

use crate::constants::{LANDMARK_LEFT_INNER, LANDMARK_LEFT_OUTER, LANDMARK_RIGHT_INNER, LANDMARK_RIGHT_OUTER};
use serde::{Deserialize, Serialize};

/// A single normalized facial keypoint
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Landmark {
    /// Horizontal position, 0.0 = left edge, 1.0 = right edge
    pub x: f32,
    /// Vertical position, 0.0 = top edge, 1.0 = bottom edge
    pub y: f32,
    /// Relative depth
    pub z: f32,
}

impl Landmark {
    /// Create a landmark from its coordinates
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Landmark {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Landmark> for [f32; 3] {
    fn from(l: Landmark) -> Self {
        [l.x, l.y, l.z]
    }
}

/// All landmarks of one face at one frame, indexed positionally
pub type LandmarkFrame = Vec<Landmark>;

/// The four eye-region landmarks used as the gesture signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedLandmarks {
    /// Left eye outer corner
    pub left_outer: usize,
    /// Left eye inner corner
    pub left_inner: usize,
    /// Right eye inner corner
    pub right_inner: usize,
    /// Right eye outer corner
    pub right_outer: usize,
}

impl Default for TrackedLandmarks {
    fn default() -> Self {
        Self {
            left_outer: LANDMARK_LEFT_OUTER,
            left_inner: LANDMARK_LEFT_INNER,
            right_inner: LANDMARK_RIGHT_INNER,
            right_outer: LANDMARK_RIGHT_OUTER,
        }
    }
}

impl TrackedLandmarks {
    /// Indices in left-outer, left-inner, right-inner, right-outer order
    #[must_use]
    pub const fn indices(&self) -> [usize; 4] {
        [self.left_outer, self.left_inner, self.right_inner, self.right_outer]
    }

    /// Highest tracked index; a frame needs `max_index() + 1` landmarks
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.indices().into_iter().max().unwrap_or(0)
    }

    /// Whether `frame` is long enough to read every tracked landmark
    #[must_use]
    pub fn covered_by(&self, frame: &[Landmark]) -> bool {
        frame.len() > self.max_index()
    }
}

/// Output of the face tracker for one processed image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingResult {
    /// One landmark frame per detected face; only the first is evaluated
    pub faces: Vec<LandmarkFrame>,
    /// Capture time of the image in milliseconds
    pub timestamp_ms: i64,
}

impl TrackingResult {
    /// Result holding a single face
    #[must_use]
    pub fn single(face: LandmarkFrame, timestamp_ms: i64) -> Self {
        Self {
            faces: vec![face],
            timestamp_ms,
        }
    }

    /// First detected face, if any
    #[must_use]
    pub fn first_face(&self) -> Option<&[Landmark]> {
        self.faces.first().map(Vec::as_slice)
    }
}
