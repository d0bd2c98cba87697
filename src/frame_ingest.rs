//! Gate between the face tracker and the gesture window.

use crate::{
    constants::LANDMARK_MAX,
    gesture_window::GestureWindow,
    landmarks::{Landmark, TrackedLandmarks, TrackingResult},
};
use log::trace;

/// Drops frames too short to contain the tracked eye landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameIngest {
    max_index: usize,
}

impl Default for FrameIngest {
    fn default() -> Self {
        Self { max_index: LANDMARK_MAX }
    }
}

impl FrameIngest {
    /// Ingest gate for the given tracked landmarks
    #[must_use]
    pub fn new(tracked: &TrackedLandmarks) -> Self {
        Self {
            max_index: tracked.max_index(),
        }
    }

    /// Forward `frame` to `window` if it holds more than `max_index` landmarks.
    ///
    /// Returns whether the frame was forwarded.
    pub fn ingest(&self, window: &mut GestureWindow, frame: &[Landmark], timestamp_ms: i64) -> bool {
        if frame.len() <= self.max_index {
            trace!(
                "Skipping frame at {}: {} landmarks, need more than {}",
                timestamp_ms,
                frame.len(),
                self.max_index
            );
            return false;
        }

        window.on_frame(frame, timestamp_ms);
        true
    }

    /// Forward the first face of `result`; no faces is a no-op
    pub fn ingest_result(&self, window: &mut GestureWindow, result: &TrackingResult) -> bool {
        result
            .first_face()
            .is_some_and(|face| self.ingest(window, face, result.timestamp_ms))
    }
}
