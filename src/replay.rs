//! Replay of recorded landmark streams through an overlay session.

use crate::{
    error::{Error, Result},
    gesture_window::GestureState,
    landmarks::{LandmarkFrame, TrackingResult},
    overlay::{OverlaySession, RunningMode},
};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Recorded landmark stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Frames in delivery order
    pub frames: Vec<RecordedFrame>,
}

/// One recorded tracker output; no landmarks means tracking was lost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Capture time in milliseconds
    pub timestamp_ms: i64,
    /// Landmarks of the first face as `[x, y, z]` triplets
    #[serde(default)]
    pub landmarks: LandmarkFrame,
}

impl Recording {
    /// Load a recording from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parse a recording from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::InvalidInput(format!("Failed to parse recording: {}", e)))
    }
}

/// A gesture change observed during replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Timestamp of the frame that caused the change
    pub timestamp_ms: i64,
    /// Newly committed gesture
    pub state: GestureState,
}

/// Feed every frame of `recording` through `session`, collecting gesture changes
pub fn replay(session: &mut OverlaySession, recording: &Recording) -> Result<Vec<Transition>> {
    let mut transitions = Vec::new();
    let mut last = session.current_state();

    for frame in &recording.frames {
        let faces = if frame.landmarks.is_empty() {
            Vec::new()
        } else {
            vec![frame.landmarks.clone()]
        };
        let result = TrackingResult {
            faces,
            timestamp_ms: frame.timestamp_ms,
        };
        session.set_result(result, 1, 1, 1, 1, RunningMode::Video)?;

        let state = session.current_state();
        if state != last {
            transitions.push(Transition {
                timestamp_ms: frame.timestamp_ms,
                state,
            });
            last = state;
        }
    }

    info!(
        "Replayed {} frames, {} gesture changes",
        recording.frames.len(),
        transitions.len()
    );
    Ok(transitions)
}
