//! Constants used throughout the crate

/// Landmark index of the left eye outer corner in the face-landmark model output
pub const LANDMARK_LEFT_OUTER: usize = 37;

/// Landmark index of the left eye inner corner
pub const LANDMARK_LEFT_INNER: usize = 40;

/// Landmark index of the right eye inner corner
pub const LANDMARK_RIGHT_INNER: usize = 43;

/// Landmark index of the right eye outer corner
pub const LANDMARK_RIGHT_OUTER: usize = 46;

/// Highest tracked index; frames must hold more than this many landmarks
pub const LANDMARK_MAX: usize = LANDMARK_RIGHT_OUTER;

/// Sampling window length in milliseconds
pub const DEFAULT_WINDOW_MS: i64 = 1000;

/// Net displacement at or below which the head counts as still
pub const DEFAULT_MOTION_THRESHOLD: f32 = 0.01;

/// Overlay labels for each gesture state
pub const LABEL_YES: &str = "YES";
pub const LABEL_NO: &str = "NO";
pub const LABEL_NADA: &str = "NADA";
