//! Timed sampling state machine that classifies head gestures.
//!
//! Once per window the detector captures a baseline landmark frame. The first
//! frame arriving more than `window_ms` after the capture closes the window:
//! the net horizontal and vertical displacement of the four eye landmarks is
//! summed and compared. Horizontal motion dominating means a head shake,
//! vertical motion dominating means a nod.
//!
//! With [`ClassificationTiming::Deferred`] the outcome of a window is
//! committed when the following baseline is captured, so the overlay shows
//! each gesture one window late. [`ClassificationTiming::Immediate`] commits
//! at window close instead.

use crate::{
    config::GestureConfig,
    constants::{LABEL_NADA, LABEL_NO, LABEL_YES},
    error::Error,
    landmarks::{Landmark, LandmarkFrame, TrackedLandmarks},
};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse head gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    /// No dominant motion
    #[default]
    None,
    /// Vertical motion dominates ("YES")
    Nod,
    /// Horizontal motion dominates ("NO")
    Shake,
}

impl GestureState {
    /// Overlay label of the state
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => LABEL_NADA,
            Self::Nod => LABEL_YES,
            Self::Shake => LABEL_NO,
        }
    }
}

impl fmt::Display for GestureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GestureState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nada" | "none" => Ok(Self::None),
            "yes" | "nod" => Ok(Self::Nod),
            "no" | "shake" => Ok(Self::Shake),
            _ => Err(Error::InvalidInput(format!("Unknown gesture state: {s}"))),
        }
    }
}

/// Phase of the sampling window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    /// Next valid frame becomes the baseline
    AwaitingBaseline,
    /// Baseline held, waiting for the window to elapse
    Accumulating,
}

/// When a closed window's outcome is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationTiming {
    /// Commit at the next baseline capture (one window late)
    #[default]
    Deferred,
    /// Commit as soon as the window closes
    Immediate,
}

/// Resolution of an exact tie between the two axes above the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Commit `GestureState::None`
    #[default]
    None,
    /// Leave the previously committed state untouched
    KeepPrevious,
}

/// Displacements measured when a window closes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeDeltas {
    /// `(dx, dy)` per tracked landmark, left-outer to right-outer
    pub per_landmark: [(f32, f32); 4],
    /// Absolute value of the summed horizontal displacement
    pub sum_x: f32,
    /// Absolute value of the summed vertical displacement
    pub sum_y: f32,
}

impl EyeDeltas {
    /// Measure displacement of the tracked landmarks from `baseline` to `frame`.
    ///
    /// Both slices must cover every tracked index.
    #[must_use]
    pub fn between(tracked: &TrackedLandmarks, baseline: &[Landmark], frame: &[Landmark]) -> Self {
        let mut per_landmark = [(0.0, 0.0); 4];
        for (slot, index) in per_landmark.iter_mut().zip(tracked.indices()) {
            *slot = (frame[index].x - baseline[index].x, frame[index].y - baseline[index].y);
        }

        // Signed sum first: net displacement, not total travel
        let sum_x = per_landmark.iter().map(|(dx, _)| dx).sum::<f32>().abs();
        let sum_y = per_landmark.iter().map(|(_, dy)| dy).sum::<f32>().abs();

        Self {
            per_landmark,
            sum_x,
            sum_y,
        }
    }
}

/// Classify accumulated motion.
///
/// `previous` is only consulted for an exact tie under [`TieBreak::KeepPrevious`].
#[must_use]
pub fn classify(sum_x: f32, sum_y: f32, threshold: f32, tie_break: TieBreak, previous: GestureState) -> GestureState {
    if sum_x <= threshold && sum_y <= threshold {
        GestureState::None
    } else if sum_x > sum_y {
        GestureState::Shake
    } else if sum_y > sum_x {
        GestureState::Nod
    } else {
        match tie_break {
            TieBreak::None => GestureState::None,
            TieBreak::KeepPrevious => previous,
        }
    }
}

#[derive(Debug, Clone)]
struct Baseline {
    landmarks: LandmarkFrame,
    timestamp_ms: i64,
}

/// Gesture sampling window for one overlay session
#[derive(Debug, Clone)]
pub struct GestureWindow {
    tracked: TrackedLandmarks,
    window_ms: i64,
    motion_threshold: f32,
    timing: ClassificationTiming,
    tie_break: TieBreak,
    phase: WindowPhase,
    baseline: Option<Baseline>,
    sum_delta_x: f32,
    sum_delta_y: f32,
    frames_in_window: u32,
    last_deltas: Option<EyeDeltas>,
    state: GestureState,
}

impl Default for GestureWindow {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl GestureWindow {
    /// Create a window in the `AwaitingBaseline` phase
    #[must_use]
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            tracked: config.tracked,
            window_ms: config.window_ms,
            motion_threshold: config.motion_threshold,
            timing: config.timing,
            tie_break: config.tie_break,
            phase: WindowPhase::AwaitingBaseline,
            baseline: None,
            sum_delta_x: 0.0,
            sum_delta_y: 0.0,
            frames_in_window: 0,
            last_deltas: None,
            state: GestureState::None,
        }
    }

    /// Feed one landmark frame.
    ///
    /// Returns the state committed during this call, if a classification
    /// happened. Frames that do not cover every tracked landmark are ignored.
    pub fn on_frame(&mut self, frame: &[Landmark], timestamp_ms: i64) -> Option<GestureState> {
        if !self.tracked.covered_by(frame) {
            trace!("Ignoring frame with {} landmarks at {}", frame.len(), timestamp_ms);
            return None;
        }

        match self.phase {
            WindowPhase::AwaitingBaseline => self.capture(frame, timestamp_ms),
            WindowPhase::Accumulating => {
                self.frames_in_window += 1;
                let Some(baseline_time_ms) = self.baseline_time_ms() else {
                    // Accumulating always holds a baseline; recover by capturing
                    return self.capture(frame, timestamp_ms);
                };

                // Negative elapsed (clock went backwards) counts as not elapsed
                let elapsed = timestamp_ms.saturating_sub(baseline_time_ms);
                if elapsed > self.window_ms {
                    self.close(frame, timestamp_ms)
                } else {
                    None
                }
            }
        }
    }

    /// Return to the initial phase with no baseline and no committed gesture
    pub fn reset(&mut self) {
        self.phase = WindowPhase::AwaitingBaseline;
        self.baseline = None;
        self.sum_delta_x = 0.0;
        self.sum_delta_y = 0.0;
        self.frames_in_window = 0;
        self.last_deltas = None;
        self.state = GestureState::None;
    }

    /// Last committed gesture
    #[must_use]
    pub const fn current_state(&self) -> GestureState {
        self.state
    }

    /// Current phase of the window
    #[must_use]
    pub const fn phase(&self) -> WindowPhase {
        self.phase
    }

    /// Accumulated `(sum_delta_x, sum_delta_y)` of the last closed window
    #[must_use]
    pub const fn sum_deltas(&self) -> (f32, f32) {
        (self.sum_delta_x, self.sum_delta_y)
    }

    /// Capture time of the current baseline
    #[must_use]
    pub fn baseline_time_ms(&self) -> Option<i64> {
        self.baseline.as_ref().map(|b| b.timestamp_ms)
    }

    /// Frames observed since the current baseline was captured
    #[must_use]
    pub const fn frames_in_window(&self) -> u32 {
        self.frames_in_window
    }

    /// Per-landmark displacements of the last closed window
    #[must_use]
    pub const fn last_deltas(&self) -> Option<&EyeDeltas> {
        self.last_deltas.as_ref()
    }

    /// Tracked landmark indices
    #[must_use]
    pub const fn tracked(&self) -> &TrackedLandmarks {
        &self.tracked
    }

    fn capture(&mut self, frame: &[Landmark], timestamp_ms: i64) -> Option<GestureState> {
        let [lo, li, ri, ro] = self.tracked.indices().map(|i| frame[i]);
        debug!(
            "{} frames in window, capture at {}: left outer {:?}, left inner {:?}, right inner {:?}, right outer {:?}",
            self.frames_in_window, timestamp_ms, lo, li, ri, ro
        );

        let committed = if self.timing == ClassificationTiming::Deferred && self.baseline.is_some() {
            Some(self.commit())
        } else {
            None
        };

        self.baseline = Some(Baseline {
            landmarks: frame.to_vec(),
            timestamp_ms,
        });
        self.sum_delta_x = 0.0;
        self.sum_delta_y = 0.0;
        self.frames_in_window = 0;
        self.phase = WindowPhase::Accumulating;

        committed
    }

    fn close(&mut self, frame: &[Landmark], timestamp_ms: i64) -> Option<GestureState> {
        let baseline = self.baseline.as_ref()?;
        let deltas = EyeDeltas::between(&self.tracked, &baseline.landmarks, frame);
        debug!(
            "{} frames in window, close at {}: deltas {:?}, sum delta X, Y -> {}, {}",
            self.frames_in_window, timestamp_ms, deltas.per_landmark, deltas.sum_x, deltas.sum_y
        );

        self.sum_delta_x = deltas.sum_x;
        self.sum_delta_y = deltas.sum_y;
        self.last_deltas = Some(deltas);
        self.phase = WindowPhase::AwaitingBaseline;

        match self.timing {
            ClassificationTiming::Immediate => Some(self.commit()),
            ClassificationTiming::Deferred => None,
        }
    }

    // TODO: add hysteresis so one noisy window cannot flip a held gesture
    fn commit(&mut self) -> GestureState {
        let next = classify(
            self.sum_delta_x,
            self.sum_delta_y,
            self.motion_threshold,
            self.tie_break,
            self.state,
        );
        if next != self.state {
            info!(
                "Gesture {} -> {} (sum delta X, Y -> {}, {})",
                self.state, next, self.sum_delta_x, self.sum_delta_y
            );
        }
        self.state = next;
        next
    }
}
