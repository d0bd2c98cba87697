//! Head gesture detection from face-landmark streams.
//!
//! This library turns per-frame face landmarks from an external face-landmark
//! model into a coarse head gesture: a nod ("YES"), a shake ("NO") or nothing
//! ("NADA"). The signal is the net motion of four eye-corner landmarks over
//! roughly one-second sampling windows.
//!
//! The pipeline consists of:
//! 1. [`frame_ingest::FrameIngest`] dropping frames too short to hold the eye landmarks
//! 2. [`gesture_window::GestureWindow`] capturing a baseline, waiting out the
//!    window and classifying the accumulated motion
//! 3. [`overlay::OverlaySession`] owning both for one overlay and mapping
//!    landmarks into view coordinates for the renderer
//!
//! # Examples
//!
//! ## Feeding frames directly
//!
//! ```
//! use head_gesture::{frame_ingest::FrameIngest, gesture_window::{GestureState, GestureWindow}, landmarks::Landmark};
//!
//! let ingest = FrameIngest::default();
//! let mut window = GestureWindow::default();
//!
//! let still = vec![Landmark::new(0.5, 0.5, 0.0); 478];
//! let mut nodded = still.clone();
//! for i in [37, 40, 43, 46] {
//!     nodded[i].y += 0.02;
//! }
//!
//! ingest.ingest(&mut window, &still, 0);     // baseline
//! ingest.ingest(&mut window, &nodded, 1100); // window closes
//! ingest.ingest(&mut window, &nodded, 1133); // next baseline commits the gesture
//!
//! assert_eq!(window.current_state(), GestureState::Nod);
//! ```
//!
//! ## Overlay session
//!
//! ```
//! use head_gesture::{
//!     config::GestureConfig,
//!     landmarks::{Landmark, TrackingResult},
//!     overlay::{OverlaySession, RunningMode},
//! };
//!
//! # fn main() -> head_gesture::Result<()> {
//! let mut session = OverlaySession::new(&GestureConfig::default());
//! let face = vec![Landmark::new(0.5, 0.5, 0.0); 478];
//! session.set_result(TrackingResult::single(face, 0), 640, 480, 1080, 1920, RunningMode::LiveStream)?;
//!
//! let (x, y) = session.label_anchor();
//! println!("draw {} at ({x}, {y})", session.label());
//! # Ok(())
//! # }
//! ```

/// Constants used throughout the crate
pub mod constants;

/// Configuration management
pub mod config;

/// Error types and result handling
pub mod error;

/// Frame size gate in front of the gesture window
pub mod frame_ingest;

/// Gesture sampling state machine
pub mod gesture_window;

/// Landmark and tracking result types
pub mod landmarks;

/// Overlay session and view scaling
pub mod overlay;

/// Replay of recorded landmark streams
pub mod replay;

pub use error::{Error, Result};
