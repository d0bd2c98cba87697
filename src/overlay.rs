//! Overlay session: owns the gesture window for one overlay lifetime and maps
//! landmarks into view space for the renderer.
//!
//! Drawing is left to the caller. The session only keeps the latest tracking
//! result, the gesture state and the scale between image and view.

use crate::{
    config::GestureConfig,
    error::{Error, Result},
    frame_ingest::FrameIngest,
    gesture_window::{GestureState, GestureWindow},
    landmarks::{Landmark, TrackingResult},
};
use log::debug;

/// How the face tracker is being run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunningMode {
    /// Single still images
    #[default]
    Image,
    /// Decoded video frames
    Video,
    /// Camera preview stream
    LiveStream,
}

/// Scale that maps image pixels onto the view.
///
/// Images and video are letterboxed into the view; the live preview fills it,
/// so landmarks are scaled up to match the cropped preview.
#[allow(clippy::cast_precision_loss)]
pub fn scale_factor_for(
    image_width: u32,
    image_height: u32,
    view_width: u32,
    view_height: u32,
    mode: RunningMode,
) -> Result<f32> {
    if image_width == 0 || image_height == 0 {
        return Err(Error::InvalidInput(format!(
            "Image size must be non-zero, got {image_width}x{image_height}"
        )));
    }

    let sx = view_width as f32 / image_width as f32;
    let sy = view_height as f32 / image_height as f32;
    Ok(match mode {
        RunningMode::Image | RunningMode::Video => sx.min(sy),
        RunningMode::LiveStream => sx.max(sy),
    })
}

/// Gesture overlay state for one view
#[derive(Debug, Clone)]
pub struct OverlaySession {
    ingest: FrameIngest,
    window: GestureWindow,
    result: Option<TrackingResult>,
    scale_factor: f32,
    image_width: u32,
    image_height: u32,
}

impl Default for OverlaySession {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl OverlaySession {
    /// Create a session with an empty gesture window
    #[must_use]
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            ingest: FrameIngest::new(&config.tracked),
            window: GestureWindow::new(config),
            result: None,
            scale_factor: 1.0,
            image_width: 1,
            image_height: 1,
        }
    }

    /// Store a new tracking result and feed its first face to the gesture window.
    ///
    /// A result without faces clears the session.
    pub fn set_result(
        &mut self,
        result: TrackingResult,
        image_width: u32,
        image_height: u32,
        view_width: u32,
        view_height: u32,
        mode: RunningMode,
    ) -> Result<()> {
        self.scale_factor = scale_factor_for(image_width, image_height, view_width, view_height, mode)?;
        self.image_width = image_width;
        self.image_height = image_height;

        if result.faces.is_empty() {
            debug!("No face in result at {}, clearing overlay", result.timestamp_ms);
            self.clear();
            return Ok(());
        }

        self.ingest.ingest_result(&mut self.window, &result);
        self.result = Some(result);
        Ok(())
    }

    /// Drop the stored result and restart gesture sampling
    pub fn clear(&mut self) {
        self.result = None;
        self.window.reset();
    }

    /// Last committed gesture
    #[must_use]
    pub const fn current_state(&self) -> GestureState {
        self.window.current_state()
    }

    /// Text the renderer draws for the current gesture
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.window.current_state().label()
    }

    /// Gesture window driven by this session
    #[must_use]
    pub const fn window(&self) -> &GestureWindow {
        &self.window
    }

    /// Latest stored tracking result
    #[must_use]
    pub const fn result(&self) -> Option<&TrackingResult> {
        self.result.as_ref()
    }

    /// Current image-to-view scale
    #[must_use]
    pub const fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// View position of a normalized landmark
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_view(&self, landmark: &Landmark) -> (f32, f32) {
        (
            landmark.x * self.image_width as f32 * self.scale_factor,
            landmark.y * self.image_height as f32 * self.scale_factor,
        )
    }

    /// Where the gesture label is drawn
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn label_anchor(&self) -> (f32, f32) {
        (self.image_width as f32 / 2.0, self.image_height as f32 / 2.0)
    }

    /// View positions of every landmark of the first face
    #[must_use]
    pub fn landmark_points(&self) -> Vec<(f32, f32)> {
        self.result
            .as_ref()
            .and_then(TrackingResult::first_face)
            .map(|face| face.iter().map(|l| self.to_view(l)).collect())
            .unwrap_or_default()
    }
}
