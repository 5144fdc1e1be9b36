//! Pointer gesture state machine for one crop rectangle.
//!
//! # States
//!
//! - `Idle` - no button held; moves only update the hover position
//! - `Gesturing` - button held; the mode picked on pointer-down drives every
//!   move until the pointer is released
//!
//! The committed rectangle is only replaced on pointer-up. During a gesture
//! the renderer reads [`RectSession::current_rect`], which returns the
//! candidate instead.
//!
//! Upstream changes are explicit: the owner calls
//! [`RectSession::set_image_extent`] when an image is (re)loaded and
//! [`RectSession::set_viewport`] when the display size or position changes.

use crate::config::{ConfigError, CropConfig};
use crate::cursor::{self, CursorStyle};
use crate::export::CropRegion;
use crate::geometry::{ImageExtent, ImagePoint, Rectangle, Viewport};
use crate::hit::{self, Zone};
use crate::mapper::CoordinateMapper;
use crate::transform::{self, TransformMode};

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Gesturing {
        mode: TransformMode,
        /// Pointer-down position in image space.
        down: ImagePoint,
    },
}

impl SessionState {
    pub fn is_gesturing(&self) -> bool {
        matches!(self, SessionState::Gesturing { .. })
    }
}

/// Owns the crop rectangle and turns pointer events into rectangle updates.
#[derive(Debug, Clone)]
pub struct RectSession {
    config: CropConfig,
    mapper: CoordinateMapper,
    viewport: Viewport,
    state: SessionState,
    /// Last pointer position in image space.
    pointer: ImagePoint,
    candidate: Option<Rectangle>,
    committed: Option<Rectangle>,
}

impl Default for RectSession {
    fn default() -> Self {
        Self::with_config(CropConfig::default())
    }
}

impl RectSession {
    pub fn new(config: CropConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: CropConfig) -> Self {
        Self {
            config,
            mapper: CoordinateMapper::default(),
            viewport: Viewport::default(),
            state: SessionState::Idle,
            pointer: ImagePoint::default(),
            candidate: None,
            committed: None,
        }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn image_extent(&self) -> ImageExtent {
        self.mapper.extent()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Last mapped pointer position.
    pub fn pointer(&self) -> ImagePoint {
        self.pointer
    }

    /// Replace the image extent. Drops the rectangle and any gesture.
    pub fn set_image_extent(&mut self, extent: ImageExtent) {
        log::debug!("image extent set to {}x{}", extent.width, extent.height);
        self.mapper = CoordinateMapper::new(extent);
        self.clear();
    }

    /// Replace the surface origin and reduction ratio.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        log::debug!(
            "viewport origin ({}, {}) ratio {}",
            viewport.origin.left,
            viewport.origin.top,
            viewport.reduction_ratio
        );
        self.viewport = viewport;
    }

    /// Forget the rectangle and return to idle.
    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
        self.candidate = None;
        self.committed = None;
    }

    /// The committed rectangle, if one has been drawn.
    pub fn committed(&self) -> Option<&Rectangle> {
        self.committed.as_ref()
    }

    /// The in-progress candidate, only during a gesture.
    pub fn candidate(&self) -> Option<&Rectangle> {
        self.candidate.as_ref()
    }

    /// What the renderer should paint right now.
    pub fn current_rect(&self) -> Option<&Rectangle> {
        if self.state.is_gesturing() {
            self.candidate.as_ref().or(self.committed.as_ref())
        } else {
            self.committed.as_ref()
        }
    }

    /// Zone of the committed rectangle under the last pointer position.
    pub fn hover_zone(&self) -> Zone {
        hit::classify(
            self.pointer,
            self.committed.as_ref(),
            self.config.clickable_range,
        )
    }

    /// Cursor for the current state.
    ///
    /// While a gesture is active the cursor follows the gesture's handle, so
    /// it does not flicker as the pointer leaves the handle band.
    pub fn cursor_style(&self) -> CursorStyle {
        match self.state {
            SessionState::Gesturing { mode, .. } => cursor::resolve(mode.zone()),
            SessionState::Idle => cursor::resolve(self.hover_zone()),
        }
    }

    /// Committed rectangle as `(x, y, width, height)` for export.
    pub fn crop_region(&self) -> Option<CropRegion> {
        self.committed.as_ref().map(CropRegion::from)
    }

    fn map(&self, x: f64, y: f64) -> ImagePoint {
        self.mapper.map(x, y, &self.viewport)
    }

    /// Start a gesture at a raw pointer position.
    ///
    /// A press on a handle of the committed rectangle resizes it; anywhere
    /// else starts drawing a new one.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> TransformMode {
        let down = self.map(x, y);
        self.pointer = down;

        let mode = TransformMode::from(self.hover_zone());
        // A handle press leaves the rectangle alone until the pointer moves
        self.candidate = match (mode, self.committed) {
            (TransformMode::Resize(_), Some(rect)) => Some(rect),
            _ => Some(Rectangle::from_corners(down, down)),
        };
        self.state = SessionState::Gesturing { mode, down };

        log::debug!("gesture start {:?} at ({}, {})", mode, down.x, down.y);
        mode
    }

    /// Track the pointer. Returns true when the candidate changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.pointer = self.map(x, y);

        let SessionState::Gesturing { mode, down } = self.state else {
            return false;
        };

        let base = self.committed.unwrap_or_default();
        let next = transform::transform(mode, &base, down, self.pointer);
        log::trace!(
            "candidate ({}, {})-({}, {}) {}x{}",
            next.start_x,
            next.start_y,
            next.end_x,
            next.end_y,
            next.width(),
            next.height()
        );

        let changed = self.candidate != Some(next);
        self.candidate = Some(next);
        changed
    }

    /// Finish the gesture at a raw pointer position and commit.
    ///
    /// Returns the committed rectangle, or `None` when no gesture was active.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<Rectangle> {
        if !self.state.is_gesturing() {
            log::warn!("pointer up without a matching pointer down, ignored");
            return None;
        }

        if self.map(x, y) != self.pointer {
            self.pointer_move(x, y);
        }
        let committed = self.candidate.take();
        if let Some(rect) = committed {
            log::debug!(
                "committed ({}, {})-({}, {})",
                rect.start_x,
                rect.start_y,
                rect.end_x,
                rect.end_y
            );
            self.committed = Some(rect);
        }
        self.state = SessionState::Idle;
        committed
    }
}
