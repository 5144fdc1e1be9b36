//! Screen-to-image coordinate mapping.
//!
//! Pointer positions arrive in page coordinates. They are shifted by the
//! container origin, divided by the display reduction ratio, rounded to the
//! nearest pixel and finally pinned to the image so a drag past the edge
//! never extrapolates outside `[0, width] x [0, height]`.

use crate::config::{validate_reduction_ratio, ConfigError};
use crate::geometry::{ContainerOrigin, ImageExtent, ImagePoint, Viewport};

/// Where a mapped point lies relative to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffCanvas {
    Inside,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Top,
    Right,
    Bottom,
    Left,
}

impl OffCanvas {
    /// Classify an unclamped point against the image extent.
    pub fn classify(x: i32, y: i32, extent: ImageExtent) -> Self {
        let left = x < 0;
        let right = extent.max_x() < x;
        let above = y < 0;
        let below = extent.max_y() < y;

        match (left, right, above, below) {
            (true, _, true, _) => OffCanvas::TopLeft,
            (_, true, true, _) => OffCanvas::TopRight,
            (_, true, _, true) => OffCanvas::BottomRight,
            (true, _, _, true) => OffCanvas::BottomLeft,
            (_, _, true, _) => OffCanvas::Top,
            (_, true, _, _) => OffCanvas::Right,
            (_, _, _, true) => OffCanvas::Bottom,
            (true, _, _, _) => OffCanvas::Left,
            _ => OffCanvas::Inside,
        }
    }

    /// Pin a point to the nearest in-bounds edge or corner.
    pub fn pin(self, x: i32, y: i32, extent: ImageExtent) -> ImagePoint {
        let (w, h) = (extent.max_x(), extent.max_y());
        match self {
            OffCanvas::Inside => ImagePoint::new(x, y),
            OffCanvas::TopLeft => ImagePoint::new(0, 0),
            OffCanvas::TopRight => ImagePoint::new(w, 0),
            OffCanvas::BottomRight => ImagePoint::new(w, h),
            OffCanvas::BottomLeft => ImagePoint::new(0, h),
            OffCanvas::Top => ImagePoint::new(x, 0),
            OffCanvas::Right => ImagePoint::new(w, y),
            OffCanvas::Bottom => ImagePoint::new(x, h),
            OffCanvas::Left => ImagePoint::new(0, y),
        }
    }
}

/// Maps raw pointer positions into clamped image-space pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoordinateMapper {
    extent: ImageExtent,
}

impl CoordinateMapper {
    pub fn new(extent: ImageExtent) -> Self {
        Self { extent }
    }

    pub fn extent(&self) -> ImageExtent {
        self.extent
    }

    /// Convert a pointer position to an image-space pixel.
    ///
    /// Never fails. A zero or non-finite ratio produces an out-of-range
    /// value that is then pinned like any other off-canvas point.
    pub fn to_image_space(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        origin: ContainerOrigin,
        reduction_ratio: f64,
    ) -> ImagePoint {
        let x = scale_axis(pointer_x - origin.left, reduction_ratio);
        let y = scale_axis(pointer_y - origin.top, reduction_ratio);
        OffCanvas::classify(x, y, self.extent).pin(x, y, self.extent)
    }

    /// Same as [`to_image_space`](Self::to_image_space) with a stored viewport.
    pub fn map(&self, pointer_x: f64, pointer_y: f64, viewport: &Viewport) -> ImagePoint {
        self.to_image_space(pointer_x, pointer_y, viewport.origin, viewport.reduction_ratio)
    }
}

#[inline]
fn scale_axis(offset: f64, reduction_ratio: f64) -> i32 {
    // `as` saturates on overflow and maps NaN to 0
    (offset / reduction_ratio).round() as i32
}

/// Compute the display reduction ratio from the on-screen width of the
/// image element and the image's own pixel width.
pub fn reduction_ratio(client_width: f64, image_width: u32) -> Result<f64, ConfigError> {
    if image_width == 0 {
        return Err(ConfigError::ZeroImageWidth);
    }
    validate_reduction_ratio(client_width / image_width as f64)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
