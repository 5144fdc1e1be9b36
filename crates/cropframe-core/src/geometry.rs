//! Value types shared by the crop engine.
//!
//! # Coordinate System
//!
//! - Image space is the pixel grid of the full-resolution image
//! - Origin is the top-left corner, X grows right, Y grows down
//! - Screen space is whatever the input surface reports; the [`Viewport`]
//!   carries the offset and scale needed to get back to image space

use serde::{Deserialize, Serialize};

/// Size of the loaded image in image-space pixels.
///
/// Replaced wholesale whenever a new image is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageExtent {
    pub width: u32,
    pub height: u32,
}

impl ImageExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as a signed image-space coordinate.
    #[inline]
    pub fn max_x(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    /// Height as a signed image-space coordinate.
    #[inline]
    pub fn max_y(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }
}

/// A rounded position in image space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImagePoint {
    pub x: i32,
    pub y: i32,
}

impl ImagePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in image space.
///
/// Between gestures `start_x <= end_x` and `start_y <= end_y` always hold.
/// Use [`Rectangle::from_corners`] to build one from two arbitrary points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl Rectangle {
    pub fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// Build a normalized rectangle spanning two opposite corners.
    pub fn from_corners(a: ImagePoint, b: ImagePoint) -> Self {
        Self {
            start_x: a.x.min(b.x),
            start_y: a.y.min(b.y),
            end_x: a.x.max(b.x),
            end_y: a.y.max(b.y),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.end_x - self.start_x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.end_y - self.start_y
    }

    /// True when start <= end on both axes.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.start_x <= self.end_x && self.start_y <= self.end_y
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn top_left(&self) -> ImagePoint {
        ImagePoint::new(self.start_x, self.start_y)
    }

    pub fn bottom_right(&self) -> ImagePoint {
        ImagePoint::new(self.end_x, self.end_y)
    }
}

/// Page offset of the interactive surface's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerOrigin {
    pub left: f64,
    pub top: f64,
}

impl ContainerOrigin {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// How the image is currently laid out on screen.
///
/// `reduction_ratio` is on-screen size divided by image-space size, so a
/// 4000px image shown 1000px wide has a ratio of 0.25.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub origin: ContainerOrigin,
    pub reduction_ratio: f64,
}

impl Viewport {
    pub fn new(origin: ContainerOrigin, reduction_ratio: f64) -> Self {
        Self {
            origin,
            reduction_ratio,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: ContainerOrigin::default(),
            reduction_ratio: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rectangle::from_corners(ImagePoint::new(80, 40), ImagePoint::new(20, 60));
        assert_eq!(rect, Rectangle::new(20, 40, 80, 60));
        assert!(rect.is_normalized());
    }

    #[test]
    fn test_width_height() {
        let rect = Rectangle::new(10, 20, 110, 70);
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
    }

    #[test]
    fn test_degenerate() {
        assert!(Rectangle::new(5, 5, 5, 40).is_degenerate());
        assert!(Rectangle::new(5, 5, 40, 5).is_degenerate());
        assert!(!Rectangle::new(5, 5, 40, 40).is_degenerate());
    }

    #[test]
    fn test_unnormalized_detected() {
        assert!(!Rectangle::new(50, 0, 10, 10).is_normalized());
        assert!(!Rectangle::new(0, 50, 10, 10).is_normalized());
    }

    #[test]
    fn test_extent_max_saturates() {
        let extent = ImageExtent::new(u32::MAX, 100);
        assert_eq!(extent.max_x(), i32::MAX);
        assert_eq!(extent.max_y(), 100);
    }

    #[test]
    fn test_viewport_default_is_unscaled() {
        let viewport = Viewport::default();
        assert_eq!(viewport.reduction_ratio, 1.0);
        assert_eq!(viewport.origin, ContainerOrigin::new(0.0, 0.0));
    }
}
