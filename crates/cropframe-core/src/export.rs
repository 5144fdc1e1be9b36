//! Pull-side access to the committed crop rectangle.
//!
//! The export consumer asks the session for a [`CropRegion`] once the user is
//! done and either hands it on (pixel or normalized form) or crops an RGB
//! buffer directly with [`crop_rgb`].

use crate::geometry::{ImageExtent, Rectangle};
use image::{imageops, RgbImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for exporting a crop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The region has no area.
    #[error("Crop region is empty: {width}x{height}")]
    EmptyRegion { width: u32, height: u32 },

    /// Pixel buffer does not match the image extent.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Region reaches past the image.
    #[error("Crop region {x},{y} {width}x{height} exceeds image {image_width}x{image_height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}

/// Crop rectangle as origin plus size, in image pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl From<&Rectangle> for CropRegion {
    fn from(rect: &Rectangle) -> Self {
        let start_x = rect.start_x.min(rect.end_x).max(0);
        let start_y = rect.start_y.min(rect.end_y).max(0);
        let end_x = rect.start_x.max(rect.end_x).max(0);
        let end_y = rect.start_y.max(rect.end_y).max(0);

        Self {
            x: start_x as u32,
            y: start_y as u32,
            width: (end_x - start_x) as u32,
            height: (end_y - start_y) as u32,
        }
    }
}

impl CropRegion {
    /// True when the region can actually be cropped (non-zero area).
    pub fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// True when the region lies entirely inside `extent`.
    pub fn fits(&self, extent: ImageExtent) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(extent.width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(extent.height)
    }

    /// Region as `(left, top, width, height)` fractions of the image.
    ///
    /// Returns zeros for an empty extent.
    pub fn normalized(&self, extent: ImageExtent) -> (f64, f64, f64, f64) {
        if extent.width == 0 || extent.height == 0 {
            return (0.0, 0.0, 0.0, 0.0);
        }
        let w = extent.width as f64;
        let h = extent.height as f64;
        (
            self.x as f64 / w,
            self.y as f64 / h,
            self.width as f64 / w,
            self.height as f64 / h,
        )
    }
}

/// Crop an RGB buffer (3 bytes per pixel, row-major) to `region`.
pub fn crop_rgb(
    pixels: &[u8],
    extent: ImageExtent,
    region: &CropRegion,
) -> Result<Vec<u8>, ExportError> {
    let expected = (extent.width as usize)
        .checked_mul(extent.height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or(ExportError::InvalidPixelData {
            expected: usize::MAX,
            actual: pixels.len(),
        })?;
    if pixels.len() != expected {
        return Err(ExportError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    if !region.is_usable() {
        return Err(ExportError::EmptyRegion {
            width: region.width,
            height: region.height,
        });
    }
    if !region.fits(extent) {
        return Err(ExportError::OutOfBounds {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            image_width: extent.width,
            image_height: extent.height,
        });
    }

    // Length was checked above, so from_raw cannot fail here
    let source = RgbImage::from_raw(extent.width, extent.height, pixels.to_vec()).ok_or(
        ExportError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        },
    )?;

    let cropped = imageops::crop_imm(&source, region.x, region.y, region.width, region.height);
    Ok(cropped.to_image().into_raw())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: output length always matches the region size.
        #[test]
        fn prop_output_matches_region(
            (width, height) in (1u32..=40, 1u32..=40),
            (a, b, c, d) in (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        ) {
            let extent = ImageExtent::new(width, height);
            let pixels = vec![7u8; (width * height * 3) as usize];
            let sx = |f: f64| (f * width as f64).round() as i32;
            let sy = |f: f64| (f * height as f64).round() as i32;
            let rect = Rectangle::new(sx(a).min(sx(c)), sy(b).min(sy(d)), sx(a).max(sx(c)), sy(b).max(sy(d)));
            let region = CropRegion::from(&rect);

            match crop_rgb(&pixels, extent, &region) {
                Ok(out) => {
                    prop_assert_eq!(out.len(), (region.width * region.height * 3) as usize);
                }
                Err(e) => {
                    prop_assert!(!region.is_usable(), "unexpected error {}", e);
                }
            }
        }
    }
}
