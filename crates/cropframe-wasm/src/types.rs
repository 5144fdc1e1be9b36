//! WASM-compatible wrapper types.
//!
//! These wrap the core value types and give JavaScript getters or plain
//! objects in place of Rust structs.

use cropframe_core::{CropConfig, CropRegion, ImageExtent, Rectangle, DEFAULT_CLICKABLE_RANGE};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Crop region handed to the export side of the application.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsCropRegion {
    region: CropRegion,
    extent: ImageExtent,
}

#[wasm_bindgen]
impl JsCropRegion {
    /// Left edge in image pixels
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u32 {
        self.region.x
    }

    /// Top edge in image pixels
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u32 {
        self.region.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.region.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.region.height
    }

    /// Whether the region has a non-zero area and can be cropped.
    #[wasm_bindgen(getter)]
    pub fn usable(&self) -> bool {
        self.region.is_usable()
    }

    /// `[left, top, width, height]` as fractions (0.0 to 1.0) of the image.
    pub fn normalized(&self) -> Vec<f64> {
        let (left, top, width, height) = self.region.normalized(self.extent);
        vec![left, top, width, height]
    }
}

impl JsCropRegion {
    pub(crate) fn new(region: CropRegion, extent: ImageExtent) -> Self {
        Self { region, extent }
    }

    pub(crate) fn region(&self) -> &CropRegion {
        &self.region
    }
}

/// Rectangle as a plain JS object for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JsRect {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<&Rectangle> for JsRect {
    fn from(rect: &Rectangle) -> Self {
        Self {
            start_x: rect.start_x,
            start_y: rect.start_y,
            end_x: rect.end_x,
            end_y: rect.end_y,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Session configuration as passed from JavaScript.
///
/// Every field is optional on the JS side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsCropConfig {
    #[serde(default = "default_clickable_range", alias = "clickableRange")]
    pub clickable_range: i32,
    /// `log` level name, e.g. `"debug"`. Leaves the level alone when absent.
    #[serde(default, alias = "logLevel")]
    pub log_level: Option<String>,
}

fn default_clickable_range() -> i32 {
    DEFAULT_CLICKABLE_RANGE
}

impl Default for JsCropConfig {
    fn default() -> Self {
        Self {
            clickable_range: DEFAULT_CLICKABLE_RANGE,
            log_level: None,
        }
    }
}

impl From<&JsCropConfig> for CropConfig {
    fn from(js: &JsCropConfig) -> Self {
        CropConfig::new().with_clickable_range(js.clickable_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_region_getters() {
        let region = CropRegion::from(&Rectangle::new(20, 10, 120, 60));
        let js = JsCropRegion::new(region, ImageExtent::new(200, 100));
        assert_eq!(js.x(), 20);
        assert_eq!(js.y(), 10);
        assert_eq!(js.width(), 100);
        assert_eq!(js.height(), 50);
        assert!(js.usable());
        assert_eq!(js.normalized(), vec![0.1, 0.1, 0.5, 0.5]);
        assert_eq!(js.region(), &region);
    }

    #[test]
    fn test_js_rect_from_rectangle() {
        let js = JsRect::from(&Rectangle::new(30, 30, 120, 90));
        assert_eq!(js.width, 90);
        assert_eq!(js.height, 60);
        assert_eq!((js.start_x, js.end_y), (30, 90));
    }

    #[test]
    fn test_js_config_default() {
        let js = JsCropConfig::default();
        let config = CropConfig::from(&js);
        assert_eq!(config.clickable_range, 16);
        assert!(js.log_level.is_none());
    }
}
