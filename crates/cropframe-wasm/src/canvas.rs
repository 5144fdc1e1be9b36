//! WASM-facing crop controller.
//!
//! Wraps a [`RectSession`] for a JavaScript host. The host forwards raw
//! `pageX`/`pageY` pointer positions, tells the controller about image and
//! layout changes, and reads back the rectangle and cursor to paint.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const canvas = new CropCanvas();
//! canvas.set_image_size(img.naturalWidth, img.naturalHeight);
//! const box = el.getBoundingClientRect();
//! canvas.set_layout(el.clientWidth, box.left + window.scrollX, box.top + window.scrollY);
//!
//! el.onpointerdown = (e) => canvas.pointer_down(e.pageX, e.pageY);
//! el.onpointermove = (e) => {
//!   if (canvas.pointer_move(e.pageX, e.pageY)) redraw(canvas.current_rect());
//!   el.style.cursor = canvas.cursor_style();
//! };
//! el.onpointerup = (e) => canvas.pointer_up(e.pageX, e.pageY);
//! ```

use crate::logging;
use crate::types::{JsCropConfig, JsCropRegion, JsRect};
use cropframe_core::mapper::reduction_ratio;
use cropframe_core::{crop_rgb, ContainerOrigin, ImageExtent, RectSession, Viewport};
use wasm_bindgen::prelude::*;

/// Crop rectangle controller for one image surface.
#[wasm_bindgen]
pub struct CropCanvas {
    session: RectSession,
    /// Displayed width from the last `set_layout`.
    client_width: Option<f64>,
}

impl Default for CropCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CropCanvas {
    /// Create a controller with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CropCanvas {
        CropCanvas {
            session: RectSession::default(),
            client_width: None,
        }
    }

    /// Create a controller from a config object such as
    /// `{ clickableRange: 12, logLevel: "debug" }`.
    pub fn with_config(config: JsValue) -> Result<CropCanvas, JsValue> {
        let js: JsCropConfig = if config.is_undefined() || config.is_null() {
            JsCropConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid crop config: {}", e)))?
        };
        Self::from_js_config(&js).map_err(|e| JsValue::from_str(&e))
    }

    /// Set the loaded image's pixel size. Clears the rectangle.
    ///
    /// The reduction ratio is recomputed against the last known layout.
    pub fn set_image_size(&mut self, width: u32, height: u32) {
        self.session.set_image_extent(ImageExtent::new(width, height));
        if let Some(client_width) = self.client_width {
            let origin = self.session.viewport().origin;
            if let Err(e) = self.update_layout(client_width, origin.left, origin.top) {
                log::warn!("keeping previous reduction ratio: {}", e);
            }
        }
    }

    /// Update the on-screen layout.
    ///
    /// `client_width` is the displayed width of the image element; `left` and
    /// `top` are its page offsets.
    pub fn set_layout(&mut self, client_width: f64, left: f64, top: f64) -> Result<(), JsValue> {
        self.update_layout(client_width, left, top)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Pointer pressed. Returns the zone that was grabbed (`"none"` for a
    /// fresh draw).
    pub fn pointer_down(&mut self, page_x: f64, page_y: f64) -> String {
        let mode = self.session.pointer_down(page_x, page_y);
        mode.zone().as_str().to_string()
    }

    /// Pointer moved. Returns true when the rectangle needs repainting.
    pub fn pointer_move(&mut self, page_x: f64, page_y: f64) -> bool {
        self.session.pointer_move(page_x, page_y)
    }

    /// Pointer released. Returns true when a rectangle was committed.
    pub fn pointer_up(&mut self, page_x: f64, page_y: f64) -> bool {
        self.session.pointer_up(page_x, page_y).is_some()
    }

    /// Drop the rectangle.
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// CSS cursor keyword for the current pointer position.
    pub fn cursor_style(&self) -> String {
        self.session.cursor_style().as_css().to_string()
    }

    /// Whether a rectangle has been committed.
    #[wasm_bindgen(getter)]
    pub fn has_rect(&self) -> bool {
        self.session.committed().is_some()
    }

    /// Whether the user is mid-gesture.
    #[wasm_bindgen(getter)]
    pub fn is_gesturing(&self) -> bool {
        self.session.state().is_gesturing()
    }

    /// `[startX, startY, endX, endY]` of the rectangle to paint, empty when
    /// there is none.
    pub fn current_rect_coords(&self) -> Vec<i32> {
        self.session
            .current_rect()
            .map(|r| vec![r.start_x, r.start_y, r.end_x, r.end_y])
            .unwrap_or_default()
    }

    /// Rectangle to paint as `{ start_x, start_y, end_x, end_y, width, height }`,
    /// or `undefined`.
    pub fn current_rect(&self) -> Result<JsValue, JsValue> {
        match self.session.current_rect() {
            Some(rect) => serde_wasm_bindgen::to_value(&JsRect::from(rect))
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Committed crop region, or `undefined` before anything was drawn.
    pub fn crop_region(&self) -> Option<JsCropRegion> {
        self.region()
    }

    /// Crop an RGB buffer (3 bytes per pixel) of the loaded image to the
    /// committed rectangle.
    pub fn crop_pixels(&self, pixels: &[u8]) -> Result<Vec<u8>, JsValue> {
        let region = self
            .region()
            .ok_or_else(|| JsValue::from_str("No crop rectangle has been drawn"))?;
        crop_rgb(pixels, self.session.image_extent(), region.region())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl CropCanvas {
    pub(crate) fn from_js_config(js: &JsCropConfig) -> Result<CropCanvas, String> {
        if let Some(name) = js.log_level.as_deref() {
            let level =
                logging::parse_level(name).ok_or_else(|| format!("Unknown log level: {}", name))?;
            logging::init(level);
        }
        let session = RectSession::new(js.into()).map_err(|e| e.to_string())?;
        Ok(CropCanvas {
            session,
            client_width: None,
        })
    }

    fn update_layout(&mut self, client_width: f64, left: f64, top: f64) -> Result<(), String> {
        let ratio = reduction_ratio(client_width, self.session.image_extent().width)
            .map_err(|e| e.to_string())?;
        self.session
            .set_viewport(Viewport::new(ContainerOrigin::new(left, top), ratio));
        self.client_width = Some(client_width);
        Ok(())
    }

    fn region(&self) -> Option<JsCropRegion> {
        self.session
            .crop_region()
            .map(|region| JsCropRegion::new(region, self.session.image_extent()))
    }
}
