//! Cropframe WASM - WebAssembly bindings for Cropframe
//!
//! This crate exposes the cropframe-core rectangle engine to JavaScript and
//! TypeScript applications.
//!
//! # Module Structure
//!
//! - `canvas` - the `CropCanvas` controller driven by pointer events
//! - `types` - WASM-compatible wrapper types (crop region, rect, config)
//! - `logging` - `log` to browser console bridge and panic hook
//!
//! # Usage
//!
//! ```typescript
//! import init, { CropCanvas } from '@cropframe/wasm';
//!
//! await init();
//!
//! const canvas = CropCanvas.with_config({ clickableRange: 16 });
//! canvas.set_image_size(image.naturalWidth, image.naturalHeight);
//! ```

use wasm_bindgen::prelude::*;

mod canvas;
mod logging;
mod types;

pub use canvas::CropCanvas;
pub use types::{JsCropConfig, JsCropRegion, JsRect};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::install_panic_hook();
    logging::init(log::LevelFilter::Info);
}

/// Change the console log level (`"off"`, `"error"`, ... `"trace"`).
///
/// Returns false for an unknown level name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match logging::parse_level(level) {
        Some(filter) => {
            logging::init(filter);
            true
        }
        None => false,
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
