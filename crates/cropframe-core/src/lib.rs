//! Cropframe Core - interactive crop rectangle engine
//!
//! This crate turns pointer events over a scaled-down image into a single
//! axis-aligned crop rectangle in full-resolution image coordinates. It has no
//! rendering or browser dependency; the `cropframe-wasm` crate wraps it for
//! JavaScript hosts.
//!
//! # Pipeline
//!
//! 1. [`mapper`] - pointer position to clamped image-space pixel
//! 2. [`hit`] - which handle (if any) of the committed rectangle is under it
//! 3. [`transform`] - candidate rectangle for the active handle or a new draw
//! 4. [`session`] - owns the state and commits the candidate on release
//!
//! [`cursor`] derives hover feedback from the hit zone and [`export`] hands
//! the committed rectangle to whoever performs the actual crop.

pub mod config;
pub mod cursor;
pub mod export;
pub mod geometry;
pub mod hit;
pub mod mapper;
pub mod session;
pub mod transform;

pub use config::{ConfigError, CropConfig, DEFAULT_CLICKABLE_RANGE};
pub use cursor::CursorStyle;
pub use export::{crop_rgb, CropRegion, ExportError};
pub use geometry::{ContainerOrigin, ImageExtent, ImagePoint, Rectangle, Viewport};
pub use hit::Zone;
pub use mapper::{reduction_ratio, CoordinateMapper};
pub use session::{RectSession, SessionState};
pub use transform::TransformMode;
