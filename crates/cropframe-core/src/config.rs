//! Session configuration.
//!
//! Configuration is fixed for the lifetime of a [`RectSession`](crate::session::RectSession).
//! Hosts usually build it from a JS object or a settings file, so every field
//! has a serde default and a missing field never fails deserialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default hit-zone half-width around handles and edges, in image pixels.
pub const DEFAULT_CLICKABLE_RANGE: i32 = 16;

/// Error types for configuration and viewport setup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The hit tolerance must not be negative.
    #[error("Invalid clickable range: {0} (must be >= 0)")]
    NegativeClickableRange(i32),

    /// The image has no width, so no ratio can be derived from it.
    #[error("Cannot compute reduction ratio for an image with zero width")]
    ZeroImageWidth,

    /// The ratio is zero, negative, infinite or NaN.
    #[error("Invalid reduction ratio: {0}")]
    InvalidReductionRatio(f64),
}

/// Tunables for a crop session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropConfig {
    /// Hit-zone half-width in image-space pixels.
    #[serde(default = "default_clickable_range")]
    pub clickable_range: i32,
}

fn default_clickable_range() -> i32 {
    DEFAULT_CLICKABLE_RANGE
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            clickable_range: DEFAULT_CLICKABLE_RANGE,
        }
    }
}

impl CropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clickable_range(mut self, clickable_range: i32) -> Self {
        self.clickable_range = clickable_range;
        self
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clickable_range < 0 {
            return Err(ConfigError::NegativeClickableRange(self.clickable_range));
        }
        Ok(())
    }
}

/// Check a reduction ratio coming from the input surface.
pub fn validate_reduction_ratio(ratio: f64) -> Result<f64, ConfigError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(ConfigError::InvalidReductionRatio(ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CropConfig::new();
        assert_eq!(config.clickable_range, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_range_rejected() {
        let config = CropConfig::new().with_clickable_range(-1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeClickableRange(-1))
        );
    }

    #[test]
    fn test_zero_range_allowed() {
        let config = CropConfig::new().with_clickable_range(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reduction_ratio() {
        assert_eq!(validate_reduction_ratio(0.5), Ok(0.5));
        assert!(validate_reduction_ratio(0.0).is_err());
        assert!(validate_reduction_ratio(-1.0).is_err());
        assert!(validate_reduction_ratio(f64::NAN).is_err());
        assert!(validate_reduction_ratio(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::NegativeClickableRange(-4).to_string(),
            "Invalid clickable range: -4 (must be >= 0)"
        );
        assert_eq!(
            ConfigError::ZeroImageWidth.to_string(),
            "Cannot compute reduction ratio for an image with zero width"
        );
    }
}
