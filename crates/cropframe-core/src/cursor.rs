//! Cursor affordance for a hit zone.

use crate::hit::Zone;
use serde::{Deserialize, Serialize};

/// Cursor shown over the crop surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    /// Ready to draw a new rectangle.
    #[default]
    Crosshair,
    /// Diagonal, top-left to bottom-right.
    NwseResize,
    /// Diagonal, top-right to bottom-left.
    NeswResize,
    /// Vertical.
    NsResize,
    /// Horizontal.
    EwResize,
}

impl CursorStyle {
    /// CSS `cursor` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            CursorStyle::Crosshair => "crosshair",
            CursorStyle::NwseResize => "nwse-resize",
            CursorStyle::NeswResize => "nesw-resize",
            CursorStyle::NsResize => "ns-resize",
            CursorStyle::EwResize => "ew-resize",
        }
    }
}

impl From<Zone> for CursorStyle {
    fn from(zone: Zone) -> Self {
        resolve(zone)
    }
}

/// Map a zone to its cursor.
pub fn resolve(zone: Zone) -> CursorStyle {
    match zone {
        Zone::TopLeft | Zone::BottomRight => CursorStyle::NwseResize,
        Zone::TopRight | Zone::BottomLeft => CursorStyle::NeswResize,
        Zone::Top | Zone::Bottom => CursorStyle::NsResize,
        Zone::Left | Zone::Right => CursorStyle::EwResize,
        Zone::None => CursorStyle::Crosshair,
    }
}
