//! Hit-testing of the crop rectangle's handles and edges.
//!
//! A point is classified into exactly one [`Zone`]. Each zone is a predicate
//! over two inclusive tolerance bands, one per axis. Corner zones band both
//! axes around a single edge each; edge zones band one axis around its edge
//! and accept the whole span of the other axis (widened by the tolerance),
//! so the full length of every side is grabbable.
//!
//! Bands overlap near the corners. The predicates are evaluated in a fixed
//! order with all corners before any edge, and the first match wins.

use crate::geometry::{ImagePoint, Rectangle};
use serde::{Deserialize, Serialize};

/// Region of the crop rectangle under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Top,
    Right,
    Bottom,
    Left,
    /// Outside every handle band, or no rectangle exists.
    #[default]
    None,
}

impl Zone {
    /// True for the four corner handles.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Zone::TopLeft | Zone::TopRight | Zone::BottomRight | Zone::BottomLeft
        )
    }

    /// True for the four edge handles.
    pub fn is_edge(self) -> bool {
        matches!(self, Zone::Top | Zone::Right | Zone::Bottom | Zone::Left)
    }

    /// Snake-case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::TopLeft => "top_left",
            Zone::TopRight => "top_right",
            Zone::BottomRight => "bottom_right",
            Zone::BottomLeft => "bottom_left",
            Zone::Top => "top",
            Zone::Right => "right",
            Zone::Bottom => "bottom",
            Zone::Left => "left",
            Zone::None => "none",
        }
    }
}

/// Closed interval on one axis.
#[derive(Debug, Clone, Copy)]
struct Band {
    lo: i32,
    hi: i32,
}

impl Band {
    /// `[edge - tolerance, edge + tolerance]`
    fn around(edge: i32, tolerance: i32) -> Self {
        Self {
            lo: edge.saturating_sub(tolerance),
            hi: edge.saturating_add(tolerance),
        }
    }

    /// `[start - tolerance, end + tolerance]`
    fn spanning(start: i32, end: i32, tolerance: i32) -> Self {
        Self {
            lo: start.saturating_sub(tolerance),
            hi: end.saturating_add(tolerance),
        }
    }

    #[inline]
    fn contains(&self, v: i32) -> bool {
        self.lo <= v && v <= self.hi
    }
}

/// Zone predicates in priority order: corners, then edges.
const ZONE_ORDER: [Zone; 8] = [
    Zone::TopLeft,
    Zone::TopRight,
    Zone::BottomRight,
    Zone::BottomLeft,
    Zone::Top,
    Zone::Right,
    Zone::Bottom,
    Zone::Left,
];

/// Bands a point must fall into, on X and Y, to be inside `zone`.
fn zone_bands(zone: Zone, rect: &Rectangle, tolerance: i32) -> Option<(Band, Band)> {
    let left = Band::around(rect.start_x, tolerance);
    let right = Band::around(rect.end_x, tolerance);
    let top = Band::around(rect.start_y, tolerance);
    let bottom = Band::around(rect.end_y, tolerance);
    let across = Band::spanning(rect.start_x, rect.end_x, tolerance);
    let down = Band::spanning(rect.start_y, rect.end_y, tolerance);

    let bands = match zone {
        Zone::TopLeft => (left, top),
        Zone::TopRight => (right, top),
        Zone::BottomRight => (right, bottom),
        Zone::BottomLeft => (left, bottom),
        Zone::Top => (across, top),
        Zone::Right => (right, down),
        Zone::Bottom => (across, bottom),
        Zone::Left => (left, down),
        Zone::None => return None,
    };
    Some(bands)
}

/// Classify `point` against the committed rectangle.
///
/// Returns [`Zone::None`] when there is no rectangle or the point lies
/// outside every band.
pub fn classify(point: ImagePoint, rect: Option<&Rectangle>, tolerance: i32) -> Zone {
    let Some(rect) = rect else {
        return Zone::None;
    };

    ZONE_ORDER
        .into_iter()
        .find(|&zone| {
            zone_bands(zone, rect, tolerance)
                .is_some_and(|(x_band, y_band)| x_band.contains(point.x) && y_band.contains(point.y))
        })
        .unwrap_or(Zone::None)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rect_strategy() -> impl Strategy<Value = Rectangle> {
        (0i32..=500, 0i32..=500, 0i32..=500, 0i32..=500).prop_map(|(a, b, c, d)| {
            Rectangle::from_corners(ImagePoint::new(a, b), ImagePoint::new(c, d))
        })
    }

    proptest! {
        /// Property: a point reported in a corner zone is within tolerance of
        /// that corner on both axes.
        #[test]
        fn prop_corner_zone_near_corner(
            rect in rect_strategy(),
            (x, y) in (-50i32..=550, -50i32..=550),
            tol in 0i32..=32,
        ) {
            let zone = classify(ImagePoint::new(x, y), Some(&rect), tol);
            let corner = match zone {
                Zone::TopLeft => Some((rect.start_x, rect.start_y)),
                Zone::TopRight => Some((rect.end_x, rect.start_y)),
                Zone::BottomRight => Some((rect.end_x, rect.end_y)),
                Zone::BottomLeft => Some((rect.start_x, rect.end_y)),
                _ => None,
            };
            if let Some((cx, cy)) = corner {
                prop_assert!((x - cx).abs() <= tol);
                prop_assert!((y - cy).abs() <= tol);
            }
        }

        /// Property: points far outside the widened rectangle are never hit.
        #[test]
        fn prop_far_points_miss(
            rect in rect_strategy(),
            tol in 0i32..=32,
            offset in 1i32..=100,
        ) {
            let p = ImagePoint::new(rect.end_x + tol + offset, rect.end_y + tol + offset);
            prop_assert_eq!(classify(p, Some(&rect), tol), Zone::None);
        }

        /// Property: every corner of the rectangle classifies as a corner.
        #[test]
        fn prop_corners_hit_as_corners(rect in rect_strategy(), tol in 0i32..=32) {
            for p in [rect.top_left(), rect.bottom_right()] {
                prop_assert!(classify(p, Some(&rect), tol).is_corner());
            }
        }
    }
}
