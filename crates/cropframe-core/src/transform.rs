//! Candidate rectangle computation while a gesture is in progress.
//!
//! Every mode reduces to one [`AxisRule`] per axis, looked up in a single
//! dispatch table ([`axis_rules`]). A rule names which two values compete on
//! that axis: the fixed anchor edge and the pointer, the two pointer
//! positions of a fresh draw, or nothing at all. The two values are always
//! ordered so the smaller becomes the start, which is why dragging a handle
//! past the opposite edge flips the rectangle instead of inverting it.

use crate::geometry::{ImagePoint, Rectangle};
use crate::hit::Zone;
use serde::{Deserialize, Serialize};

/// What the active gesture does to the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    /// Draw a new rectangle from the pointer-down position.
    #[default]
    Draw,
    /// Resize the committed rectangle by the given handle.
    Resize(Zone),
}

impl From<Zone> for TransformMode {
    fn from(zone: Zone) -> Self {
        match zone {
            Zone::None => TransformMode::Draw,
            handle => TransformMode::Resize(handle),
        }
    }
}

impl TransformMode {
    /// Zone driving this mode, `Zone::None` for a draw.
    pub fn zone(self) -> Zone {
        match self {
            TransformMode::Draw => Zone::None,
            TransformMode::Resize(zone) => zone,
        }
    }
}

/// How one axis of the candidate is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRule {
    /// Keep the committed start and end.
    Keep,
    /// Committed start is the anchor, the pointer drives the end.
    AnchorStart,
    /// Committed end is the anchor, the pointer drives the start.
    AnchorEnd,
    /// Span between pointer-down and the pointer.
    Draw,
}

/// Per-mode dispatch table: `(x rule, y rule)`.
pub const fn axis_rules(mode: TransformMode) -> (AxisRule, AxisRule) {
    use AxisRule::*;
    match mode {
        TransformMode::Resize(Zone::TopLeft) => (AnchorEnd, AnchorEnd),
        TransformMode::Resize(Zone::TopRight) => (AnchorStart, AnchorEnd),
        TransformMode::Resize(Zone::BottomRight) => (AnchorStart, AnchorStart),
        TransformMode::Resize(Zone::BottomLeft) => (AnchorEnd, AnchorStart),
        TransformMode::Resize(Zone::Top) => (Keep, AnchorEnd),
        TransformMode::Resize(Zone::Bottom) => (Keep, AnchorStart),
        TransformMode::Resize(Zone::Right) => (AnchorStart, Keep),
        TransformMode::Resize(Zone::Left) => (AnchorEnd, Keep),
        TransformMode::Resize(Zone::None) | TransformMode::Draw => (Draw, Draw),
    }
}

/// Resolve one axis to an ordered `(start, end)` pair.
#[inline]
fn resolve_axis(rule: AxisRule, start: i32, end: i32, down: i32, moved: i32) -> (i32, i32) {
    let (a, b) = match rule {
        AxisRule::Keep => (start, end),
        AxisRule::AnchorStart => (start, moved),
        AxisRule::AnchorEnd => (moved, end),
        AxisRule::Draw => (down, moved),
    };
    (a.min(b), a.max(b))
}

/// Compute the candidate rectangle for one pointer-move.
///
/// `rect` is the committed rectangle the gesture started from; it is ignored
/// in draw mode. The result is always normalized.
pub fn transform(
    mode: TransformMode,
    rect: &Rectangle,
    pointer_down: ImagePoint,
    pointer_move: ImagePoint,
) -> Rectangle {
    let (x_rule, y_rule) = axis_rules(mode);
    let (start_x, end_x) =
        resolve_axis(x_rule, rect.start_x, rect.end_x, pointer_down.x, pointer_move.x);
    let (start_y, end_y) =
        resolve_axis(y_rule, rect.start_y, rect.end_y, pointer_down.y, pointer_move.y);

    Rectangle {
        start_x,
        start_y,
        end_x,
        end_y,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rect_strategy() -> impl Strategy<Value = Rectangle> {
        (0i32..=1000, 0i32..=1000, 0i32..=1000, 0i32..=1000).prop_map(|(a, b, c, d)| {
            Rectangle::from_corners(ImagePoint::new(a, b), ImagePoint::new(c, d))
        })
    }

    fn point_strategy() -> impl Strategy<Value = ImagePoint> {
        (0i32..=1000, 0i32..=1000).prop_map(|(x, y)| ImagePoint::new(x, y))
    }

    fn mode_strategy() -> impl Strategy<Value = TransformMode> {
        prop_oneof![
            Just(TransformMode::Draw),
            Just(TransformMode::Resize(Zone::TopLeft)),
            Just(TransformMode::Resize(Zone::TopRight)),
            Just(TransformMode::Resize(Zone::BottomRight)),
            Just(TransformMode::Resize(Zone::BottomLeft)),
            Just(TransformMode::Resize(Zone::Top)),
            Just(TransformMode::Resize(Zone::Right)),
            Just(TransformMode::Resize(Zone::Bottom)),
            Just(TransformMode::Resize(Zone::Left)),
        ]
    }

    proptest! {
        /// Property: every candidate is normalized.
        #[test]
        fn prop_result_normalized(
            mode in mode_strategy(),
            rect in rect_strategy(),
            down in point_strategy(),
            moved in point_strategy(),
        ) {
            let result = transform(mode, &rect, down, moved);
            prop_assert!(result.is_normalized());
            prop_assert!(result.width() >= 0 && result.height() >= 0);
        }

        /// Property: a resize always keeps the committed anchor corner.
        #[test]
        fn prop_corner_resize_keeps_anchor(
            rect in rect_strategy(),
            moved in point_strategy(),
        ) {
            let result = transform(TransformMode::Resize(Zone::TopLeft), &rect, rect.top_left(), moved);
            prop_assert!(result.start_x == rect.end_x || result.end_x == rect.end_x);
            prop_assert!(result.start_y == rect.end_y || result.end_y == rect.end_y);
        }

        /// Property: results stay within the box spanned by the inputs, so a
        /// clamped pointer yields a clamped rectangle.
        #[test]
        fn prop_result_within_inputs(
            mode in mode_strategy(),
            rect in rect_strategy(),
            down in point_strategy(),
            moved in point_strategy(),
        ) {
            let result = transform(mode, &rect, down, moved);
            let lo_x = rect.start_x.min(down.x).min(moved.x);
            let hi_x = rect.end_x.max(down.x).max(moved.x);
            let lo_y = rect.start_y.min(down.y).min(moved.y);
            let hi_y = rect.end_y.max(down.y).max(moved.y);
            prop_assert!(result.start_x >= lo_x && result.end_x <= hi_x);
            prop_assert!(result.start_y >= lo_y && result.end_y <= hi_y);
        }

        /// Property: dragging a handle back to where it is changes nothing.
        #[test]
        fn prop_resize_to_own_corner_is_identity(rect in rect_strategy()) {
            let corners = [
                (Zone::TopLeft, rect.top_left()),
                (Zone::TopRight, ImagePoint::new(rect.end_x, rect.start_y)),
                (Zone::BottomRight, rect.bottom_right()),
                (Zone::BottomLeft, ImagePoint::new(rect.start_x, rect.end_y)),
            ];
            for (zone, corner) in corners {
                let result = transform(TransformMode::Resize(zone), &rect, corner, corner);
                prop_assert_eq!(result, rect);
            }
        }
    }
}
