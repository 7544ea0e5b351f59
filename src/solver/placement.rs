use crate::foundation::core::{InsetVector, Point, Vec2, finite_or_zero};

/// Anchor, size and position written onto a full-stretch rect.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectPlacement {
    /// Always `(0, 0)`.
    pub anchor_min: Point,
    /// Always `(1, 1)`.
    pub anchor_max: Point,
    /// Negative combined insets: `(-(left + right), -(bottom + top))`.
    pub size_delta: Vec2,
    /// Position of the pivot relative to its anchor reference.
    pub anchored_position: Vec2,
}

impl RectPlacement {
    /// Anchors spanning the whole parent.
    pub const STRETCH_MIN: Point = Point::new(0.0, 0.0);
    /// Anchors spanning the whole parent.
    pub const STRETCH_MAX: Point = Point::new(1.0, 1.0);

    /// Full-bleed placement: no inset anywhere.
    pub const FULL_BLEED: Self = Self {
        anchor_min: Self::STRETCH_MIN,
        anchor_max: Self::STRETCH_MAX,
        size_delta: Vec2::ZERO,
        anchored_position: Vec2::ZERO,
    };
}

/// Anchored position of a stretched rect whose bottom-left sits at `origin`.
///
/// A stretched rect measures its anchored position from the pivot, so the
/// corner offset is shifted by `pivot * size_delta`.
pub fn pivot_adjusted_position(origin: Vec2, size_delta: Vec2, pivot: Point) -> Vec2 {
    let px = finite_or_zero(pivot.x);
    let py = finite_or_zero(pivot.y);
    Vec2::new(origin.x + px * size_delta.x, origin.y + py * size_delta.y)
}

/// Turn absolute insets into a full-stretch placement for a rect with `pivot`.
pub fn place(insets: &InsetVector, pivot: Point) -> RectPlacement {
    let size_delta = Vec2::new(-insets.horizontal(), -insets.vertical());
    let anchored_position =
        pivot_adjusted_position(Vec2::new(insets.left, insets.bottom), size_delta, pivot);
    RectPlacement {
        anchor_min: RectPlacement::STRETCH_MIN,
        anchor_max: RectPlacement::STRETCH_MAX,
        size_delta,
        anchored_position,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/solver/placement.rs"]
mod tests;
