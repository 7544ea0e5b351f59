use std::ops::BitOr;

use crate::{
    foundation::core::{Point, Size, Vec2},
    solver::placement::RectPlacement,
};

/// The host-owned rectangle being driven.
///
/// Only the anchors, `size_delta` and `anchored_position` are written by a
/// fitter; `pivot` belongs to the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetRect {
    /// Lower-left anchor, normalized to the parent.
    pub anchor_min: Point,
    /// Upper-right anchor, normalized to the parent.
    pub anchor_max: Point,
    /// Normalized pivot.
    pub pivot: Point,
    /// Size relative to the anchor span.
    pub size_delta: Vec2,
    /// Pivot position relative to the anchor reference point.
    pub anchored_position: Vec2,
}

impl Default for TargetRect {
    fn default() -> Self {
        Self {
            anchor_min: Point::new(0.5, 0.5),
            anchor_max: Point::new(0.5, 0.5),
            pivot: Point::new(0.5, 0.5),
            size_delta: Vec2::new(100.0, 100.0),
            anchored_position: Vec2::ZERO,
        }
    }
}

impl TargetRect {
    /// Rect with the default layout and the given pivot.
    pub fn with_pivot(pivot: Point) -> Self {
        Self {
            pivot,
            ..Self::default()
        }
    }

    /// Write a placement onto this rect; the pivot is left alone.
    pub fn apply(&mut self, placement: &RectPlacement) {
        self.anchor_min = placement.anchor_min;
        self.anchor_max = placement.anchor_max;
        self.size_delta = placement.size_delta;
        self.anchored_position = placement.anchored_position;
    }

    /// The placement-relevant properties of this rect.
    pub fn placement(&self) -> RectPlacement {
        RectPlacement {
            anchor_min: self.anchor_min,
            anchor_max: self.anchor_max,
            size_delta: self.size_delta,
            anchored_position: self.anchored_position,
        }
    }
}

/// Set of rect properties locked by a driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DrivenProperties(u8);

impl DrivenProperties {
    /// Nothing driven.
    pub const NONE: Self = Self(0);
    /// `anchor_min.x`.
    pub const ANCHOR_MIN_X: Self = Self(1 << 0);
    /// `anchor_min.y`.
    pub const ANCHOR_MIN_Y: Self = Self(1 << 1);
    /// `anchor_max.x`.
    pub const ANCHOR_MAX_X: Self = Self(1 << 2);
    /// `anchor_max.y`.
    pub const ANCHOR_MAX_Y: Self = Self(1 << 3);
    /// `size_delta.x`.
    pub const SIZE_DELTA_X: Self = Self(1 << 4);
    /// `size_delta.y`.
    pub const SIZE_DELTA_Y: Self = Self(1 << 5);
    /// `anchored_position.x`.
    pub const ANCHORED_POSITION_X: Self = Self(1 << 6);
    /// `anchored_position.y`.
    pub const ANCHORED_POSITION_Y: Self = Self(1 << 7);
    /// Everything a full-stretch padding driver writes.
    pub const STRETCH_PADDING: Self = Self(0xff);

    /// `true` if every property in `other` is also in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` if nothing is driven.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for DrivenProperties {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Host layout system seen from a rect driver.
pub trait LayoutHost {
    /// Size of the top-level container of the driven rect, or `None` if it has none.
    fn container_size(&self) -> Option<Size>;

    /// Current pivot of the driven rect.
    fn pivot(&self) -> Point;

    /// Write a placement onto the driven rect.
    fn apply(&mut self, placement: &RectPlacement);

    /// Lock `props` so other systems leave them alone.
    fn lock(&mut self, props: DrivenProperties);

    /// Release every property previously locked.
    fn release(&mut self);

    /// Ask the host to lay the rect out again.
    fn mark_for_rebuild(&mut self);
}

/// A [`LayoutHost`] over a plain [`TargetRect`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InMemoryHost {
    /// The driven rect.
    pub rect: TargetRect,
    /// Top-level container size; `None` simulates a rect outside any container.
    pub container: Option<Size>,
    /// Properties currently locked.
    pub driven: DrivenProperties,
    /// Set by [`LayoutHost::mark_for_rebuild`].
    pub rebuild_requested: bool,
}

impl InMemoryHost {
    /// Host for `rect` inside a container of `container` size.
    pub fn new(rect: TargetRect, container: Size) -> Self {
        Self {
            rect,
            container: Some(container),
            ..Self::default()
        }
    }
}

impl LayoutHost for InMemoryHost {
    fn container_size(&self) -> Option<Size> {
        self.container
    }

    fn pivot(&self) -> Point {
        self.rect.pivot
    }

    fn apply(&mut self, placement: &RectPlacement) {
        self.rect.apply(placement);
    }

    fn lock(&mut self, props: DrivenProperties) {
        self.driven = self.driven | props;
    }

    fn release(&mut self) {
        self.driven = DrivenProperties::NONE;
    }

    fn mark_for_rebuild(&mut self) {
        self.rebuild_requested = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/rect.rs"]
mod tests;
