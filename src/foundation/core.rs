pub use kurbo::{Insets, Point, Rect, Size, Vec2};

/// Replace NaN and infinities with `0.0`.
///
/// Some platforms report NaN safe areas for the first few frames.
pub(crate) fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// A rectangle in screen-fraction coordinates, origin at the bottom-left.
///
/// Under normal operation every component lies in `[0, 1]` and
/// `x + width <= 1`, `y + height <= 1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RelativeRect {
    /// Left edge of the region.
    pub x: f64,
    /// Bottom edge of the region.
    pub y: f64,
    /// Width as a fraction of the screen width.
    pub width: f64,
    /// Height as a fraction of the screen height.
    pub height: f64,
}

impl Default for RelativeRect {
    fn default() -> Self {
        Self::FULL
    }
}

impl RelativeRect {
    /// The whole screen: no inset on any edge.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Build a relative rect from its components.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert an absolute rectangle measured against `dims` into screen fractions.
    ///
    /// A zero, negative or non-finite dimension yields `0.0` for the components
    /// divided by it. Non-finite components of `rect` stay non-finite.
    pub fn from_absolute(rect: Rect, dims: Size) -> Self {
        fn frac(v: f64, dim: f64) -> f64 {
            if !(dim.is_finite() && dim > 0.0) {
                return 0.0;
            }
            v / dim
        }

        Self {
            x: frac(rect.x0, dims.width),
            y: frac(rect.y0, dims.height),
            width: frac(rect.width(), dims.width),
            height: frac(rect.height(), dims.height),
        }
    }

    /// Copy with every non-finite component replaced by `0.0`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            x: finite_or_zero(self.x),
            y: finite_or_zero(self.y),
            width: finite_or_zero(self.width),
            height: finite_or_zero(self.height),
        }
    }

    /// `true` if all four components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Right edge (`x + width`).
    pub fn x_max(self) -> f64 {
        self.x + self.width
    }

    /// Top edge (`y + height`).
    pub fn y_max(self) -> f64 {
        self.y + self.height
    }

    /// Per-edge insets this rect leaves inside the screen, unsanitized.
    pub fn edge_insets(self) -> Edges<f64> {
        Edges::new(self.x, self.y, 1.0 - self.y_max(), 1.0 - self.x_max())
    }

    /// The rect leaving exactly `insets` on each edge.
    pub fn from_insets(insets: Edges<f64>) -> Self {
        Self::new(
            insets.left,
            insets.bottom,
            1.0 - insets.left - insets.right,
            1.0 - insets.bottom - insets.top,
        )
    }

    /// Copy whose implied edge insets are zeroed independently when non-finite.
    ///
    /// A NaN height leaves the top edge unpadded rather than collapsing the rect.
    /// Finite rects are returned unchanged.
    #[must_use]
    pub fn with_finite_insets(self) -> Self {
        if self.is_finite() {
            return self;
        }
        Self::from_insets(self.edge_insets().map(finite_or_zero))
    }
}

/// One of the four edges of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Left edge.
    Left,
    /// Bottom edge.
    Bottom,
    /// Top edge.
    Top,
    /// Right edge.
    Right,
}

impl Edge {
    /// All edges in `left, bottom, top, right` order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Bottom, Self::Top, Self::Right];

    /// The edge across the rectangle from this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Bottom => Self::Top,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
        }
    }

    /// `true` for left and right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// A value per edge, stored in `left, bottom, top, right` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Edges<T> {
    /// Left edge value.
    pub left: T,
    /// Bottom edge value.
    pub bottom: T,
    /// Top edge value.
    pub top: T,
    /// Right edge value.
    pub right: T,
}

impl<T> Edges<T> {
    /// Build from explicit per-edge values.
    pub const fn new(left: T, bottom: T, top: T, right: T) -> Self {
        Self {
            left,
            bottom,
            top,
            right,
        }
    }

    /// Value stored for `edge`.
    pub fn get(&self, edge: Edge) -> &T {
        match edge {
            Edge::Left => &self.left,
            Edge::Bottom => &self.bottom,
            Edge::Top => &self.top,
            Edge::Right => &self.right,
        }
    }

    /// Apply `f` to every edge value.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Edges<U> {
        Edges {
            left: f(self.left),
            bottom: f(self.bottom),
            top: f(self.top),
            right: f(self.right),
        }
    }

    /// Build by evaluating `f` for each edge.
    pub fn from_fn(mut f: impl FnMut(Edge) -> T) -> Self {
        Self {
            left: f(Edge::Left),
            bottom: f(Edge::Bottom),
            top: f(Edge::Top),
            right: f(Edge::Right),
        }
    }

    /// Swap left with right and bottom with top.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            left: self.right,
            bottom: self.top,
            top: self.bottom,
            right: self.left,
        }
    }
}

impl<T: Copy> Edges<T> {
    /// Same value on every edge.
    pub const fn uniform(v: T) -> Self {
        Self::new(v, v, v, v)
    }
}

/// Absolute inset distances in container units.
pub type InsetVector = Edges<f64>;

impl Edges<f64> {
    /// Zero on every edge.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Sum of left and right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of bottom and top.
    pub fn vertical(&self) -> f64 {
        self.bottom + self.top
    }

    /// Convert to [`kurbo::Insets`] for a y-up rectangle (`y0` is the bottom edge).
    pub fn to_insets_y_up(self) -> Insets {
        Insets {
            x0: self.left,
            y0: self.bottom,
            x1: self.right,
            y1: self.top,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
