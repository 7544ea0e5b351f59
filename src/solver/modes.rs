use crate::foundation::core::{Edge, Edges, Size, finite_or_zero};

/// How an edge reads the safe-area inset measured on it.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Use the inset reported on this edge.
    #[default]
    On,
    /// Use this edge's inset, or the opposite edge's if that one is larger.
    Balanced,
    /// Contribute no inset.
    Off,
}

impl EdgeMode {
    /// Resolve a relative inset for one edge given its own and the opposite edge's value.
    pub fn resolve(self, own: f64, opposite: f64) -> f64 {
        match self {
            Self::Off => 0.0,
            Self::On => own,
            Self::Balanced => {
                if opposite > own {
                    opposite
                } else {
                    own
                }
            }
        }
    }
}

/// One [`EdgeMode`] per edge.
pub type EdgeModes = Edges<EdgeMode>;

impl Edges<EdgeMode> {
    /// Every edge [`EdgeMode::On`].
    pub const ALL_ON: Self = Self::uniform(EdgeMode::On);
    /// Every edge [`EdgeMode::Balanced`].
    pub const ALL_BALANCED: Self = Self::uniform(EdgeMode::Balanced);
    /// Every edge [`EdgeMode::Off`].
    pub const ALL_OFF: Self = Self::uniform(EdgeMode::Off);
}

/// Screen orientation inferred from the container's aspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Taller than wide, or square.
    Portrait,
    /// Wider than tall.
    Landscape,
}

impl Orientation {
    /// Classify a container size.
    pub fn of(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Edge modes with an optional landscape-specific override.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct OrientationModes {
    /// Modes used in portrait, and in landscape when no landscape set is given.
    #[serde(default)]
    pub portrait_or_default: EdgeModes,
    /// Modes used in landscape.
    #[serde(default)]
    pub landscape: Option<EdgeModes>,
}

impl OrientationModes {
    /// Same modes regardless of orientation.
    pub const fn uniform(modes: EdgeModes) -> Self {
        Self {
            portrait_or_default: modes,
            landscape: None,
        }
    }

    /// Modes that apply to `orientation`.
    pub fn select(&self, orientation: Orientation) -> EdgeModes {
        match (orientation, self.landscape) {
            (Orientation::Landscape, Some(landscape)) => landscape,
            _ => self.portrait_or_default,
        }
    }
}

impl From<EdgeModes> for OrientationModes {
    fn from(value: EdgeModes) -> Self {
        Self::uniform(value)
    }
}

/// Per-edge damping factors in `[0, 1]`, keyed by the edge the inset was measured on.
///
/// Deserializes from either a single number or a per-edge object.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(from = "InfluenceRepr")]
pub struct Influence(pub Edges<f64>);

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum InfluenceRepr {
    Uniform(f64),
    PerEdge(Edges<f64>),
}

impl From<InfluenceRepr> for Influence {
    fn from(value: InfluenceRepr) -> Self {
        match value {
            InfluenceRepr::Uniform(v) => Self::uniform(v),
            InfluenceRepr::PerEdge(e) => Self(e),
        }
    }
}

impl Default for Influence {
    fn default() -> Self {
        Self::FULL
    }
}

impl Influence {
    /// No damping.
    pub const FULL: Self = Self(Edges::uniform(1.0));
    /// Insets suppressed entirely.
    pub const NONE: Self = Self(Edges::uniform(0.0));

    /// Same factor on every edge.
    pub const fn uniform(v: f64) -> Self {
        Self(Edges::uniform(v))
    }

    /// Factor for `edge`, with NaN mapped to `0.0` and the result clamped to `[0, 1]`.
    pub fn factor(&self, edge: Edge) -> f64 {
        finite_or_zero(*self.0.get(edge)).clamp(0.0, 1.0)
    }

    /// First edge whose factor is non-finite or outside `[0, 1]`.
    pub fn first_invalid(&self) -> Option<(Edge, f64)> {
        Edge::ALL.into_iter().find_map(|edge| {
            let v = *self.0.get(edge);
            (!v.is_finite() || !(0.0..=1.0).contains(&v)).then_some((edge, v))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/solver/modes.rs"]
mod tests;
