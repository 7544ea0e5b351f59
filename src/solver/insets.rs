use crate::{
    foundation::core::{Edges, InsetVector, Point, RelativeRect, Size, finite_or_zero},
    solver::modes::{EdgeModes, Influence},
    solver::placement::{RectPlacement, place},
};

/// Everything a single solve reads. No other state participates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SolveInput {
    /// Currently resolved safe area in screen fractions.
    pub safe_area: RelativeRect,
    /// Policy per edge.
    pub modes: EdgeModes,
    /// Damping per measured edge.
    pub influence: Influence,
    /// Redirect every inset to the opposite physical edge.
    pub flip_padding: bool,
    /// Size of the top-level container the insets are expressed in.
    pub container: Size,
    /// Pivot of the driven rect, normalized.
    pub pivot: Point,
}

/// Result of [`solve`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Solution {
    /// Per-edge relative insets derived from the safe area, before policies.
    pub relative: Edges<f64>,
    /// Absolute insets after policy, influence and flip.
    pub insets: InsetVector,
    /// Properties to write onto the driven rect.
    pub placement: RectPlacement,
}

/// Per-edge insets implied by a relative safe area, as screen fractions.
///
/// Non-finite components of `area` count as `0.0`, and negative results
/// (a safe area spilling past the screen) are clamped to `0.0`.
pub fn relative_insets(area: RelativeRect) -> Edges<f64> {
    area.sanitized().edge_insets().map(|v| finite_or_zero(v).max(0.0))
}

/// Apply edge policies and influence, then scale to container units.
///
/// Left/right scale with the container width, bottom/top with its height.
pub fn resolve_insets(
    relative: &Edges<f64>,
    modes: &EdgeModes,
    influence: &Influence,
    container: Size,
) -> InsetVector {
    let w = finite_or_zero(container.width).max(0.0);
    let h = finite_or_zero(container.height).max(0.0);
    Edges::from_fn(|edge| {
        let own = *relative.get(edge);
        let opposite = *relative.get(edge.opposite());
        let fraction = modes.get(edge).resolve(own, opposite);
        let dim = if edge.is_horizontal() { w } else { h };
        dim * influence.factor(edge) * fraction
    })
}

/// Compute insets and the full-stretch placement for one rect.
///
/// Total: every input, including NaN safe areas and zero containers,
/// produces finite output.
pub fn solve(input: &SolveInput) -> Solution {
    let relative = relative_insets(input.safe_area);
    let mut insets = resolve_insets(&relative, &input.modes, &input.influence, input.container);
    if input.flip_padding {
        insets = insets.flipped();
    }
    let placement = place(&insets, input.pivot);

    tracing::debug!(
        safe_area = ?input.safe_area,
        ?relative,
        ?insets,
        size_delta = ?placement.size_delta,
        anchored_position = ?placement.anchored_position,
        "safe padding solved"
    );

    Solution {
        relative,
        insets,
        placement,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/solver/insets.rs"]
mod tests;
