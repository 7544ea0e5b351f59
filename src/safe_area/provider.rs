use std::sync::Arc;

use crate::{
    foundation::core::{Rect, RelativeRect, Size},
    safe_area::simulation::{Cutouts, SimulationContext},
};

/// Where the process is running; decides which dimension the platform's
/// safe-area rectangle was measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionContext {
    /// Editor preview window.
    EditorPreview,
    /// Desktop build where the window itself is reported as the safe area.
    Standalone,
    /// Phone or tablet at its current resolution.
    #[default]
    Device,
}

/// Display dimensions reported by the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayMetrics {
    /// Execution context the values come from.
    #[serde(default)]
    pub context: ExecutionContext,
    /// Current device resolution in pixels.
    pub device_resolution: Size,
    /// Resolution of the surface being rendered to, if known.
    #[serde(default)]
    pub render_surface: Option<Size>,
    /// Size of the editor preview window, if any.
    #[serde(default)]
    pub preview_window: Option<Size>,
}

impl DisplayMetrics {
    /// Metrics for a device at `resolution`.
    pub fn device(resolution: Size) -> Self {
        Self {
            context: ExecutionContext::Device,
            device_resolution: resolution,
            render_surface: None,
            preview_window: None,
        }
    }

    /// Dimensions `safe_area` was measured against in this context.
    pub fn reference_size(&self, safe_area: Rect) -> Size {
        match self.context {
            ExecutionContext::EditorPreview => self
                .preview_window
                .or(self.render_surface)
                .unwrap_or(self.device_resolution),
            ExecutionContext::Standalone => safe_area.size(),
            ExecutionContext::Device => self.device_resolution,
        }
    }
}

/// Live platform query for the safe area and display size.
pub trait DisplaySource {
    /// Safe area in absolute pixels, origin bottom-left.
    fn safe_area_px(&self) -> Rect;

    /// Cutouts in absolute pixels, origin bottom-left.
    fn cutouts_px(&self) -> Vec<Rect> {
        Vec::new()
    }

    /// Current display dimensions.
    fn metrics(&self) -> DisplayMetrics;
}

/// Fixed display values, for hosts that push their numbers in and for tests.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaticDisplay {
    /// Safe area in pixels.
    pub safe_area: Rect,
    /// Cutouts in pixels.
    #[serde(default)]
    pub cutouts: Vec<Rect>,
    /// Display metrics.
    pub metrics: DisplayMetrics,
}

impl DisplaySource for StaticDisplay {
    fn safe_area_px(&self) -> Rect {
        self.safe_area
    }

    fn cutouts_px(&self) -> Vec<Rect> {
        self.cutouts.clone()
    }

    fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }
}

/// Something that can hand out the currently applicable relative safe area.
pub trait ProvidesSafeAreaInput {
    /// Current safe area in screen fractions; never NaN.
    fn safe_area_relative(&self) -> RelativeRect;

    /// Simulation slot backing this input, if it has one.
    fn simulation(&self) -> Option<&SimulationContext> {
        None
    }
}

/// A fixed safe area.
impl ProvidesSafeAreaInput for RelativeRect {
    fn safe_area_relative(&self) -> RelativeRect {
        self.sanitized()
    }
}

fn usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Resolves the safe area from a simulator override or the live display.
///
/// Nothing is cached: every call re-reads the display.
#[derive(Debug)]
pub struct SafeAreaProvider<D> {
    display: D,
    simulation: Arc<SimulationContext>,
}

impl<D: DisplaySource> SafeAreaProvider<D> {
    /// Provider reading `display`, deferring to `simulation` while it is active.
    pub fn new(display: D, simulation: Arc<SimulationContext>) -> Self {
        Self {
            display,
            simulation,
        }
    }

    /// Provider with its own, inactive simulation slot.
    pub fn live(display: D) -> Self {
        Self::new(display, Arc::new(SimulationContext::new()))
    }

    /// The live display this provider reads.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Shared simulation slot.
    pub fn simulation_context(&self) -> &Arc<SimulationContext> {
        &self.simulation
    }

    /// Live safe area converted to screen fractions, ignoring any simulation.
    ///
    /// An empty platform safe area (no safe-area support) or an unusable
    /// reference size resolves to the full screen.
    pub fn live_safe_area_relative(&self) -> RelativeRect {
        let area = self.display.safe_area_px();
        let metrics = self.display.metrics();
        let dims = metrics.reference_size(area);
        tracing::trace!(context = ?metrics.context, ?dims, "safe area reference size");

        if area.area() == 0.0 {
            return RelativeRect::FULL;
        }
        if !usable(dims) {
            tracing::warn!(
                ?dims,
                context = ?metrics.context,
                "unusable display size; assuming full-screen safe area"
            );
            return RelativeRect::FULL;
        }

        let rel = RelativeRect::from_absolute(area, dims);
        if !rel.is_finite() {
            tracing::warn!(?rel, "non-finite safe area from platform; zeroing affected insets");
        }
        rel.with_finite_insets()
    }

    /// Live cutouts converted to screen fractions, ignoring any simulation.
    pub fn live_cutouts_relative(&self) -> Cutouts {
        let metrics = self.display.metrics();
        let dims = metrics.reference_size(self.display.safe_area_px());
        if !usable(dims) {
            return Cutouts::new();
        }
        self.display
            .cutouts_px()
            .into_iter()
            .map(|c| RelativeRect::from_absolute(c, dims).sanitized())
            .collect()
    }

    /// Currently applicable safe area: the simulation if active, live data otherwise.
    pub fn current_safe_area(&self) -> RelativeRect {
        match self.simulation.current() {
            Some(sim) => sim.safe_area.with_finite_insets(),
            None => self.live_safe_area_relative(),
        }
    }

    /// Currently applicable cutouts.
    pub fn cutouts_relative(&self) -> Cutouts {
        match self.simulation.current() {
            Some(sim) => sim.cutouts.into_iter().map(RelativeRect::sanitized).collect(),
            None => self.live_cutouts_relative(),
        }
    }
}

impl<D: DisplaySource> ProvidesSafeAreaInput for SafeAreaProvider<D> {
    fn safe_area_relative(&self) -> RelativeRect {
        self.current_safe_area()
    }

    fn simulation(&self) -> Option<&SimulationContext> {
        Some(&*self.simulation)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/safe_area/provider.rs"]
mod tests;
