//! notchfit computes safe-area aware padding for stretched UI rectangles.
//!
//! Phones report a *safe area*: the part of the screen free of notches, camera
//! cutouts and rounded corners. notchfit turns that area into per-edge insets
//! and writes them onto a host rectangle as a full-stretch size and position.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: [`SafeAreaProvider`] reads the live display (or an active
//!    simulator override) and produces a [`RelativeRect`] in screen fractions.
//! 2. **Solve**: [`solve`] applies per-edge [`EdgeMode`]s, [`Influence`] and the
//!    optional flip, scaling to the container: `SolveInput -> Solution`.
//! 3. **Place**: the solution's [`RectPlacement`] is written to a [`LayoutHost`]
//!    by a [`SafeAreaFitter`], which follows the host's lifecycle events.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total**: NaN safe areas, zero containers and odd pivots always produce
//!   finite output. Only structural defects (no container, invalid config) are errors.
//! - **Uncached**: every recompute re-derives from current inputs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod config;
mod foundation;
mod host;
mod safe_area;
mod solver;

pub use config::FitterConfig;
pub use foundation::core::{
    Edge, Edges, InsetVector, Insets, Point, Rect, RelativeRect, Size, Vec2,
};
pub use foundation::error::{NotchfitError, NotchfitResult};
pub use host::fitter::{DrivesRectangle, FitterState, SafeAreaFitter};
pub use host::rect::{DrivenProperties, InMemoryHost, LayoutHost, TargetRect};
pub use safe_area::device::DeviceProfile;
pub use safe_area::provider::{
    DisplayMetrics, DisplaySource, ExecutionContext, ProvidesSafeAreaInput, SafeAreaProvider,
    StaticDisplay,
};
pub use safe_area::simulation::{Cutouts, SimulatedScreen, SimulationContext};
pub use solver::insets::{Solution, SolveInput, relative_insets, resolve_insets, solve};
pub use solver::modes::{EdgeMode, EdgeModes, Influence, Orientation, OrientationModes};
pub use solver::placement::{RectPlacement, pivot_adjusted_position, place};
