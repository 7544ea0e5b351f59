use super::*;
use crate::{
    foundation::core::Edges, safe_area::simulation::SimulatedScreen,
    solver::insets::relative_insets,
};

fn phone(safe_area: Rect) -> StaticDisplay {
    StaticDisplay {
        safe_area,
        cutouts: vec![Rect::from_origin_size((400.0, 1900.0), (200.0, 100.0))],
        metrics: DisplayMetrics::device(Size::new(1000.0, 2000.0)),
    }
}

#[test]
fn device_context_divides_by_device_resolution() {
    let provider =
        SafeAreaProvider::live(phone(Rect::from_origin_size((0.0, 100.0), (1000.0, 1800.0))));
    assert_eq!(
        provider.safe_area_relative(),
        RelativeRect::new(0.0, 0.05, 1.0, 0.9)
    );
}

#[test]
fn editor_preview_prefers_preview_window() {
    let mut display = phone(Rect::from_origin_size((50.0, 0.0), (400.0, 500.0)));
    display.metrics = DisplayMetrics {
        context: ExecutionContext::EditorPreview,
        device_resolution: Size::new(1000.0, 2000.0),
        render_surface: Some(Size::new(250.0, 250.0)),
        preview_window: Some(Size::new(500.0, 500.0)),
    };
    let provider = SafeAreaProvider::live(display);
    assert_eq!(
        provider.safe_area_relative(),
        RelativeRect::new(0.1, 0.0, 0.8, 1.0)
    );
}

#[test]
fn editor_preview_falls_back_to_render_surface_then_device() {
    let area = Rect::from_origin_size((0.0, 0.0), (250.0, 250.0));
    let mut metrics = DisplayMetrics {
        context: ExecutionContext::EditorPreview,
        device_resolution: Size::new(1000.0, 1000.0),
        render_surface: Some(Size::new(500.0, 500.0)),
        preview_window: None,
    };
    assert_eq!(metrics.reference_size(area), Size::new(500.0, 500.0));
    metrics.render_surface = None;
    assert_eq!(metrics.reference_size(area), Size::new(1000.0, 1000.0));
}

#[test]
fn standalone_measures_against_the_safe_area_itself() {
    let mut display = phone(Rect::from_origin_size((0.0, 0.0), (1280.0, 720.0)));
    display.metrics.context = ExecutionContext::Standalone;
    let provider = SafeAreaProvider::live(display);
    assert_eq!(provider.safe_area_relative(), RelativeRect::FULL);
}

#[test]
fn empty_platform_safe_area_means_full_screen() {
    let provider = SafeAreaProvider::live(phone(Rect::default()));
    assert_eq!(provider.safe_area_relative(), RelativeRect::FULL);
}

#[test]
fn zero_sized_display_is_normalized() {
    let mut display = phone(Rect::from_origin_size((10.0, 10.0), (100.0, 100.0)));
    display.metrics.device_resolution = Size::ZERO;
    let provider = SafeAreaProvider::live(display);
    assert_eq!(provider.safe_area_relative(), RelativeRect::FULL);
    assert!(provider.cutouts_relative().is_empty());
}

#[test]
fn nan_platform_origin_leaves_edges_unpadded() {
    let provider = SafeAreaProvider::live(phone(Rect::new(f64::NAN, 0.0, 1000.0, 2000.0)));
    let rel = provider.safe_area_relative();
    assert_eq!(rel, RelativeRect::FULL);
    assert_eq!(relative_insets(rel), Edges::uniform(0.0));
}

#[test]
fn nan_platform_height_does_not_collapse_top() {
    let provider = SafeAreaProvider::live(phone(Rect::new(0.0, 0.0, 1000.0, f64::NAN)));
    let rel = provider.safe_area_relative();
    assert_eq!(rel, RelativeRect::FULL);
    assert_eq!(relative_insets(rel).top, 0.0);
}

#[test]
fn nan_platform_height_keeps_other_insets() {
    let provider = SafeAreaProvider::live(phone(Rect::new(50.0, 100.0, 950.0, f64::NAN)));
    let insets = relative_insets(provider.safe_area_relative());
    assert!((insets.left - 0.05).abs() <= 1e-12, "{insets:?}");
    assert!((insets.bottom - 0.05).abs() <= 1e-12, "{insets:?}");
    assert!((insets.right - 0.05).abs() <= 1e-12, "{insets:?}");
    assert!(insets.top.abs() <= 1e-12, "{insets:?}");
}

#[test]
fn live_cutouts_are_relative() {
    let provider =
        SafeAreaProvider::live(phone(Rect::from_origin_size((0.0, 0.0), (1000.0, 1900.0))));
    let cutouts = provider.cutouts_relative();
    assert_eq!(cutouts.len(), 1);
    assert_eq!(cutouts[0], RelativeRect::new(0.4, 0.95, 0.2, 0.05));
}

#[test]
fn active_simulation_overrides_live_values() {
    let sim = Arc::new(SimulationContext::new());
    let provider = SafeAreaProvider::new(
        phone(Rect::from_origin_size((0.0, 0.0), (1000.0, 2000.0))),
        Arc::clone(&sim),
    );
    assert_eq!(provider.safe_area_relative(), RelativeRect::FULL);

    let simulated = RelativeRect::new(0.0, 0.04, 1.0, 0.9);
    sim.set(SimulatedScreen::new(simulated));
    assert_eq!(provider.safe_area_relative(), simulated);
    assert!(provider.cutouts_relative().is_empty());

    sim.set_active(false);
    assert_eq!(provider.safe_area_relative(), RelativeRect::FULL);
    assert_eq!(provider.cutouts_relative().len(), 1);
}

#[test]
fn simulated_nan_is_sanitized() {
    let sim = Arc::new(SimulationContext::new());
    sim.set(SimulatedScreen::new(RelativeRect::new(f64::NAN, 0.0, 1.0, 1.0)));
    let provider = SafeAreaProvider::new(phone(Rect::default()), sim);
    assert_eq!(provider.safe_area_relative(), RelativeRect::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn provider_exposes_its_simulation_slot() {
    let provider = SafeAreaProvider::live(phone(Rect::default()));
    let slot = provider.simulation().expect("provider has a simulation slot");
    assert!(!slot.is_active());
    assert!(RelativeRect::FULL.simulation().is_none());
}
