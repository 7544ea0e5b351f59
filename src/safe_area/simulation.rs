use std::sync::{Mutex, MutexGuard, PoisonError};

use smallvec::SmallVec;

use crate::foundation::core::RelativeRect;

/// Cutout list; most devices report at most a handful.
pub type Cutouts = SmallVec<[RelativeRect; 4]>;

/// A mocked screen pushed by preview tooling in place of the live platform query.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimulatedScreen {
    /// Simulated safe area, in screen fractions.
    #[serde(default)]
    pub safe_area: RelativeRect,
    /// Simulated cutouts (notches, camera holes), in screen fractions.
    #[serde(default)]
    pub cutouts: Cutouts,
}

impl SimulatedScreen {
    /// Simulated screen with a safe area and no cutouts.
    pub fn new(safe_area: RelativeRect) -> Self {
        Self {
            safe_area,
            cutouts: Cutouts::new(),
        }
    }

    /// Builder-style: attach cutouts.
    #[must_use]
    pub fn with_cutouts(mut self, cutouts: impl IntoIterator<Item = RelativeRect>) -> Self {
        self.cutouts = cutouts.into_iter().collect();
        self
    }
}

#[derive(Debug, Default)]
struct SimulationState {
    active: bool,
    screen: SimulatedScreen,
}

/// Override slot shared between a simulator (single writer) and the
/// safe-area provider (reader).
///
/// While inactive the stored screen is ignored and live platform values win.
#[derive(Debug, Default)]
pub struct SimulationContext {
    state: Mutex<SimulationState>,
}

impl SimulationContext {
    /// Inactive context holding the default full-screen simulation.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SimulationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `screen` and start trusting it over live data.
    pub fn set(&self, screen: SimulatedScreen) {
        let mut state = self.lock();
        state.screen = screen;
        state.active = true;
        tracing::trace!(safe_area = ?state.screen.safe_area, "simulation override set");
    }

    /// Stop simulating and reset to the default screen.
    pub fn clear(&self) {
        let mut state = self.lock();
        *state = SimulationState::default();
        tracing::trace!("simulation override cleared");
    }

    /// Toggle whether the stored screen is trusted, keeping its value.
    pub fn set_active(&self, active: bool) {
        self.lock().active = active;
    }

    /// Whether the override currently replaces live data.
    pub fn is_active(&self) -> bool {
        self.lock().active
    }

    /// The override, if active.
    pub fn current(&self) -> Option<SimulatedScreen> {
        let state = self.lock();
        state.active.then(|| state.screen.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/safe_area/simulation.rs"]
mod tests;
