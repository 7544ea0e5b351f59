use crate::{
    config::FitterConfig,
    foundation::error::{NotchfitError, NotchfitResult},
    host::rect::{DrivenProperties, LayoutHost},
    safe_area::provider::ProvidesSafeAreaInput,
    safe_area::simulation::SimulatedScreen,
    solver::insets::{Solution, SolveInput, solve},
    solver::modes::Orientation,
};

/// Lifecycle state of a fitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FitterState {
    /// Not driving anything; lifecycle events are ignored.
    #[default]
    Inactive,
    /// Owns the driven properties and recomputes on every event.
    Active,
}

/// A component that owns some properties of a host rect and rewrites them.
pub trait DrivesRectangle {
    /// Properties locked while active.
    fn driven_properties(&self) -> DrivenProperties;

    /// Recompute and write the driven properties.
    ///
    /// # Errors
    /// Fails when the host cannot supply the inputs the driver needs.
    fn update_rect(&mut self, host: &mut dyn LayoutHost) -> NotchfitResult<()>;
}

/// Drives a host rect to full stretch padded by the safe area.
///
/// Every recompute is a fresh solve from the current safe area, container
/// and pivot; nothing derived is kept between calls.
#[derive(Debug)]
pub struct SafeAreaFitter<P> {
    config: FitterConfig,
    input: P,
    state: FitterState,
    pending: bool,
}

impl<P: ProvidesSafeAreaInput> SafeAreaFitter<P> {
    /// Inactive fitter reading its safe area from `input`.
    pub fn new(config: FitterConfig, input: P) -> Self {
        Self {
            config,
            input,
            state: FitterState::Inactive,
            pending: false,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &FitterConfig {
        &self.config
    }

    /// Replace the configuration after validating it.
    ///
    /// Takes effect on the next recompute.
    pub fn set_config(&mut self, config: FitterConfig) -> NotchfitResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Safe-area input this fitter reads.
    pub fn input(&self) -> &P {
        &self.input
    }

    /// Lifecycle state.
    pub fn state(&self) -> FitterState {
        self.state
    }

    /// `true` while a deferred recompute waits for [`Self::end_of_frame`].
    pub fn has_pending_update(&self) -> bool {
        self.pending
    }

    /// Start driving: lock the rect and defer the first solve to the end of the frame.
    ///
    /// The safe area reported during the frame a component appears can be stale.
    pub fn enable(&mut self, host: &mut dyn LayoutHost) {
        self.state = FitterState::Active;
        host.lock(self.driven_properties());
        self.pending = true;
        tracing::debug!("safe area fitter enabled");
    }

    /// Stop driving and hand the rect back to the host.
    pub fn disable(&mut self, host: &mut dyn LayoutHost) {
        self.state = FitterState::Inactive;
        self.pending = false;
        host.release();
        host.mark_for_rebuild();
        tracing::debug!("safe area fitter disabled");
    }

    /// Run the recompute deferred by [`Self::enable`], if any.
    pub fn end_of_frame(
        &mut self,
        host: &mut dyn LayoutHost,
    ) -> NotchfitResult<Option<Solution>> {
        if !self.pending {
            return Ok(None);
        }
        self.recompute(host)
    }

    /// The driven rect or its container changed dimensions.
    ///
    /// A 180 degree rotation keeps dimensions unchanged and does not trigger this.
    pub fn on_dimensions_changed(
        &mut self,
        host: &mut dyn LayoutHost,
    ) -> NotchfitResult<Option<Solution>> {
        self.recompute(host)
    }

    /// Horizontal layout pass from the host's layout system.
    pub fn on_layout_horizontal(
        &mut self,
        host: &mut dyn LayoutHost,
    ) -> NotchfitResult<Option<Solution>> {
        self.recompute(host)
    }

    /// Configuration was edited; re-lock the driven properties and recompute.
    pub fn on_validate(&mut self, host: &mut dyn LayoutHost) -> NotchfitResult<Option<Solution>> {
        if self.state == FitterState::Active {
            host.release();
            host.lock(self.driven_properties());
        }
        self.recompute(host)
    }

    /// A simulator pushed a new mocked screen.
    pub fn simulator_update(
        &mut self,
        host: &mut dyn LayoutHost,
        screen: SimulatedScreen,
    ) -> NotchfitResult<Option<Solution>> {
        match self.input.simulation() {
            Some(sim) => sim.set(screen),
            None => {
                tracing::warn!("safe area input has no simulation slot; ignoring simulator update");
            }
        }
        self.recompute(host)
    }

    /// Solve from current inputs and write the result, if active.
    ///
    /// Returns `Ok(None)` while inactive. A rect without a top-level container
    /// is left untouched and reported as [`NotchfitError::MissingContainer`].
    #[tracing::instrument(skip(self, host), fields(state = ?self.state))]
    pub fn recompute(&mut self, host: &mut dyn LayoutHost) -> NotchfitResult<Option<Solution>> {
        if self.state != FitterState::Active {
            return Ok(None);
        }
        self.pending = false;

        let Some(container) = host.container_size() else {
            tracing::error!("driven rect has no top-level container");
            return Err(NotchfitError::missing_container(
                "driven rect has no top-level container",
            ));
        };

        let input = SolveInput {
            safe_area: self.input.safe_area_relative(),
            modes: self.config.modes.select(Orientation::of(container)),
            influence: self.config.influence,
            flip_padding: self.config.flip_padding,
            container,
            pivot: host.pivot(),
        };
        let solution = solve(&input);
        host.apply(&solution.placement);
        Ok(Some(solution))
    }
}

impl<P: ProvidesSafeAreaInput> DrivesRectangle for SafeAreaFitter<P> {
    fn driven_properties(&self) -> DrivenProperties {
        DrivenProperties::STRETCH_PADDING
    }

    fn update_rect(&mut self, host: &mut dyn LayoutHost) -> NotchfitResult<()> {
        self.recompute(host).map(|_| ())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/fitter.rs"]
mod tests;
