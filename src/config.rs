use crate::{
    foundation::error::{NotchfitError, NotchfitResult},
    solver::modes::{EdgeModes, Influence, OrientationModes},
};

/// Authoring surface of a safe-area fitter: edge policies, influence and flip.
///
/// ```json
/// {
///   "modes": { "portrait_or_default": { "left": "on", "bottom": "off", "top": "balanced", "right": "on" } },
///   "influence": 1.0,
///   "flip_padding": false
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitterConfig {
    /// Edge policies, optionally split by orientation.
    #[serde(default)]
    pub modes: OrientationModes,
    /// Damping applied to each measured edge.
    #[serde(default)]
    pub influence: Influence,
    /// Apply each measured inset to the opposite physical edge.
    #[serde(default)]
    pub flip_padding: bool,
}

impl FitterConfig {
    /// Config applying `modes` in every orientation with full influence.
    pub fn with_modes(modes: EdgeModes) -> Self {
        Self {
            modes: OrientationModes::uniform(modes),
            ..Self::default()
        }
    }

    /// Parse and validate from JSON text.
    pub fn from_json_str(s: &str) -> NotchfitResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate from a JSON reader.
    pub fn from_json_reader(r: impl std::io::Read) -> NotchfitResult<Self> {
        let cfg: Self = serde_json::from_reader(r)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject influence factors that are non-finite or outside `[0, 1]`.
    pub fn validate(&self) -> NotchfitResult<()> {
        if let Some((edge, value)) = self.influence.first_invalid() {
            return Err(NotchfitError::config(format!(
                "influence.{edge:?} must be finite and within [0, 1], got {value}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
