use crate::{
    foundation::core::{Rect, RelativeRect, Size},
    foundation::error::{NotchfitError, NotchfitResult},
    safe_area::provider::{DisplayMetrics, StaticDisplay},
    safe_area::simulation::SimulatedScreen,
};

/// A mocked device used for previewing layouts without the hardware.
///
/// All rectangles are in pixels with a bottom-left origin.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProfile {
    /// Human-readable device name.
    pub name: String,
    /// Screen resolution in pixels.
    pub screen: Size,
    /// Safe area in pixels.
    pub safe_area: Rect,
    /// Cutouts in pixels.
    #[serde(default)]
    pub cutouts: Vec<Rect>,
}

impl DeviceProfile {
    /// Parse and validate a profile from JSON text.
    pub fn from_json_str(s: &str) -> NotchfitResult<Self> {
        let profile: Self = serde_json::from_str(s)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Parse and validate a profile from a JSON reader.
    pub fn from_json_reader(r: impl std::io::Read) -> NotchfitResult<Self> {
        let profile: Self = serde_json::from_reader(r)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reject profiles whose numbers cannot describe a real screen.
    pub fn validate(&self) -> NotchfitResult<()> {
        let Size { width, height } = self.screen;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(NotchfitError::config(format!(
                "device '{}' screen must be finite and > 0",
                self.name
            )));
        }
        for (what, r) in std::iter::once(("safe_area", &self.safe_area))
            .chain(self.cutouts.iter().map(|c| ("cutout", c)))
        {
            if !(r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()) {
                return Err(NotchfitError::config(format!(
                    "device '{}' {what} must be finite",
                    self.name
                )));
            }
            if r.x0 > r.x1 || r.y0 > r.y1 {
                return Err(NotchfitError::config(format!(
                    "device '{}' {what} must have x0 <= x1 and y0 <= y1",
                    self.name
                )));
            }
            if r.x0 < 0.0 || r.y0 < 0.0 || r.x1 > width || r.y1 > height {
                return Err(NotchfitError::config(format!(
                    "device '{}' {what} must lie inside the screen",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// The profile as a simulator override, in screen fractions.
    pub fn to_simulated_screen(&self) -> SimulatedScreen {
        SimulatedScreen::new(RelativeRect::from_absolute(self.safe_area, self.screen))
            .with_cutouts(
                self.cutouts
                    .iter()
                    .map(|c| RelativeRect::from_absolute(*c, self.screen)),
            )
    }

    /// The profile as a live display running on the device itself.
    pub fn to_display(&self) -> StaticDisplay {
        StaticDisplay {
            safe_area: self.safe_area,
            cutouts: self.cutouts.clone(),
            metrics: DisplayMetrics::device(self.screen),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/safe_area/device.rs"]
mod tests;
