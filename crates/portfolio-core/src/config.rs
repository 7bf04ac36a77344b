//! Runtime configuration.
//!
//! Precedence, lowest first: built-in defaults, an optional JSON file, then
//! command line flags applied by the launcher.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Default viewport width (px) at or below which the layout counts as mobile
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Viewport widths `<=` this are treated as mobile
    pub mobile_breakpoint_px: u32,
    /// Decorative background tuning
    pub dots: DotFieldConfig,
    /// Desktop window size
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT,
            dots: DotFieldConfig::default(),
            window_width: 1280.0,
            window_height: 900.0,
        }
    }
}

impl PortfolioConfig {
    /// Load from a JSON file; missing keys fall back to defaults
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded config file");
        Ok(config)
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        if self.mobile_breakpoint_px == 0 {
            return Err(PortfolioError::Config(
                "mobile_breakpoint_px must be positive".to_string(),
            ));
        }
        for (name, params) in [("desktop", &self.dots.desktop), ("mobile", &self.dots.mobile)] {
            if params.width <= 0.0 || params.height <= 0.0 {
                return Err(PortfolioError::Config(format!(
                    "dots.{name} field dimensions must be positive"
                )));
            }
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(PortfolioError::Config(
                "window size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= f64::from(self.mobile_breakpoint_px)
    }

    /// Lightbox behaviour for a modal mounted at `viewport_width`.
    ///
    /// Resolved once per mount: resizing while the modal is open does not
    /// change it.
    pub fn lightbox_for_viewport(&self, viewport_width: f64) -> LightboxConfig {
        LightboxConfig {
            close_on_backdrop: !self.is_mobile(viewport_width),
        }
    }

    /// Dot field parameters for the given viewport
    pub fn dots_for_viewport(&self, viewport_width: f64) -> DotFieldParams {
        if self.is_mobile(viewport_width) {
            self.dots.mobile
        } else {
            self.dots.desktop
        }
    }
}

/// Per-mount lightbox settings.
///
/// The default applies until the viewport is known: backdrop clicks are
/// ignored, so an early tap on a mobile screen cannot close the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightboxConfig {
    /// Whether clicking outside the image closes the modal
    pub close_on_backdrop: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotFieldConfig {
    pub desktop: DotFieldParams,
    pub mobile: DotFieldParams,
}

impl Default for DotFieldConfig {
    fn default() -> Self {
        Self {
            desktop: DotFieldParams {
                count: 32,
                width: 1920.0,
                height: 1080.0,
                line_distance: 260.0,
                speed: 0.25,
            },
            mobile: DotFieldParams {
                count: 20,
                width: 768.0,
                height: 1024.0,
                line_distance: 180.0,
                speed: 0.15,
            },
        }
    }
}

/// Size and motion of the decorative dot field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotFieldParams {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub line_distance: f64,
    pub speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = PortfolioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mobile_breakpoint_px, 768);
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let config = PortfolioConfig::default();
        assert!(!config.lightbox_for_viewport(768.0).close_on_backdrop);
        assert!(config.lightbox_for_viewport(769.0).close_on_backdrop);
        assert_eq!(config.dots_for_viewport(400.0).count, 20);
        assert_eq!(config.dots_for_viewport(1440.0).count, 32);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mobile_breakpoint_px": 600 }}"#).unwrap();

        let config = PortfolioConfig::load(file.path()).unwrap();
        assert_eq!(config.mobile_breakpoint_px, 600);
        assert_eq!(config.dots, DotFieldConfig::default());
    }

    #[test]
    fn zero_breakpoint_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mobile_breakpoint_px": 0 }}"#).unwrap();

        assert!(matches!(
            PortfolioConfig::load(file.path()),
            Err(PortfolioError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            PortfolioConfig::load(dir.path().join("absent.json")),
            Err(PortfolioError::Io(_))
        ));
    }
}
