//! Spinner configuration that can be tested independently of any surface.

use core::time::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::easing::Easing;

/// Size constants in density-independent pixels plus animation timing.
///
/// The two presets correspond to the two shipped variants of the spinner:
/// the large 400 dp logo animation and the compact 200 dp loading widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpinnerConfig {
    pub canvas_side_dp: u32,
    pub middle_circle_radius_dp: u32,
    pub stroke_width_dp: u32,
    pub corner_radius_dp: u32,
    pub max_width_dp: u32,
    pub max_height_dp: u32,
    pub phase_duration_ms: u64,
    pub easing: Easing,
    /// Device density scale (1.0 = one device pixel per dp).
    pub density: f32,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl SpinnerConfig {
    /// 400 dp canvas, 2000 ms phases, default (linear) timing.
    pub fn classic() -> Self {
        Self {
            canvas_side_dp: 400,
            middle_circle_radius_dp: 40,
            stroke_width_dp: 14,
            corner_radius_dp: 80,
            max_width_dp: 360,
            max_height_dp: 68,
            phase_duration_ms: 2000,
            easing: Easing::Linear,
            density: 1.0,
        }
    }

    /// 200 dp canvas, 1900 ms phases, cubic-bezier ease-in-out timing.
    pub fn compact() -> Self {
        Self {
            canvas_side_dp: 200,
            middle_circle_radius_dp: 20,
            stroke_width_dp: 7,
            corner_radius_dp: 40,
            max_width_dp: 180,
            max_height_dp: 34,
            phase_duration_ms: 1900,
            easing: Easing::EASE_IN_OUT_BEZIER,
            density: 1.0,
        }
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn phase_duration(&self) -> Duration {
        Duration::from_millis(self.phase_duration_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::BadDensity(self.density));
        }
        for (name, value) in [
            ("canvas_side_dp", self.canvas_side_dp),
            ("middle_circle_radius_dp", self.middle_circle_radius_dp),
            ("stroke_width_dp", self.stroke_width_dp),
            ("corner_radius_dp", self.corner_radius_dp),
            ("max_width_dp", self.max_width_dp),
            ("max_height_dp", self.max_height_dp),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDimension(name));
            }
        }
        if self.phase_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.max_width_dp > self.canvas_side_dp || self.max_height_dp > self.canvas_side_dp {
            return Err(ConfigError::ShapesTooLarge {
                width: self.max_width_dp,
                height: self.max_height_dp,
                side: self.canvas_side_dp,
            });
        }
        Ok(())
    }

    /// Resolve the dp constants to device pixels.
    pub fn metrics(&self) -> CanvasMetrics {
        CanvasMetrics {
            side: libm::roundf(dp_to_px(self.canvas_side_dp, self.density)) as u32,
            middle_circle_radius: dp_to_px(self.middle_circle_radius_dp, self.density),
            stroke_width: dp_to_px(self.stroke_width_dp, self.density),
            corner_radius: dp_to_px(self.corner_radius_dp, self.density),
            max_width: dp_to_px(self.max_width_dp, self.density),
            max_height: dp_to_px(self.max_height_dp, self.density),
        }
    }
}

pub fn dp_to_px(dp: u32, density: f32) -> f32 {
    dp as f32 * density
}

/// Size constants resolved to device pixels. Computed once at widget
/// construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMetrics {
    pub side: u32,
    pub middle_circle_radius: f32,
    pub stroke_width: f32,
    pub corner_radius: f32,
    pub max_width: f32,
    pub max_height: f32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroDimension(&'static str),
    #[error("phase duration must be non-zero")]
    ZeroDuration,
    #[error("density must be a positive finite scale factor (got {0})")]
    BadDensity(f32),
    #[error("shapes ({width}x{height} dp) do not fit the {side} dp canvas")]
    ShapesTooLarge { width: u32, height: u32, side: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = SpinnerConfig::compact();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SpinnerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_presets_validate() {
        SpinnerConfig::classic().validate().unwrap();
        SpinnerConfig::compact().validate().unwrap();
    }

    #[test]
    fn test_classic_metrics_at_unit_density() {
        let m = SpinnerConfig::classic().metrics();
        assert_eq!(m.side, 400);
        assert_eq!(m.max_width, 360.0);
        assert_eq!(m.max_height, 68.0);
        assert_eq!(m.middle_circle_radius, 40.0);
    }

    #[test]
    fn test_density_scales_metrics() {
        let m = SpinnerConfig::compact().with_density(2.0).metrics();
        assert_eq!(m.side, 400);
        assert_eq!(m.stroke_width, 14.0);
        assert_eq!(m.corner_radius, 80.0);
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let mut config = SpinnerConfig::classic();
        config.stroke_width_dp = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDimension("stroke_width_dp"))
        );
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let mut config = SpinnerConfig::classic();
        config.phase_duration_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDuration));
    }

    #[test]
    fn test_validate_rejects_bad_density() {
        let config = SpinnerConfig::classic().with_density(0.0);
        assert!(matches!(config.validate(), Err(ConfigError::BadDensity(_))));
        let config = SpinnerConfig::classic().with_density(f32::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::BadDensity(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_shapes() {
        let mut config = SpinnerConfig::classic();
        config.max_width_dp = config.canvas_side_dp + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ShapesTooLarge { .. })
        ));
    }
}
