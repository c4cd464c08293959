//! Lighting and shading knobs applied to every block-model build.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Read-only shading configuration for one build.
///
/// A single value is shared by every worker; the mesher never mutates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    /// How strongly neighbor light darkens faces. `0.0` renders everything
    /// full-bright, `1.0` maps light level 0 to black.
    pub light_shade_multiplier: f32,
    /// Darkening per occluding neighbor at a face corner. `0.0` disables AO.
    pub ambient_occlusion_strength: f32,
    /// Drop faces whose neighbor receives no sunlight at all.
    pub exclude_faces_without_sunlight: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            light_shade_multiplier: 0.8,
            ambient_occlusion_strength: 0.25,
            exclude_faces_without_sunlight: true,
        }
    }
}

impl RenderSettings {
    /// Settings that disable every lighting effect: full-bright, no AO,
    /// nothing excluded.
    pub fn unlit() -> Self {
        Self {
            light_shade_multiplier: 0.0,
            ambient_occlusion_strength: 0.0,
            exclude_faces_without_sunlight: false,
        }
    }

    /// Whether ambient occlusion should be sampled at all.
    pub fn ambient_occlusion_enabled(&self) -> bool {
        self.ambient_occlusion_strength > 0.0
    }

    /// Checks that both multipliers are finite and within `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("light_shade_multiplier", self.light_shade_multiplier)?;
        check_unit("ambient_occlusion_strength", self.ambient_occlusion_strength)?;
        Ok(())
    }
}

fn check_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = RenderSettings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.ambient_occlusion_enabled());
        assert!(settings.exclude_faces_without_sunlight);
    }

    #[test]
    fn test_unlit_disables_ao() {
        let settings = RenderSettings::unlit();
        assert!(!settings.ambient_occlusion_enabled());
        assert_eq!(settings.light_shade_multiplier, 0.0);
    }

    #[test]
    fn test_out_of_range_multiplier_rejected() {
        let settings = RenderSettings {
            light_shade_multiplier: 1.5,
            ..RenderSettings::default()
        };
        match settings.validate() {
            Err(ConfigError::OutOfRange { field, value }) => {
                assert_eq!(field, "light_shade_multiplier");
                assert_eq!(value, 1.5);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_strength_rejected() {
        let settings = RenderSettings {
            ambient_occlusion_strength: f32::NAN,
            ..RenderSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let settings = RenderSettings {
            light_shade_multiplier: 1.0,
            ambient_occlusion_strength: 0.0,
            exclude_faces_without_sunlight: false,
        };
        assert!(settings.validate().is_ok());
    }
}
