use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::anim::{GasketObject, TransMode};
use crate::error::GasketError;
use crate::gasket::{BASE_TETRAHEDRON, MAX_DIVISION};
use crate::math::{hex_to_rgba, rgba_to_hex, Palette, DEFAULT_PALETTE};

/// User-adjustable gasket settings, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasketConfig {
    pub division: i32,
    pub speed: f64,
    /// Swing amplitude of each rotation, in degrees
    pub degree: f64,
    /// Resting scale, also the target of the shrink phase
    pub scale: f64,
    /// Target of the grow phase
    pub scale_fac: f64,
    pub trans_mode: TransMode,
    pub rotate_xyz: [bool; 3],
    /// Face colors as `#RRGGBB`
    pub colors: [String; 4],
    /// Seeds the jitter of the paralysing mode; random when absent
    pub seed: Option<u64>,
}

impl Default for GasketConfig {
    fn default() -> Self {
        let obj = GasketObject::default();
        Self {
            division: obj.division,
            speed: obj.speed,
            degree: obj.degree,
            scale: obj.scale,
            scale_fac: obj.scale_fac,
            trans_mode: obj.trans_mode,
            rotate_xyz: obj.rotate_xyz,
            colors: DEFAULT_PALETTE.map(rgba_to_hex),
            seed: None,
        }
    }
}

impl GasketConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: GasketConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn validate(&self) -> Result<(), GasketError> {
        if self.division < 0 || self.division > MAX_DIVISION {
            return Err(GasketError::InvalidConfiguration(format!(
                "division must be in 0..={}, got {}",
                MAX_DIVISION, self.division
            )));
        }
        check_positive("speed", self.speed)?;
        check_positive("scale", self.scale)?;
        check_positive("scale_fac", self.scale_fac)?;
        if !self.degree.is_finite() {
            return Err(GasketError::InvalidConfiguration(format!(
                "degree must be finite, got {}",
                self.degree
            )));
        }
        self.palette().map(|_| ())
    }

    pub fn palette(&self) -> Result<Palette, GasketError> {
        let mut palette = DEFAULT_PALETTE;
        for (slot, hex) in palette.iter_mut().zip(&self.colors) {
            *slot = hex_to_rgba(hex)?;
        }
        Ok(palette)
    }

    /// Fresh, paused simulation state built from these settings
    pub fn to_object(&self) -> Result<GasketObject, GasketError> {
        self.validate()?;
        Ok(GasketObject {
            vertices: BASE_TETRAHEDRON,
            theta: [0.0; 3],
            scale: self.scale,
            trans: [0.0; 2],
            delta: [0.0; 2],
            division: self.division,
            speed: self.speed,
            degree: self.degree,
            rotate_xyz: self.rotate_xyz,
            scale_fac: self.scale_fac,
            trans_mode: self.trans_mode,
            pause: true,
        })
    }
}

pub(crate) fn check_positive(name: &str, value: f64) -> Result<(), GasketError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GasketError::InvalidConfiguration(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_object_default() {
        let config = GasketConfig::default();
        assert_eq!(config.to_object().unwrap(), GasketObject::default());
        assert_eq!(config.colors[0], "#00ffff");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: GasketConfig =
            serde_json::from_str(r#"{ "division": 5, "trans_mode": 2 }"#).unwrap();
        assert_eq!(config.division, 5);
        assert_eq!(config.trans_mode, TransMode::Dancing);
        assert_eq!(config.speed, 200.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_trans_mode_is_rejected_by_serde() {
        let parsed = serde_json::from_str::<GasketConfig>(r#"{ "trans_mode": 9 }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn negative_division_is_invalid() {
        let config = GasketConfig {
            division: -2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GasketError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_scale_fac_is_invalid() {
        let config = GasketConfig {
            scale_fac: 0.0,
            ..Default::default()
        };
        assert!(config.to_object().is_err());
    }

    #[test]
    fn bad_color_is_invalid() {
        let mut config = GasketConfig::default();
        config.colors[2] = "teal".to_string();
        assert_eq!(
            config.validate(),
            Err(GasketError::InvalidColor("teal".to_string()))
        );
    }

    #[test]
    fn json_roundtrip() {
        let config = GasketConfig {
            seed: Some(42),
            rotate_xyz: [true, false, true],
            ..Default::default()
        };
        let back: GasketConfig = serde_json::from_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
