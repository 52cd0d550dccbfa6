//! Run configuration for the flux pipeline.
//!
//! Configurations are plain serde structs stored as JSON. Every field has a
//! default, so a file only needs the keys it changes:
//!
//! ```
//! use mhd_flux::config::FluxConfig;
//!
//! let config = FluxConfig::from_json_str(r#"{ "riemann": "llf" }"#).unwrap();
//! assert_eq!(config.reconstruction.order, 2);
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gravity::SelfGravity;
use crate::reconstruct::{ReconstructionOrder, SlopeLimiter};
use crate::riemann::RiemannSolverKind;
use crate::types::VariableLayout;

/// Equation of state closing the fluid equations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EquationOfState {
    /// Ideal gas with adiabatic index `gamma`
    Adiabatic { gamma: f64 },
    /// Fixed sound speed, no energy equation
    Isothermal { sound_speed: f64 },
}

impl Default for EquationOfState {
    fn default() -> Self {
        EquationOfState::Adiabatic { gamma: 5.0 / 3.0 }
    }
}

impl EquationOfState {
    /// Whether an energy equation is evolved.
    #[inline]
    pub fn is_non_barotropic(&self) -> bool {
        matches!(self, EquationOfState::Adiabatic { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquationOfState::Adiabatic { .. } => "adiabatic",
            EquationOfState::Isothermal { .. } => "isothermal",
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            EquationOfState::Adiabatic { gamma } if !(gamma.is_finite() && gamma > 1.0) => {
                Err(ConfigError::invalid("physics.eos.gamma", gamma, "must be finite and > 1"))
            }
            EquationOfState::Isothermal { sound_speed } if !(sound_speed.is_finite() && sound_speed > 0.0) => {
                Err(ConfigError::invalid(
                    "physics.eos.sound_speed",
                    sound_speed,
                    "must be finite and > 0",
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Reconstruction settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionConfig {
    /// Spatial order: 1 donor cell, 2 PLM, 3 PPM
    pub order: u32,
    /// Slope limiter for second order
    pub limiter: SlopeLimiter,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            order: 2,
            limiter: SlopeLimiter::default(),
        }
    }
}

/// Physics enabled for the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub eos: EquationOfState,
    pub magnetic_fields: bool,
    pub self_gravity: SelfGravity,
}

impl PhysicsConfig {
    /// Slot layout implied by these physics.
    #[inline]
    pub fn layout(&self) -> VariableLayout {
        VariableLayout::new(self.eos.is_non_barotropic(), self.magnetic_fields)
    }
}

/// Complete configuration of a [`FluxCalculator`](crate::FluxCalculator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluxConfig {
    pub reconstruction: ReconstructionConfig,
    pub riemann: RiemannSolverKind,
    pub physics: PhysicsConfig,
    /// Worker threads; 0 uses the rayon default
    pub threads: usize,
}

impl FluxConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Check every value and cross-field constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reconstruction_order()?;
        self.physics.eos.validate()?;
        self.riemann
            .check_physics(&self.physics.eos, self.physics.magnetic_fields)?;
        Ok(())
    }

    /// Reconstruction order as a typed selector.
    pub fn reconstruction_order(&self) -> Result<ReconstructionOrder, ConfigError> {
        ReconstructionOrder::try_from(self.reconstruction.order)
    }
}

impl FromStr for FluxConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FluxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reconstruction_order().unwrap(), ReconstructionOrder::Second);
        assert_eq!(config.physics.layout().nwave(), 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FluxConfig::from_json_str(
            r#"{
                "reconstruction": { "order": 3 },
                "physics": { "eos": { "type": "isothermal", "sound_speed": 0.5 }, "magnetic_fields": true }
            }"#,
        )
        .unwrap();
        assert_eq!(config.reconstruction.limiter, SlopeLimiter::VanLeer);
        assert_eq!(config.riemann, RiemannSolverKind::Hlle);
        assert_eq!(config.physics.layout().nwave(), 6);
        assert_eq!(config.threads, 0);
    }

    #[test]
    fn test_invalid_order_rejected() {
        let err = FluxConfig::from_json_str(r#"{ "reconstruction": { "order": 5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "reconstruction.order"));
    }

    #[test]
    fn test_bad_gamma_rejected() {
        let mut config = FluxConfig::default();
        config.physics.eos = EquationOfState::Adiabatic { gamma: 1.0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(FluxConfig::from_json_str("{ order"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_hllc_with_mhd_rejected() {
        let mut config = FluxConfig::default();
        config.riemann = RiemannSolverKind::Hllc;
        assert!(config.validate().is_ok());
        config.physics.magnetic_fields = true;
        assert!(matches!(config.validate(), Err(ConfigError::InconsistentPhysics(_))));
    }
}
