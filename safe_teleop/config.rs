//! Startup configuration for the safe teleop arbiter

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{TeleopError, TeleopResult};
use crate::messages::MAX_BUTTONS;

/// Fixed parameters read once at startup
///
/// Every field has a default, and a TOML file may override any subset of
/// them. The arbiter validates the configuration before the first tick and
/// treats it as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeleopConfig {
    /// Magnitude the operator intent direction is stretched to before it is
    /// summed against the repulsion field
    pub joy_vector_magnitude: f32,
    /// Scale from the fused forward component to linear velocity (m/s)
    pub drive_scale: f32,
    /// Scale from the fused turn component to angular velocity (rad/s)
    pub turn_scale: f32,
    /// Buttons that must all be held to force raw operator pass-through
    pub override_buttons: Vec<usize>,
    /// Button that must be held for safety-assisted motion
    pub deadman_button: usize,
    /// Arbiter tick rate (Hz)
    pub tick_rate_hz: u32,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self {
            joy_vector_magnitude: 10.0,
            drive_scale: 1.0,
            turn_scale: 1.0,
            override_buttons: vec![0, 6, 7],
            deadman_button: 0,
            tick_rate_hz: 20,
        }
    }
}

impl TeleopConfig {
    /// Check that the configuration can drive a control loop at all
    ///
    /// A configured button index beyond the message capacity could never be
    /// satisfied by any sample, so it is rejected here rather than failing
    /// every sample at runtime.
    pub fn validate(&self) -> TeleopResult<()> {
        if !self.joy_vector_magnitude.is_finite() || self.joy_vector_magnitude <= 0.0 {
            return Err(TeleopError::InvalidConfiguration(format!(
                "joy_vector_magnitude must be a positive finite value, got {}",
                self.joy_vector_magnitude
            )));
        }
        if self.tick_rate_hz == 0 {
            return Err(TeleopError::InvalidConfiguration(
                "tick_rate_hz must be greater than zero".to_string(),
            ));
        }
        if self.deadman_button >= MAX_BUTTONS {
            return Err(TeleopError::InvalidConfiguration(format!(
                "deadman_button {} exceeds the {}-button message capacity",
                self.deadman_button, MAX_BUTTONS
            )));
        }
        for &index in &self.override_buttons {
            if index >= MAX_BUTTONS {
                return Err(TeleopError::InvalidConfiguration(format!(
                    "override button {} exceeds the {}-button message capacity",
                    index, MAX_BUTTONS
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a configuration from a TOML string
    pub fn from_toml_str(raw: &str) -> TeleopResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| {
            TeleopError::InvalidConfiguration(format!("Failed to parse config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> TeleopResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            TeleopError::InvalidConfiguration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Duration of one tick at the configured rate
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TeleopConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.override_buttons, vec![0, 6, 7]);
        assert_eq!(config.deadman_button, 0);
        assert_eq!(config.tick_rate_hz, 20);
    }

    #[test]
    fn test_non_positive_magnitude_rejected() {
        let config = TeleopConfig {
            joy_vector_magnitude: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TeleopError::InvalidConfiguration(_))
        ));

        let config = TeleopConfig {
            joy_vector_magnitude: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config = TeleopConfig {
            tick_rate_hz: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_button_index_beyond_capacity_rejected() {
        let config = TeleopConfig {
            deadman_button: MAX_BUTTONS,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TeleopConfig {
            override_buttons: vec![0, MAX_BUTTONS + 3],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_overrides_named_keys_only() {
        let config = TeleopConfig::from_toml_str(
            "joy_vector_magnitude = 5.0\noverride_buttons = [2, 3]\n",
        )
        .unwrap();
        assert_eq!(config.joy_vector_magnitude, 5.0);
        assert_eq!(config.override_buttons, vec![2, 3]);
        // Untouched keys keep their defaults
        assert_eq!(config.drive_scale, 1.0);
        assert_eq!(config.tick_rate_hz, 20);
    }

    #[test]
    fn test_toml_with_invalid_values_rejected() {
        assert!(TeleopConfig::from_toml_str("tick_rate_hz = 0\n").is_err());
        assert!(TeleopConfig::from_toml_str("not toml at all [").is_err());
    }

    #[test]
    fn test_tick_period() {
        let config = TeleopConfig::default();
        assert_eq!(config.tick_period(), Duration::from_millis(50));
    }
}
