//! Command fusion for safety-assisted teleoperation
//!
//! Pure decision logic for one arbiter tick: resolve which control mode the
//! operator's buttons select, then blend stick intent with the obstacle
//! repulsion field into a bounded velocity command.
//!
//! # Features
//!
//! - Mode resolution with strict override precedence
//! - Potential-field fusion weighted by a fixed intent magnitude
//! - Output magnitude proportional to stick deflection
//! - Forward clamp (no safety-assisted backward motion)
//!
//! # Example
//!
//! ```rust
//! use safe_teleop::algorithms::command_fusion::{fuse_command, resolve_mode, ControlMode};
//! use safe_teleop::{JoySample, PotentialField, TeleopConfig};
//!
//! let config = TeleopConfig::default();
//! // Deadman (button 0) held, stick pushed fully forward
//! let sample = JoySample::new(&[0.0, 1.0], &[1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
//!
//! let mode = resolve_mode(Some(&sample), &config);
//! assert_eq!(mode, ControlMode::SafeAssist);
//!
//! let field = PotentialField::zero();
//! let cmd = fuse_command(mode, Some(&sample), Some(&field), &config).unwrap();
//! assert!(cmd.linear_x > 0.0);
//! ```

use crate::config::TeleopConfig;
use crate::messages::{CmdVel, JoySample, PotentialField};

/// Control mode selected by the operator's buttons for one tick
///
/// Derived fresh from the latest sample every tick; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// Raw operator pass-through, obstacle fusion bypassed
    Override,
    /// Deadman held: motion permitted with obstacle fusion applied
    SafeAssist,
    /// No motion permitted this tick
    Idle,
}

/// Resolve the control mode from the latest sample
///
/// Override requires every configured override button to be present and
/// pressed; a button the sample does not carry counts as released, so a
/// short sample fails closed. Override takes strict precedence over the
/// deadman check. Without a sample the mode is always `Idle`.
pub fn resolve_mode(sample: Option<&JoySample>, config: &TeleopConfig) -> ControlMode {
    let sample = match sample {
        Some(sample) => sample,
        None => return ControlMode::Idle,
    };

    // An empty override set disables the combo rather than matching vacuously
    let override_held = !config.override_buttons.is_empty()
        && config
            .override_buttons
            .iter()
            .all(|&index| sample.button_pressed(index).unwrap_or(false));
    if override_held {
        return ControlMode::Override;
    }

    if sample
        .button_pressed(config.deadman_button)
        .unwrap_or(false)
    {
        return ControlMode::SafeAssist;
    }

    ControlMode::Idle
}

/// Fuse the latest snapshot into a velocity command
///
/// Returns `None` whenever no command should be published this tick. In
/// `SafeAssist` the intent direction is stretched to
/// `joy_vector_magnitude` and summed against the repulsion field so the
/// field bends the direction of travel, then the fused direction is
/// rescaled by the raw stick deflection so the operator still governs how
/// much the robot moves.
pub fn fuse_command(
    mode: ControlMode,
    sample: Option<&JoySample>,
    field: Option<&PotentialField>,
    config: &TeleopConfig,
) -> Option<CmdVel> {
    let sample = sample?;

    match mode {
        ControlMode::Idle => None,
        ControlMode::Override => {
            let drive = sample.axis(JoySample::DRIVE_AXIS)?;
            let turn = sample.axis(JoySample::TURN_AXIS)?;
            Some(CmdVel::new(
                drive * config.drive_scale,
                turn * config.turn_scale,
            ))
        }
        ControlMode::SafeAssist => {
            // Never fabricate a safety command without obstacle data
            let field = field?;
            let drive = sample.axis(JoySample::DRIVE_AXIS)?;
            let turn = sample.axis(JoySample::TURN_AXIS)?;

            let deflection = (drive * drive + turn * turn).sqrt();
            if !deflection.is_finite() {
                return None;
            }

            // Released stick contributes the zero vector, skipping the
            // normalization that would otherwise divide by zero
            let (intent_x, intent_y) = if deflection > 0.0 {
                (
                    drive / deflection * config.joy_vector_magnitude,
                    turn / deflection * config.joy_vector_magnitude,
                )
            } else {
                (0.0, 0.0)
            };

            let sum_x = intent_x + field.x;
            let sum_y = intent_y + field.y;

            let norm = (sum_x * sum_x + sum_y * sum_y).sqrt();
            if norm == 0.0 {
                // Intent and field cancel exactly: no fused direction exists
                return None;
            }

            // Direction from the fused sum, magnitude from the stick
            let out_x = sum_x / norm * deflection;
            let out_y = sum_y / norm * deflection;

            // No rear-facing sensing, so backward motion is never commanded
            let out_x = out_x.max(0.0);

            Some(CmdVel::new(
                out_x * config.drive_scale,
                out_y * config.turn_scale,
            ))
        }
    }
}
