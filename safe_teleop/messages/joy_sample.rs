use serde::{Deserialize, Serialize};

use crate::config::TeleopConfig;
use crate::error::{TeleopError, TeleopResult};

/// Maximum axes carried by one sample (stick pairs, triggers, d-pad)
pub const MAX_AXES: usize = 8;
/// Maximum buttons carried by one sample
pub const MAX_BUTTONS: usize = 16;

/// One normalized controller reading
///
/// Snapshot of the operator's gamepad: axis deflections in `[-1, 1]` and
/// button states as 0/1 flags. Fixed-capacity arrays with explicit counts
/// keep the message a single `Copy` unit, and `axis`/`button_pressed`
/// bounds-check every access so a short sample can never fault the control
/// loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JoySample {
    pub stamp_nanos: u64,
    pub axes: [f32; MAX_AXES],
    pub buttons: [u8; MAX_BUTTONS],
    pub axis_count: u8,
    pub button_count: u8,
}

impl JoySample {
    /// Axis index carrying the turn deflection
    pub const TURN_AXIS: usize = 0;
    /// Axis index carrying the drive deflection
    pub const DRIVE_AXIS: usize = 1;

    /// Create a sample from axis and button slices, stamped with the
    /// current time
    pub fn new(axes: &[f32], buttons: &[u8]) -> TeleopResult<Self> {
        if axes.len() > MAX_AXES {
            return Err(TeleopError::InvalidSampleShape(format!(
                "{} axes exceed the {}-axis message capacity",
                axes.len(),
                MAX_AXES
            )));
        }
        if buttons.len() > MAX_BUTTONS {
            return Err(TeleopError::InvalidSampleShape(format!(
                "{} buttons exceed the {}-button message capacity",
                buttons.len(),
                MAX_BUTTONS
            )));
        }

        let mut sample = Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            axes: [0.0; MAX_AXES],
            buttons: [0; MAX_BUTTONS],
            axis_count: axes.len() as u8,
            button_count: buttons.len() as u8,
        };
        sample.axes[..axes.len()].copy_from_slice(axes);
        sample.buttons[..buttons.len()].copy_from_slice(buttons);
        Ok(sample)
    }

    /// Axis value, or `None` when the sample does not carry that axis
    pub fn axis(&self, index: usize) -> Option<f32> {
        if index < self.axis_count as usize {
            Some(self.axes[index])
        } else {
            None
        }
    }

    /// Whether a button is pressed, or `None` when the sample does not
    /// carry that button
    pub fn button_pressed(&self, index: usize) -> Option<bool> {
        if index < self.button_count as usize {
            Some(self.buttons[index] != 0)
        } else {
            None
        }
    }

    /// Validate the sample against the indices the configuration will read
    ///
    /// Covers the drive/turn axes and the deadman button. Override-combo
    /// indices are exempt: an override button the sample does not carry
    /// counts as "not pressed" rather than a shape fault.
    pub fn check_shape(&self, config: &TeleopConfig) -> TeleopResult<()> {
        let axes_needed = Self::DRIVE_AXIS + 1;
        if (self.axis_count as usize) < axes_needed {
            return Err(TeleopError::InvalidSampleShape(format!(
                "sample carries {} axes, drive/turn need {}",
                self.axis_count, axes_needed
            )));
        }
        if (self.button_count as usize) <= config.deadman_button {
            return Err(TeleopError::InvalidSampleShape(format!(
                "sample carries {} buttons, deadman index is {}",
                self.button_count, config.deadman_button
            )));
        }
        let drive = self.axes[Self::DRIVE_AXIS];
        let turn = self.axes[Self::TURN_AXIS];
        if !drive.is_finite() || !turn.is_finite() {
            return Err(TeleopError::InvalidSampleShape(format!(
                "non-finite drive/turn deflection ({}, {})",
                drive, turn
            )));
        }
        Ok(())
    }
}
