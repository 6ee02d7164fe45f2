use serde::{Deserialize, Serialize};

/// Velocity command fused by the arbiter
///
/// One motion command for a differential-drive base: forward velocity plus
/// turn rate, in the frame of the operator's drive/turn axes. A tick that
/// cannot derive a safe command emits no `CmdVel` at all; the publishing
/// collaborator decides what "no command" means for the actuators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct CmdVel {
    pub stamp_nanos: u64,
    pub linear_x: f32,  // m/s forward velocity
    pub angular_z: f32, // rad/s turning velocity
}

impl CmdVel {
    /// Create a new command stamped with the current time
    pub fn new(linear_x: f32, angular_z: f32) -> Self {
        Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            linear_x,
            angular_z,
        }
    }

    /// Zero-velocity command (stop in place)
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Create a command with an explicit timestamp
    pub fn with_timestamp(linear_x: f32, angular_z: f32, stamp_nanos: u64) -> Self {
        Self {
            stamp_nanos,
            linear_x,
            angular_z,
        }
    }
}

impl Default for CmdVel {
    fn default() -> Self {
        Self::zero()
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for CmdVel {}
unsafe impl bytemuck::Zeroable for CmdVel {}
