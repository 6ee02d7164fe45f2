//! # Safe Teleop
//!
//! Reactive safety arbiter for teleoperated mobile-robot driving.
//!
//! The arbiter fuses a human operator's directional intent with an
//! externally computed obstacle repulsion vector into a bounded,
//! collision-aware velocity command. Holding the deadman button permits
//! safety-assisted motion; holding the full override combo bypasses the
//! fusion and passes the stick through raw. The transport layer feeding
//! controller samples and field vectors, the potential-field computation
//! itself, and the actuation of the command are all external
//! collaborators.
//!
//! ## Structure
//!
//! ```text
//! safe_teleop/
//! ── messages/       # Shared slot-safe messages (JoySample, PotentialField, CmdVel)
//! ── algorithms/     # Pure command-fusion logic
//! ── arbiter/        # Last-value slots and the fixed-rate tick loop
//! ── apps/           # Complete demo applications
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use safe_teleop::{JoySample, PotentialField, SafeTeleopArbiter, TeleopConfig};
//!
//! let arbiter = SafeTeleopArbiter::new(TeleopConfig::default()).unwrap();
//!
//! // Transport collaborators push the latest state as it arrives...
//! let sample = JoySample::new(&[0.0, 0.5], &[1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
//! arbiter.on_joy_sample(sample).unwrap();
//! arbiter.on_potential_field(PotentialField::zero());
//!
//! // ...and a periodic scheduler drains commands.
//! if let Some(cmd) = arbiter.tick() {
//!     println!("cmd_vel: linear {} angular {}", cmd.linear_x, cmd.angular_z);
//! }
//! ```

pub mod algorithms;
pub mod arbiter;
pub mod config;
pub mod error;
pub mod messages;

// Re-export the working set at the crate root for convenience
pub use algorithms::command_fusion::{fuse_command, resolve_mode, ControlMode};
pub use arbiter::{LatestSlot, SafeTeleopArbiter};
pub use config::TeleopConfig;
pub use error::{TeleopError, TeleopResult};
pub use messages::*;

/// Prelude module for convenient imports
///
/// # Usage
/// ```rust,ignore
/// use safe_teleop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::command_fusion::{fuse_command, resolve_mode, ControlMode};
    pub use crate::arbiter::SafeTeleopArbiter;
    pub use crate::config::TeleopConfig;
    pub use crate::error::{TeleopError, TeleopResult};
    pub use crate::messages::{CmdVel, JoySample, PotentialField};
}
