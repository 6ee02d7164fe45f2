//! Message types exchanged with the safe teleop arbiter
//!
//! The arbiter consumes two inbound messages and produces one outbound
//! message:
//! - `JoySample`: the latest normalized controller reading
//! - `PotentialField`: the latest externally computed obstacle repulsion
//!   vector
//! - `CmdVel`: the fused velocity command
//!
//! All three are fixed-size, `Copy` structs so a slot can be replaced as a
//! whole unit; the two padding-free ones additionally support zero-copy
//! serialization with bytemuck.

pub mod cmd_vel;
pub mod joy_sample;
pub mod potential_field;

pub use cmd_vel::CmdVel;
pub use joy_sample::{JoySample, MAX_AXES, MAX_BUTTONS};
pub use potential_field::PotentialField;
