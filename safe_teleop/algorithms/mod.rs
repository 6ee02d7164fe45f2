//! Pure computational logic for the safe teleop arbiter
//!
//! This module contains only computation, no I/O: everything here is a
//! total function over message snapshots and the startup configuration, so
//! it can be tested exhaustively and reused outside the arbiter loop.
//!
//! # Available Algorithms
//!
//! - **command_fusion**: control-mode resolution and potential-field
//!   command fusion

pub mod command_fusion;
