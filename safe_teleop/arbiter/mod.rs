//! The arbiter: fixed-rate fusion of operator intent and obstacle data
//!
//! `SafeTeleopArbiter` owns the latest controller sample and repulsion
//! field in two last-value-wins slots, fed asynchronously by the transport
//! collaborators. A periodic scheduler drives `tick`, which snapshots both
//! slots, resolves the control mode, and fuses at most one velocity
//! command. Every tick is a pure function of the snapshot plus the startup
//! configuration; nothing carries over between ticks.

pub mod slot;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{debug, warn};

use crate::algorithms::command_fusion::{fuse_command, resolve_mode};
use crate::config::TeleopConfig;
use crate::error::TeleopResult;
use crate::messages::{CmdVel, JoySample, PotentialField};

pub use slot::LatestSlot;

/// Reactive safety arbiter for teleoperated driving
///
/// Thread-safe: the two ingest operations may be called from any thread
/// while another drives `tick` or `spin`.
pub struct SafeTeleopArbiter {
    config: TeleopConfig,
    joy: LatestSlot<JoySample>,
    field: LatestSlot<PotentialField>,
}

impl SafeTeleopArbiter {
    /// Create an arbiter, failing fast on an unusable configuration
    pub fn new(config: TeleopConfig) -> TeleopResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            joy: LatestSlot::new(),
            field: LatestSlot::new(),
        })
    }

    /// The configuration the arbiter was started with
    pub fn config(&self) -> &TeleopConfig {
        &self.config
    }

    /// Ingest the latest controller sample
    ///
    /// A sample that fails the shape check is reported as
    /// `InvalidSampleShape` but still supersedes the previous slot value:
    /// once the stream goes bad, a stale valid sample must not keep
    /// driving the robot. Ticks treat a malformed current sample as
    /// absent.
    pub fn on_joy_sample(&self, sample: JoySample) -> TeleopResult<()> {
        let shape = sample.check_shape(&self.config);
        if let Err(ref err) = shape {
            warn!("malformed joystick sample: {}", err);
        }
        self.joy.replace(sample);
        shape
    }

    /// Ingest the latest obstacle repulsion vector
    pub fn on_potential_field(&self, field: PotentialField) {
        self.field.replace(field);
    }

    /// Run one arbitration tick
    ///
    /// Snapshots both slots, resolves the control mode and fuses a
    /// command. `None` means nothing should be published this tick; the
    /// publishing collaborator decides whether that is coast, hold or
    /// brake.
    pub fn tick(&self) -> Option<CmdVel> {
        let field = self.field.snapshot();
        let sample = match self.joy.snapshot() {
            Some(sample) => match sample.check_shape(&self.config) {
                Ok(()) => Some(sample),
                Err(err) => {
                    debug!("skipping tick, malformed sample: {}", err);
                    None
                }
            },
            None => None,
        };

        let mode = resolve_mode(sample.as_ref(), &self.config);
        fuse_command(mode, sample.as_ref(), field.as_ref(), &self.config)
    }

    /// Drive `tick` at the configured rate until `running` clears
    ///
    /// Each produced command is handed to `publish`; no-command ticks call
    /// nothing. The cadence is fixed by `tick_rate_hz` and independent of
    /// how fast samples arrive. A tick that overruns its period skips the
    /// missed slots instead of bursting to catch up.
    pub fn spin<F>(&self, running: &AtomicBool, mut publish: F)
    where
        F: FnMut(CmdVel),
    {
        let period = self.config.tick_period();
        let mut next_tick = Instant::now() + period;

        while running.load(Ordering::Relaxed) {
            if let Some(cmd) = self.tick() {
                publish(cmd);
            }

            let now = Instant::now();
            if next_tick > now {
                std::thread::sleep(next_tick - now);
            } else {
                next_tick = now;
            }
            next_tick += period;
        }
    }
}
