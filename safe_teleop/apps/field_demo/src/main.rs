//! Field Demo - safe teleop arbiter with synthetic producers
//!
//! Runs the arbiter against a synthetic joystick (deadman held, weaving
//! steering) and a slowly rotating potential field, logging every fused
//! command.
//!
//! Usage:
//!   cargo run -p field_demo
//!   cargo run -p field_demo -- --config teleop.toml --duration-secs 30
//!
//! Set RUST_LOG=debug to also see skipped ticks.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use safe_teleop::{JoySample, PotentialField, SafeTeleopArbiter, TeleopConfig};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "field_demo", about = "Safe teleop arbiter demo")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many seconds (0 = run until killed)
    #[arg(long, default_value_t = 10)]
    duration_secs: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TeleopConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TeleopConfig::default(),
    };

    info!(
        "starting arbiter: {} Hz, deadman button {}, override buttons {:?}",
        config.tick_rate_hz, config.deadman_button, config.override_buttons
    );

    let deadman_button = config.deadman_button;
    let arbiter = Arc::new(SafeTeleopArbiter::new(config)?);
    let running = Arc::new(AtomicBool::new(true));

    // Synthetic joystick: deadman held, driving forward, weaving the stick
    {
        let arbiter = Arc::clone(&arbiter);
        let running = Arc::clone(&running);
        thread::spawn(move || {
            let started = Instant::now();
            let mut buttons = vec![0u8; deadman_button + 1];
            buttons[deadman_button] = 1;
            while running.load(Ordering::Relaxed) {
                let t = started.elapsed().as_secs_f32();
                let axes = [0.6 * (0.8 * t).sin(), 0.8];
                match JoySample::new(&axes, &buttons) {
                    Ok(sample) => {
                        let _ = arbiter.on_joy_sample(sample);
                    }
                    Err(err) => warn!("failed to build sample: {}", err),
                }
                thread::sleep(Duration::from_millis(20));
            }
        });
    }

    // Synthetic obstacle: a repulsion vector slowly circling the robot
    {
        let arbiter = Arc::clone(&arbiter);
        let running = Arc::clone(&running);
        thread::spawn(move || {
            let started = Instant::now();
            while running.load(Ordering::Relaxed) {
                let t = started.elapsed().as_secs_f32();
                let field = PotentialField::new(-2.0 * (0.3 * t).cos(), 2.0 * (0.3 * t).sin());
                arbiter.on_potential_field(field);
                thread::sleep(Duration::from_millis(100));
            }
        });
    }

    if args.duration_secs > 0 {
        let running = Arc::clone(&running);
        let duration = Duration::from_secs(args.duration_secs);
        thread::spawn(move || {
            thread::sleep(duration);
            running.store(false, Ordering::Relaxed);
        });
    }

    arbiter.spin(&running, |cmd| {
        info!(
            "cmd_vel: linear_x {:.3} angular_z {:.3}",
            cmd.linear_x, cmd.angular_z
        );
    });

    info!("arbiter stopped");
    Ok(())
}
