// End-to-end scenarios over the public arbiter API
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use approx::assert_relative_eq;
use safe_teleop::{JoySample, PotentialField, SafeTeleopArbiter, TeleopConfig};

fn deadman_held(axes: &[f32]) -> JoySample {
    JoySample::new(axes, &[1, 0, 0, 0, 0, 0, 0, 0]).unwrap()
}

#[test]
fn forward_drive_with_zero_field_passes_through() {
    // Deadman held, stick fully forward, a received-but-zero field: the
    // fused command is plain forward motion at drive_scale
    let arbiter = SafeTeleopArbiter::new(TeleopConfig::default()).unwrap();
    arbiter.on_joy_sample(deadman_held(&[0.0, 1.0])).unwrap();
    arbiter.on_potential_field(PotentialField::zero());

    let cmd = arbiter.tick().expect("deadman + field should command");
    assert_relative_eq!(cmd.linear_x, 1.0, epsilon = 1e-6);
    assert_relative_eq!(cmd.angular_z, 0.0, epsilon = 1e-6);
}

#[test]
fn override_combo_passes_stick_through_raw() {
    let arbiter = SafeTeleopArbiter::new(TeleopConfig::default()).unwrap();

    // Buttons 0, 6 and 7 held: override, regardless of what the field says
    let sample = JoySample::new(&[-0.4, -0.9], &[1, 0, 0, 0, 0, 0, 1, 1]).unwrap();
    arbiter.on_joy_sample(sample).unwrap();
    arbiter.on_potential_field(PotentialField::new(-1000.0, 1000.0));

    let cmd = arbiter.tick().expect("override should always command");
    assert_relative_eq!(cmd.linear_x, -0.9);
    assert_relative_eq!(cmd.angular_z, -0.4);
}

#[test]
fn dominating_head_on_field_clamps_forward_motion() {
    // Weight the intent below the field so the opposing push wins; the
    // forward clamp must keep linear_x at exactly zero
    let config = TeleopConfig {
        joy_vector_magnitude: 3.0,
        ..Default::default()
    };
    let arbiter = SafeTeleopArbiter::new(config).unwrap();
    arbiter.on_joy_sample(deadman_held(&[0.0, 1.0])).unwrap();
    arbiter.on_potential_field(PotentialField::new(-5.0, 0.0));

    let cmd = arbiter.tick().expect("fused direction exists");
    assert_relative_eq!(cmd.linear_x, 0.0);
}

#[test]
fn no_sample_ever_means_no_command_ever() {
    let arbiter = SafeTeleopArbiter::new(TeleopConfig::default()).unwrap();
    arbiter.on_potential_field(PotentialField::new(1.0, 1.0));
    for _ in 0..10 {
        assert!(arbiter.tick().is_none());
    }
}

#[test]
fn no_field_ever_means_no_assisted_command_ever() {
    let arbiter = SafeTeleopArbiter::new(TeleopConfig::default()).unwrap();
    for _ in 0..10 {
        arbiter.on_joy_sample(deadman_held(&[0.3, 0.8])).unwrap();
        assert!(arbiter.tick().is_none());
    }
}

#[test]
fn idle_sticks_are_ignored_even_with_obstacles() {
    let arbiter = SafeTeleopArbiter::new(TeleopConfig::default()).unwrap();
    // No deadman, no override combo
    let sample = JoySample::new(&[0.9, 0.9], &[0; 8]).unwrap();
    arbiter.on_joy_sample(sample).unwrap();
    arbiter.on_potential_field(PotentialField::new(5.0, 5.0));
    assert!(arbiter.tick().is_none());
}

#[test]
fn spin_loop_publishes_and_stops_on_request() {
    let config = TeleopConfig {
        tick_rate_hz: 100,
        ..Default::default()
    };
    let arbiter = Arc::new(SafeTeleopArbiter::new(config).unwrap());
    arbiter.on_joy_sample(deadman_held(&[0.0, 1.0])).unwrap();
    arbiter.on_potential_field(PotentialField::zero());

    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::channel();

    let worker = {
        let arbiter = Arc::clone(&arbiter);
        let running = Arc::clone(&running);
        std::thread::spawn(move || {
            arbiter.spin(&running, |cmd| {
                let _ = tx.send(cmd);
            });
        })
    };

    std::thread::sleep(Duration::from_millis(150));
    running.store(false, Ordering::Relaxed);
    worker.join().unwrap();

    let published = rx.try_iter().count();
    assert!(published > 0, "spin produced no commands");
}
