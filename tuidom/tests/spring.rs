use std::time::Duration;

use tuidom::{Spring, SpringSpec};

const FRAME: Duration = Duration::from_millis(16);

fn bouncy() -> SpringSpec {
    SpringSpec::new(SpringSpec::DAMPING_MEDIUM_BOUNCY, SpringSpec::STIFFNESS_LOW)
}

/// Step until settled, collecting every sampled value.
fn run(spring: &mut Spring, max_frames: usize) -> Vec<f32> {
    let mut samples = Vec::new();
    for _ in 0..max_frames {
        let moving = spring.step(FRAME);
        samples.push(spring.value());
        if !moving {
            break;
        }
    }
    samples
}

#[test]
fn test_new_spring_is_at_rest() {
    let spring = Spring::new(bouncy(), 12.0);
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 12.0);
    assert_eq!(spring.target(), 12.0);
}

#[test]
fn test_step_on_settled_spring_is_noop() {
    let mut spring = Spring::new(bouncy(), 0.0);
    assert!(!spring.step(FRAME));
    assert_eq!(spring.value(), 0.0);
}

#[test]
fn test_settles_exactly_on_target() {
    let mut spring = Spring::new(bouncy(), 0.0);
    spring.set_target(48.0);
    run(&mut spring, 1000);
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 48.0);

    spring.set_target(0.0);
    run(&mut spring, 1000);
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 0.0);
}

#[test]
fn test_medium_bouncy_overshoots() {
    let mut spring = Spring::new(bouncy(), 0.0);
    spring.set_target(48.0);
    let samples = run(&mut spring, 1000);
    let peak = samples.iter().cloned().fold(f32::MIN, f32::max);
    assert!(peak > 48.5, "expected overshoot, peak was {peak}");

    spring.set_target(0.0);
    let samples = run(&mut spring, 1000);
    let trough = samples.iter().cloned().fold(f32::MAX, f32::min);
    assert!(trough < -0.5, "expected undershoot, trough was {trough}");
}

#[test]
fn test_no_bouncy_never_overshoots() {
    let spec = SpringSpec::new(SpringSpec::DAMPING_NO_BOUNCY, SpringSpec::STIFFNESS_LOW);
    let mut spring = Spring::new(spec, 0.0);
    spring.set_target(48.0);
    for value in run(&mut spring, 1000) {
        assert!(value <= 48.0 + f32::EPSILON, "overshot to {value}");
    }
}

#[test]
fn test_overdamped_settles() {
    let spec = SpringSpec::new(2.0, SpringSpec::STIFFNESS_MEDIUM);
    let mut spring = Spring::new(spec, 10.0);
    spring.set_target(0.0);
    run(&mut spring, 2000);
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 0.0);
}

#[test]
fn test_not_linear() {
    // Halfway through in time is not halfway in distance
    let mut spring = Spring::new(bouncy(), 0.0);
    spring.set_target(48.0);
    let samples = run(&mut spring, 1000);
    let half = samples.len() / 2;
    let linear = 48.0 * half as f32 / samples.len() as f32;
    assert!((samples[half - 1] - linear).abs() > 1.0);
}

#[test]
fn test_retarget_keeps_value_and_velocity() {
    let mut spring = Spring::new(bouncy(), 0.0);
    spring.set_target(48.0);
    for _ in 0..10 {
        spring.step(FRAME);
    }
    let (value, velocity) = (spring.value(), spring.velocity());
    assert!(velocity > 0.0);

    spring.set_target(0.0);
    assert_eq!(spring.value(), value);
    assert_eq!(spring.velocity(), velocity);
    assert!(!spring.is_settled());

    // Still moving up for a moment before turning around
    spring.step(Duration::from_millis(1));
    assert!(spring.value() > value);

    run(&mut spring, 1000);
    assert_eq!(spring.value(), 0.0);
}

#[test]
fn test_snap_stops_motion() {
    let mut spring = Spring::new(bouncy(), 0.0);
    spring.set_target(48.0);
    spring.step(FRAME);
    spring.snap_to(48.0);
    assert!(spring.is_settled());
    assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn test_presets() {
    let spec = SpringSpec::default();
    assert_eq!(spec.damping_ratio, SpringSpec::DAMPING_NO_BOUNCY);
    assert_eq!(spec.stiffness, SpringSpec::STIFFNESS_MEDIUM);
    assert_eq!(bouncy().damping_ratio, 0.5);
    assert_eq!(bouncy().stiffness, 200.0);
}
