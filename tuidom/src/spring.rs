//! Physically modeled spring animation for a single scalar.
//!
//! A [`Spring`] tracks a value, its velocity and a target. Each frame the
//! caller advances it by the elapsed time; the damped harmonic oscillator is
//! solved in closed form, so the result does not depend on frame rate.
//! Changing the target mid-flight keeps the current value and velocity.

use std::time::Duration;

/// Velocity threshold is this many times the displacement threshold
/// (one threshold unit per 16ms frame).
const VELOCITY_THRESHOLD_MULTIPLIER: f32 = 1000.0 / 16.0;

/// Damping and stiffness of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 is critically damped, below 1.0 overshoots.
    pub damping_ratio: f32,
    /// Spring constant for a unit mass.
    pub stiffness: f32,
    /// Distance from the target below which the spring counts as settled.
    pub visibility_threshold: f32,
}

impl SpringSpec {
    pub const DAMPING_HIGH_BOUNCY: f32 = 0.2;
    pub const DAMPING_MEDIUM_BOUNCY: f32 = 0.5;
    pub const DAMPING_LOW_BOUNCY: f32 = 0.75;
    pub const DAMPING_NO_BOUNCY: f32 = 1.0;

    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const STIFFNESS_VERY_LOW: f32 = 50.0;

    pub const fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            visibility_threshold: 0.1,
        }
    }

    pub const fn visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = threshold;
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(Self::DAMPING_NO_BOUNCY, Self::STIFFNESS_MEDIUM)
    }
}

/// An animated scalar driven by a [`SpringSpec`].
#[derive(Debug, Clone)]
pub struct Spring {
    spec: SpringSpec,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn new(spec: SpringSpec, value: f32) -> Self {
        Self {
            spec,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn spec(&self) -> SpringSpec {
        self.spec
    }

    /// Aim at a new target without disturbing the current motion.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `target` and stop.
    pub fn snap_to(&mut self, target: f32) {
        self.target = target;
        self.value = target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt`. Once inside the visibility threshold the value lands
    /// exactly on the target. Returns true while still in motion.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.is_settled() {
            return false;
        }

        let displacement = (self.value - self.target) as f64;
        let (x, v) = advance(self.spec, displacement, self.velocity as f64, dt.as_secs_f64());
        self.value = self.target + x as f32;
        self.velocity = v as f32;

        let threshold = self.spec.visibility_threshold;
        if (x as f32).abs() < threshold
            && self.velocity.abs() < threshold * VELOCITY_THRESHOLD_MULTIPLIER
        {
            self.snap_to(self.target);
            return false;
        }
        true
    }
}

/// Closed-form position and velocity of a unit-mass damped oscillator
/// after `t` seconds, starting at displacement `x0` with velocity `v0`.
fn advance(spec: SpringSpec, x0: f64, v0: f64, t: f64) -> (f64, f64) {
    let zeta = spec.damping_ratio.max(0.0) as f64;
    let omega = (spec.stiffness.max(f32::EPSILON) as f64).sqrt();

    if zeta < 1.0 {
        let decay = zeta * omega;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let b = (v0 + decay * x0) / omega_d;
        let (sin, cos) = (omega_d * t).sin_cos();
        let envelope = (-decay * t).exp();
        let x = envelope * (x0 * cos + b * sin);
        let v = envelope * (-decay * (x0 * cos + b * sin) + omega_d * (b * cos - x0 * sin));
        (x, v)
    } else if zeta == 1.0 {
        let b = v0 + omega * x0;
        let envelope = (-omega * t).exp();
        let x = (x0 + b * t) * envelope;
        let v = (b - omega * (x0 + b * t)) * envelope;
        (x, v)
    } else {
        let s = omega * (zeta * zeta - 1.0).sqrt();
        let r1 = -zeta * omega - s;
        let r2 = -zeta * omega + s;
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}
