//! Time-driven animation primitives. Every value is a pure function of the
//! timestamp it is sampled at (seconds, as reported by `egui::InputState::time`),
//! so retargeting mid-flight keeps both position and velocity continuous.

const REST_DISPLACEMENT: f32 = 0.001;
const REST_SPEED: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Converts Origami-style tension/friction into a mass-spring-damper.
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            mass: 1.0,
        }
    }

    fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    target: f32,
    offset: f32,
    velocity: f32,
    started_at: f64,
}

impl Spring {
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            config,
            target: value,
            offset: 0.0,
            velocity: 0.0,
            started_at: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f32, now: f64) {
        let (value, velocity) = self.sample(now);
        self.target = target;
        self.offset = value - target;
        self.velocity = velocity;
        self.started_at = now;
    }

    pub fn value(&self, now: f64) -> f32 {
        self.sample(now).0
    }

    pub fn is_at_rest(&self, now: f64) -> bool {
        let (offset, velocity) = self.raw(now);
        offset.abs() <= REST_DISPLACEMENT && velocity.abs() <= REST_SPEED
    }

    fn sample(&self, now: f64) -> (f32, f32) {
        let (offset, velocity) = self.raw(now);
        if offset.abs() <= REST_DISPLACEMENT && velocity.abs() <= REST_SPEED {
            return (self.target, 0.0);
        }
        (self.target + offset, velocity)
    }

    /// Displacement from target and velocity, `elapsed` seconds after the last
    /// retarget.
    fn raw(&self, now: f64) -> (f32, f32) {
        let t = (now - self.started_at).max(0.0) as f32;
        let x0 = self.offset;
        let v0 = self.velocity;
        let w0 = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        if (zeta - 1.0).abs() < 1e-4 {
            let b = v0 + w0 * x0;
            let decay = (-w0 * t).exp();
            let offset = decay * (x0 + b * t);
            let velocity = decay * (b - w0 * (x0 + b * t));
            return (offset, velocity);
        }

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * w0 * x0) / wd;
            let decay = (-zeta * w0 * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let offset = decay * (a * cos + b * sin);
            let velocity = decay * (-zeta * w0 * (a * cos + b * sin) + wd * (b * cos - a * sin));
            return (offset, velocity);
        }

        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        let c2 = (r1 * x0 - v0) / (r1 - r2);
        let c1 = x0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

/// Fixed-duration interpolation with an ease-in-out curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: f64,
    duration: f32,
}

impl Tween {
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at: 0.0,
            duration: 0.0,
        }
    }

    pub fn animate_to(&mut self, to: f32, duration: f32, now: f64) {
        self.from = self.value(now);
        self.to = to;
        self.started_at = now;
        self.duration = duration.max(0.0);
    }

    pub fn value(&self, now: f64) -> f32 {
        let eased = ease_in_out(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.started_at) as f32) / self.duration).clamp(0.0, 1.0)
    }
}

pub fn ease_in_out(p: f32) -> f32 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_spring() -> SpringConfig {
        SpringConfig::from_tension_friction(40.0, 8.0)
    }

    #[test]
    fn tension_friction_conversion() {
        let config = press_spring();
        assert!((config.stiffness - 230.2).abs() < 1e-3);
        assert!((config.damping - 25.0).abs() < 1e-6);
    }

    #[test]
    fn spring_starts_at_rest() {
        let spring = Spring::new(1.0, press_spring());
        assert!(spring.is_at_rest(0.0));
        assert_eq!(spring.value(5.0), 1.0);
    }

    #[test]
    fn spring_moves_from_current_value_and_settles_on_target() {
        let mut spring = Spring::new(1.0, press_spring());
        spring.set_target(0.92, 10.0);

        assert!((spring.value(10.0) - 1.0).abs() < 1e-6);
        assert!(!spring.is_at_rest(10.05));
        let mid = spring.value(10.05);
        assert!(mid < 1.0 && mid > 0.9);
        assert_eq!(spring.value(12.0), 0.92);
        assert!(spring.is_at_rest(12.0));
    }

    #[test]
    fn retarget_is_continuous() {
        let mut spring = Spring::new(1.0, press_spring());
        spring.set_target(0.92, 0.0);
        let before = spring.value(0.04);
        spring.set_target(1.0, 0.04);
        let after = spring.value(0.04);
        assert!((before - after).abs() < 1e-5);
        assert_eq!(spring.value(3.0), 1.0);
    }

    #[test]
    fn overdamped_and_critical_springs_settle() {
        for damping in [2.0 * 230.2_f32.sqrt(), 80.0] {
            let config = SpringConfig {
                stiffness: 230.2,
                damping,
                mass: 1.0,
            };
            let mut spring = Spring::new(0.0, config);
            spring.set_target(1.0, 0.0);
            let early = spring.value(0.05);
            assert!(early > 0.0 && early < 1.0);
            assert_eq!(spring.value(10.0), 1.0);
        }
    }

    #[test]
    fn tween_reaches_target_after_duration() {
        let mut tween = Tween::new(1.0);
        tween.animate_to(0.7, 0.1, 2.0);

        assert!((tween.value(2.0) - 1.0).abs() < 1e-6);
        let half = tween.value(2.05);
        assert!((half - 0.85).abs() < 1e-4);
        assert!(!tween.is_finished(2.05));
        assert!((tween.value(2.1) - 0.7).abs() < 1e-6);
        assert!(tween.is_finished(2.2));
    }

    #[test]
    fn tween_retarget_starts_from_current_value() {
        let mut tween = Tween::new(1.0);
        tween.animate_to(0.7, 0.1, 0.0);
        let current = tween.value(0.05);
        tween.animate_to(1.0, 0.1, 0.05);
        assert!((tween.value(0.05) - current).abs() < 1e-6);
        assert!((tween.value(0.15) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ease_curve_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }
}
