use crate::ui::motion::{Spring, SpringConfig, Tween};

pub const PRESSED_SCALE: f32 = 0.92;
pub const PRESSED_OPACITY: f32 = 0.7;
const OPACITY_SECS: f32 = 0.1;
const SPRING_TENSION: f32 = 40.0;
const SPRING_FRICTION: f32 = 8.0;

/// What one frame of pointer input meant for a tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureOutcome {
    pub pressed_in: bool,
    pub released: bool,
    pub long_pressed: bool,
    /// The release ended a long press; a click reported on the same frame
    /// must not count as a tap.
    pub suppress_click: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum PressPhase {
    #[default]
    Idle,
    Pressed {
        since: f64,
    },
    LongPressed,
}

/// Press/long-press recognizer fed with the pointer-down state every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressGesture {
    phase: PressPhase,
}

impl PressGesture {
    pub fn is_held(&self) -> bool {
        self.phase != PressPhase::Idle
    }

    pub fn update(&mut self, down: bool, now: f64, long_press_delay: f64) -> GestureOutcome {
        let mut outcome = GestureOutcome::default();

        match (self.phase, down) {
            (PressPhase::Idle, true) => {
                self.phase = PressPhase::Pressed { since: now };
                outcome.pressed_in = true;
            }
            (PressPhase::Pressed { since }, true) => {
                if now - since >= long_press_delay {
                    self.phase = PressPhase::LongPressed;
                    outcome.long_pressed = true;
                }
            }
            (PressPhase::Pressed { .. }, false) => {
                self.phase = PressPhase::Idle;
                outcome.released = true;
            }
            (PressPhase::LongPressed, false) => {
                self.phase = PressPhase::Idle;
                outcome.released = true;
                outcome.suppress_click = true;
            }
            (PressPhase::Idle, false) | (PressPhase::LongPressed, true) => {}
        }

        outcome
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    pub scale: f32,
    pub opacity: f32,
}

/// Press feedback for one tile: scale springs while opacity eases, in
/// parallel. Purely visual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressFeedback {
    scale: Spring,
    opacity: Tween,
}

impl Default for PressFeedback {
    fn default() -> Self {
        Self {
            scale: Spring::new(
                1.0,
                SpringConfig::from_tension_friction(SPRING_TENSION, SPRING_FRICTION),
            ),
            opacity: Tween::new(1.0),
        }
    }
}

impl PressFeedback {
    pub fn press_in(&mut self, now: f64) {
        self.scale.set_target(PRESSED_SCALE, now);
        self.opacity.animate_to(PRESSED_OPACITY, OPACITY_SECS, now);
    }

    pub fn press_out(&mut self, now: f64) {
        self.scale.set_target(1.0, now);
        self.opacity.animate_to(1.0, OPACITY_SECS, now);
    }

    pub fn sample(&self, now: f64) -> TileStyle {
        TileStyle {
            scale: self.scale.value(now),
            opacity: self.opacity.value(now),
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        !self.scale.is_at_rest(now) || !self.opacity.is_finished(now)
    }
}
