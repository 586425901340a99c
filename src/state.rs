//! Runtime state shared by the command interpreter and the frame scheduler
//!
//! Mutators are crate-private: the interpreter applies wire commands and the
//! scheduler advances timers, nothing else writes to the state.

use core::fmt;

use crate::{
    clock::ClockMs, controller::ControllerConfig, effect::EffectId,
    frame_scheduler::SLEEP_TOLERANCE_MS, palette::PaletteBank,
};

/// Shortest allowed interval between two frames
pub const MIN_SPEED_MS: u16 = 5;
/// Longest allowed interval between two frames
pub const MAX_SPEED_MS: u16 = 1000;
pub const DEFAULT_SPEED_MS: u16 = 20;
pub const DEFAULT_BRIGHTNESS: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeState {
    hue: u8,
    brightness: u8,
    effect: EffectId,
    speed_ms: u16,
    /// Absolute time at which brightness drops to zero
    sleep_deadline: Option<ClockMs>,
    hue_rotation: bool,
    /// Frame counter, wraps at 256
    palette_phase: u8,
    palette_index: u8,
    last_render: ClockMs,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeState {
    /// State with the documented power-on defaults
    pub const fn new() -> Self {
        Self {
            hue: 0,
            brightness: DEFAULT_BRIGHTNESS,
            effect: EffectId::Solid,
            speed_ms: DEFAULT_SPEED_MS,
            sleep_deadline: None,
            hue_rotation: false,
            palette_phase: 0,
            palette_index: 0,
            last_render: ClockMs::ZERO,
        }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            hue: config.hue,
            brightness: config.brightness,
            effect: config.effect,
            speed_ms: clamp_speed(i32::from(config.speed_ms)),
            hue_rotation: config.hue_rotation,
            ..Self::new()
        }
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn effect(&self) -> EffectId {
        self.effect
    }

    pub const fn speed_ms(&self) -> u16 {
        self.speed_ms
    }

    pub const fn sleep_deadline(&self) -> Option<ClockMs> {
        self.sleep_deadline
    }

    pub const fn hue_rotation(&self) -> bool {
        self.hue_rotation
    }

    pub const fn palette_phase(&self) -> u8 {
        self.palette_phase
    }

    pub const fn palette_index(&self) -> u8 {
        self.palette_index
    }

    pub const fn last_render(&self) -> ClockMs {
        self.last_render
    }

    /// Milliseconds until the pending sleep fires, 0 if none is pending
    pub const fn sleep_remaining(&self, now: ClockMs) -> u32 {
        match self.sleep_deadline {
            Some(deadline) if !now.is_within(deadline, SLEEP_TOLERANCE_MS) => {
                deadline.elapsed_since(now)
            }
            _ => 0,
        }
    }

    pub const fn status(&self, now: ClockMs) -> StatusSnapshot {
        StatusSnapshot {
            sleep_remaining: self.sleep_remaining(now),
            speed_ms: self.speed_ms,
            effect: self.effect.as_raw(),
            hue: self.hue,
            brightness: self.brightness,
        }
    }

    // Interpreter side

    /// Select an effect and move on to the next palette
    ///
    /// The palette advances even when the effect does not change.
    pub(crate) fn select_effect(&mut self, index: i32, palettes: &PaletteBank) {
        self.effect = EffectId::from_index_clamped(index);
        self.palette_index = palettes.next_index(self.palette_index);
    }

    pub(crate) fn set_speed(&mut self, speed_ms: i32) {
        self.speed_ms = clamp_speed(speed_ms);
    }

    /// Arm the sleep timer `delay_ms` from now; zero cancels it
    #[allow(clippy::cast_sign_loss)]
    pub(crate) fn set_sleep(&mut self, now: ClockMs, delay_ms: i32) {
        self.sleep_deadline = if delay_ms == 0 {
            None
        } else {
            Some(now.offset(delay_ms as u32))
        };
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn set_hue(&mut self, hue: i32) {
        self.hue = hue as u8;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn set_brightness(&mut self, brightness: i32) {
        self.brightness = brightness as u8;
    }

    pub(crate) fn toggle_hue_rotation(&mut self) {
        self.hue_rotation = !self.hue_rotation;
    }

    // Scheduler side

    /// One-shot blackout when the sleep deadline is reached
    pub(crate) fn fall_asleep(&mut self) {
        self.brightness = 0;
        self.sleep_deadline = None;
    }

    pub(crate) fn finish_frame(&mut self, now: ClockMs) {
        self.last_render = now;
        self.palette_phase = self.palette_phase.wrapping_add(1);
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn advance_hue(&mut self, steps: u32) {
        self.hue = self.hue.wrapping_add((steps % 256) as u8);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_speed(speed_ms: i32) -> u16 {
    speed_ms.clamp(i32::from(MIN_SPEED_MS), i32::from(MAX_SPEED_MS)) as u16
}

/// Values reported by the status query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub sleep_remaining: u32,
    pub speed_ms: u16,
    pub effect: u8,
    pub hue: u8,
    pub brightness: u8,
}

impl fmt::Display for StatusSnapshot {
    /// Wire form: `!<sleep>,<speed>,<effect>,<hue>,<brightness>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "!{},{},{},{},{}",
            self.sleep_remaining, self.speed_ms, self.effect, self.hue, self.brightness
        )
    }
}
