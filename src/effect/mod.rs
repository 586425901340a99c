//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.
//!
//! The numeric id of an effect is part of the wire protocol (`-e<n>` selects
//! by id, `-*` lists names in id order), so new effects are only ever appended.

mod bpm;
mod confetti;
mod juggle;
mod palette_cycle;
mod rainbow;
mod solid;
mod trail;

pub use bpm::BpmEffect;
pub use confetti::ConfettiEffect;
pub use juggle::JuggleEffect;
pub use palette_cycle::PaletteCycleEffect;
pub use rainbow::RainbowEffect;
pub use solid::SolidEffect;
pub use trail::TrailEffect;

use crate::{clock::ClockMs, color::Rgb, palette::PaletteBank, state::RuntimeState};

const EFFECT_NAME_SOLID: &str = "Solid";
const EFFECT_NAME_PALETTE: &str = "Palette";
const EFFECT_NAME_CONFETTI: &str = "Confetti";
const EFFECT_NAME_RAINBOW: &str = "Rainbow";
const EFFECT_NAME_TRAIL: &str = "Trail";
const EFFECT_NAME_JUGGLE: &str = "Juggle";
const EFFECT_NAME_BPM: &str = "BPM";

const EFFECT_ID_SOLID: u8 = 0;
const EFFECT_ID_PALETTE: u8 = 1;
const EFFECT_ID_CONFETTI: u8 = 2;
const EFFECT_ID_RAINBOW: u8 = 3;
const EFFECT_ID_TRAIL: u8 = 4;
const EFFECT_ID_JUGGLE: u8 = 5;
const EFFECT_ID_BPM: u8 = 6;

/// Number of registered effects
pub const EFFECT_COUNT: usize = 7;

/// Read-only inputs of a single render pass
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Current clock, drives the oscillators
    pub now: ClockMs,
    /// Base hue
    pub hue: u8,
    /// Frame counter, wraps at 256
    pub phase: u8,
    /// Active palette index
    pub palette: u8,
    pub palettes: &'a PaletteBank,
}

impl<'a> FrameContext<'a> {
    pub fn new(state: &RuntimeState, palettes: &'a PaletteBank, now: ClockMs) -> Self {
        Self {
            now,
            hue: state.hue(),
            phase: state.palette_phase(),
            palette: state.palette_index(),
            palettes,
        }
    }
}

pub trait Effect {
    /// Render a single frame
    ///
    /// `leds` still holds the previous frame, effects that fade rely on it.
    fn render(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    Solid(SolidEffect),
    PaletteCycle(PaletteCycleEffect),
    Confetti(ConfettiEffect),
    Rainbow(RainbowEffect),
    Trail(TrailEffect),
    Juggle(JuggleEffect),
    Bpm(BpmEffect),
}

impl Default for EffectSlot {
    fn default() -> Self {
        EffectId::default().to_slot()
    }
}

/// Known effect ids, in registry order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    #[default]
    Solid = EFFECT_ID_SOLID,
    PaletteCycle = EFFECT_ID_PALETTE,
    Confetti = EFFECT_ID_CONFETTI,
    Rainbow = EFFECT_ID_RAINBOW,
    Trail = EFFECT_ID_TRAIL,
    Juggle = EFFECT_ID_JUGGLE,
    Bpm = EFFECT_ID_BPM,
}

impl EffectId {
    /// Every effect, ordered by id
    pub const ALL: [Self; EFFECT_COUNT] = [
        Self::Solid,
        Self::PaletteCycle,
        Self::Confetti,
        Self::Rainbow,
        Self::Trail,
        Self::Juggle,
        Self::Bpm,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_PALETTE => Self::PaletteCycle,
            EFFECT_ID_CONFETTI => Self::Confetti,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_TRAIL => Self::Trail,
            EFFECT_ID_JUGGLE => Self::Juggle,
            EFFECT_ID_BPM => Self::Bpm,
            _ => return None,
        })
    }

    /// Effect at `index`, clamped into the registry
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_index_clamped(index: i32) -> Self {
        let last = EFFECT_COUNT as i32 - 1;
        let clamped = if index < 0 {
            0
        } else if index > last {
            last
        } else {
            index
        };
        Self::ALL[clamped as usize]
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => EFFECT_NAME_SOLID,
            Self::PaletteCycle => EFFECT_NAME_PALETTE,
            Self::Confetti => EFFECT_NAME_CONFETTI,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Trail => EFFECT_NAME_TRAIL,
            Self::Juggle => EFFECT_NAME_JUGGLE,
            Self::Bpm => EFFECT_NAME_BPM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Solid => EffectSlot::Solid(SolidEffect),
            Self::PaletteCycle => EffectSlot::PaletteCycle(PaletteCycleEffect),
            Self::Confetti => EffectSlot::Confetti(ConfettiEffect::default()),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect),
            Self::Trail => EffectSlot::Trail(TrailEffect),
            Self::Juggle => EffectSlot::Juggle(JuggleEffect),
            Self::Bpm => EffectSlot::Bpm(BpmEffect),
        }
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        match self {
            Self::Solid(effect) => effect.render(frame, leds),
            Self::PaletteCycle(effect) => effect.render(frame, leds),
            Self::Confetti(effect) => effect.render(frame, leds),
            Self::Rainbow(effect) => effect.render(frame, leds),
            Self::Trail(effect) => effect.render(frame, leds),
            Self::Juggle(effect) => effect.render(frame, leds),
            Self::Bpm(effect) => effect.render(frame, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Solid(effect) => Effect::reset(effect),
            Self::PaletteCycle(effect) => Effect::reset(effect),
            Self::Confetti(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Trail(effect) => Effect::reset(effect),
            Self::Juggle(effect) => Effect::reset(effect),
            Self::Bpm(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Solid(_) => EffectId::Solid,
            Self::PaletteCycle(_) => EffectId::PaletteCycle,
            Self::Confetti(_) => EffectId::Confetti,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Trail(_) => EffectId::Trail,
            Self::Juggle(_) => EffectId::Juggle,
            Self::Bpm(_) => EffectId::Bpm,
        }
    }
}

/// Last valid index of `leds` as a `u16`, `None` for an empty buffer
pub(crate) fn last_index(leds: &[Rgb]) -> Option<u16> {
    let last = leds.len().checked_sub(1)?;
    Some(u16::try_from(last).unwrap_or(u16::MAX))
}
