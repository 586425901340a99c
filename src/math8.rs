//! 8- and 16-bit fixed point helpers
//!
//! Angles are expressed as fractions of a full turn: `256` per turn for the
//! 8-bit variants and `65536` per turn for the 16-bit ones.

use core::f32::consts::TAU;

use crate::clock::ClockMs;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a 16-bit factor (0-65535 = 0.0-1.0)
///
/// `scale16(65535, s) == s`, so `scale` itself is reachable.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Add two values, saturating at 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Sine of an 8-bit angle, mapped to 0-255 (128 at zero)
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub fn sin8(theta: u8) -> u8 {
    let angle = f32::from(theta) / 256.0 * TAU;
    (128.0 + libm::sinf(angle) * 127.5).clamp(0.0, 255.0) as u8
}

/// Sine of a 16-bit angle, mapped to -32767..=32767
#[allow(clippy::cast_possible_truncation)]
pub fn sin16(theta: u16) -> i16 {
    let angle = f32::from(theta) / 65536.0 * TAU;
    (libm::sinf(angle) * 32767.0) as i16
}

/// Sawtooth that sweeps 0-65535 `bpm` times per minute
#[allow(clippy::cast_possible_truncation)]
pub fn beat16(bpm: u16, now: ClockMs) -> u16 {
    // bpm in Q8.8; 256 * 280 / 65536 ~= 65536 / 60000 ms
    let bpm88 = u64::from(bpm) << 8;
    ((u64::from(now.as_millis()) * bpm88 * 280) >> 16) as u16
}

/// Sawtooth that sweeps 0-255 `bpm` times per minute
#[allow(clippy::cast_possible_truncation)]
pub fn beat8(bpm: u16, now: ClockMs) -> u8 {
    (beat16(bpm, now) >> 8) as u8
}

/// Sine wave oscillating between `low` and `high` at `bpm`
pub fn beatsin8(bpm: u16, low: u8, high: u8, now: ClockMs) -> u8 {
    let wave = sin8(beat8(bpm, now));
    let range = high.saturating_sub(low);
    low.saturating_add(scale8(wave, range))
}

/// Sine wave oscillating over `low..=high` at `bpm`
///
/// `beatsin16(bpm, 0, len - 1)` sweeps every index of a `len` pixel buffer.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn beatsin16(bpm: u16, low: u16, high: u16, now: ClockMs) -> u16 {
    let wave = (i32::from(sin16(beat16(bpm, now))) + 32768) as u16;
    let range = high.saturating_sub(low);
    low.saturating_add(scale16(wave, range))
}

/// Seed used when no other seed is given
pub const DEFAULT_SEED: u16 = 1337;

/// 16-bit linear congruential generator
///
/// Cheap and deterministic; only used for visual jitter.
#[derive(Debug, Clone)]
pub struct Random16 {
    seed: u16,
}

impl Default for Random16 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Random16 {
    pub const fn new(seed: u16) -> Self {
        Self { seed }
    }

    pub const fn next_u16(&mut self) -> u16 {
        self.seed = self.seed.wrapping_mul(2053).wrapping_add(13849);
        self.seed
    }

    /// Next byte, folding both halves of the state
    #[allow(clippy::cast_possible_truncation)]
    pub const fn next_u8(&mut self) -> u8 {
        let value = self.next_u16();
        (value as u8).wrapping_add((value >> 8) as u8)
    }

    /// Random value in `0..limit` (0 if `limit` is 0)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn below_u8(&mut self, limit: u8) -> u8 {
        ((self.next_u8() as u16 * limit as u16) >> 8) as u8
    }

    /// Random value in `0..limit` (0 if `limit` is 0)
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub const fn below_u16(&mut self, limit: u16) -> u16 {
        ((self.next_u16() as u32 * limit as u32) >> 16) as u16
    }
}
