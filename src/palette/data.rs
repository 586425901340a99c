//! Built-in gradient palettes
//!
//! Stops are `position => 0xRRGGBB`. Every palette starts at 0 and ends at 255.

use super::{GradientPalette, GradientStop};
use crate::color::rgb_from_u32;

/// Create gradient stops from `position => 0xRRGGBB` pairs
macro_rules! gradient {
    ($($position:expr => $color:expr),* $(,)?) => {
        &[
            $(GradientStop { position: $position, color: rgb_from_u32($color) }),*
        ]
    };
}

#[allow(clippy::unreadable_literal)]
const SUNSET: &[GradientStop] = gradient![
    0 => 0x780000,
    22 => 0xB31600,
    51 => 0xFF6800,
    85 => 0xA71612,
    135 => 0x640067,
    198 => 0x100082,
    255 => 0x0000A0,
];

#[allow(clippy::unreadable_literal)]
const RIVENDELL: &[GradientStop] = gradient![
    0 => 0x010E05,
    101 => 0x10240E,
    165 => 0x38441E,
    242 => 0x969C63,
    255 => 0x969C63,
];

#[allow(clippy::unreadable_literal)]
const OCEAN_BREEZE: &[GradientStop] = gradient![
    0 => 0x010607,
    89 => 0x01636F,
    153 => 0x90D1FF,
    255 => 0x004952,
];

#[allow(clippy::unreadable_literal)]
const PINK_SPLASH: &[GradientStop] = gradient![
    0 => 0x7E0BFF,
    127 => 0xC50116,
    175 => 0xD29DAC,
    221 => 0x9D0370,
    255 => 0x9D0370,
];

#[allow(clippy::unreadable_literal)]
const ANALOGOUS: &[GradientStop] = gradient![
    0 => 0x0300FF,
    63 => 0x1700FF,
    127 => 0x4300FF,
    191 => 0x8E002D,
    255 => 0xFF0000,
];

#[allow(clippy::unreadable_literal)]
const RETRO: &[GradientStop] = gradient![
    0 => 0xBC8701,
    255 => 0x2E0701,
];

#[allow(clippy::unreadable_literal)]
const RGI: &[GradientStop] = gradient![
    0 => 0x04011F,
    31 => 0x370110,
    63 => 0xC50307,
    95 => 0x3B0211,
    127 => 0x060222,
    159 => 0x270621,
    191 => 0x700D20,
    223 => 0x380923,
    255 => 0x160626,
];

// Sixteen evenly spaced entries, wrapping back to the first
#[allow(clippy::unreadable_literal)]
const PARTY: &[GradientStop] = gradient![
    0 => 0x5500AB,
    16 => 0x84007C,
    32 => 0xB5004B,
    48 => 0xE5001B,
    64 => 0xE81700,
    80 => 0xB84700,
    96 => 0xAB7700,
    112 => 0xABAB00,
    128 => 0xAB5500,
    144 => 0xDD2200,
    160 => 0xF2000E,
    176 => 0xC2003E,
    192 => 0x8F0071,
    208 => 0x5F00A1,
    224 => 0x2F00D0,
    240 => 0x0007F9,
    255 => 0x5500AB,
];

/// Palettes the palette-cycle effect rotates through, in selection order
pub(super) static ROTATION: [GradientPalette; 7] = [
    GradientPalette::new("sunset", SUNSET),
    GradientPalette::new("rivendell", RIVENDELL),
    GradientPalette::new("ocean_breeze", OCEAN_BREEZE),
    GradientPalette::new("pink_splash", PINK_SPLASH),
    GradientPalette::new("analogous", ANALOGOUS),
    GradientPalette::new("retro", RETRO),
    GradientPalette::new("rgi", RGI),
];

/// Fixed palette behind the BPM effect
pub static PARTY_PALETTE: GradientPalette = GradientPalette::new("party", PARTY);
