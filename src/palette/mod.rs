//! Gradient palettes
//!
//! A palette is an ordered list of control points on a 0-255 axis. Sampling
//! blends linearly between the two stops surrounding the requested position.
//! The bank is static data; the active palette is selected by index.

mod data;

pub use data::PARTY_PALETTE;

use crate::color::{BLACK, Rgb, blend_colors};

/// Single control point of a gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    pub position: u8,
    pub color: Rgb,
}

/// Immutable gradient definition
#[derive(Debug, Clone, Copy)]
pub struct GradientPalette {
    name: &'static str,
    stops: &'static [GradientStop],
}

impl GradientPalette {
    pub const fn new(name: &'static str, stops: &'static [GradientStop]) -> Self {
        Self { name, stops }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn stops(&self) -> &'static [GradientStop] {
        self.stops
    }

    /// Sample the gradient at `position`
    #[allow(clippy::cast_possible_truncation)]
    pub fn sample(&self, position: u8) -> Rgb {
        let Some(first) = self.stops.first() else {
            return BLACK;
        };
        if position <= first.position {
            return first.color;
        }

        for pair in self.stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if position > to.position {
                continue;
            }
            let span = to.position.saturating_sub(from.position);
            if span == 0 {
                return to.color;
            }
            let local = u16::from(position - from.position) * 255 / u16::from(span);
            return blend_colors(from.color, to.color, local as u8);
        }

        self.stops.last().map_or(BLACK, |stop| stop.color)
    }
}

/// Fixed, ordered set of palettes
#[derive(Debug, Clone, Copy)]
pub struct PaletteBank {
    palettes: &'static [GradientPalette],
}

impl Default for PaletteBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaletteBank {
    pub const fn new(palettes: &'static [GradientPalette]) -> Self {
        Self { palettes }
    }

    /// The seven built-in rotation palettes
    pub const fn builtin() -> Self {
        Self::new(&data::ROTATION)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn len(&self) -> u8 {
        self.palettes.len() as u8
    }

    pub const fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn get(&self, index: u8) -> Option<&GradientPalette> {
        self.palettes.get(usize::from(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &GradientPalette> {
        self.palettes.iter()
    }

    /// Sample palette `index` at `position`; black for an unknown index
    pub fn sample(&self, index: u8, position: u8) -> Rgb {
        self.get(index).map_or(BLACK, |palette| palette.sample(position))
    }

    /// Index that follows `index`, wrapping at the end of the bank
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub const fn next_index(&self, index: u8) -> u8 {
        let len = self.len();
        if len == 0 {
            return 0;
        }
        ((index as u16 + 1) % len as u16) as u8
    }

    /// Render palette `index` shifted by `phase`: pixel `i` samples `phase + i`
    pub fn rotate(&self, leds: &mut [Rgb], index: u8, phase: u8) {
        let Some(palette) = self.get(index) else {
            leds.fill(BLACK);
            return;
        };
        let mut position = phase;
        for led in leds {
            *led = palette.sample(position);
            position = position.wrapping_add(1);
        }
    }
}
