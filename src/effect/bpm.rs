//! BPM effect
//!
//! Colored stripes pulsing at a fixed tempo, sampled from the party palette.

use super::{Effect, FrameContext};
use crate::{
    color::Rgb,
    math8::{beatsin8, scale8},
    palette::PARTY_PALETTE,
};

const BEATS_PER_MINUTE: u16 = 62;
const BEAT_LOW: u8 = 64;
const BEAT_HIGH: u8 = 255;
/// Palette step between neighbouring pixels
const COLOR_SPREAD: u8 = 2;
/// Brightness step between neighbouring pixels
const BRIGHTNESS_SPREAD: u8 = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct BpmEffect;

impl Effect for BpmEffect {
    fn render(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        let beat = beatsin8(BEATS_PER_MINUTE, BEAT_LOW, BEAT_HIGH, frame.now);

        let mut position = frame.hue;
        let mut brightness = beat.wrapping_sub(frame.hue);
        for led in leds {
            let color = PARTY_PALETTE.sample(position);
            *led = Rgb {
                r: scale8(color.r, brightness),
                g: scale8(color.g, brightness),
                b: scale8(color.b, brightness),
            };
            position = position.wrapping_add(COLOR_SPREAD);
            brightness = brightness.wrapping_add(BRIGHTNESS_SPREAD);
        }
    }
}
