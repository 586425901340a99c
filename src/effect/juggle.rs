//! Juggle effect
//!
//! Eight colored dots weaving in and out of sync with each other.

use super::{Effect, FrameContext, last_index};
use crate::{
    color::{Hsv, Rgb, fade_to_black_by, hsv2rgb, or_max},
    math8::beatsin16,
};

const FADE_AMOUNT: u8 = 20;
const DOT_COUNT: u8 = 8;
/// Hue distance between dots, 1/8 of the color wheel
const DOT_HUE_STEP: u8 = 32;
/// The slowest dot runs at this rate, each next one one bpm faster
const BASE_BPM: u16 = 7;
const SATURATION: u8 = 200;

#[derive(Debug, Clone, Copy, Default)]
pub struct JuggleEffect;

impl Effect for JuggleEffect {
    fn render(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        fade_to_black_by(leds, FADE_AMOUNT);

        let Some(last) = last_index(leds) else {
            return;
        };
        let mut dot_hue: u8 = 0;
        for dot in 0..DOT_COUNT {
            let bpm = BASE_BPM + u16::from(dot);
            let position = usize::from(beatsin16(bpm, 0, last, frame.now));
            let color = hsv2rgb(Hsv {
                hue: dot_hue,
                sat: SATURATION,
                val: 255,
            });
            if let Some(led) = leds.get_mut(position) {
                *led = or_max(*led, color);
            }
            dot_hue = dot_hue.wrapping_add(DOT_HUE_STEP);
        }
    }
}
