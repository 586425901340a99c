//! Trail effect
//!
//! A single dot sweeping back and forth on a sine path, leaving a fading trail.

use super::{Effect, FrameContext, last_index};
use crate::{
    color::{Hsv, Rgb, add_saturating, fade_to_black_by, hsv2rgb},
    math8::beatsin16,
};

const FADE_AMOUNT: u8 = 20;
const SWEEP_BPM: u16 = 13;
const DOT_VALUE: u8 = 192;

#[derive(Debug, Clone, Copy, Default)]
pub struct TrailEffect;

impl Effect for TrailEffect {
    fn render(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        fade_to_black_by(leds, FADE_AMOUNT);

        let Some(last) = last_index(leds) else {
            return;
        };
        let position = usize::from(beatsin16(SWEEP_BPM, 0, last, frame.now));
        let dot = hsv2rgb(Hsv {
            hue: frame.hue,
            sat: 255,
            val: DOT_VALUE,
        });
        if let Some(led) = leds.get_mut(position) {
            *led = add_saturating(*led, dot);
        }
    }
}
