//! Confetti effect
//!
//! Randomly placed specks of hue-jittered color that fade out smoothly.

use super::{Effect, FrameContext};
use crate::{
    color::{Hsv, Rgb, add_saturating, fade_to_black_by, hsv2rgb},
    math8::{DEFAULT_SEED, Random16},
};

const FADE_AMOUNT: u8 = 10;
const HUE_JITTER: u8 = 64;
const SATURATION: u8 = 200;

#[derive(Debug, Clone, Default)]
pub struct ConfettiEffect {
    rng: Random16,
}

impl Effect for ConfettiEffect {
    fn render(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        fade_to_black_by(leds, FADE_AMOUNT);

        let Ok(len) = u16::try_from(leds.len()) else {
            return;
        };
        if len == 0 {
            return;
        }

        let position = usize::from(self.rng.below_u16(len));
        let hue = frame.hue.wrapping_add(self.rng.below_u8(HUE_JITTER));
        let speck = hsv2rgb(Hsv {
            hue,
            sat: SATURATION,
            val: 255,
        });
        if let Some(led) = leds.get_mut(position) {
            *led = add_saturating(*led, speck);
        }
    }

    fn reset(&mut self) {
        self.rng = Random16::new(DEFAULT_SEED);
    }
}
