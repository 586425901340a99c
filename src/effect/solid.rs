//! Solid color fill
//!
//! Every pixel gets the base hue at full saturation and value.

use super::{Effect, FrameContext};
use crate::color::{Hsv, Rgb, fill_solid, hsv2rgb};

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidEffect;

impl Effect for SolidEffect {
    fn render(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        let color = hsv2rgb(Hsv {
            hue: frame.hue,
            sat: 255,
            val: 255,
        });
        fill_solid(leds, color);
    }
}
