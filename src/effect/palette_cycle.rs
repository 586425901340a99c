//! Palette cycle effect
//!
//! Scrolls the active palette along the strip by one position per frame.

use super::{Effect, FrameContext};
use crate::color::Rgb;

#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteCycleEffect;

impl Effect for PaletteCycleEffect {
    fn render(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        frame.palettes.rotate(leds, frame.palette, frame.phase);
    }
}
