//! Rainbow effect
//!
//! Hue ramp anchored at the frame phase, so the rainbow scrolls one hue step
//! per rendered frame.

use super::{Effect, FrameContext};
use crate::color::{Rgb, fill_rainbow};

/// Hue difference between neighbouring pixels
const HUE_DELTA: u8 = 7;

#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowEffect;

impl Effect for RainbowEffect {
    fn render(&mut self, frame: &FrameContext<'_>, leds: &mut [Rgb]) {
        fill_rainbow(leds, frame.phase, HUE_DELTA);
    }
}
