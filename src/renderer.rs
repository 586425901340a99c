use crate::clock::ClockMs;
use crate::color::{BLACK, Rgb};
use crate::effect::{EffectId, EffectSlot, FrameContext};
use crate::palette::PaletteBank;
use crate::state::RuntimeState;

/// Animation engine - owns the pixel buffer and the active effect
///
/// The buffer survives effect switches, so fading effects start from whatever
/// the previous effect left behind.
pub struct Renderer<const LEDS: usize> {
    palettes: PaletteBank,
    current_effect: EffectSlot,
    frame_buffer: [Rgb; LEDS],
}

impl<const LEDS: usize> Renderer<LEDS> {
    pub fn new(palettes: PaletteBank, effect: EffectId) -> Self {
        Self {
            palettes,
            current_effect: effect.to_slot(),
            frame_buffer: [BLACK; LEDS],
        }
    }

    /// Render one frame for the current state
    pub fn render(&mut self, state: &RuntimeState, now: ClockMs) -> &[Rgb] {
        if self.current_effect.id() != state.effect() {
            self.set_effect(state.effect());
        }

        let frame = FrameContext::new(state, &self.palettes, now);
        self.current_effect.render(&frame, &mut self.frame_buffer);

        &self.frame_buffer
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    pub fn effect(&self) -> EffectId {
        self.current_effect.id()
    }

    fn set_effect(&mut self, effect: EffectId) {
        self.current_effect = effect.to_slot();
        self.current_effect.reset();
    }
}
