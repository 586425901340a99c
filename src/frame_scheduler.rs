//! Cooperative frame scheduling
//!
//! One non-blocking [`FrameScheduler::tick`] drives three independent timers:
//! the sleep blackout, the frame gate and the hue rotation. Each compares
//! timestamps with wrapping subtraction, so the schedule keeps working when
//! the millisecond clock overflows. The caller polls as often as it can;
//! timer resolution is bounded by the polling rate.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::ClockMs;
use crate::color::Rgb;
use crate::renderer::Renderer;
use crate::state::RuntimeState;
use crate::OutputDriver;

/// Hue advances by one every this many ms while rotation is on
pub const HUE_STEP_INTERVAL_MS: u32 = 50;

/// Window after the sleep deadline in which the blackout still fires.
///
/// A poll that arrives later than this misses the deadline and the sleep stays
/// pending. Changing it changes observable behavior.
pub const SLEEP_TOLERANCE_MS: u32 = 50;

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// The sleep deadline fired and brightness was forced to zero
    pub slept: bool,
    /// A frame was rendered and pushed to the output
    pub rendered: bool,
    /// Number of hue steps applied
    pub hue_steps: u32,
}

/// Portable scheduler that renders frames and runs the state timers.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let now = ClockMs::from(Instant::now());
///     scheduler.tick(&mut state, now);
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, const LEDS: usize> {
    output: O,
    renderer: Renderer<LEDS>,
    /// Start of the current hue step, `None` while rotation is off
    hue_anchor: Option<ClockMs>,
}

impl<O: OutputDriver, const LEDS: usize> FrameScheduler<O, LEDS> {
    pub fn new(renderer: Renderer<LEDS>, output: O) -> Self {
        Self {
            output,
            renderer,
            hue_anchor: None,
        }
    }

    /// Run one scheduling step. Never blocks.
    ///
    /// 1. Fires the one-shot sleep blackout
    /// 2. Renders and pushes a frame once the effect speed has elapsed
    /// 3. Advances the hue on its own cadence
    pub fn tick(&mut self, state: &mut RuntimeState, now: ClockMs) -> TickResult {
        let slept = self.check_sleep(state, now);
        let rendered = self.render_due_frame(state, now);
        let hue_steps = self.rotate_hue(state, now);

        TickResult {
            slept,
            rendered,
            hue_steps,
        }
    }

    /// Push a new global brightness to the output
    pub fn apply_brightness(&mut self, brightness: u8) {
        self.output.set_brightness(brightness);
    }

    pub fn frame(&self) -> &[Rgb] {
        self.renderer.frame()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn check_sleep(&mut self, state: &mut RuntimeState, now: ClockMs) -> bool {
        let Some(deadline) = state.sleep_deadline() else {
            return false;
        };
        if !now.is_within(deadline, SLEEP_TOLERANCE_MS) {
            return false;
        }

        #[cfg(feature = "esp32-log")]
        println!("[FrameScheduler.tick] sleep deadline reached, blacking out");
        state.fall_asleep();
        self.output.set_brightness(0);
        true
    }

    fn render_due_frame(&mut self, state: &mut RuntimeState, now: ClockMs) -> bool {
        if !now.has_elapsed(state.last_render(), u32::from(state.speed_ms())) {
            return false;
        }

        let frame = self.renderer.render(state, now);
        self.output.write(frame);
        state.finish_frame(now);
        true
    }

    fn rotate_hue(&mut self, state: &mut RuntimeState, now: ClockMs) -> u32 {
        if !state.hue_rotation() {
            self.hue_anchor = None;
            return 0;
        }
        let Some(anchor) = self.hue_anchor else {
            self.hue_anchor = Some(now);
            return 0;
        };

        let steps = now.elapsed_since(anchor) / HUE_STEP_INTERVAL_MS;
        if steps > 0 {
            state.advance_hue(steps);
            self.hue_anchor = Some(anchor.offset(steps * HUE_STEP_INTERVAL_MS));
        }
        steps
    }
}
