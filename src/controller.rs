//! Controller loop
//!
//! Ties the inbound queue, the interpreter and the scheduler together around
//! a single [`RuntimeState`]. Everything runs on the caller's thread: each
//! [`LightController::poll`] first handles the messages queued so far, then
//! runs one scheduler tick.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::MessageReceiver;
use crate::clock::ClockMs;
use crate::color::Rgb;
use crate::command::Command;
use crate::effect::EffectId;
use crate::frame_scheduler::{FrameScheduler, TickResult};
use crate::interpreter::CommandInterpreter;
use crate::palette::PaletteBank;
use crate::renderer::Renderer;
use crate::state::{DEFAULT_BRIGHTNESS, DEFAULT_SPEED_MS, RuntimeState};
use crate::{ConnectionId, MessageSink, OutputDriver};

/// Greeting sent to every new connection
pub const CONNECTED_MESSAGE: &str = "Connected";

/// Initial state of the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub effect: EffectId,
    pub speed_ms: u16,
    pub hue: u8,
    pub brightness: u8,
    pub hue_rotation: bool,
    pub palettes: PaletteBank,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            effect: EffectId::Solid,
            speed_ms: DEFAULT_SPEED_MS,
            hue: 0,
            brightness: DEFAULT_BRIGHTNESS,
            hue_rotation: false,
            palettes: PaletteBank::builtin(),
        }
    }
}

/// LED controller - the main orchestrator
pub struct LightController<'a, O: OutputDriver, const LEDS: usize, const QUEUE: usize> {
    inbox: MessageReceiver<'a, QUEUE>,
    interpreter: CommandInterpreter,
    scheduler: FrameScheduler<O, LEDS>,
    state: RuntimeState,
}

impl<'a, O: OutputDriver, const LEDS: usize, const QUEUE: usize>
    LightController<'a, O, LEDS, QUEUE>
{
    /// Create a controller and push the initial brightness to `output`
    pub fn new(inbox: MessageReceiver<'a, QUEUE>, output: O, config: &ControllerConfig) -> Self {
        let state = RuntimeState::from_config(config);
        let renderer = Renderer::new(config.palettes, state.effect());
        let mut scheduler = FrameScheduler::new(renderer, output);
        scheduler.apply_brightness(state.brightness());

        Self {
            inbox,
            interpreter: CommandInterpreter::new(config.palettes),
            scheduler,
            state,
        }
    }

    /// Greet a freshly opened connection
    pub fn on_connect<S: MessageSink>(&mut self, connection: ConnectionId, sink: &mut S) {
        #[cfg(feature = "esp32-log")]
        println!("[LightController.on_connect] connection {:?} opened", connection);
        sink.send(connection, CONNECTED_MESSAGE);
    }

    /// Handle one message right away, bypassing the queue
    pub fn handle_message<S: MessageSink>(
        &mut self,
        connection: ConnectionId,
        message: &[u8],
        now: impl Into<ClockMs>,
        sink: &mut S,
    ) -> Option<Command> {
        let now = now.into();
        let command = self
            .interpreter
            .handle(&mut self.state, connection, message, now, sink)?;

        if let Command::SetBrightness(_) = command {
            self.scheduler.apply_brightness(self.state.brightness());
        }
        Some(command)
    }

    /// One loop iteration: drain the inbox, then tick the scheduler
    ///
    /// Only messages already queued when the call starts are handled, anything
    /// arriving meanwhile waits for the next poll. `now` is a [`ClockMs`] or an
    /// `embassy_time::Instant`.
    pub fn poll<S: MessageSink>(&mut self, now: impl Into<ClockMs>, sink: &mut S) -> TickResult {
        let now = now.into();

        let pending = self.inbox.len();
        for _ in 0..pending {
            let Ok(message) = self.inbox.try_receive() else {
                break;
            };
            self.handle_message(message.connection, message.as_bytes(), now, sink);
        }

        self.scheduler.tick(&mut self.state, now)
    }

    pub fn state(&self) -> &RuntimeState {
        &self.state
    }

    /// Last rendered frame, before brightness
    pub fn frame(&self) -> &[Rgb] {
        self.scheduler.frame()
    }

    pub fn output(&self) -> &O {
        self.scheduler.output()
    }

    pub fn output_mut(&mut self) -> &mut O {
        self.scheduler.output_mut()
    }
}
