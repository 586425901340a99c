//! Command interpreter
//!
//! Turns one inbound message into a state mutation and at most one kind of
//! response. Malformed messages are dropped without a reply; the protocol has
//! no negative acknowledgement.

use core::fmt::Write;

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::String;

use crate::clock::ClockMs;
use crate::command::{Command, EFFECT_NAME_PREFIX};
use crate::effect::EffectId;
use crate::palette::PaletteBank;
use crate::state::RuntimeState;
use crate::{ConnectionId, MessageSink};

/// Capacity of a single response, fits the longest status line
pub const RESPONSE_CAPACITY: usize = 32;

/// Processes client commands against the runtime state
#[derive(Debug, Clone, Copy)]
pub struct CommandInterpreter {
    /// Bank the effect selection rotates through
    palettes: PaletteBank,
}

impl CommandInterpreter {
    pub const fn new(palettes: PaletteBank) -> Self {
        Self { palettes }
    }

    /// Parse and apply one message
    ///
    /// Returns the applied command, `None` if the message was dropped.
    pub fn handle<S: MessageSink>(
        &self,
        state: &mut RuntimeState,
        connection: ConnectionId,
        message: &[u8],
        now: ClockMs,
        sink: &mut S,
    ) -> Option<Command> {
        match Command::parse(message) {
            Ok(command) => {
                self.apply(state, command, connection, now, sink);
                Some(command)
            }
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[CommandInterpreter.handle] dropping message from {:?}: {:?}",
                    connection, _error
                );
                None
            }
        }
    }

    /// Apply an already parsed command
    pub fn apply<S: MessageSink>(
        &self,
        state: &mut RuntimeState,
        command: Command,
        connection: ConnectionId,
        now: ClockMs,
        sink: &mut S,
    ) {
        #[cfg(feature = "esp32-log")]
        println!("[CommandInterpreter.apply] {:?} from {:?}", command, connection);

        match command {
            Command::ListEffects => Self::send_effect_list(connection, sink),
            Command::QueryStatus => Self::send_status(state, connection, now, sink),
            Command::SelectEffect(index) => state.select_effect(index, &self.palettes),
            Command::SetSpeed(speed_ms) => state.set_speed(speed_ms),
            Command::Sleep(delay_ms) => state.set_sleep(now, delay_ms),
            Command::SetHue(hue) => state.set_hue(hue),
            Command::SetBrightness(brightness) => state.set_brightness(brightness),
            Command::ToggleHueRotation => state.toggle_hue_rotation(),
        }
    }

    /// One `*<name>` message per effect, in registry order
    fn send_effect_list<S: MessageSink>(connection: ConnectionId, sink: &mut S) {
        for effect in EffectId::ALL {
            let mut response: String<RESPONSE_CAPACITY> = String::new();
            if write!(response, "{}{}", char::from(EFFECT_NAME_PREFIX), effect.as_str()).is_ok()
            {
                sink.send(connection, &response);
            }
        }
    }

    fn send_status<S: MessageSink>(
        state: &RuntimeState,
        connection: ConnectionId,
        now: ClockMs,
        sink: &mut S,
    ) {
        let mut response: String<RESPONSE_CAPACITY> = String::new();
        if write!(response, "{}", state.status(now)).is_ok() {
            sink.send(connection, &response);
        }
    }
}
