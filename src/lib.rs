#![no_std]

pub mod channel;
pub mod clock;
pub mod color;
pub mod command;
pub mod controller;
pub mod effect;
pub mod filter;
pub mod frame_scheduler;
pub mod interpreter;
pub mod math8;
pub mod palette;
pub mod renderer;
pub mod state;

pub use channel::{InboundMessage, MessageChannel, MessageReceiver, MessageSender};
pub use clock::ClockMs;
pub use command::{Command, ParseError};
pub use controller::{ControllerConfig, LightController};
pub use effect::{EffectId, EffectSlot};
pub use filter::DimmedOutput;
pub use frame_scheduler::{FrameScheduler, TickResult};
pub use interpreter::CommandInterpreter;
pub use palette::PaletteBank;
pub use renderer::Renderer;
pub use state::{RuntimeState, StatusSnapshot};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Set the global brightness applied to every following write
    fn set_brightness(&mut self, brightness: u8);
}

/// Opaque number of a peer connection, assigned by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub u8);

/// Outgoing side of the transport
pub trait MessageSink {
    /// Send one text message to `connection`
    fn send(&mut self, connection: ConnectionId, message: &str);
}
