//! Inbound message queue for `no_std` environments.
//!
//! The transport pushes complete text messages together with the connection
//! they came from; the controller loop drains them between frames. Backed by
//! `critical-section` and `heapless::Deque`, so it is safe to fill from an
//! interrupt or another task.

use core::cell::RefCell;

use critical_section::Mutex;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::{Deque, String};

use crate::ConnectionId;

/// Longest accepted message, in bytes
pub const MESSAGE_CAPACITY: usize = 32;

/// Message text did not fit into [`MESSAGE_CAPACITY`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTooLong;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Why a text could not be queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendTextError {
    TooLong,
    Full,
}

/// One text message received from a peer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub connection: ConnectionId,
    pub text: String<MESSAGE_CAPACITY>,
}

impl InboundMessage {
    pub fn new(connection: ConnectionId, text: &str) -> Result<Self, MessageTooLong> {
        let mut buffer = String::new();
        buffer.push_str(text).map_err(|()| MessageTooLong)?;
        Ok(Self {
            connection,
            text: buffer,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// A bounded, interrupt-safe queue of inbound messages.
pub struct MessageChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<InboundMessage, SIZE>>>,
}

impl<const SIZE: usize> MessageChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> MessageSender<'_, SIZE> {
        MessageSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> MessageReceiver<'_, SIZE> {
        MessageReceiver { channel: self }
    }

    /// Returns `Err(TrySendError(message))` if the channel is full.
    pub fn try_send(&self, message: InboundMessage) -> Result<(), TrySendError<InboundMessage>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(message).map_err(TrySendError)
        })
    }

    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<InboundMessage, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued messages
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for MessageChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport-side handle of a [`MessageChannel`].
#[derive(Clone, Copy)]
pub struct MessageSender<'a, const SIZE: usize> {
    channel: &'a MessageChannel<SIZE>,
}

impl<const SIZE: usize> MessageSender<'_, SIZE> {
    pub fn try_send(&self, message: InboundMessage) -> Result<(), TrySendError<InboundMessage>> {
        self.channel.try_send(message)
    }

    /// Copy `text` into a message and queue it
    pub fn try_send_text(&self, connection: ConnectionId, text: &str) -> Result<(), SendTextError> {
        let message =
            InboundMessage::new(connection, text).map_err(|MessageTooLong| SendTextError::TooLong)?;
        self.try_send(message).map_err(|_| {
            #[cfg(feature = "esp32-log")]
            println!("[MessageSender.try_send_text] queue full, dropping message from {:?}", connection);
            SendTextError::Full
        })
    }
}

/// Loop-side handle of a [`MessageChannel`].
#[derive(Clone, Copy)]
pub struct MessageReceiver<'a, const SIZE: usize> {
    channel: &'a MessageChannel<SIZE>,
}

impl<const SIZE: usize> MessageReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<InboundMessage, TryReceiveError> {
        self.channel.try_receive()
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}
