//! Command Record and Bus Frame Layout
//!
//! A [`Command`] is the fully resolved instruction for the actuator board:
//! which register to write and the single byte to put there.
//!
//! ## Frame Format
//!
//! One bus write carries the register address followed by the payload:
//!
//! ```text
//! ┌──────────────┬──────────────┐
//! │ register (1) │  value (1)   │
//! └──────────────┴──────────────┘
//! ```
//!
//! The device address is not part of the frame; the bus adds it.

use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;

/// Length of a command frame in bytes (register + value)
pub const FRAME_LEN: usize = 2;

/// A resolved register write.
///
/// Created by the resolver, handed to a transport, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    /// Destination register on the device
    pub register_address: u8,

    /// Encoded output value
    pub value: u8,
}

impl Command {
    /// Creates a new command.
    pub fn new(register_address: u8, value: u8) -> Self {
        Self {
            register_address,
            value,
        }
    }

    /// The payload handed to the transport (always exactly one byte).
    pub fn payload(&self) -> [u8; 1] {
        [self.value]
    }

    /// Builds the on-bus frame for this command.
    ///
    /// # Example
    /// ```
    /// use control_ship::protocol::Command;
    /// let frame = Command::new(2, 255).frame();
    /// assert_eq!(&frame[..], &[2, 255]);
    /// ```
    pub fn frame(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_LEN);
        self.frame_into(&mut buf);
        buf.freeze()
    }

    /// Appends the frame to an existing buffer.
    pub fn frame_into(&self, buf: &mut BytesMut) {
        build_frame(self.register_address, &self.payload(), buf);
    }
}

/// Appends one bus write frame, `[register, payload...]`, to `buf`.
///
/// Every transport builds what it puts on the bus through here.
pub fn build_frame(register_address: u8, payload: &[u8], buf: &mut BytesMut) {
    buf.reserve(payload.len() + 1);
    buf.put_u8(register_address);
    buf.put_slice(payload);
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ch. {} <- {}", self.register_address, self.value)
    }
}
