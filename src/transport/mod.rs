//! Transport Module
//!
//! The transport is the only part of control-ship that touches hardware.
//! It takes a device address, a register and a payload and performs one
//! blocking bus write. No read-back, no retries.
//!
//! ## Implementations
//!
//! - [`I2cBus`]: Linux `/dev/i2c-N` via the `I2C_RDWR` ioctl
//! - [`DryRunTransport`]: logs the frame and succeeds, for testing wiring
//!   without a board attached
//!
//! ## Example
//!
//! ```
//! use control_ship::transport::{DryRunTransport, Transport};
//!
//! let mut transport = DryRunTransport::new();
//! transport.write(0x08, 2, &[255]).unwrap();
//! assert_eq!(transport.frames_logged(), 1);
//! ```

pub mod bus;
pub mod dry_run;

use thiserror::Error;

// Re-export commonly used types
pub use bus::{I2cBus, MAX_PAYLOAD_LEN};
pub use dry_run::DryRunTransport;

/// Errors reported by a transport.
///
/// These are surfaced as-is; the caller does not retry.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The bus device node could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The bus transaction failed
    #[error("bus write to device {device_address:#04x} register {register_address} failed: {source}")]
    Bus {
        device_address: u8,
        register_address: u8,
        #[source]
        source: std::io::Error,
    },

    /// The payload does not fit in one bus message
    #[error("payload too large: {len} bytes (max: {max})")]
    PayloadTooLarge { len: usize, max: usize },
}

/// A blocking single-write bus primitive.
pub trait Transport {
    /// Writes `payload` to `register_address` on the device at `device_address`.
    fn write(
        &mut self,
        device_address: u8,
        register_address: u8,
        payload: &[u8],
    ) -> Result<(), TransportError>;

    /// Human-readable name for this transport
    fn name(&self) -> &'static str;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(
        &mut self,
        device_address: u8,
        register_address: u8,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        (**self).write(device_address, register_address, payload)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
