//! I2C Bus Transport
//!
//! Writes a register frame to a device on a Linux `/dev/i2c-N` bus using a
//! single `I2C_RDWR` message. The device node is opened for each write and
//! closed again when the write returns, so no handle outlives one command.
//!
//! ## Transaction
//!
//! ```text
//! open(/dev/i2c-1)
//!     │
//!     ▼
//! ioctl(I2C_RDWR, [ addr=0x08, flags=0, buf=[register, payload...] ])
//!     │
//!     ▼
//! close
//! ```

use crate::protocol::build_frame;
use crate::transport::{Transport, TransportError};
use bytes::BytesMut;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Largest payload a single i2c message can carry after the register byte
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize - 1;

/// A Linux i2c-dev bus.
#[derive(Debug, Clone)]
pub struct I2cBus {
    /// Path of the bus device node
    path: PathBuf,
}

impl I2cBus {
    /// Creates a bus handle for the given device node.
    ///
    /// Nothing is opened until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The device node this bus writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for I2cBus {
    fn write(
        &mut self,
        device_address: u8,
        register_address: u8,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(TransportError::PayloadTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        let mut frame = BytesMut::new();
        build_frame(register_address, payload, &mut frame);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|source| TransportError::Open {
                path: self.path.display().to_string(),
                source,
            })?;
        debug!(bus = %self.path.display(), "Opened bus");

        sys::write_message(&file, device_address, &mut frame).map_err(|source| {
            TransportError::Bus {
                device_address,
                register_address,
                source,
            }
        })?;

        trace!(
            device = device_address,
            register = register_address,
            bytes = frame.len(),
            "Bus write complete"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "i2c"
    }
}

#[cfg(target_os = "linux")]
mod sys {
    use std::fs::File;
    use std::io;
    use std::os::unix::io::AsRawFd;

    /// From linux/i2c-dev.h
    const I2C_RDWR: u32 = 0x0707;

    /// `struct i2c_msg` from linux/i2c.h
    #[repr(C)]
    struct I2cMsg {
        addr: u16,
        flags: u16,
        len: u16,
        buf: *mut u8,
    }

    /// `struct i2c_rdwr_ioctl_data` from linux/i2c-dev.h
    #[repr(C)]
    struct I2cRdwrIoctlData {
        msgs: *mut I2cMsg,
        nmsgs: u32,
    }

    /// Sends `frame` to `device_address` as one write message.
    pub(super) fn write_message(file: &File, device_address: u8, frame: &mut [u8]) -> io::Result<()> {
        let mut message = I2cMsg {
            addr: u16::from(device_address),
            flags: 0,
            // Length is bounded by MAX_PAYLOAD_LEN + 1.
            len: frame.len() as u16,
            buf: frame.as_mut_ptr(),
        };
        let mut data = I2cRdwrIoctlData {
            msgs: &mut message,
            nmsgs: 1,
        };

        // SAFETY: `message` points into `frame`, and both `message` and `data`
        // outlive the call. The kernel only reads `len` bytes from `buf`.
        let sent = unsafe {
            libc::ioctl(
                file.as_raw_fd(),
                I2C_RDWR as _,
                &mut data as *mut I2cRdwrIoctlData,
            )
        };
        match sent {
            1 => Ok(()),
            -1 => Err(io::Error::last_os_error()),
            n => Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("bus transferred {} of 1 messages", n),
            )),
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod sys {
    use std::fs::File;
    use std::io;

    pub(super) fn write_message(_file: &File, _device_address: u8, _frame: &mut [u8]) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "i2c-dev is only available on Linux",
        ))
    }
}
