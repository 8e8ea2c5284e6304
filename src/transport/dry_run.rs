//! Dry-run transport: logs what would go on the bus instead of sending it.

use crate::protocol::build_frame;
use crate::transport::{Transport, TransportError};
use bytes::{Bytes, BytesMut};
use tracing::info;

/// A transport that never touches hardware.
#[derive(Debug, Default)]
pub struct DryRunTransport {
    frames_logged: u64,
    /// The most recent frame, exactly as a bus would have carried it
    last_frame: Option<Bytes>,
}

impl DryRunTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes seen so far.
    pub fn frames_logged(&self) -> u64 {
        self.frames_logged
    }

    pub fn last_frame(&self) -> Option<&Bytes> {
        self.last_frame.as_ref()
    }
}

impl Transport for DryRunTransport {
    fn write(
        &mut self,
        device_address: u8,
        register_address: u8,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        let mut frame = BytesMut::new();
        build_frame(register_address, payload, &mut frame);

        info!(
            device = %format!("{:#04x}", device_address),
            frame = ?&frame[..],
            "Dry run, not writing to bus"
        );
        self.frames_logged += 1;
        self.last_frame = Some(frame.freeze());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Command;

    #[test]
    fn test_dry_run_always_succeeds() {
        let mut transport = DryRunTransport::new();
        assert!(transport.write(0x08, 0, &[127]).is_ok());
        assert!(transport.write(0x08, 1, &[76]).is_ok());
        assert_eq!(transport.frames_logged(), 2);
        assert_eq!(transport.name(), "dry-run");
    }

    #[test]
    fn test_logged_frame_matches_command_frame() {
        let mut transport = DryRunTransport::new();
        assert!(transport.last_frame().is_none());

        let cmd = Command::new(0, 239);
        transport
            .write(0x08, cmd.register_address, &cmd.payload())
            .unwrap();
        assert_eq!(transport.last_frame(), Some(&cmd.frame()));
    }
}
