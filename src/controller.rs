//! Controller
//!
//! Glues the resolver to a transport for one fixed device address. This is
//! what the binary drives; library users who bring their own bus can use it
//! the same way.
//!
//! ## Flow
//!
//! ```text
//! send("rudder", "-40")
//!       │
//!       ▼
//! CommandResolver::resolve ──(ResolveError)──> ControlError::Resolve
//!       │ Command { register: 0, value: 239 }
//!       ▼
//! Transport::write(0x08, 0, [239]) ──(TransportError)──> ControlError::Transport
//! ```
//!
//! Input errors are caught before the transport is touched.

use crate::commands::{CommandResolver, ResolveError};
use crate::protocol::Command;
use crate::transport::{Transport, TransportError};
use thiserror::Error;
use tracing::{info, warn};

/// Every way a single control operation can fail.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The target or parameter was rejected
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The bus write failed
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

impl ControlError {
    /// Process exit status for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ControlError::Resolve(e) => e.exit_code(),
            ControlError::Transport(_) => crate::EXIT_TRANSPORT_FAILURE,
        }
    }
}

/// Resolves commands and writes them to a device.
pub struct Controller<T> {
    resolver: CommandResolver,
    transport: T,
    device_address: u8,
}

impl<T: Transport> Controller<T> {
    /// Creates a controller using the standard target table.
    pub fn new(transport: T, device_address: u8) -> Self {
        Self {
            resolver: CommandResolver::default(),
            transport,
            device_address,
        }
    }

    /// Resolves without sending.
    pub fn resolve(&self, target_name: &str, raw_parameter: &str) -> Result<Command, ResolveError> {
        self.resolver.resolve(target_name, raw_parameter)
    }

    /// Writes an already resolved command to the device.
    pub fn send_command(&mut self, command: &Command) -> Result<(), TransportError> {
        let result = self.transport.write(
            self.device_address,
            command.register_address,
            &command.payload(),
        );

        match &result {
            Ok(()) => info!(
                transport = self.transport.name(),
                register = command.register_address,
                value = command.value,
                "Command written"
            ),
            Err(e) => warn!(
                transport = self.transport.name(),
                register = command.register_address,
                error = %e,
                "Command write failed"
            ),
        }
        result
    }

    /// Resolves a command and writes it to the device.
    ///
    /// Returns the command that was written.
    pub fn send(&mut self, target_name: &str, raw_parameter: &str) -> Result<Command, ControlError> {
        let command = self.resolve(target_name, raw_parameter)?;
        self.send_command(&command)?;
        Ok(command)
    }
}

/// Renders the human-readable report for a resolved command.
///
/// # Example
/// ```
/// use control_ship::{describe, protocol::Command};
/// assert_eq!(
///     describe("throttle", &Command::new(2, 255)),
///     "control-ship(Target: throttle(ch. 2), Parameter: 255)"
/// );
/// ```
pub fn describe(target_name: &str, command: &Command) -> String {
    format!(
        "{}(Target: {}(ch. {}), Parameter: {})",
        crate::PROGRAM_NAME,
        target_name,
        command.register_address,
        command.value
    )
}

/// The stdout line reporting whether a command reached the bus.
///
/// A failed write carries the transport error after the report.
pub fn outcome_line(report: &str, result: &Result<(), TransportError>) -> String {
    match result {
        Ok(()) => format!("Command '{}' is sent.", report),
        Err(e) => format!("Command '{}' failed to send: {}", report, e),
    }
}

/// Maps an error bubbled up to the binary onto a process exit status.
///
/// Context layers added with `anyhow` are looked through. Anything that is
/// not a [`ControlError`] is a usage problem.
pub fn exit_code_of(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ControlError>()
        .map_or(crate::EXIT_USAGE, ControlError::exit_code)
}
