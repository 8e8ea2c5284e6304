//! # control-ship - Actuator Controller over I2C
//!
//! control-ship turns a human-readable `target parameter` pair such as
//! `rudder -15` into a single register write on the boat's actuator board.
//!
//! ## Features
//!
//! - **Table-driven**: Every target is one static descriptor (register,
//!   range, transfer function)
//! - **Strict input**: Parameters must be complete base-10 integers inside
//!   the target's inclusive range
//! - **Calibrated encoding**: Transfer functions reproduce the board's
//!   single-precision, truncating arithmetic exactly
//! - **Pluggable transport**: Linux i2c-dev in production, dry-run for bench
//!   work, anything implementing [`Transport`] in tests
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         control-ship                            │
//! │                                                                 │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────────────┐  │
//! │  │   Config    │───>│ Controller  │───>│     Transport       │  │
//! │  │ (argv)      │    │             │    │ I2cBus / DryRun     │  │
//! │  └─────────────┘    └──────┬──────┘    └─────────────────────┘  │
//! │                            │                                    │
//! │                            ▼                                    │
//! │                   ┌─────────────────┐    ┌─────────────────┐    │
//! │                   │ CommandResolver │───>│  CommandTable   │    │
//! │                   └─────────────────┘    └─────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use control_ship::{Controller, DryRunTransport, DEFAULT_DEVICE_ADDRESS};
//!
//! let mut controller = Controller::new(DryRunTransport::new(), DEFAULT_DEVICE_ADDRESS);
//! let command = controller.send("rudder", "-40").unwrap();
//! assert_eq!((command.register_address, command.value), (0, 239));
//! ```
//!
//! ## Supported Targets
//!
//! - `shift` (register 1): `-1` astern, `0` neutral, `1` ahead
//! - `throttle` (register 2): `0` to `100` percent
//! - `rudder` (register 0): `-40` to `40` degrees, positive to starboard
//!
//! ## Exit Status
//!
//! | status | meaning              |
//! |--------|----------------------|
//! | 0      | command written      |
//! | 1      | usage error          |
//! | 2      | unknown target       |
//! | 3      | invalid parameter    |
//! | 4      | parameter out of range |
//! | 5      | transport failure    |
//!
//! ## Module Overview
//!
//! - [`commands`]: Target table and resolver
//! - [`protocol`]: Command record, bus frame and parameter parsing
//! - [`transport`]: Bus write primitive and its implementations
//! - [`controller`]: Resolver + transport for one device
//! - [`config`]: Command-line parsing and usage text

pub mod commands;
pub mod config;
pub mod controller;
pub mod protocol;
pub mod transport;

// Re-export commonly used types for convenience
pub use commands::{resolve_and_format, CommandResolver, CommandTable, ResolveError};
pub use config::{Action, Config, ConfigError};
pub use controller::{describe, exit_code_of, outcome_line, ControlError, Controller};
pub use protocol::{Command, ParseError};
pub use transport::{DryRunTransport, I2cBus, Transport, TransportError};

/// Name used in usage and report output
pub const PROGRAM_NAME: &str = "control-ship";

/// The bus address of the actuator board
pub const DEFAULT_DEVICE_ADDRESS: u8 = 0x08;

/// The bus the actuator board is wired to
pub const DEFAULT_BUS: &str = "/dev/i2c-1";

/// Exit status for command-line usage errors
pub const EXIT_USAGE: u8 = 1;

/// Exit status when the target name is not in the table
pub const EXIT_UNKNOWN_TARGET: u8 = 2;

/// Exit status when the parameter is not an integer
pub const EXIT_INVALID_PARAMETER: u8 = 3;

/// Exit status when the parameter is outside the target's range
pub const EXIT_OUT_OF_RANGE: u8 = 4;

/// Exit status when the bus write fails
pub const EXIT_TRANSPORT_FAILURE: u8 = 5;

/// Version of control-ship
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
