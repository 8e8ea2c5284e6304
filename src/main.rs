//! control-ship - Actuator Controller over I2C
//!
//! This is the command-line entry point. It parses arguments, sets up
//! logging, resolves the requested command and writes it to the bus.

use anyhow::Context;
use control_ship::config::{target_listing, usage};
use control_ship::{
    describe, exit_code_of, outcome_line, Action, CommandTable, Config, ControlError, Controller,
    DryRunTransport, I2cBus, Transport,
};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    let table = CommandTable::standard();

    // Parse command-line arguments
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprint!("{}", usage(&table));
            return ExitCode::from(e.exit_code());
        }
    };

    // Set up logging
    init_logging(&config);

    match &config.action {
        Action::Help => {
            print!("{}", usage(&table));
            ExitCode::SUCCESS
        }
        Action::Version => {
            println!("{} version {}", control_ship::PROGRAM_NAME, control_ship::VERSION);
            ExitCode::SUCCESS
        }
        Action::List => {
            print!("{}", target_listing(&table));
            ExitCode::SUCCESS
        }
        Action::Send { target, parameter } => match send(&config, target, parameter) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                if let Some(ControlError::Resolve(_)) = e.downcast_ref::<ControlError>() {
                    eprint!("{}", usage(&table));
                }
                ExitCode::from(exit_code_of(&e))
            }
        },
    }
}

/// Writes logs to stderr so stdout only carries the report line.
///
/// `RUST_LOG` overrides the default level.
fn init_logging(config: &Config) {
    let default_level = if config.dry_run { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Resolves the command and writes it to the configured transport.
fn send(config: &Config, target: &str, parameter: &str) -> anyhow::Result<()> {
    let transport: Box<dyn Transport> = if config.dry_run {
        Box::new(DryRunTransport::new())
    } else {
        Box::new(I2cBus::new(config.bus.clone()))
    };
    let transport_name = transport.name();
    let mut controller = Controller::new(transport, config.device_address);

    let command = controller
        .resolve(target, parameter)
        .map_err(ControlError::from)?;
    let report = describe(target, &command);

    let result = controller.send_command(&command);
    println!("{}", outcome_line(&report, &result));

    result.map_err(ControlError::from).with_context(|| {
        format!(
            "writing to device {:#04x} via {}",
            config.device_address, transport_name
        )
    })
}
