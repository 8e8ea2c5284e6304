//! Command-line Configuration
//!
//! ```text
//! control-ship [OPTIONS] <target> <parameter>
//! ```
//!
//! Options may appear anywhere. A token that looks like a negative number is
//! a positional, so `control-ship rudder -40` works without `--`.

use crate::commands::CommandTable;
use std::path::PathBuf;
use thiserror::Error;

/// Errors in the command line itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Expected exactly a target and a parameter
    #[error("expected <target> <parameter>, got {0} argument(s)")]
    WrongArgumentCount(usize),

    /// An option that needs a value was last on the line
    #[error("{0} requires a value")]
    MissingValue(String),

    /// Unrecognized option
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// The device address is not a 7-bit bus address
    #[error("invalid device address: {0}")]
    InvalidAddress(String),
}

impl ConfigError {
    pub fn exit_code(&self) -> u8 {
        crate::EXIT_USAGE
    }
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Resolve and write one command
    Send { target: String, parameter: String },
    /// Print the target table
    List,
    /// Print usage
    Help,
    /// Print version
    Version,
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// I2C bus device node
    pub bus: PathBuf,
    /// 7-bit address of the actuator board
    pub device_address: u8,
    /// Log frames instead of writing them
    pub dry_run: bool,
    pub action: Action,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bus: PathBuf::from(crate::DEFAULT_BUS),
            device_address: crate::DEFAULT_DEVICE_ADDRESS,
            dry_run: false,
            action: Action::Help,
        }
    }
}

impl Config {
    /// Parses configuration from command-line arguments (without the
    /// program name).
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut config = Config::default();
        let mut positionals: Vec<String> = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            if !is_option(arg) {
                positionals.push(arg.to_string());
                i += 1;
                continue;
            }

            match arg {
                "--" => {
                    positionals.extend(args[i + 1..].iter().cloned());
                    break;
                }
                "--bus" | "-b" => {
                    config.bus = PathBuf::from(option_value(&args, i)?);
                    i += 2;
                }
                "--address" | "-a" => {
                    config.device_address = parse_address(option_value(&args, i)?)?;
                    i += 2;
                }
                "--dry-run" | "-n" => {
                    config.dry_run = true;
                    i += 1;
                }
                "--list" | "-l" => {
                    config.action = Action::List;
                    return Ok(config);
                }
                "--help" | "-h" => {
                    config.action = Action::Help;
                    return Ok(config);
                }
                "--version" | "-v" => {
                    config.action = Action::Version;
                    return Ok(config);
                }
                _ => return Err(ConfigError::UnknownOption(arg.to_string())),
            }
        }

        if positionals.len() != 2 {
            return Err(ConfigError::WrongArgumentCount(positionals.len()));
        }
        let parameter = positionals.pop().unwrap_or_default();
        let target = positionals.pop().unwrap_or_default();
        config.action = Action::Send { target, parameter };
        Ok(config)
    }
}

/// Options start with `-` but negative numbers and a lone `-` do not.
fn is_option(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) => !rest.is_empty() && !rest.starts_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}

fn option_value(args: &[String], i: usize) -> Result<&str, ConfigError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue(args[i].clone()))
}

/// Parses a 7-bit device address, decimal or `0x`-prefixed hex.
pub fn parse_address(text: &str) -> Result<u8, ConfigError> {
    let parsed = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => text.parse::<u8>(),
    };

    match parsed {
        Ok(addr) if addr <= 0x7F => Ok(addr),
        _ => Err(ConfigError::InvalidAddress(text.to_string())),
    }
}

/// Builds the usage text, listing every target in the table.
pub fn usage(table: &CommandTable) -> String {
    let parameters: String = table
        .iter()
        .map(|entry| format!("       {}: {}\n", entry.name, entry.usage))
        .collect();

    format!(
        r#"Usage:
{program} [OPTIONS] <target> <parameter>
   target: {targets}
   parameter:
{parameters}
OPTIONS:
    -b, --bus <PATH>        I2C bus device node (default: {bus})
    -a, --address <ADDR>    Device address, decimal or 0x-hex (default: {address:#04x})
    -n, --dry-run           Log the bus frame instead of writing it
    -l, --list              List targets, registers and ranges
    -v, --version           Print version information
    -h, --help              Print this help message
"#,
        program = crate::PROGRAM_NAME,
        targets = table.names().join(", "),
        parameters = parameters,
        bus = crate::DEFAULT_BUS,
        address = crate::DEFAULT_DEVICE_ADDRESS,
    )
}

/// Builds the `--list` table.
pub fn target_listing(table: &CommandTable) -> String {
    let header = format!("{:<10} {:>8} {:>6} {:>6}\n", "TARGET", "REGISTER", "MIN", "MAX");
    let rows = table.iter().map(|entry| {
        format!(
            "{:<10} {:>8} {:>6} {:>6}\n",
            entry.name, entry.register_address, entry.parameter_min, entry.parameter_max
        )
    });
    std::iter::once(header).chain(rows).collect()
}
