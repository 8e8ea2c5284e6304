//! Command Resolver
//!
//! Turns a `(target, parameter text)` pair into a validated [`Command`].
//!
//! ## Resolution Steps
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  lookup  │───>│  parse   │───>│  range   │───>│  encode  │───> Command
//! └────┬─────┘    └────┬─────┘    └────┬─────┘    └──────────┘
//!      │               │               │
//!      ▼               ▼               ▼
//! UnknownTarget  InvalidParameter  ParameterOutOfRange
//! ```
//!
//! Each call is independent. Nothing is cached between calls and a failure
//! never leaves anything half-built behind.

use crate::commands::table::{CommandTable, TargetDescriptor};
use crate::protocol::{parse_parameter, Command, ParseError};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while resolving a command.
///
/// All of them are caller input errors; retrying with the same input
/// gives the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No target with this name exists
    #[error("unknown target '{0}'")]
    UnknownTarget(String),

    /// The parameter text is not a base-10 integer
    #[error("invalid parameter for {target}: {source}")]
    InvalidParameter {
        target: &'static str,
        #[source]
        source: ParseError,
    },

    /// The parameter parsed but is outside the target's range
    #[error("parameter {value} for {target} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        target: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ResolveError {
    /// Process exit status for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ResolveError::UnknownTarget(_) => crate::EXIT_UNKNOWN_TARGET,
            ResolveError::InvalidParameter { .. } => crate::EXIT_INVALID_PARAMETER,
            ResolveError::ParameterOutOfRange { .. } => crate::EXIT_OUT_OF_RANGE,
        }
    }
}

/// Resolves symbolic commands against a [`CommandTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandResolver {
    table: CommandTable,
}

impl CommandResolver {
    /// Creates a resolver over the given table.
    pub fn new(table: CommandTable) -> Self {
        Self { table }
    }

    /// The table this resolver looks targets up in.
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Resolves a target name and raw parameter into a command.
    ///
    /// # Arguments
    ///
    /// * `target_name` - Exact, case-sensitive target name
    /// * `raw_parameter` - Parameter text as typed by the user
    ///
    /// # Example
    ///
    /// ```
    /// use control_ship::commands::CommandResolver;
    ///
    /// let resolver = CommandResolver::default();
    /// let cmd = resolver.resolve("throttle", "100").unwrap();
    /// assert_eq!((cmd.register_address, cmd.value), (2, 255));
    /// ```
    pub fn resolve(&self, target_name: &str, raw_parameter: &str) -> Result<Command, ResolveError> {
        let descriptor = self
            .table
            .find_by_name(target_name)
            .ok_or_else(|| ResolveError::UnknownTarget(target_name.to_string()))?;

        let param = parse_parameter(raw_parameter).map_err(|source| {
            ResolveError::InvalidParameter {
                target: descriptor.name,
                source,
            }
        })?;

        let command = encode_checked(descriptor, param)?;
        debug!(
            target_name = descriptor.name,
            param,
            register = command.register_address,
            value = command.value,
            "Resolved command"
        );
        Ok(command)
    }

    /// Logical entry point for drivers; identical to [`resolve`](Self::resolve).
    pub fn resolve_and_format(
        &self,
        target_name: &str,
        raw_parameter: &str,
    ) -> Result<Command, ResolveError> {
        self.resolve(target_name, raw_parameter)
    }
}

/// Range-checks a parsed parameter and encodes it.
fn encode_checked(descriptor: &TargetDescriptor, param: i64) -> Result<Command, ResolveError> {
    if !descriptor.accepts(param) {
        trace!(target_name = descriptor.name, param, "Parameter rejected");
        return Err(ResolveError::ParameterOutOfRange {
            target: descriptor.name,
            value: param,
            min: descriptor.parameter_min,
            max: descriptor.parameter_max,
        });
    }

    Ok(Command::new(descriptor.register_address, descriptor.encode(param)))
}

/// Resolves against the standard table.
///
/// This is a convenience function for simple use cases.
pub fn resolve_and_format(target_name: &str, raw_parameter: &str) -> Result<Command, ResolveError> {
    CommandResolver::default().resolve(target_name, raw_parameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(target: &str, raw: &str) -> Result<Command, ResolveError> {
        CommandResolver::default().resolve(target, raw)
    }

    #[test]
    fn test_shift_values() {
        assert_eq!(resolve("shift", "0"), Ok(Command::new(1, 127)));
        assert_eq!(resolve("shift", "1"), Ok(Command::new(1, 178)));
        assert_eq!(resolve("shift", "-1"), Ok(Command::new(1, 76)));
    }

    #[test]
    fn test_throttle_values() {
        assert_eq!(resolve("throttle", "100"), Ok(Command::new(2, 255)));
        assert_eq!(resolve("throttle", "0"), Ok(Command::new(2, 0)));
        assert_eq!(resolve("throttle", "50"), Ok(Command::new(2, 127)));
    }

    #[test]
    fn test_rudder_values() {
        assert_eq!(resolve("rudder", "0"), Ok(Command::new(0, 127)));
        assert_eq!(resolve("rudder", "40"), Ok(Command::new(0, 15)));
        assert_eq!(resolve("rudder", "-40"), Ok(Command::new(0, 239)));
    }

    #[test]
    fn test_every_valid_parameter() {
        for p in -1..=1i64 {
            let expected = match p {
                0 => 127,
                1 => 178,
                _ => 76,
            };
            assert_eq!(resolve("shift", &p.to_string()), Ok(Command::new(1, expected)));
        }
        for p in 0..=100i64 {
            let expected = (255 * p / 100) as u8;
            assert_eq!(
                resolve("throttle", &p.to_string()),
                Ok(Command::new(2, expected)),
                "throttle {}",
                p
            );
        }
        for p in -40..=40i64 {
            let expected = (255 * (500 - p * 11) / 1000) as u8;
            assert_eq!(
                resolve("rudder", &p.to_string()),
                Ok(Command::new(0, expected)),
                "rudder {}",
                p
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            resolve("throttle", "101"),
            Err(ResolveError::ParameterOutOfRange {
                target: "throttle",
                value: 101,
                min: 0,
                max: 100
            })
        );
        assert!(matches!(
            resolve("rudder", "41"),
            Err(ResolveError::ParameterOutOfRange { value: 41, .. })
        ));
        assert!(matches!(
            resolve("rudder", "-41"),
            Err(ResolveError::ParameterOutOfRange { value: -41, .. })
        ));
        assert!(matches!(
            resolve("shift", "2"),
            Err(ResolveError::ParameterOutOfRange { value: 2, .. })
        ));
        assert!(matches!(
            resolve("throttle", "-1"),
            Err(ResolveError::ParameterOutOfRange { .. })
        ));
    }

    #[test]
    fn test_unknown_target() {
        assert_eq!(
            resolve("sail", "0"),
            Err(ResolveError::UnknownTarget("sail".to_string()))
        );
    }

    #[test]
    fn test_unknown_target_checked_before_parameter() {
        assert!(matches!(
            resolve("sail", "abc"),
            Err(ResolveError::UnknownTarget(_))
        ));
    }

    #[test]
    fn test_invalid_parameter() {
        assert_eq!(
            resolve("throttle", "abc"),
            Err(ResolveError::InvalidParameter {
                target: "throttle",
                source: ParseError::InvalidDigit("abc".to_string())
            })
        );
        assert!(matches!(
            resolve("throttle", "12x"),
            Err(ResolveError::InvalidParameter { .. })
        ));
        assert_eq!(
            resolve("throttle", ""),
            Err(ResolveError::InvalidParameter {
                target: "throttle",
                source: ParseError::Empty
            })
        );
    }

    #[test]
    fn test_overflow_is_invalid_not_out_of_range() {
        assert!(matches!(
            resolve("rudder", "99999999999999999999"),
            Err(ResolveError::InvalidParameter {
                source: ParseError::Overflow(_),
                ..
            })
        ));
    }

    #[test]
    fn test_idempotent() {
        let resolver = CommandResolver::default();
        for (target, raw) in [("shift", "1"), ("throttle", "37"), ("rudder", "-12")] {
            assert_eq!(resolver.resolve(target, raw), resolver.resolve(target, raw));
        }
        assert_eq!(resolver.resolve("sail", "1"), resolver.resolve("sail", "1"));
    }

    #[test]
    fn test_free_function_matches_resolver() {
        assert_eq!(resolve_and_format("rudder", "10"), resolve("rudder", "10"));
        assert_eq!(
            CommandResolver::default().resolve_and_format("shift", "-1"),
            Ok(Command::new(1, 76))
        );
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            resolve("sail", "0").unwrap_err().exit_code(),
            resolve("throttle", "x").unwrap_err().exit_code(),
            resolve("throttle", "101").unwrap_err().exit_code(),
        ];
        assert_eq!(codes, [2, 3, 4]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            resolve("sail", "0").unwrap_err().to_string(),
            "unknown target 'sail'"
        );
        assert_eq!(
            resolve("rudder", "41").unwrap_err().to_string(),
            "parameter 41 for rudder is out of range [-40, 40]"
        );
    }
}
