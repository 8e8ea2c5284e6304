//! Command Table
//!
//! The fixed registry of actuator targets the board understands. Each entry
//! ties a symbolic name to a register address, an inclusive parameter range
//! and a transfer function that turns the human-scale parameter into the byte
//! written to the register.
//!
//! ## Targets
//!
//! | name       | register | range      | encoding                              |
//! |------------|----------|------------|---------------------------------------|
//! | `shift`    | 1        | -1 ..= 1   | 127 neutral, 178 ahead, 76 astern     |
//! | `throttle` | 2        | 0 ..= 100  | `0xFF * param / 100`                  |
//! | `rudder`   | 0        | -40 ..= 40 | `0xFF * (500 - param * 11) / 1000`    |
//!
//! These names and ranges are the external contract of the tool.
//!
//! ## Numeric Semantics
//!
//! The boards were calibrated against single-precision arithmetic with
//! truncation toward zero. The integer product is formed first, the division
//! happens in `f32`, and the cast to `u8` truncates. Keep that order.

use thiserror::Error;

/// Full-scale output value
const FULL_SCALE: i64 = 0xFF;

/// The closed set of actuator kinds, each with its own transfer function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Three-position shift lever (astern, neutral, ahead)
    Shift,
    /// Engine output power in percent
    Throttle,
    /// Rudder angle in degrees, positive to starboard
    Rudder,
}

impl Target {
    /// Encodes an already validated parameter into the register value.
    ///
    /// Callers are expected to range-check first; out-of-range input is
    /// still deterministic (clamped to 0 or 255) but meaningless to the device.
    pub fn encode(self, param: i64) -> u8 {
        match self {
            // Only the sign matters: the lever has three physical positions.
            Target::Shift => match param.signum() {
                0 => (FULL_SCALE / 2) as u8,
                1 => (FULL_SCALE as f32 * 0.7_f32) as u8,
                _ => (FULL_SCALE as f32 * 0.3_f32) as u8,
            },
            // Saturating steps leave every in-range result unchanged and pin
            // the rest to 0 or 255 instead of overflowing.
            Target::Throttle => (FULL_SCALE.saturating_mul(param) as f32 / 100.0_f32) as u8,
            Target::Rudder => {
                let offset = 500_i64.saturating_sub(param.saturating_mul(11));
                (FULL_SCALE.saturating_mul(offset) as f32 / 1000.0_f32) as u8
            }
        }
    }
}

/// Static description of one supported target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Symbolic name used on the command line
    pub name: &'static str,

    /// Destination register on the device
    pub register_address: u8,

    /// Smallest accepted parameter (inclusive)
    pub parameter_min: i64,

    /// Largest accepted parameter (inclusive)
    pub parameter_max: i64,

    /// Transfer function selector
    pub target: Target,

    /// One-line description of the parameter for usage output
    pub usage: &'static str,
}

impl TargetDescriptor {
    /// Returns true if `param` is inside the inclusive range.
    pub fn accepts(&self, param: i64) -> bool {
        (self.parameter_min..=self.parameter_max).contains(&param)
    }

    /// Encodes a validated parameter.
    pub fn encode(&self, param: i64) -> u8 {
        self.target.encode(param)
    }
}

/// The built-in targets, in the order they are listed to users.
static STANDARD_TARGETS: [TargetDescriptor; 3] = [
    TargetDescriptor {
        name: "shift",
        register_address: 1,
        parameter_min: -1,
        parameter_max: 1,
        target: Target::Shift,
        usage: "1 or 0 or -1 (1:Ahead, 0:Neutral, -1:Astern)",
    },
    TargetDescriptor {
        name: "throttle",
        register_address: 2,
        parameter_min: 0,
        parameter_max: 100,
        target: Target::Throttle,
        usage: "0 to 100 (Percentage of output power)",
    },
    TargetDescriptor {
        name: "rudder",
        register_address: 0,
        parameter_min: -40,
        parameter_max: 40,
        target: Target::Rudder,
        usage: "-40 to 0 to 40 (>0:Starboard, 0:Center, <0:Port)",
    },
];

/// Errors raised when building a table from custom descriptors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two descriptors share a name
    #[error("duplicate target name: {0}")]
    DuplicateName(&'static str),

    /// A descriptor's minimum is above its maximum
    #[error("target {name}: min {min} is greater than max {max}")]
    InvertedRange {
        name: &'static str,
        min: i64,
        max: i64,
    },
}

/// Read-only registry of target descriptors.
///
/// Cheap to copy; it only borrows static data.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    entries: &'static [TargetDescriptor],
}

impl CommandTable {
    /// Builds a table after checking name uniqueness and range ordering.
    pub fn new(entries: &'static [TargetDescriptor]) -> Result<Self, TableError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.parameter_min > entry.parameter_max {
                return Err(TableError::InvertedRange {
                    name: entry.name,
                    min: entry.parameter_min,
                    max: entry.parameter_max,
                });
            }
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(TableError::DuplicateName(entry.name));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in shift/throttle/rudder table.
    pub fn standard() -> Self {
        Self {
            entries: &STANDARD_TARGETS,
        }
    }

    /// Looks up a descriptor by its exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&'static TargetDescriptor> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Iterates over all descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static TargetDescriptor> {
        self.entries.iter()
    }

    /// Names of all targets in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}
