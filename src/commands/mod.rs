//! Command Module
//!
//! This module implements the encoding and validation core of control-ship.
//! It maps a symbolic target to its register, checks the parameter against
//! the target's range and encodes it into the byte the board expects.
//!
//! ## Architecture
//!
//! ```text
//! (target, parameter text)
//!       │
//!       ▼
//! ┌─────────────────┐
//! │ CommandResolver │  (resolver)
//! │                 │
//! │  - Lookup       │
//! │  - Parse        │
//! │  - Validate     │
//! │  - Encode       │
//! └────────┬────────┘
//!          │ find_by_name
//!          ▼
//! ┌─────────────────┐
//! │  CommandTable   │  (table)
//! └─────────────────┘
//! ```
//!
//! ## Supported Targets
//!
//! - `shift` - `-1`, `0` or `1`
//! - `throttle` - `0` to `100`
//! - `rudder` - `-40` to `40`

pub mod resolver;
pub mod table;

// Re-export the main types
pub use resolver::{resolve_and_format, CommandResolver, ResolveError};
pub use table::{CommandTable, TableError, Target, TargetDescriptor};
