//! Command Record and Parameter Parsing
//!
//! This module holds the two small pieces of "protocol" this tool speaks:
//! the text a user types for a parameter, and the bytes that end up on the bus.
//!
//! ## Modules
//!
//! - `types`: The `Command` record and the bus frame builder
//! - `parser`: Strict base-10 parameter parsing
//!
//! ## Example
//!
//! ```
//! use control_ship::protocol::{parse_parameter, Command};
//!
//! let value = parse_parameter("50").unwrap();
//! assert_eq!(value, 50);
//!
//! let frame = Command::new(2, 127).frame();
//! assert_eq!(&frame[..], &[2, 127]);
//! ```

pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use parser::{parse_parameter, ParseError};
pub use types::{build_frame, Command, FRAME_LEN};
