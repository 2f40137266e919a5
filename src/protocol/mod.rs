//! Text protocol handling.
//!
//! BFEN snapshot notation and the line-command parser used by the query
//! loop in the binary.

pub mod bfen;
pub mod parser;

pub use bfen::{encode_bfen, parse_bfen, BfenError, Snapshot};
pub use parser::{parse_command, Command};
