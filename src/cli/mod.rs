//! Presentation shell
//!
//! Bridges line input parsed with clap to the budget controller and the
//! display layer.

pub mod commands;
pub mod session;

pub use commands::{parse_line, ParsedLine, SessionCommand};
pub use session::{LoopControl, Session};
