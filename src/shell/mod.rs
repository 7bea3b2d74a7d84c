//! Shell Module
//!
//! Line-oriented front end for a RequestIndex.
//!
//! ## Line Format
//! ```text
//! <command> [args...]
//! ```
//! `<command>` is a keyword or its number in the classic menu:
//!
//! - 1 `insert <id> <priority> <name...>`
//! - 2 `delete <id>`
//! - 3 `search <id>`
//! - 4 `process`
//! - 5 `tree`
//! - 6 `heap`
//! - 7 `raise <id> <priority>`
//! - 8 `exit`
//! - 9 `size`
//! - 0 `help`
//!
//! Arguments are validated here; the index only ever sees integers.

mod command;
mod parser;
mod response;
mod session;

pub use command::{Command, CommandType};
pub use parser::parse_command;
pub use response::{Response, Status};
pub use session::Session;
