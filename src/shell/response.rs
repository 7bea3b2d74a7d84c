//! Response definitions
//!
//! Rendered result of one shell command.

use std::io::Write;

use crate::error::Result;

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    Error,
}

/// Lines to print for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub lines: Vec<String>,
}

impl Response {
    /// Create an OK response with several lines
    pub fn ok(lines: Vec<String>) -> Self {
        Self {
            status: Status::Ok,
            lines,
        }
    }

    /// Create an OK response with a single line
    pub fn message(line: impl Into<String>) -> Self {
        Self::ok(vec![line.into()])
    }

    /// Create a NOT_FOUND response
    pub fn not_found(line: impl Into<String>) -> Self {
        Self {
            status: Status::NotFound,
            lines: vec![line.into()],
        }
    }

    /// Create an ERROR response
    pub fn error(line: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            lines: vec![line.into()],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Write every line followed by a newline
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}
