//! Command parser
//!
//! Turns one input line into a `Command`.
//!
//! ### Arguments by Command Type
//! - INSERT: id, priority, then the rest of the line as the name
//! - DELETE / SEARCH: id
//! - RAISE: id, priority
//! - everything else: none

use crate::error::{IndexError, Result};
use super::{Command, CommandType};

/// Parse a line into a command
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let (head, rest) = split_word(line);
    if head.is_empty() {
        return Ok(None);
    }

    let command_type = match head.parse::<u8>() {
        Ok(code) => CommandType::from_code(code),
        Err(_) => CommandType::from_keyword(head),
    }
    .ok_or_else(|| IndexError::UnknownCommand(head.to_string()))?;

    let command = match command_type {
        CommandType::Insert => {
            let (id, rest) = next_integer(rest, "id")?;
            let (priority, rest) = next_integer(rest, "priority")?;
            let name = rest.trim();
            if name.is_empty() {
                return Err(IndexError::MissingArgument("name"));
            }
            Command::Insert {
                id,
                name: name.to_string(),
                priority,
            }
        }
        CommandType::Delete => {
            let (id, rest) = next_integer(rest, "id")?;
            expect_end(rest)?;
            Command::Delete { id }
        }
        CommandType::Search => {
            let (id, rest) = next_integer(rest, "id")?;
            expect_end(rest)?;
            Command::Search { id }
        }
        CommandType::Raise => {
            let (id, rest) = next_integer(rest, "id")?;
            let (priority, rest) = next_integer(rest, "priority")?;
            expect_end(rest)?;
            Command::Raise { id, priority }
        }
        CommandType::Process => no_args(rest, Command::Process)?,
        CommandType::Tree => no_args(rest, Command::Tree)?,
        CommandType::Heap => no_args(rest, Command::Heap)?,
        CommandType::Size => no_args(rest, Command::Size)?,
        CommandType::Help => no_args(rest, Command::Help)?,
        CommandType::Exit => no_args(rest, Command::Exit)?,
    };

    Ok(Some(command))
}

// =============================================================================
// Helpers
// =============================================================================

/// Split off the first whitespace-delimited word
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], &input[end..]),
        None => (input, ""),
    }
}

fn next_integer<'a>(input: &'a str, what: &'static str) -> Result<(i64, &'a str)> {
    let (word, rest) = split_word(input);
    if word.is_empty() {
        return Err(IndexError::MissingArgument(what));
    }
    let value = word.parse::<i64>().map_err(|_| {
        IndexError::Parse(format!("{} must be an integer, got '{}'", what, word))
    })?;
    Ok((value, rest))
}

fn expect_end(rest: &str) -> Result<()> {
    let extra = rest.trim();
    if extra.is_empty() {
        Ok(())
    } else {
        Err(IndexError::Parse(format!("unexpected argument '{}'", extra)))
    }
}

fn no_args(rest: &str, command: Command) -> Result<Command> {
    expect_end(rest)?;
    Ok(command)
}
