//! Command definitions
//!
//! Represents parsed shell commands.

use crate::{Priority, RequestId};

/// Command types, numbered like the classic menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandType {
    Help = 0,
    Insert = 1,
    Delete = 2,
    Search = 3,
    Process = 4,
    Tree = 5,
    Heap = 6,
    Raise = 7,
    Exit = 8,
    Size = 9,
}

impl CommandType {
    /// Menu order
    pub const ALL: [CommandType; 10] = [
        CommandType::Insert,
        CommandType::Delete,
        CommandType::Search,
        CommandType::Process,
        CommandType::Tree,
        CommandType::Heap,
        CommandType::Raise,
        CommandType::Exit,
        CommandType::Size,
        CommandType::Help,
    ];

    /// Look up a menu number
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| *t as u8 == code)
    }

    /// Look up a keyword or alias (case-insensitive)
    pub fn from_keyword(word: &str) -> Option<Self> {
        let word = word.to_ascii_lowercase();
        let command_type = match word.as_str() {
            "insert" | "add" => CommandType::Insert,
            "delete" | "del" | "rm" => CommandType::Delete,
            "search" | "find" | "get" => CommandType::Search,
            "process" | "next" => CommandType::Process,
            "tree" | "bst" => CommandType::Tree,
            "heap" => CommandType::Heap,
            "raise" | "increase" => CommandType::Raise,
            "exit" | "quit" => CommandType::Exit,
            "size" | "stats" => CommandType::Size,
            "help" | "?" => CommandType::Help,
            _ => return None,
        };
        Some(command_type)
    }

    /// Canonical keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandType::Help => "help",
            CommandType::Insert => "insert",
            CommandType::Delete => "delete",
            CommandType::Search => "search",
            CommandType::Process => "process",
            CommandType::Tree => "tree",
            CommandType::Heap => "heap",
            CommandType::Raise => "raise",
            CommandType::Exit => "exit",
            CommandType::Size => "size",
        }
    }

    /// One-line usage for the help listing
    pub fn usage(&self) -> &'static str {
        match self {
            CommandType::Help => "help                              show this list",
            CommandType::Insert => "insert <id> <priority> <name...>  insert a new request",
            CommandType::Delete => "delete <id>                       delete a request",
            CommandType::Search => "search <id>                       search for a request",
            CommandType::Process => "process                           process the highest-priority request",
            CommandType::Tree => "tree                              print the key tree in id order",
            CommandType::Heap => "heap                              print the max-heap in array order",
            CommandType::Raise => "raise <id> <priority>             increase the priority of a request",
            CommandType::Exit => "exit                              leave the shell",
            CommandType::Size => "size                              show structure sizes",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert {
        id: RequestId,
        name: String,
        priority: Priority,
    },
    Delete { id: RequestId },
    Search { id: RequestId },
    Process,
    Tree,
    Heap,
    Raise { id: RequestId, priority: Priority },
    Size,
    Help,
    Exit,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Insert { .. } => CommandType::Insert,
            Command::Delete { .. } => CommandType::Delete,
            Command::Search { .. } => CommandType::Search,
            Command::Process => CommandType::Process,
            Command::Tree => CommandType::Tree,
            Command::Heap => CommandType::Heap,
            Command::Raise { .. } => CommandType::Raise,
            Command::Size => CommandType::Size,
            Command::Help => CommandType::Help,
            Command::Exit => CommandType::Exit,
        }
    }
}
