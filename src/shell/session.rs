//! Shell Session
//!
//! Reads command lines, runs them against one RequestIndex, writes results.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::index::{InsertOutcome, PriorityChange, RequestIndex};

use super::{parse_command, Command, CommandType, Response};

const BANNER: &str = "========== Request Management System ==========";

/// One interactive session over a reader/writer pair
pub struct Session<R, W> {
    /// The index this session owns
    index: RequestIndex,

    /// Command input (stdin for the binary)
    reader: R,

    /// Output sink (stdout for the binary)
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session around an index
    pub fn new(index: RequestIndex, reader: R, writer: W) -> Self {
        Self {
            index,
            reader,
            writer,
        }
    }

    /// Run until `exit` or end of input
    ///
    /// Bad input is reported to the writer and the loop continues; only I/O
    /// failures end the session with an error.
    pub fn run(&mut self) -> Result<()> {
        if self.index.config().show_banner {
            writeln!(self.writer, "{}", BANNER)?;
            self.help().write_to(&mut self.writer)?;
        }

        let mut line = String::new();
        loop {
            self.prompt()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                tracing::debug!("End of input, closing session");
                return Ok(());
            }

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("Rejected input {:?}: {}", line.trim_end(), e);
                    Response::error(e.to_string()).write_to(&mut self.writer)?;
                    continue;
                }
            };

            tracing::trace!("Received command: {:?}", command);

            let done = command == Command::Exit;
            let response = self.execute(command);
            response.write_to(&mut self.writer)?;
            self.writer.flush()?;

            if done {
                return Ok(());
            }
        }
    }

    /// Execute a command and return a response
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Insert { id, name, priority } => {
                match self.index.insert_request(id, name, priority) {
                    InsertOutcome::Inserted => Response::message("Request inserted successfully."),
                    InsertOutcome::Replaced => {
                        Response::message(format!("Request {} replaced.", id))
                    }
                    InsertOutcome::Shadowed => Response::message(format!(
                        "Request inserted; ID {} was already present and the older entry still answers searches.",
                        id
                    )),
                    InsertOutcome::Rejected => Response::error(format!(
                        "Request ID {} already exists; insert rejected.",
                        id
                    )),
                }
            }
            Command::Delete { id } => match self.index.delete_request(id) {
                Some(request) => Response::message(format!(
                    "Request deleted - ID: {}, Name: {}",
                    request.id, request.name
                )),
                None => Response::not_found(format!("Request ID {} not found.", id)),
            },
            Command::Search { id } => match self.index.search_request(id) {
                Some(entry) => Response::message(format!(
                    "Request found - ID: {}, Name: {}",
                    entry.id, entry.name
                )),
                None => Response::not_found("Request not found."),
            },
            Command::Process => match self.index.process_highest_priority() {
                Some(request) => Response::message(format!(
                    "Processed request ID: {} (Name: {}, Priority: {})",
                    request.id, request.name, request.priority
                )),
                None => Response::not_found("No request to process."),
            },
            Command::Tree => {
                let mut lines = vec!["Key tree:".to_string()];
                lines.extend(
                    self.index
                        .traverse_key_tree()
                        .into_iter()
                        .map(|entry| format!("ID: {}, Name: {}", entry.id, entry.name)),
                );
                Response::ok(lines)
            }
            Command::Heap => {
                let mut lines = vec!["Max-heap:".to_string()];
                lines.extend(
                    self.index
                        .peek_heap()
                        .iter()
                        .map(|slot| format!("ID: {}, Priority: {}", slot.id, slot.priority)),
                );
                Response::ok(lines)
            }
            Command::Raise { id, priority } => match self.index.change_priority(id, priority) {
                PriorityChange::Raised { old } => Response::message(format!(
                    "Priority updated successfully ({} -> {}).",
                    old, priority
                )),
                PriorityChange::Lowered { old } => Response::message(format!(
                    "Priority lowered ({} -> {}).",
                    old, priority
                )),
                PriorityChange::Unchanged => Response::message("Priority unchanged."),
                PriorityChange::Rejected { current } => Response::error(format!(
                    "New priority {} is below the current {}; not changed.",
                    priority, current
                )),
                PriorityChange::NotFound => Response::not_found("Request ID not found in heap."),
            },
            Command::Size => Response::message(format!(
                "Key tree: {} nodes (height {}), Heap: {} slots",
                self.index.size_key_tree(),
                self.index.tree_height(),
                self.index.size_heap()
            )),
            Command::Help => self.help(),
            Command::Exit => Response::message("Exiting the system. Goodbye!"),
        }
    }

    fn help(&self) -> Response {
        Response::ok(
            CommandType::ALL
                .iter()
                .map(|t| format!("{}. {}", *t as u8, t.usage()))
                .collect(),
        )
    }

    fn prompt(&mut self) -> Result<()> {
        let prompt = &self.index.config().prompt;
        if !prompt.is_empty() {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the index
    pub fn index(&self) -> &RequestIndex {
        &self.index
    }

    /// Consume the session, returning the index and the writer
    pub fn into_parts(self) -> (RequestIndex, W) {
        (self.index, self.writer)
    }
}
