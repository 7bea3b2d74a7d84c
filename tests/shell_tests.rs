//! Shell Tests
//!
//! Tests verify:
//! - Line parsing into commands (keywords, menu numbers, bad input)
//! - Command execution against the index
//! - Full scripted sessions

use std::io::Cursor;

use reqindex::config::Config;
use reqindex::shell::{parse_command, Command, CommandType, Session, Status};
use reqindex::{IndexError, RequestIndex};

// =============================================================================
// Helper Functions
// =============================================================================

fn quiet_index() -> RequestIndex {
    RequestIndex::with_config(Config::builder().prompt("").show_banner(false).build())
}

/// Run a script through a quiet session and return (output, index)
fn run_script(script: &str) -> (String, RequestIndex) {
    let mut session = Session::new(quiet_index(), Cursor::new(script.as_bytes()), Vec::new());
    session.run().unwrap();
    let (index, output) = session.into_parts();
    (String::from_utf8(output).unwrap(), index)
}

fn parse(line: &str) -> Command {
    parse_command(line).unwrap().unwrap()
}

// =============================================================================
// Parser Tests
// =============================================================================

#[test]
fn test_parse_insert_with_spaced_name() {
    assert_eq!(
        parse("insert 5 10 Fix the login page"),
        Command::Insert {
            id: 5,
            name: "Fix the login page".to_string(),
            priority: 10
        }
    );
}

#[test]
fn test_parse_menu_numbers() {
    assert_eq!(parse("2 7"), Command::Delete { id: 7 });
    assert_eq!(parse("3 -1"), Command::Search { id: -1 });
    assert_eq!(parse("4"), Command::Process);
    assert_eq!(parse("7 10 99"), Command::Raise { id: 10, priority: 99 });
    assert_eq!(parse("8"), Command::Exit);
}

#[test]
fn test_parse_keywords_are_case_insensitive() {
    assert_eq!(parse("  TREE  "), Command::Tree);
    assert_eq!(parse("Heap"), Command::Heap);
    assert_eq!(parse("quit"), Command::Exit);
    assert_eq!(parse("stats"), Command::Size);
}

#[test]
fn test_parse_blank_line() {
    assert!(parse_command("").unwrap().is_none());
    assert!(parse_command("   \n").unwrap().is_none());
}

#[test]
fn test_parse_non_integer_id() {
    let err = parse_command("delete abc").unwrap_err();
    assert!(matches!(err, IndexError::Parse(_)));
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_parse_missing_arguments() {
    assert!(matches!(
        parse_command("insert 5 10").unwrap_err(),
        IndexError::MissingArgument("name")
    ));
    assert!(matches!(
        parse_command("raise 5").unwrap_err(),
        IndexError::MissingArgument("priority")
    ));
    assert!(matches!(
        parse_command("search").unwrap_err(),
        IndexError::MissingArgument("id")
    ));
}

#[test]
fn test_parse_trailing_argument() {
    assert!(matches!(
        parse_command("process now").unwrap_err(),
        IndexError::Parse(_)
    ));
    assert!(matches!(
        parse_command("exit now").unwrap_err(),
        IndexError::Parse(_)
    ));
    assert!(matches!(
        parse_command("help me").unwrap_err(),
        IndexError::Parse(_)
    ));
}

#[test]
fn test_parse_unknown_command() {
    assert!(matches!(
        parse_command("launch").unwrap_err(),
        IndexError::UnknownCommand(_)
    ));
    assert!(matches!(
        parse_command("42").unwrap_err(),
        IndexError::UnknownCommand(_)
    ));
}

#[test]
fn test_command_type_codes() {
    for command_type in CommandType::ALL {
        assert_eq!(CommandType::from_code(command_type as u8), Some(command_type));
        assert_eq!(CommandType::from_keyword(command_type.keyword()), Some(command_type));
    }
    assert_eq!(parse("insert 1 1 a").command_type(), CommandType::Insert);
}

// =============================================================================
// Execution Tests
// =============================================================================

#[test]
fn test_execute_statuses() {
    let mut session = Session::new(quiet_index(), Cursor::new(Vec::new()), Vec::new());

    let response = session.execute(Command::Search { id: 1 });
    assert_eq!(response.status, Status::NotFound);

    let response = session.execute(Command::Insert {
        id: 1,
        name: "A".to_string(),
        priority: 3,
    });
    assert!(response.is_ok());

    let response = session.execute(Command::Insert {
        id: 1,
        name: "B".to_string(),
        priority: 4,
    });
    assert_eq!(response.status, Status::Error);

    let response = session.execute(Command::Raise { id: 1, priority: 1 });
    assert_eq!(response.status, Status::Error);

    let response = session.execute(Command::Process);
    assert_eq!(response.lines, vec!["Processed request ID: 1 (Name: A, Priority: 3)"]);

    let response = session.execute(Command::Process);
    assert_eq!(response.status, Status::NotFound);
}

#[test]
fn test_tree_and_heap_listing() {
    let mut session = Session::new(quiet_index(), Cursor::new(Vec::new()), Vec::new());
    for (id, name, priority) in [(2, "Y", 9), (1, "X", 5), (3, "Z", 7)] {
        session.execute(Command::Insert {
            id,
            name: name.to_string(),
            priority,
        });
    }

    assert_eq!(
        session.execute(Command::Tree).lines,
        vec!["Key tree:", "ID: 1, Name: X", "ID: 2, Name: Y", "ID: 3, Name: Z"]
    );
    assert_eq!(
        session.execute(Command::Heap).lines,
        vec!["Max-heap:", "ID: 2, Priority: 9", "ID: 1, Priority: 5", "ID: 3, Priority: 7"]
    );
    assert_eq!(
        session.execute(Command::Size).lines,
        vec!["Key tree: 3 nodes (height 2), Heap: 3 slots"]
    );
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_scripted_session() {
    let script = "\
insert 1 5 X
insert 2 9 Y
insert 3 7 Z
process
tree
exit
insert 4 1 never
";
    let (output, index) = run_script(script);

    assert_eq!(
        output,
        "\
Request inserted successfully.
Request inserted successfully.
Request inserted successfully.
Processed request ID: 2 (Name: Y, Priority: 9)
Key tree:
ID: 1, Name: X
ID: 3, Name: Z
Exiting the system. Goodbye!
"
    );
    assert_eq!(index.len(), 2);
    assert_eq!(index.search_request(4), None);
}

#[test]
fn test_session_reports_bad_input_and_continues() {
    let script = "insert x 1 A\nfly\n\n1 10 1 A\n7 10 99\n4\n";
    let (output, index) = run_script(script);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Invalid input: id must be an integer"));
    assert!(lines[1].contains("Unknown command"));
    assert_eq!(lines[2], "Request inserted successfully.");
    assert_eq!(lines[3], "Priority updated successfully (1 -> 99).");
    assert_eq!(lines[4], "Processed request ID: 10 (Name: A, Priority: 99)");
    assert!(index.is_empty());
}

#[test]
fn test_session_ends_at_end_of_input() {
    let (output, index) = run_script("insert 1 1 A");
    assert_eq!(output, "Request inserted successfully.\n");
    assert_eq!(index.len(), 1);
}

#[test]
fn test_banner_and_prompt() {
    let index = RequestIndex::with_config(Config::builder().prompt("? ").build());
    let mut session = Session::new(index, Cursor::new(&b"exit\n"[..]), Vec::new());
    session.run().unwrap();
    let (_, output) = session.into_parts();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with("========== Request Management System =========="));
    assert!(output.contains("1. insert <id> <priority> <name...>"));
    assert!(output.contains("? Exiting the system. Goodbye!"));
}
