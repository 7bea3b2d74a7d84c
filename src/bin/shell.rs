//! reqindex Shell Binary
//!
//! Interactive request management on stdin/stdout.

use std::io;

use clap::Parser;
use reqindex::shell::Session;
use reqindex::{Config, DuplicatePolicy, PriorityPolicy, RequestIndex};
use tracing_subscriber::{fmt, EnvFilter};

/// reqindex Shell
#[derive(Parser, Debug)]
#[command(name = "reqindex-shell")]
#[command(about = "Manage requests by id and by priority")]
#[command(version)]
struct Args {
    /// What to do when inserting an id that already exists (reject, replace, shadow)
    #[arg(short, long, default_value_t = DuplicatePolicy::Reject)]
    duplicates: DuplicatePolicy,

    /// What to do when `raise` is given a lower priority (reject-decrease, resift)
    #[arg(short, long, default_value_t = PriorityPolicy::RejectDecrease)]
    priority_policy: PriorityPolicy,

    /// Prompt printed before each command
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Skip the banner and command list at startup
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Initialize tracing/logging; stdout belongs to the session
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,reqindex=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("reqindex shell v{}", reqindex::VERSION);
    tracing::debug!(
        "Duplicate policy: {}, priority policy: {}",
        args.duplicates,
        args.priority_policy
    );

    // Build config from args
    let config = Config::builder()
        .duplicate_policy(args.duplicates)
        .priority_policy(args.priority_policy)
        .prompt(args.prompt)
        .show_banner(!args.quiet)
        .build();

    let index = RequestIndex::with_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(index, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }

    let remaining = session.index().len();
    if remaining > 0 {
        tracing::info!("Session ended with {} unprocessed requests", remaining);
    }
}
