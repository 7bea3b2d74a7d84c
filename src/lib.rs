//! # reqindex
//!
//! A request index with two synchronized access paths:
//! - Lookup and ordered traversal by request id (binary search tree)
//! - Retrieval of the highest-priority request (binary max-heap)
//! - A line-oriented shell for driving it interactively
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Shell Session                           │
//! │              (parse line → Command → Response)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    RequestIndex                              │
//! │        (every mutation touches both structures)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │   KeyTree   │          │ PriorityHeap │
//!   │ (id → name) │          │ (id, prio)   │
//!   └─────────────┘          └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod tree;
pub mod heap;
pub mod index;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{IndexError, Result};
pub use config::{Config, DuplicatePolicy, PriorityPolicy};
pub use index::{InsertOutcome, PriorityChange, Request, RequestIndex};

// =============================================================================
// Core Types
// =============================================================================

/// Unique key of a request
pub type RequestId = i64;

/// Request priority; larger is more urgent
pub type Priority = i64;

/// Current version of reqindex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
