//! Configuration for reqindex
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::str::FromStr;

use crate::error::IndexError;

/// Main configuration for a RequestIndex and the shell around it
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Index Configuration
    // -------------------------------------------------------------------------
    /// What `insert_request` does when the id is already live
    pub duplicate_policy: DuplicatePolicy,

    /// What `increase_priority` does when handed a lower priority
    pub priority_policy: PriorityPolicy,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Prompt printed before each command (empty disables it)
    pub prompt: String,

    /// Print the command summary when a session starts
    pub show_banner: bool,
}

/// Handling of an insert whose id already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Leave the index untouched and report the insert as rejected
    #[default]
    Reject,

    /// Overwrite the name in the tree and the priority in the heap
    Replace,

    /// Insert a second entry; the older one keeps answering lookups.
    /// Tree and heap then both hold the id twice, and removals pair the
    /// first tree node with the first (or highest) heap slot, so a processed
    /// request can report the older name with the newer priority.
    Shadow,
}

/// Handling of a priority "increase" that is actually a decrease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityPolicy {
    /// Keep the old priority and report the change as rejected
    #[default]
    RejectDecrease,

    /// Accept any new priority and sift in whichever direction it needs
    Resift,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            priority_policy: PriorityPolicy::default(),
            prompt: "> ".to_string(),
            show_banner: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the duplicate-id policy
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Set the priority-decrease policy
    pub fn priority_policy(mut self, policy: PriorityPolicy) -> Self {
        self.config.priority_policy = policy;
        self
    }

    /// Set the shell prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Enable or disable the startup banner
    pub fn show_banner(mut self, show: bool) -> Self {
        self.config.show_banner = show;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

// =============================================================================
// Text Forms (used by the shell's command-line flags)
// =============================================================================

impl FromStr for DuplicatePolicy {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "replace" => Ok(DuplicatePolicy::Replace),
            "shadow" => Ok(DuplicatePolicy::Shadow),
            other => Err(IndexError::Config(format!(
                "unknown duplicate policy '{}' (expected reject, replace or shadow)",
                other
            ))),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::Replace => "replace",
            DuplicatePolicy::Shadow => "shadow",
        };
        f.write_str(name)
    }
}

impl FromStr for PriorityPolicy {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject-decrease" | "reject" => Ok(PriorityPolicy::RejectDecrease),
            "resift" => Ok(PriorityPolicy::Resift),
            other => Err(IndexError::Config(format!(
                "unknown priority policy '{}' (expected reject-decrease or resift)",
                other
            ))),
        }
    }
}

impl fmt::Display for PriorityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriorityPolicy::RejectDecrease => "reject-decrease",
            PriorityPolicy::Resift => "resift",
        };
        f.write_str(name)
    }
}
