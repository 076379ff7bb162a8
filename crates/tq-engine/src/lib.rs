//! Branching scenario engine for TextQuest.
//!
//! A scenario is a directory of plain-text branch files. Each file holds a
//! block of narrative lines followed by a block of numbered choices; picking
//! a choice appends its token to the current branch, and the extended branch
//! names the next file to load. This crate resolves branches to paths, parses
//! branch files, tracks a playthrough, and discovers scenarios on disk.

/// Branch tokens and branch-to-path resolution.
pub mod branch;
/// Scenario discovery.
pub mod catalog;
/// Engine configuration.
pub mod config;
/// Parsed branch content.
pub mod content;
/// Error types for the engine.
pub mod error;
/// Branch file parsing.
pub mod parser;
/// Scenario playthrough state machine.
pub mod session;

pub use branch::{Branch, ChoiceToken, resolve};
pub use catalog::{Catalog, ScenarioDescriptor};
pub use config::EngineConfig;
pub use content::BranchContent;
pub use error::{QuestError, QuestResult};
pub use parser::{LineKind, classify_line, parse_file, parse_str};
pub use session::{Advance, ScenarioSession, SessionState};
