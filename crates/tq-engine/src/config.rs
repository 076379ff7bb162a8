//! Configuration for the scenario engine.

use std::path::PathBuf;

/// Directory scanned for scenarios when no root is given.
pub const DEFAULT_SCENARIOS_ROOT: &str = "scenarios";

/// Configuration shared by the catalog and every session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory whose immediate subdirectories are scenarios.
    pub scenarios_root: PathBuf,
    /// Keep parsed branches in memory instead of re-reading them on each visit.
    pub cache_parsed_branches: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scenarios_root: PathBuf::from(DEFAULT_SCENARIOS_ROOT),
            cache_parsed_branches: false,
        }
    }
}

impl EngineConfig {
    /// Set the scenarios root directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scenarios_root = root.into();
        self
    }

    /// Enable or disable caching of parsed branches.
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache_parsed_branches = cache;
        self
    }
}
