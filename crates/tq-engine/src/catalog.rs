//! Scenario discovery.
//!
//! Every immediate subdirectory of the scenarios root is a scenario, named
//! after the directory. Discovery never fails: an unreadable root yields an
//! empty catalog whose [`Catalog::warning`] says why.

use std::fs;
use std::path::{Path, PathBuf};

use crate::branch::validate_scenario_name;
use crate::error::QuestError;

/// A scenario found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioDescriptor {
    /// Scenario name (the directory name).
    pub name: String,
    /// Scenario directory.
    pub dir: PathBuf,
}

impl ScenarioDescriptor {
    /// Create a descriptor.
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }

    /// Name shown in menus.
    pub fn display_name(&self) -> &str {
        &self.name
    }
}

/// The scenarios available under a root directory.
#[derive(Debug, Default)]
pub struct Catalog {
    scenarios: Vec<ScenarioDescriptor>,
    warning: Option<QuestError>,
}

impl Catalog {
    /// Enumerate the scenarios under `root`, in directory-listing order.
    ///
    /// The order is whatever the filesystem returns and is not sorted.
    pub fn discover(root: &Path) -> Self {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(source) => {
                let warning = QuestError::CatalogDiscovery {
                    root: root.to_path_buf(),
                    source,
                };
                tracing::debug!("{warning}");
                return Self {
                    scenarios: Vec::new(),
                    warning: Some(warning),
                };
            }
        };

        let mut scenarios = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(root = %root.display(), "skipping unreadable entry: {e}");
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!(path = %path.display(), "skipping scenario with non-UTF-8 name");
                continue;
            };
            if let Err(e) = validate_scenario_name(&name) {
                tracing::warn!("skipping scenario: {e}");
                continue;
            }

            scenarios.push(ScenarioDescriptor::new(name, path));
        }

        tracing::debug!(root = %root.display(), count = scenarios.len(), "discovered scenarios");
        Self {
            scenarios,
            warning: None,
        }
    }

    #[cfg(test)]
    fn from_scenarios(scenarios: Vec<ScenarioDescriptor>) -> Self {
        Self {
            scenarios,
            warning: None,
        }
    }

    /// All scenarios in discovery order.
    pub fn scenarios(&self) -> &[ScenarioDescriptor] {
        &self.scenarios
    }

    /// Scenario at a zero-based index.
    pub fn get(&self, index: usize) -> Option<&ScenarioDescriptor> {
        self.scenarios.get(index)
    }

    /// Scenario with the given name.
    pub fn find(&self, name: &str) -> Option<&ScenarioDescriptor> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether no scenarios were found.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Why discovery came back empty, if the root could not be read.
    pub fn warning(&self) -> Option<&QuestError> {
        self.warning.as_ref()
    }
}
