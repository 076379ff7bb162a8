//! Scenario playthrough state machine.
//!
//! A session starts at the entry branch of a scenario and moves down the
//! choice tree one token at a time. Each successful move resolves the child
//! branch to a file and parses it; the content of the previous branch is
//! discarded. Invalid input changes nothing, so the caller can re-display
//! the same branch. `end` terminates the session.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::branch::{Branch, resolve};
use crate::catalog::ScenarioDescriptor;
use crate::config::EngineConfig;
use crate::content::BranchContent;
use crate::error::{QuestError, QuestResult};
use crate::parser::parse_file;

/// Input that ends a session, compared ignoring ASCII case.
pub const END_COMMAND: &str = "end";

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing a branch and waiting for input.
    Active,
    /// Ended by the `end` command.
    Terminated,
}

/// Result of feeding one line of input to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// A choice was taken and the new branch loaded.
    Moved,
    /// The input matched no choice; nothing changed.
    Invalid(String),
    /// The session was ended.
    Ended,
}

/// One playthrough of a scenario.
#[derive(Debug)]
pub struct ScenarioSession {
    scenario: ScenarioDescriptor,
    root: PathBuf,
    branch: Branch,
    content: BranchContent,
    state: SessionState,
    cache: Option<HashMap<Branch, BranchContent>>,
}

impl ScenarioSession {
    /// Start a session at the scenario's entry branch.
    ///
    /// Fails if the entry branch cannot be loaded.
    pub fn start(scenario: ScenarioDescriptor, config: &EngineConfig) -> QuestResult<Self> {
        let mut session = Self {
            scenario,
            root: config.scenarios_root.clone(),
            branch: Branch::root(),
            content: BranchContent::new(),
            state: SessionState::Active,
            cache: config.cache_parsed_branches.then(HashMap::new),
        };
        session.content = session.load(&Branch::root())?;
        tracing::debug!(scenario = %session.scenario.name, "session started");
        Ok(session)
    }

    /// The scenario being played.
    pub fn scenario(&self) -> &ScenarioDescriptor {
        &self.scenario
    }

    /// The current branch.
    pub fn branch(&self) -> &Branch {
        &self.branch
    }

    /// Content of the current branch.
    pub fn content(&self) -> &BranchContent {
        &self.content
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session still accepts choices.
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// File backing the current branch.
    pub fn current_path(&self) -> QuestResult<PathBuf> {
        resolve(&self.root, &self.scenario.name, &self.branch)
    }

    /// Feed one line of user input.
    ///
    /// A failed load of the chosen branch is returned as an error and leaves
    /// the session on its current branch.
    pub fn advance(&mut self, input: &str) -> QuestResult<Advance> {
        if !self.is_active() {
            return Err(QuestError::SessionTerminated);
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case(END_COMMAND) {
            self.state = SessionState::Terminated;
            tracing::debug!(scenario = %self.scenario.name, branch = %self.branch, "session ended");
            return Ok(Advance::Ended);
        }

        let Some(token) = self.content.choice_token(input).cloned() else {
            return Ok(Advance::Invalid(input.to_string()));
        };

        let next = self.branch.child(token);
        let content = self.load(&next)?;
        self.branch = next;
        self.content = content;
        Ok(Advance::Moved)
    }

    /// Re-read the current branch from disk, bypassing the cache.
    pub fn reload(&mut self) -> QuestResult<()> {
        if let Some(cache) = self.cache.as_mut() {
            cache.remove(&self.branch);
        }
        let branch = self.branch.clone();
        self.content = self.load(&branch)?;
        Ok(())
    }

    fn load(&mut self, branch: &Branch) -> QuestResult<BranchContent> {
        if let Some(content) = self.cache.as_ref().and_then(|c| c.get(branch)) {
            tracing::debug!(branch = %branch, "branch cache hit");
            return Ok(content.clone());
        }

        let path = resolve(&self.root, &self.scenario.name, branch)?;
        let content = parse_file(&path)?;
        if let Some(cache) = self.cache.as_mut() {
            cache.insert(branch.clone(), content.clone());
        }
        Ok(content)
    }
}
