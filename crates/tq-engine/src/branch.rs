//! Branch tokens and branch-to-path resolution.
//!
//! A branch is the sequence of choice tokens picked since the start of a
//! scenario. It maps onto a file inside the scenario directory by joining the
//! tokens with `_`; the empty branch maps onto `main.txt`. Tokens are limited
//! to ASCII letters and digits, so a branch can never name a path outside its
//! scenario directory and distinct branches never share a file.

use std::borrow::Borrow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{QuestError, QuestResult};

/// File stem of the entry branch.
pub const ENTRY_STEM: &str = "main";
/// Extension shared by all branch files.
pub const BRANCH_EXTENSION: &str = "txt";
/// Separator placed between tokens in a branch name.
pub const TOKEN_SEPARATOR: char = '_';

/// A validated choice identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceToken(String);

impl ChoiceToken {
    /// Validate a token: non-empty ASCII alphanumerics, not the reserved entry stem.
    pub fn new(raw: impl Into<String>) -> QuestResult<Self> {
        let raw = raw.into();
        let well_formed = !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric());
        if !well_formed || raw.eq_ignore_ascii_case(ENTRY_STEM) {
            return Err(QuestError::InvalidToken(raw));
        }
        Ok(Self(raw))
    }

    /// Strip every character that is not an ASCII letter or digit, then validate.
    pub fn normalize(raw: &str) -> QuestResult<Self> {
        let cleaned: String = raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        Self::new(cleaned)
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChoiceToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ChoiceToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A position in a scenario's choice tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Branch {
    tokens: Vec<ChoiceToken>,
}

impl Branch {
    /// The entry branch.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse an underscore-joined branch name such as `1_2`.
    ///
    /// The empty string is the entry branch. Every segment must be a valid
    /// [`ChoiceToken`].
    pub fn parse(name: &str) -> QuestResult<Self> {
        if name.is_empty() {
            return Ok(Self::root());
        }
        let tokens = name
            .split(TOKEN_SEPARATOR)
            .map(ChoiceToken::new)
            .collect::<QuestResult<Vec<_>>>()?;
        Ok(Self { tokens })
    }

    /// The branch reached by picking `token` from this one.
    pub fn child(&self, token: ChoiceToken) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        Self { tokens }
    }

    /// Whether this is the entry branch.
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of choices made to reach this branch.
    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    /// The tokens picked so far, oldest first.
    pub fn tokens(&self) -> &[ChoiceToken] {
        &self.tokens
    }

    /// File stem of this branch: `main` for the root, joined tokens otherwise.
    pub fn file_stem(&self) -> String {
        if self.is_root() {
            ENTRY_STEM.to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, "{TOKEN_SEPARATOR}")?;
            }
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}

/// Check that a scenario name names a single directory below the root.
pub fn validate_scenario_name(name: &str) -> QuestResult<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(QuestError::InvalidScenarioName(name.to_string()));
    }
    Ok(())
}

/// Map a scenario and branch to the branch file path.
///
/// Does not touch the filesystem; a missing file surfaces when it is parsed.
pub fn resolve(root: &Path, scenario: &str, branch: &Branch) -> QuestResult<PathBuf> {
    validate_scenario_name(scenario)?;
    let file = format!("{}.{BRANCH_EXTENSION}", branch.file_stem());
    Ok(root.join(scenario).join(file))
}
