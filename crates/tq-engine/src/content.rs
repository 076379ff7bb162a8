//! Parsed content of a single branch file.

use std::fmt::Write;

use indexmap::IndexMap;

use crate::branch::ChoiceToken;

/// Narrative text and choices of one branch.
///
/// Produced fresh on every load and replaced wholesale; content from one
/// branch is never merged into another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchContent {
    /// Narrative lines in file order, trimmed. Blank lines are kept.
    pub narrative: Vec<String>,
    /// Choice labels keyed by token, in the order they appear in the file.
    pub choices: IndexMap<ChoiceToken, String>,
}

impl BranchContent {
    /// Create empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a choice. A repeated token replaces the label but keeps its position.
    pub fn insert_choice(&mut self, token: ChoiceToken, label: impl Into<String>) {
        self.choices.insert(token, label.into());
    }

    /// Look up the token matching user input exactly.
    pub fn choice_token(&self, input: &str) -> Option<&ChoiceToken> {
        self.choices.get_key_value(input).map(|(token, _)| token)
    }

    /// Label of a choice, if the token exists.
    pub fn label(&self, input: &str) -> Option<&str> {
        self.choices.get(input).map(String::as_str)
    }

    /// Whether the branch offers no choices (an ending).
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }

    /// Render the branch as console text: narrative lines, then `token. label` lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.narrative {
            out.push_str(line);
            out.push('\n');
        }
        for (token, label) in &self.choices {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{token}. {label}");
        }
        out
    }
}
