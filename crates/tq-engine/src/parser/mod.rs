//! Branch file parsing.
//!
//! A branch file is a block of narrative lines followed by a block of choice
//! lines. Parsing runs in two phases: every line is classified on its own
//! (see [`classify_line`]), then the classified lines are folded into a
//! [`BranchContent`]. The first non-choice line after the choice block ends
//! the scan; anything after it is ignored.

mod line;

use std::fs;
use std::io;
use std::path::Path;

use crate::content::BranchContent;
use crate::error::{QuestError, QuestResult};

pub use line::{END_MARKER, LineKind, classify_line};

/// Parse branch file text.
pub fn parse_str(source: &str) -> BranchContent {
    let mut content = BranchContent::new();
    let mut in_choices = false;

    for raw in source.lines() {
        match classify_line(raw) {
            LineKind::Choice { entry } => {
                in_choices = true;
                if let Some((token, label)) = entry {
                    content.insert_choice(token, label);
                }
            }
            LineKind::Narrative(_) if in_choices => break,
            LineKind::Narrative(text) => content.narrative.push(text),
        }
    }

    content
}

/// Read and parse a branch file.
///
/// A missing file is [`QuestError::BranchNotFound`]; any other read failure,
/// including invalid UTF-8, is [`QuestError::Io`].
pub fn parse_file(path: &Path) -> QuestResult<BranchContent> {
    let source = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => QuestError::BranchNotFound {
            path: path.to_path_buf(),
        },
        _ => QuestError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let content = parse_str(&source);
    tracing::debug!(
        path = %path.display(),
        narrative = content.narrative.len(),
        choices = content.choices.len(),
        "parsed branch file"
    );
    Ok(content)
}
