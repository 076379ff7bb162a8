//! Classification of single lines in a branch file.

use crate::branch::ChoiceToken;

/// Prefix of the terminal choice marker.
pub const END_MARKER: &str = "end.";

/// What a single line of a branch file is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Story text, already trimmed. May be empty.
    Narrative(String),
    /// A choice line. `entry` is `None` when the line matches the choice
    /// grammar but has no space to split a label off, or its token
    /// normalises to nothing usable.
    Choice {
        /// Normalised token and label text.
        entry: Option<(ChoiceToken, String)>,
    },
}

impl LineKind {
    /// Whether this is a choice line.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice { .. })
    }
}

/// Classify one raw line.
///
/// The line is trimmed, then recognised as a choice when it is either
/// `<digits>. <label>` or `end.<text>` (no space required after `end.`).
/// Everything else is narrative.
pub fn classify_line(raw: &str) -> LineKind {
    let line = trim_control(raw);
    if !is_numbered_choice(line) && !is_end_marker(line) {
        return LineKind::Narrative(line.to_string());
    }

    let entry = line.split_once(' ').and_then(|(head, label)| {
        ChoiceToken::normalize(head)
            .ok()
            .map(|token| (token, label.to_string()))
    });
    LineKind::Choice { entry }
}

/// Strip leading and trailing spaces and control characters (`<= U+0020`).
/// Other Unicode whitespace such as U+00A0 is kept.
fn trim_control(raw: &str) -> &str {
    raw.trim_matches(|c: char| c <= ' ')
}

/// `<digits>. <at least one char>`
fn is_numbered_choice(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    line[digits..]
        .strip_prefix(". ")
        .is_some_and(|label| !label.is_empty())
}

/// `end.<at least one char>`
fn is_end_marker(line: &str) -> bool {
    line.strip_prefix(END_MARKER)
        .is_some_and(|rest| !rest.is_empty())
}
