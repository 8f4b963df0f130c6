//! Normalized findings.

use serde::Serialize;

/// Separator between a location and a message in tool output lines.
const LOCATION_SEPARATOR: &str = ": ";

/// A single finding reported by a check.
///
/// `file` may be empty, meaning the issue concerns the whole project.
/// `message` is never empty; the constructors refuse blank messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// File or location label.
    pub file: String,
    /// Human-readable message.
    pub message: String,
}

impl Issue {
    /// Create an issue about a specific file.
    ///
    /// Returns `None` when the message is blank.
    pub fn new(file: impl Into<String>, message: impl Into<String>) -> Option<Self> {
        let message = message.into().trim().to_string();
        if message.is_empty() {
            return None;
        }
        Some(Self {
            file: file.into().trim().to_string(),
            message,
        })
    }

    /// Create an issue about the whole project.
    pub fn message(message: impl Into<String>) -> Option<Self> {
        Self::new(String::new(), message)
    }

    /// Build an issue from one line of tool output.
    ///
    /// A `location: message` line is split at the first separator; any other
    /// non-blank line becomes a message with no file.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.split_once(LOCATION_SEPARATOR) {
            Some((location, message)) if !location.trim().is_empty() => {
                Self::new(location, message).or_else(|| Self::message(line))
            }
            _ => Self::message(line),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.file.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.file, self.message)
        }
    }
}

/// Iterate over the trimmed, non-blank lines of tool output.
pub fn non_blank_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}
