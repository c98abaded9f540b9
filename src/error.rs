use crate::diagnostic::{self, Diagnostic};
use std::fmt::Display;

/// Shorthand for results that fail with an architecture error.
pub type ArchResult<T> = Result<T, ArchError>;

#[derive(Debug, PartialEq, Clone, Default, thiserror::Error)]
/// Reports an invalid FPGA architecture description.
///
/// Instances are created at the point the problem is detected and travel up
/// the stack unchanged; no field is touched after construction.
pub struct ArchError {
    message: String,
    file: String,
    line: Option<usize>,
}

impl ArchError {
    /// Creates a new error with a message but no known location.
    pub fn new(message: String) -> Self {
        Self {
            message: message,
            file: String::new(),
            line: None,
        }
    }

    /// Creates a new error pinned to `file` and, when known, a 1-based `line`.
    pub fn with_location(message: String, file: String, line: Option<usize>) -> Self {
        Self {
            message: message,
            file: file,
            line: line,
        }
    }
}

impl Diagnostic for ArchError {
    fn what(&self) -> &str {
        &self.message
    }

    fn file(&self) -> &str {
        &self.file
    }

    fn line(&self) -> Option<usize> {
        self.line
    }
}

impl Display for ArchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", diagnostic::render(self))
    }
}
