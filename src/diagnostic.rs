use colored::Colorize;
use std::error::Error;

/// Minimal capability exposed by every locatable error.
///
/// Callers that only report problems depend on this trait rather than on a
/// concrete error type, so additional error kinds can join later without
/// touching the reporting path.
pub trait Diagnostic: Error {
    /// Accesses the bare message, exactly as it was given at construction.
    fn what(&self) -> &str;

    /// Accesses the name of the file the problem originated in.
    ///
    /// An empty string means no file is associated with the error.
    fn file(&self) -> &str;

    /// Accesses the 1-based line number the problem originated at.
    ///
    /// `None` means the location is unknown.
    fn line(&self) -> Option<usize>;
}

/// Renders a diagnostic as `file:line: message`, omitting whichever location
/// parts are unavailable.
pub fn render(diag: &dyn Diagnostic) -> String {
    match (diag.file().is_empty(), diag.line()) {
        (false, Some(ln)) => format!("{}:{}: {}", diag.file(), ln, diag.what()),
        (false, None) => format!("{}: {}", diag.file(), diag.what()),
        (true, Some(ln)) => format!("line {}: {}", ln, diag.what()),
        (true, None) => diag.what().to_string(),
    }
}

/// Renders a diagnostic as a complete terminal line with an `error:` prefix.
///
/// The string is returned rather than printed so the caller decides the
/// stream and the exit policy.
pub fn summarize(diag: &dyn Diagnostic) -> String {
    format!("{} {}", "error:".red().bold(), render(diag))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ArchError;

    #[test]
    fn render_with_full_location() {
        let err = ArchError::with_location(
            String::from("unexpected tag 'foo'"),
            String::from("arch.xml"),
            Some(42),
        );
        assert_eq!(render(&err), "arch.xml:42: unexpected tag 'foo'");
    }

    #[test]
    fn render_with_partial_location() {
        let err = ArchError::with_location(
            String::from("missing <layout> section"),
            String::from("arch.xml"),
            None,
        );
        assert_eq!(render(&err), "arch.xml: missing <layout> section");

        let err = ArchError::with_location(
            String::from("missing <layout> section"),
            String::new(),
            Some(7),
        );
        assert_eq!(render(&err), "line 7: missing <layout> section");
    }

    #[test]
    fn render_without_location() {
        let err = ArchError::new(String::from("no device defined"));
        assert_eq!(render(&err), "no device defined");
    }
}
