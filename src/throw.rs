use crate::error::ArchError;
use std::fmt::Arguments;
use std::panic::Location;

/// Builds an architecture error from an explicit location and a format
/// invocation.
///
/// The location names where in the *architecture description* the problem
/// was found, so parsers report positions in the file they are reading, not
/// positions in this program's source.
pub fn throw(file: &str, line: usize, args: Arguments) -> ArchError {
    ArchError::with_location(args.to_string(), file.to_string(), Some(line))
}

/// Builds an architecture error located at the caller's own source position.
///
/// Intended for structural checks that run after parsing, where no document
/// position is available to point at.
#[track_caller]
pub fn throw_here(args: Arguments) -> ArchError {
    let loc = Location::caller();
    ArchError::with_location(args.to_string(), loc.file().to_string(), Some(loc.line() as usize))
}

/// Builds an [`ArchError`] pinned to the call site, formatting its message
/// like [`format!`].
#[macro_export]
macro_rules! arch_error {
    ($($arg:tt)*) => {
        $crate::throw::throw_here(format_args!($($arg)*))
    };
}

/// Builds an [`ArchError`] pinned to an explicit `file` and `line`,
/// formatting its message like [`format!`].
#[macro_export]
macro_rules! arch_error_at {
    ($file:expr, $line:expr, $($arg:tt)*) => {
        $crate::throw::throw($file, $line, format_args!($($arg)*))
    };
}

/// Returns early with an [`ArchError`] pinned to the call site.
#[macro_export]
macro_rules! arch_bail {
    ($($arg:tt)*) => {
        return Err($crate::arch_error!($($arg)*))
    };
}

/// Returns early with an [`ArchError`] pinned to an explicit `file` and
/// `line`.
#[macro_export]
macro_rules! arch_bail_at {
    ($file:expr, $line:expr, $($arg:tt)*) => {
        return Err($crate::arch_error_at!($file, $line, $($arg)*))
    };
}
