//! Diagnostic primitives for reporting invalid FPGA architecture
//! descriptions: a locatable error value, a capability trait for reporters,
//! and helpers that build the value from a format invocation and a source
//! location.

pub mod diagnostic;
pub mod error;
pub mod throw;

pub use crate::diagnostic::Diagnostic;
pub use crate::error::{ArchError, ArchResult};
