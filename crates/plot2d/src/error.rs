// File: crates/plot2d/src/error.rs
// Summary: Typed validation errors for chart data and limits.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlotError {
    /// Display limits cannot be derived from an empty sequence.
    #[error("cannot compute limits for {what}: sequence is empty")]
    EmptyData { what: &'static str },

    /// Paired sequences must have equal length to draw anything.
    #[error("length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}
