//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`TimelineError`] covers the construction-time
//! configuration faults: a definition tree whose shape does not match the
//! value tree it animates. Compilation aborts on the first mismatch, so a
//! partial interval tree never escapes to the evaluator.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, TimelineError>`.
//!
//! ```rust,ignore
//! use cadence::errors::{Result, TimelineError};
//!
//! fn build_timeline() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the Cadence engine.
///
/// Every variant is a configuration fault detected while compiling a
/// definition tree against its initial value tree. Paths are reported
/// `.`-separated from the root (e.g. `rotation.x`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// The value tree has a key the definition tree does not define.
    #[error("definition tree is missing track \"{path}\" present in the value tree")]
    MissingTrack {
        /// Path of the undeclared track
        path: String,
    },

    /// The definition tree has a key the value tree does not carry.
    #[error("definition tree declares unknown track \"{path}\" absent from the value tree")]
    UnknownTrack {
        /// Path of the unknown track
        path: String,
    },

    /// One tree has a leaf where the other has a branch.
    #[error("shape mismatch at \"{path}\": value tree has a {value_kind}, definition tree has a {definition_kind}")]
    ShapeMismatch {
        /// Path of the disagreeing node
        path: String,
        /// Node kind on the value-tree side
        value_kind: &'static str,
        /// Node kind on the definition-tree side
        definition_kind: &'static str,
    },
}

/// Alias for `Result<T, TimelineError>`.
pub type Result<T> = std::result::Result<T, TimelineError>;
