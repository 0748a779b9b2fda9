//! CLI support for json-conditional
//!
//! Provides programmatic access to the `jsoncond` commands for embedding in
//! other tools.

mod operators;
mod translate;

pub use operators::operators_overview;
pub use translate::{TranslateOptions, execute_translate};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Translation failed
    #[error("Translation error: {0}")]
    Translate(#[from] crate::ConditionalError),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No input provided
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,
}
