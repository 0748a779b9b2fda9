//! Translate a condition read from the command line or stdin

use tracing::info;

use super::CliError;
use crate::{Dialect, TranslatorOptions};

/// Options for the translate command
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Input syntax
    pub dialect: Dialect,
    /// Conditional JSON text
    pub input: Option<String>,
    /// Translator configuration
    pub translator: TranslatorOptions,
}

impl TranslateOptions {
    pub fn new(dialect: Dialect) -> Self {
        TranslateOptions {
            dialect,
            input: None,
            translator: TranslatorOptions::default(),
        }
    }
}

/// Execute a translate operation, returning the SQL fragment
pub fn execute_translate(options: &TranslateOptions) -> Result<String, CliError> {
    let text = options.input.as_deref().ok_or(CliError::NoInput)?;
    if text.trim().is_empty() {
        return Err(CliError::NoInput);
    }

    info!(dialect = %options.dialect, max_depth = options.translator.max_depth, "translating input");
    let parser = options.dialect.parser_with(options.translator);
    Ok(parser.parse(text)?)
}
