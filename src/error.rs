use thiserror::Error;

/// Errors returned by the condition translators.
///
/// The first error met at any nesting level aborts the whole translation; no
/// partial fragment is ever returned alongside one.
#[derive(Debug, Error)]
pub enum ConditionalError {
    /// Input text is not valid JSON
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input is valid JSON but the document is not an object
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// An operator's operand has the wrong shape
    #[error("{0} condition bad formatted")]
    BadFormatted(&'static str),

    /// `$nor` has no SQL rendering
    #[error("NOR condition not implemented")]
    NorNotImplemented,

    /// Unknown operator key
    #[error("{0} operator not supported")]
    Unsupported(String),

    /// Nesting exceeds `TranslatorOptions::max_depth`
    #[error("condition nested deeper than {0} levels")]
    TooDeep(usize),
}

impl ConditionalError {
    /// True for errors raised before translation starts (bad JSON text or a
    /// non-object document), as opposed to operand shape errors.
    pub fn is_decode(&self) -> bool {
        matches!(self, ConditionalError::Decode(_) | ConditionalError::NotAnObject(_))
    }
}
