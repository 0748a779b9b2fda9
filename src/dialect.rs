//! Dialect selection and the translator interface.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ConditionalError;
use crate::ibm::IbmCondition;
use crate::jsonlogic::JsonLogicCondition;
use crate::value::Value;

/// Nesting limit applied when no other is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// The conditional syntaxes the crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `$`-prefixed operators (`$and`, `$lte`, `$nin`, ...)
    Ibm,
    /// Bare-keyword operators (`and`, `==`, `in`, `var`, ...)
    JsonLogic,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Ibm, Dialect::JsonLogic];

    /// Translator for this dialect with default options
    pub fn parser(self) -> Box<dyn ConditionalParser> {
        self.parser_with(TranslatorOptions::default())
    }

    pub fn parser_with(self, options: TranslatorOptions) -> Box<dyn ConditionalParser> {
        match self {
            Dialect::Ibm => Box::new(IbmCondition::with_options(options)),
            Dialect::JsonLogic => Box::new(JsonLogicCondition::with_options(options)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Ibm => "ibm",
            Dialect::JsonLogic => "jsonlogic",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a dialect name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect '{0}' (expected 'ibm' or 'jsonlogic')")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "ibm" => Ok(Dialect::Ibm),
            "jsonlogic" => Ok(Dialect::JsonLogic),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

/// Translate conditional JSON text into a SQL `WHERE` fragment.
///
/// Implementations hold no state between calls and can be shared freely
/// across threads.
pub trait ConditionalParser: Send + Sync {
    fn dialect(&self) -> Dialect;

    fn parse(&self, text: &str) -> Result<String, ConditionalError>;
}

/// Build the translator for `dialect` with default options.
///
/// # Examples
///
/// ```
/// use json_conditional::Dialect;
///
/// let parser = json_conditional::new(Dialect::Ibm);
/// assert_eq!(parser.parse(r#"{"age": {"$gt": 30}}"#).unwrap(), " age  > 30 ");
/// ```
pub fn new(dialect: Dialect) -> Box<dyn ConditionalParser> {
    dialect.parser()
}

/// Knobs shared by both translators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorOptions {
    /// Deepest operator/field nesting accepted before translation is refused
    pub max_depth: usize,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        TranslatorOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TranslatorOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Depth of the next nesting level, or an error once past `max_depth`
    pub(crate) fn descend(&self, depth: usize) -> Result<usize, ConditionalError> {
        let next = depth + 1;
        if next > self.max_depth {
            return Err(ConditionalError::TooDeep(self.max_depth));
        }
        Ok(next)
    }
}

/// Decode `text` and translate each top-level pair in document order,
/// concatenating the results with no separator.
pub(crate) fn translate_document<F>(
    dialect: Dialect,
    text: &str,
    mut translate_pair: F,
) -> Result<String, ConditionalError>
where
    F: FnMut(&str, &Value) -> Result<String, ConditionalError>,
{
    let pairs = match Value::decode(text)? {
        Value::Object(pairs) => pairs,
        other => return Err(ConditionalError::NotAnObject(other.type_name())),
    };
    debug!(%dialect, keys = pairs.len(), "translating condition");

    let mut query = String::new();
    for (key, value) in &pairs {
        query.push_str(&translate_pair(key, value)?);
    }

    debug!(%dialect, fragment_len = query.len(), "condition translated");
    Ok(query)
}
