//! Translator for the JSONLogic conditional syntax.
//!
//! Each object level holds one operator key. Comparison operators take an
//! array whose elements are either nested operators (usually `var`) or
//! literals; the elements are joined by the operator's SQL keyword.

use tracing::trace;

use crate::dialect::{ConditionalParser, Dialect, TranslatorOptions, translate_document};
use crate::error::ConditionalError;
use crate::literal::jsonlogic_literal;
use crate::value::Value;

/// Comparison operators: JSONLogic key, SQL joining keyword, error name.
pub const COMPARISONS: &[(&str, &str, &str)] = &[
    ("==", " = ", "EQ"),
    ("!=", " <> ", "NEQ"),
    (">", " > ", "GT"),
    (">=", " >= ", "GTE"),
    ("<", " < ", "LT"),
    ("<=", " <= ", "LTE"),
    ("in", " IN ", "IN"),
    ("!", " NOT IN ", "NOT IN"),
];

/// Operators understood by [`JsonLogicCondition`], with a short description.
pub const OPERATORS: &[(&str, &str)] = &[
    ("and", "all conditions in the array hold"),
    ("or", "at least one condition in the array holds"),
    ("var", "field path, emitted verbatim"),
    ("==", "equal"),
    ("!=", "not equal"),
    (">", "greater than"),
    (">=", "greater than or equal"),
    ("<", "less than"),
    ("<=", "less than or equal"),
    ("in", "left side is in the right-hand list"),
    ("!", "left side is not in the right-hand list"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLogicCondition {
    options: TranslatorOptions,
}

impl JsonLogicCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TranslatorOptions) -> Self {
        JsonLogicCondition { options }
    }

    fn translate_pair(&self, key: &str, value: &Value, depth: usize) -> Result<String, ConditionalError> {
        let depth = self.options.descend(depth)?;
        trace!(operator = key, depth, "jsonlogic operator");

        let operator = key.to_lowercase();
        match operator.as_str() {
            "and" => self.translate_group(value, " AND ", "AND", depth),
            "or" => self.translate_group(value, " OR ", "OR", depth),
            "var" => translate_var(value),
            op => match COMPARISONS.iter().find(|(name, _, _)| *name == op) {
                Some(&(_, keyword, name)) => self.translate_comparison(value, keyword, name, depth),
                None => Err(ConditionalError::Unsupported(key.to_string())),
            },
        }
    }

    /// `and` / `or`: every pair of every object in the array is one operand.
    fn translate_group(
        &self,
        value: &Value,
        separator: &str,
        name: &'static str,
        depth: usize,
    ) -> Result<String, ConditionalError> {
        let Value::Array(operands) = value else {
            return Err(ConditionalError::BadFormatted(name));
        };

        let mut parts = Vec::with_capacity(operands.len());
        for operand in operands {
            let Value::Object(pairs) = operand else {
                return Err(ConditionalError::BadFormatted(name));
            };
            for (key, value) in pairs {
                parts.push(self.translate_pair(key, value, depth)?);
            }
        }

        if parts.is_empty() {
            return Err(ConditionalError::BadFormatted(name));
        }
        Ok(format!(" ({} ) ", parts.join(separator)))
    }

    fn translate_comparison(
        &self,
        value: &Value,
        keyword: &str,
        name: &'static str,
        depth: usize,
    ) -> Result<String, ConditionalError> {
        let operands = match value {
            Value::Array(operands) => operands,
            _ => return Err(ConditionalError::BadFormatted(name)),
        };

        let mut parts = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Value::Object(pairs) => {
                    for (key, value) in pairs {
                        parts.push(self.translate_pair(key, value, depth)?);
                    }
                }
                literal => parts.push(jsonlogic_literal(literal)),
            }
        }
        // `{}` operands render nothing, so the count is checked after rendering
        if parts.len() < 2 {
            return Err(ConditionalError::BadFormatted(name));
        }
        Ok(format!(" {} ", parts.join(keyword)))
    }
}

/// `{"var": "path"}` or `{"var": ["path", default]}`; the default is ignored.
fn translate_var(value: &Value) -> Result<String, ConditionalError> {
    let path = match value {
        Value::String(path) => path.as_str(),
        Value::Array(items) => items
            .first()
            .and_then(Value::as_str)
            .ok_or(ConditionalError::BadFormatted("VAR"))?,
        _ => return Err(ConditionalError::BadFormatted("VAR")),
    };
    Ok(format!(" {} ", path))
}

impl ConditionalParser for JsonLogicCondition {
    fn dialect(&self) -> Dialect {
        Dialect::JsonLogic
    }

    fn parse(&self, text: &str) -> Result<String, ConditionalError> {
        translate_document(Dialect::JsonLogic, text, |key, value| self.translate_pair(key, value, 0))
    }
}
