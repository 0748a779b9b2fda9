//! Translator for the IBM conditional syntax.
//!
//! Keys starting with `$` are operators; any other key is a field path. A
//! field path maps either to a scalar (equality) or to an object of operators
//! applied to that field:
//!
//! ```text
//! {"$or": [{"age": {"$lte": 30}}, {"name": "Ann"}]}
//!   =>  " ( age  <= 30  OR  name  = 'Ann'  ) "
//! ```

use tracing::trace;

use crate::dialect::{ConditionalParser, Dialect, TranslatorOptions, translate_document};
use crate::error::ConditionalError;
use crate::literal::{ibm_list, ibm_scalar};
use crate::value::Value;

/// Operators understood by [`IbmCondition`], with a short description.
pub const OPERATORS: &[(&str, &str)] = &[
    ("$and", "all conditions in the array hold"),
    ("$or", "at least one condition in the array holds"),
    ("$not", "the nested condition does not hold"),
    ("$nor", "not supported, always an error"),
    ("$ne", "not equal (value emitted unquoted)"),
    ("$in", "value is one of the listed values"),
    ("$nin", "value is none of the listed values"),
    ("$lt", "less than"),
    ("$lte", "less than or equal"),
    ("$gt", "greater than"),
    ("$gte", "greater than or equal"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct IbmCondition {
    options: TranslatorOptions,
}

impl IbmCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TranslatorOptions) -> Self {
        IbmCondition { options }
    }

    fn translate_pair(&self, key: &str, value: &Value, depth: usize) -> Result<String, ConditionalError> {
        let depth = self.options.descend(depth)?;
        if !key.starts_with('$') {
            return self.translate_field(key, value, depth);
        }

        trace!(operator = key, depth, "ibm operator");
        match key.to_lowercase().as_str() {
            "$and" => self.translate_group(value, " AND ", "AND", depth),
            "$or" => self.translate_group(value, " OR ", "OR", depth),
            "$not" => match value {
                Value::Object(pairs) => Ok(format!(" NOT ({})", self.translate_pairs(pairs, depth)?)),
                _ => Err(ConditionalError::BadFormatted("NOT")),
            },
            "$nor" => Err(ConditionalError::NorNotImplemented),
            // Unquoted even for strings; callers depend on it
            "$ne" => Ok(format!(" != {}", value)),
            "$in" => translate_list(value, " IN ", "IN"),
            "$nin" => translate_list(value, " NOT IN ", "NOT IN"),
            "$lte" => Ok(ibm_scalar(" <= ", value)),
            "$gte" => Ok(ibm_scalar(" >= ", value)),
            "$gt" => Ok(ibm_scalar(" > ", value)),
            "$lt" => Ok(ibm_scalar(" < ", value)),
            _ => Err(ConditionalError::Unsupported(key.to_string())),
        }
    }

    fn translate_field(&self, field: &str, value: &Value, depth: usize) -> Result<String, ConditionalError> {
        let mut query = format!(" {} ", field);
        match value {
            Value::Object(pairs) => query.push_str(&self.translate_pairs(pairs, depth)?),
            scalar => query.push_str(&ibm_scalar(" = ", scalar)),
        }
        Ok(query)
    }

    /// `$and` / `$or`: every pair of every object in the array is one operand.
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

    fn translate_pairs(&self, pairs: &[(String, Value)], depth: usize) -> Result<String, ConditionalError> {
        let mut query = String::new();
        for (key, value) in pairs {
            query.push_str(&self.translate_pair(key, value, depth)?);
        }
        Ok(query)
    }
}

fn translate_list(value: &Value, keyword: &str, name: &'static str) -> Result<String, ConditionalError> {
    match value {
        Value::Array(items) => ibm_list(items)
            .map(|list| format!("{}{}", keyword, list))
            .ok_or(ConditionalError::BadFormatted(name)),
        _ => Err(ConditionalError::BadFormatted(name)),
    }
}

impl ConditionalParser for IbmCondition {
    fn dialect(&self) -> Dialect {
        Dialect::Ibm
    }

    fn parse(&self, text: &str) -> Result<String, ConditionalError> {
        translate_document(Dialect::Ibm, text, |key, value| self.translate_pair(key, value, 0))
    }
}
