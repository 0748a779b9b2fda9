use std::fmt;

use crate::error::ConditionalError;

/// A decoded JSON value as seen by the translators.
///
/// Integers and floats are kept apart the way the decoder reports them, and
/// objects keep their keys in document order so that translating the same text
/// twice yields the same fragment.
///
/// # Examples
///
/// ```
/// use json_conditional::Value;
///
/// let value = Value::decode(r#"{"age": {"$gt": 30}}"#).unwrap();
/// let Value::Object(pairs) = value else { panic!("not an object") };
/// assert_eq!(pairs[0].0, "age");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Non-negative integer above `i64::MAX`, kept exact
    Unsigned(u64),

    /// UTF-8 string
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Object as key/value pairs in document order, keys unique
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Decode JSON text into a value tree.
    pub fn decode(text: &str) -> Result<Self, ConditionalError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from(json))
    }

    /// Short lowercase name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Float(_) | Value::Integer(_) | Value::Unsigned(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Unsigned(_) | Value::Float(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Natural text form of a value as it appears inside a SQL fragment.
///
/// Strings print verbatim (no quoting), floats with an integral value print
/// without a decimal point, and null prints as `NULL`. Arrays and objects get a
/// compact bracketed form; well-formed conditions never render them this way.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Float(n) => write!(f, "{}", n),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Unsigned(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(pairs) => {
                write!(f, "{{")?;
                for (i, (key, item)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{}", key, item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Unsigned(u)
                } else {
                    // as_f64 only fails for arbitrary-precision numbers,
                    // which this crate does not enable
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
