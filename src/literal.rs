//! SQL literal rendering shared by both dialects.
//!
//! Every function here is a pure function of its input. The exact spacing of
//! the returned text is part of the contract: callers concatenate fragments
//! without trimming, so a changed space shows up in the final query.
//!
//! # Examples
//!
//! ```
//! use json_conditional::Value;
//! use json_conditional::literal::{ibm_scalar, jsonlogic_literal};
//!
//! assert_eq!(ibm_scalar(" <= ", &Value::Integer(300)), " <= 300 ");
//! assert_eq!(jsonlogic_literal(&Value::String("O'Hara".into())), " 'O''Hara' ");
//! ```

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::value::Value;

/// The only date/time layout recognised in JSONLogic string literals.
pub const DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

// Seconds stop at 59: chrono would otherwise take `60` as a leap second
static DATETIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    // constant pattern, known to compile
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-5][0-9]$").expect("valid datetime pattern")
});

/// Check whether `s` is exactly `YYYY-MM-DD HH:MM:SS` and names a real
/// calendar date and time.
pub fn is_datetime(s: &str) -> bool {
    // chrono alone accepts short or signed years, so the shape is pinned first
    DATETIME_SHAPE.is_match(s) && NaiveDateTime::parse_from_str(s, DATETIME_LAYOUT).is_ok()
}

/// Render a relational keyword followed by a scalar, IBM style.
///
/// Strings are wrapped in single quotes, everything else uses its natural text
/// form. Embedded quotes are not doubled.
pub fn ibm_scalar(keyword: &str, value: &Value) -> String {
    match value {
        Value::String(s) => format!("{}'{}' ", keyword, s),
        other => format!("{}{} ", keyword, other),
    }
}

/// Render an IBM `$in`/`$nin` operand list as `('a','b')` or `(1,2)`.
///
/// The element type is taken from the first element only; later elements are
/// rendered the same way whatever their own type. Returns `None` for an empty
/// list or one that starts with anything but a string or a number.
pub fn ibm_list(items: &[Value]) -> Option<String> {
    match items.first()? {
        Value::String(_) => Some(format!("({})", quoted_join(items))),
        first if first.is_number() => Some(format!("({})", plain_join(items))),
        _ => None,
    }
}

/// Render a JSONLogic literal operand.
///
/// - date/time strings become `CONVERT(DATETIME, '...')`
/// - other strings are quoted with embedded `'` doubled
/// - non-empty arrays become a parenthesised list, quoted when the first
///   element is a string
/// - anything else uses its natural text form
pub fn jsonlogic_literal(value: &Value) -> String {
    match value {
        Value::String(s) if is_datetime(s) => format!(" CONVERT(DATETIME, '{}') ", s),
        Value::String(s) => format!(" '{}' ", s.replace('\'', "''")),
        Value::Array(items) => match items.first() {
            Some(Value::String(_)) => format!(" ({}) ", quoted_join(items)),
            Some(_) => format!("  ({}) ", plain_join(items)),
            None => format!(" {} ", value),
        },
        other => format!(" {} ", other),
    }
}

fn quoted_join(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| format!("'{}'", item))
        .collect::<Vec<_>>()
        .join(",")
}

fn plain_join(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
