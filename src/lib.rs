//! Translate JSON conditional expressions into SQL `WHERE` fragments.
//!
//! Two input syntaxes are supported: the IBM style with `$`-prefixed
//! operators and JSONLogic with bare operator keywords. Pick one with
//! [`Dialect`] and call [`ConditionalParser::parse`]:
//!
//! ```
//! use json_conditional::{ConditionalParser, Dialect};
//!
//! let parser = Dialect::JsonLogic.parser();
//! let sql = parser.parse(r#"{"==": [{"var": "status"}, "open"]}"#).unwrap();
//! assert_eq!(sql, "  status  =  'open'  ");
//! ```

pub mod cli;
pub mod dialect;
pub mod error;
pub mod ibm;
pub mod jsonlogic;
pub mod literal;
pub mod value;

pub use dialect::{ConditionalParser, DEFAULT_MAX_DEPTH, Dialect, TranslatorOptions, UnknownDialect, new};
pub use error::ConditionalError;
pub use ibm::IbmCondition;
pub use jsonlogic::JsonLogicCondition;
pub use value::Value;
