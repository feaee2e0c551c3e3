//! Message value extraction.
//!
//! - `malformed`: the malformed-input signal raised on any shape violation
//! - `value`: extraction of literal, function wrapper and `goog.getMsg` values

pub mod malformed;
pub mod value;

pub use malformed::{ExtractResult, MalformedError};
pub use value::{
    VariableValue, callee_matches, extract_from_call, extract_from_function, extract_string,
    qualified_name, unwrap_parens,
};
