//! Naming conventions for message variables and placeholders.
//!
//! All predicates here are pure functions over identifier text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::data::MessageStyle;

/// Every message variable or property starts with this prefix.
pub const MSG_PREFIX: &str = "MSG_";

/// Legacy convention: `MSG_FOO_HELP` holds the description of `MSG_FOO`.
pub const DESC_SUFFIX: &str = "_HELP";

/// A legacy `_HELP` description starting with this marker hides the message.
pub const HIDDEN_DESC_PREFIX: &str = "@hidden";

/// Function constructing a single message.
pub const MSG_FUNCTION_NAME: &str = "goog.getMsg";

/// Function selecting between two already defined messages.
pub const MSG_FALLBACK_FUNCTION_NAME: &str = "goog.getMsgWithFallback";

/// Names produced by templating systems that don't guarantee uniqueness.
const UNNAMED_PREFIX: &str = "MSG_UNNAMED";

/// Scope rewriting gives aliased declarations a unique prefix:
/// `$jscomp$scope$<digits and dollars>$MSG_...`.
static SCOPED_ALIASES_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$jscomp\$scope\$\S+\$MSG_").unwrap());

static CAMEL_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*[_0-9]*$").unwrap());

static EXTERNAL_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^MSG_EXTERNAL_([0-9]+)$").unwrap());

/// Whether `identifier` names a message definition.
///
/// Outside the strict style, a legacy-valued `MSG_*_HELP` is a description
/// companion and not a message of its own.
pub fn is_message_name(identifier: &str, is_new_style: bool, style: MessageStyle) -> bool {
    (identifier.starts_with(MSG_PREFIX) || is_scoped_aliases_prefix(identifier))
        && (style.is_strict() || is_new_style || !identifier.ends_with(DESC_SUFFIX))
}

pub fn is_unnamed_message_name(identifier: &str) -> bool {
    identifier.starts_with(UNNAMED_PREFIX)
}

pub fn is_scoped_aliases_prefix(name: &str) -> bool {
    SCOPED_ALIASES_PREFIX_REGEX.is_match(name)
}

/// `$jscomp$scope$12$0$MSG_FOO` -> `MSG_FOO`. Other names are returned as-is.
pub fn remove_scoped_aliases_prefix(name: &str) -> Cow<'_, str> {
    SCOPED_ALIASES_PREFIX_REGEX.replace(name, MSG_PREFIX)
}

/// Placeholder names are lowerCamelCase, optionally followed by `_` and digit suffixes.
pub fn is_lower_camel_case_with_numeric_suffixes(input: &str) -> bool {
    CAMEL_CASE_REGEX.is_match(input)
}

/// The id carried by an external message key (`MSG_EXTERNAL_123` -> `123`).
pub fn external_message_id(key: &str) -> Option<&str> {
    EXTERNAL_KEY_REGEX
        .captures(key)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
