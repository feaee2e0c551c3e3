//! Message text parsing.
//!
//! `goog.getMsg` text refers to placeholders with the `{$name}` syntax:
//!
//! ```text
//! 'Hi {$userName}! Welcome to {$product}.'
//! ```
//!
//! is split into `Text("Hi ")`, `Placeholder("userName")`, `Text("! Welcome to ")`,
//! `Placeholder("product")`, `Text(".")`.

use thiserror::Error;

use crate::core::data::Part;

const PLACEHOLDER_START: &str = "{$";
const PLACEHOLDER_END: char = '}';

/// The message text contains a placeholder reference that is not well formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceholderFormatError {
    #[error("placeholder opened at byte {0} is never closed")]
    Unterminated(usize),
    #[error("placeholder at byte {0} has an empty name")]
    EmptyName(usize),
}

/// Split message text into literal text spans and placeholder references.
///
/// Empty text spans are never produced; ordering follows the source text.
pub fn parse_message_text(text: &str) -> Result<Vec<Part>, PlaceholderFormatError> {
    let mut parts = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(PLACEHOLDER_START) {
        let start = pos + offset;
        if start > pos {
            parts.push(Part::Text(text[pos..start].to_string()));
        }

        let name_start = start + PLACEHOLDER_START.len();
        let Some(len) = text[name_start..].find(PLACEHOLDER_END) else {
            return Err(PlaceholderFormatError::Unterminated(start));
        };
        if len == 0 {
            return Err(PlaceholderFormatError::EmptyName(start));
        }

        parts.push(Part::Placeholder(
            text[name_start..name_start + len].to_string(),
        ));
        pos = name_start + len + PLACEHOLDER_END.len_utf8();
    }

    if pos < text.len() {
        parts.push(Part::Text(text[pos..].to_string()));
    }

    Ok(parts)
}
