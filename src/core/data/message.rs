use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::core::id::IdGenerator;
use crate::core::names::external_message_id;
use crate::core::text::{PlaceholderFormatError, parse_message_text};

/// One piece of message content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Part {
    /// Literal text shown to the user as-is.
    Text(String),
    /// Reference to a named placeholder supplied at the use site.
    Placeholder(String),
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Text(text) => write!(f, "{}", text),
            Part::Placeholder(name) => write!(f, "{{${}}}", name),
        }
    }
}

/// Metadata taken from the definition's JSDoc or legacy `_HELP` variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    pub desc: Option<String>,
    /// Disambiguates messages sharing the same text.
    pub meaning: Option<String>,
    pub alternate_id: Option<String>,
    pub hidden: bool,
}

/// A finalized, validated translatable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    key: Option<String>,
    id: String,
    parts: Vec<Part>,
    #[serde(flatten)]
    metadata: MessageMetadata,
    source_name: String,
    is_external: bool,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    placeholder_examples: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    placeholder_original_code: IndexMap<String, String>,
}

impl Message {
    /// Key as written in source; `None` for unnamed messages.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn metadata(&self) -> &MessageMetadata {
        &self.metadata
    }

    pub fn desc(&self) -> Option<&str> {
        self.metadata.desc.as_deref()
    }

    pub fn meaning(&self) -> Option<&str> {
        self.metadata.meaning.as_deref()
    }

    pub fn alternate_id(&self) -> Option<&str> {
        self.metadata.alternate_id.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.metadata.hidden
    }

    /// `file:line` of the definition (original file when source-mapped).
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Originates outside this compilation unit (`MSG_EXTERNAL_<id>`).
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    pub fn placeholder_examples(&self) -> &IndexMap<String, String> {
        &self.placeholder_examples
    }

    pub fn placeholder_original_code(&self) -> &IndexMap<String, String> {
        &self.placeholder_original_code
    }

    /// Placeholder names in order of first reference.
    pub fn placeholders(&self) -> IndexSet<&str> {
        placeholders_of(&self.parts)
    }

    /// True when the message has neither text nor placeholders.
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|part| match part {
            Part::Text(text) => text.is_empty(),
            Part::Placeholder(_) => false,
        })
    }

    /// Message text with placeholders rendered back as `{$name}`.
    pub fn to_text(&self) -> String {
        self.parts.iter().map(|part| part.to_string()).collect()
    }
}

fn placeholders_of(parts: &[Part]) -> IndexSet<&str> {
    parts
        .iter()
        .filter_map(|part| match part {
            Part::Placeholder(name) => Some(name.as_str()),
            Part::Text(_) => None,
        })
        .collect()
}

/// Mutable accumulator for one candidate definition.
///
/// A builder that is dropped without `build` leaves no trace anywhere.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    key: Option<String>,
    parts: Vec<Part>,
    metadata: MessageMetadata,
    source_name: String,
    placeholder_examples: IndexMap<String, String>,
    placeholder_original_code: IndexMap<String, String>,
}

impl MessageBuilder {
    pub fn new(key: Option<String>) -> Self {
        Self {
            key,
            ..Default::default()
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Key for use in human-readable error text.
    pub fn display_key(&self) -> &str {
        self.key.as_deref().unwrap_or("<unnamed>")
    }

    pub fn set_source_name(&mut self, source_name: impl Into<String>) -> &mut Self {
        self.source_name = source_name.into();
        self
    }

    pub fn set_desc(&mut self, desc: impl Into<String>) -> &mut Self {
        self.metadata.desc = Some(desc.into());
        self
    }

    pub fn set_meaning(&mut self, meaning: impl Into<String>) -> &mut Self {
        self.metadata.meaning = Some(meaning.into());
        self
    }

    pub fn set_alternate_id(&mut self, alternate_id: impl Into<String>) -> &mut Self {
        self.metadata.alternate_id = Some(alternate_id.into());
        self
    }

    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.metadata.hidden = hidden;
        self
    }

    /// Append literal text, merging with a preceding text part.
    pub fn append_string_part(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if let Some(Part::Text(last)) = self.parts.last_mut() {
            last.push_str(text);
        } else {
            self.parts.push(Part::Text(text.to_string()));
        }
        self
    }

    pub fn append_placeholder_reference(&mut self, name: impl Into<String>) -> &mut Self {
        self.parts.push(Part::Placeholder(name.into()));
        self
    }

    /// Parse `{$name}` placeholders out of `text` and append the resulting parts.
    pub fn set_msg_text(&mut self, text: &str) -> Result<&mut Self, PlaceholderFormatError> {
        for part in parse_message_text(text)? {
            match part {
                Part::Text(text) => self.append_string_part(&text),
                Part::Placeholder(name) => self.append_placeholder_reference(name),
            };
        }
        Ok(self)
    }

    /// Placeholder names referenced so far, in order of first reference.
    pub fn placeholders(&self) -> IndexSet<&str> {
        placeholders_of(&self.parts)
    }

    pub fn set_placeholder_examples(&mut self, examples: IndexMap<String, String>) -> &mut Self {
        self.placeholder_examples = examples;
        self
    }

    pub fn set_placeholder_original_code(
        &mut self,
        original_code: IndexMap<String, String>,
    ) -> &mut Self {
        self.placeholder_original_code = original_code;
        self
    }

    /// Finalize the message, computing its id exactly once.
    pub fn build(self, id_generator: &dyn IdGenerator) -> Message {
        let external_id = self
            .key
            .as_deref()
            .and_then(external_message_id)
            .map(str::to_string);
        let is_external = external_id.is_some();
        let id = match external_id {
            Some(id) => id,
            None => id_generator.generate_id(self.key.as_deref(), &self.parts, &self.metadata),
        };

        Message {
            key: self.key,
            id,
            parts: self.parts,
            metadata: self.metadata,
            source_name: self.source_name,
            is_external,
            placeholder_examples: self.placeholder_examples,
            placeholder_original_code: self.placeholder_original_code,
        }
    }
}
