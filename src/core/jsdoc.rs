//! JSDoc annotations attached to message definitions.
//!
//! Recognized tags:
//! - `@desc <text>`: the description shown to translators (may span lines)
//! - `@hidden`: the message is not shown to translators
//! - `@meaning <text>`: disambiguates messages with identical text
//! - `@alternateMessageId <id>`: id of an equivalent message to reuse translations from
//!
//! Any other tag ends the text of the preceding one and is otherwise ignored.

use swc_common::comments::{Comment, CommentKind};

use crate::core::data::MessageBuilder;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsDoc {
    pub desc: Option<String>,
    pub meaning: Option<String>,
    pub alternate_id: Option<String>,
    pub hidden: bool,
}

impl JsDoc {
    /// Parse the text of a block comment. Returns `None` unless it is a
    /// `/** ... */` comment.
    pub fn parse(comment: &Comment) -> Option<Self> {
        if comment.kind != CommentKind::Block {
            return None;
        }
        let body = comment.text.strip_prefix('*')?;

        let mut doc = JsDoc::default();
        let mut current: Option<(&str, Vec<&str>)> = None;

        let words = body
            .lines()
            .map(|line| line.trim_start().trim_start_matches('*'))
            .flat_map(str::split_whitespace);

        for word in words {
            if let Some(tag) = tag_name(word) {
                if let Some((name, text)) = current.take() {
                    doc.set_tag(name, &text);
                }
                current = Some((tag, Vec::new()));
            } else if let Some((_, text)) = current.as_mut() {
                text.push(word);
            }
        }
        if let Some((name, text)) = current {
            doc.set_tag(name, &text);
        }

        Some(doc)
    }

    fn set_tag(&mut self, name: &str, words: &[&str]) {
        let text = words.join(" ");
        match name {
            "desc" => self.desc = Some(text),
            "meaning" if !text.is_empty() => self.meaning = Some(text),
            "alternateMessageId" if !text.is_empty() => self.alternate_id = Some(text),
            "hidden" => self.hidden = true,
            _ => {}
        }
    }

    /// Copy the annotation into `builder`. Returns true when a description was present.
    pub fn apply_to(&self, builder: &mut MessageBuilder) -> bool {
        if let Some(desc) = &self.desc {
            builder.set_desc(desc.clone());
        }
        if self.hidden {
            builder.set_hidden(true);
        }
        if let Some(meaning) = &self.meaning {
            builder.set_meaning(meaning.clone());
        }
        if let Some(alternate_id) = &self.alternate_id {
            builder.set_alternate_id(alternate_id.clone());
        }
        self.desc.is_some()
    }
}

fn tag_name(word: &str) -> Option<&str> {
    let name = word.strip_prefix('@')?;
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        .then_some(name)
}

/// The JSDoc closest to the annotated node: the last `/** */` block among
/// its leading comments.
pub fn find_jsdoc(leading: &[Comment]) -> Option<JsDoc> {
    leading.iter().rev().find_map(JsDoc::parse)
}
