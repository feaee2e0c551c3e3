//! Downstream consumers of validated messages.
//!
//! The visitor knows nothing about what happens to a message once it is
//! validated; it hands each one to the `MessageConsumer` it was built with.

use serde::Serialize;
use swc_common::Span;
use swc_ecma_ast::CallExpr;

use crate::core::data::{Message, SourceLocation};

/// Syntactic form of a message definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DefinitionKind {
    /// `var MSG_X = ...;`
    Variable,
    /// `a.b.MSG_X = ...;`
    Assignment,
    /// `{MSG_X: ...}`
    ObjectKey,
}

/// Where a validated message was defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefinition {
    pub kind: DefinitionKind,
    /// Span of the message value (the `goog.getMsg` call for current-style messages).
    pub value_span: Span,
    /// Location of the message value.
    pub location: SourceLocation,
}

/// Receives the results of one traversal.
pub trait MessageConsumer {
    /// Called once for every extracted and validated message, including
    /// messages that were reported as duplicates.
    fn on_validated_message(&mut self, message: &Message, definition: &MessageDefinition);

    /// Called once for every `goog.getMsgWithFallback(MSG_A, MSG_B)` whose
    /// arguments both resolved.
    fn on_fallback_pair(&mut self, _call: &CallExpr, _first: &Message, _second: &Message) {}
}

/// Discards everything. Used when only diagnostics matter.
#[derive(Debug, Default)]
pub struct LintOnly;

impl MessageConsumer for LintOnly {
    fn on_validated_message(&mut self, _message: &Message, _definition: &MessageDefinition) {}
}

/// A resolved fallback construct, by message id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackPair {
    pub first: String,
    pub second: String,
}

/// Collects messages and fallback pairs for extraction output.
#[derive(Debug, Default, Serialize)]
pub struct ExtractedMessages {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<FallbackPair>,
}

impl ExtractedMessages {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageConsumer for ExtractedMessages {
    fn on_validated_message(&mut self, message: &Message, _definition: &MessageDefinition) {
        self.messages.push(message.clone());
    }

    fn on_fallback_pair(&mut self, _call: &CallExpr, first: &Message, second: &Message) {
        self.fallbacks.push(FallbackPair {
            first: first.id().to_string(),
            second: second.id().to_string(),
        });
    }
}
