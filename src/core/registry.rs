//! Messages seen so far in one traversal.
//!
//! Named messages are keyed by their key string. Unnamed messages are keyed
//! by the binding their name resolves to at the definition site, since the
//! same `MSG_UNNAMED_*` name may legitimately appear in unrelated scopes.

use std::collections::HashMap;

use crate::core::data::{Message, SourceLocation};
use crate::core::names::{MSG_PREFIX, is_unnamed_message_name};
use crate::core::scope::{BindingId, ScopeTracker};

#[derive(Debug)]
struct NamedEntry {
    message: Message,
    location: SourceLocation,
}

#[derive(Debug, Default)]
pub struct MessageRegistry {
    named: HashMap<String, NamedEntry>,
    unnamed: HashMap<BindingId, Message>,
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the message currently registered under `key`.
    pub fn location_of(&self, key: &str) -> Option<&SourceLocation> {
        self.named.get(key).map(|entry| &entry.location)
    }

    /// Store a named message. A later registration for the same key replaces
    /// the earlier one; the replaced entry's location is returned.
    pub fn register_named(
        &mut self,
        key: impl Into<String>,
        message: Message,
        location: SourceLocation,
    ) -> Option<SourceLocation> {
        self.named
            .insert(key.into(), NamedEntry { message, location })
            .map(|previous| previous.location)
    }

    pub fn register_unnamed(&mut self, binding: BindingId, message: Message) {
        self.unnamed.insert(binding, message);
    }

    pub fn named(&self, key: &str) -> Option<&Message> {
        self.named.get(key).map(|entry| &entry.message)
    }

    pub fn unnamed(&self, binding: BindingId) -> Option<&Message> {
        self.unnamed.get(&binding)
    }

    /// Resolve a message reference such as `MSG_FOO`, `$module$MSG_FOO` or
    /// `some.ns.MSG_FOO`.
    ///
    /// The key is the reference text from `MSG_` onward. Unnamed keys are
    /// resolved through the binding of the full reference in the current scope.
    pub fn lookup_by_qualified_reference(
        &self,
        scopes: &ScopeTracker,
        reference: &str,
    ) -> Option<&Message> {
        let key = &reference[reference.find(MSG_PREFIX)?..];
        if is_unnamed_message_name(key) {
            scopes
                .resolve(reference)
                .and_then(|binding| self.unnamed(binding))
        } else {
            self.named(key)
        }
    }

    pub fn len(&self) -> usize {
        self.named.len() + self.unnamed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
