use swc_common::Span;
use thiserror::Error;

/// A message definition whose value doesn't have any accepted shape.
///
/// Raised anywhere inside value extraction and handled once per definition
/// by the visitor, which turns it into a `msg-malformed` diagnostic located
/// at `span` and drops the partially built message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct MalformedError {
    pub reason: String,
    /// The offending node.
    pub span: Span,
}

impl MalformedError {
    pub fn new(reason: impl Into<String>, span: Span) -> Self {
        Self {
            reason: reason.into(),
            span,
        }
    }
}

pub type ExtractResult<T = ()> = Result<T, MalformedError>;
