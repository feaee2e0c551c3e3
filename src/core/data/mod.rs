//! Core data types shared by the extraction pipeline.
//!
//! ## Module Structure
//!
//! - `message`: the canonical message model (`Message`, `Part`, `MessageBuilder`)
//! - `source`: source code location types (`SourceContext`, `SourceLocation`)
//! - `style`: how strictly definitions follow the `goog.getMsg` convention

pub mod message;
pub mod source;
pub mod style;

pub use message::{Message, MessageBuilder, MessageMetadata, Part};
pub use source::{SourceContext, SourceLocation};
pub use style::MessageStyle;
