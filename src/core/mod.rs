//! Message extraction and validation pass.
//!
//! ## Module Structure
//!
//! - `parsers`: swc parsing of JavaScript/TypeScript sources
//! - `context`: compilation unit (parsed inputs) and per-command context
//! - `visitor`: the traversal that finds and validates message definitions
//! - `extract`: value shapes accepted for message definitions
//! - `registry`, `scope`: messages and bindings seen during one traversal
//! - `jsdoc`, `names`, `text`: annotation, naming and message text conventions
//! - `id`: message id strategies
//! - `consumer`: what happens to validated messages
//! - `source_mapping`: remapping of reported locations

pub mod consumer;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod id;
pub mod jsdoc;
pub mod names;
pub mod parsers;
pub mod registry;
pub mod scope;
pub mod source_mapping;
pub mod text;
pub mod visitor;

pub use consumer::{
    DefinitionKind, ExtractedMessages, FallbackPair, LintOnly, MessageConsumer, MessageDefinition,
};
pub use context::{CheckContext, CompilationUnit};
pub use data::{Message, MessageBuilder, MessageMetadata, MessageStyle, Part, SourceContext, SourceLocation};
pub use id::{FingerprintIdGenerator, IdGenerator, IdStrategy, KeyIdGenerator};
pub use names::{MSG_FALLBACK_FUNCTION_NAME, MSG_FUNCTION_NAME, MSG_PREFIX};
pub use source_mapping::{LineMapping, OriginalMapping, SourceMapping};
pub use visitor::{MessageVisitor, RenameMap, VisitorOptions};
