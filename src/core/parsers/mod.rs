//! Source parsers.
//!
//! - `js`: JavaScript/TypeScript source file parser (uses swc for AST generation)

pub mod js;
