//! jsmsg - i18n message extraction for `goog.getMsg`-style JavaScript
//!
//! jsmsg finds message definitions (`var MSG_X = goog.getMsg(...)` and
//! their variants) in JavaScript and TypeScript sources, validates them and
//! turns them into structured messages for translation tooling.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: The extraction pass
//! - `issues`: Diagnostic types and the `Report` trait
//! - `logger`: `tracing` subscriber setup for the binary

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logger;
