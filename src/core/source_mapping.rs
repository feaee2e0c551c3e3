//! Mapping generated locations back to original sources.

use std::collections::HashMap;

/// An original (pre-transformation) position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalMapping {
    pub file: String,
    pub line: usize,
}

impl OriginalMapping {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Answers where a generated position came from, if known.
pub trait SourceMapping {
    fn original_location(&self, file: &str, line: usize, col: usize) -> Option<OriginalMapping>;
}

/// In-memory line-granular mapping. The column is ignored.
#[derive(Debug, Clone, Default)]
pub struct LineMapping {
    lines: HashMap<(String, usize), OriginalMapping>,
}

impl LineMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: impl Into<String>, line: usize, original: OriginalMapping) {
        self.lines.insert((file.into(), line), original);
    }
}

impl SourceMapping for LineMapping {
    fn original_location(&self, file: &str, line: usize, _col: usize) -> Option<OriginalMapping> {
        self.lines.get(&(file.to_string(), line)).cloned()
    }
}
