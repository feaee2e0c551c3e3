use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use swc_common::{
    BytePos, FileName, Globals, SourceMap, Spanned,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_ast::Program;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// Map of byte positions to comments.
pub type CommentMap = HashMap<BytePos, Vec<Comment>>;

/// Thread-safe extracted comments from SingleThreadedComments.
/// Extracted during parsing and stored independently of swc types.
#[derive(Debug, Clone, Default)]
pub struct ExtractedComments {
    pub leading: CommentMap,
    pub trailing: CommentMap,
}

impl ExtractedComments {
    /// Extract comments from SingleThreadedComments.
    /// This must be called before SingleThreadedComments is dropped.
    pub fn from_swc(comments: &SingleThreadedComments) -> Self {
        let (leading, trailing) = comments.borrow_all();
        Self {
            leading: leading.iter().map(|(k, v)| (*k, v.clone())).collect(),
            trailing: trailing.iter().map(|(k, v)| (*k, v.clone())).collect(),
        }
    }

    /// Merge another file's comments into this map.
    ///
    /// Positions never collide when both files live in the same `SourceMap`.
    pub fn extend(&mut self, other: ExtractedComments) {
        self.leading.extend(other.leading);
        self.trailing.extend(other.trailing);
    }

    /// Comments directly preceding the token at `pos`.
    pub fn leading_at(&self, pos: BytePos) -> &[Comment] {
        self.leading.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub struct ParsedSource {
    pub file_path: String,
    pub program: Program,
    pub comments: ExtractedComments,
}

impl ParsedSource {
    /// Scripts share the global scope; modules get their own.
    pub fn is_script(&self) -> bool {
        matches!(self.program, Program::Script(_))
    }
}

/// Pick the swc syntax for a file based on its extension.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax::default()),
        "tsx" => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a JavaScript or TypeScript source string into an AST.
///
/// Both scripts and ES modules are accepted. All files of one compilation
/// unit share `source_map`, which keeps byte positions (and therefore spans)
/// unique across files.
pub fn parse_js_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        let program = parser.parse_program().map_err(|e| {
            let line = source_map.lookup_char_pos(e.span().lo).line;
            anyhow!("{} (line {})", e.kind().msg(), line)
        })?;

        // Extract comments immediately (before SingleThreadedComments drops)
        let extracted_comments = ExtractedComments::from_swc(&comments);

        Ok(ParsedSource {
            file_path: file_path.to_string(),
            program,
            comments: extracted_comments,
        })
    })
}
