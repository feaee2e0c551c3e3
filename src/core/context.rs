use std::{
    cell::OnceCell,
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use swc_common::SourceMap;
use tracing::{debug, info, warn};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        consumer::MessageConsumer,
        file_scanner::scan_files,
        parsers::js::{ExtractedComments, ParsedSource, parse_js_source},
        visitor::{MessageVisitor, VisitorOptions},
    },
    issues::{Issue, ParseErrorIssue},
};

// ============================================================
// Compilation unit
// ============================================================

/// Every parsed input of one run.
///
/// All files share one `SourceMap`, so a `Span` identifies a node across
/// the whole unit. Inputs are kept in sorted path order.
pub struct CompilationUnit {
    pub source_map: Arc<SourceMap>,
    /// Comments of every file, merged.
    pub comments: ExtractedComments,
    /// Files contributing global declarations only.
    pub externs: Vec<ParsedSource>,
    pub sources: Vec<ParsedSource>,
    /// Files that could not be read or parsed. They are absent from
    /// `externs` and `sources`.
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl CompilationUnit {
    /// Read and parse the given files.
    pub fn parse(externs: &[String], sources: &[String]) -> Self {
        let mut parse_errors = Vec::new();
        let externs = read_inputs(externs, &mut parse_errors);
        let sources = read_inputs(sources, &mut parse_errors);

        let mut unit = Self::from_code(externs, sources);
        parse_errors.append(&mut unit.parse_errors);
        parse_errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));
        unit.parse_errors = parse_errors;
        unit
    }

    /// Parse in-memory `(path, code)` inputs.
    pub fn from_code(externs: Vec<(String, String)>, sources: Vec<(String, String)>) -> Self {
        let source_map: Arc<SourceMap> = Default::default();
        let mut parse_errors = Vec::new();

        let mut externs = parse_inputs(externs, &source_map, &mut parse_errors);
        let mut sources = parse_inputs(sources, &source_map, &mut parse_errors);

        let mut comments = ExtractedComments::default();
        for parsed in externs.iter_mut().chain(sources.iter_mut()) {
            comments.extend(std::mem::take(&mut parsed.comments));
        }

        Self {
            source_map,
            comments,
            externs,
            sources,
            parse_errors,
        }
    }
}

fn read_inputs(paths: &[String], errors: &mut Vec<ParseErrorIssue>) -> Vec<(String, String)> {
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| (path.clone(), std::fs::read_to_string(path)))
        .collect();

    let mut inputs = Vec::with_capacity(results.len());
    for (file_path, result) in results {
        match result {
            Ok(code) => inputs.push((file_path, code)),
            Err(e) => {
                warn!(file = %file_path, "failed to read file: {}", e);
                errors.push(ParseErrorIssue {
                    file_path,
                    error: format!("Failed to read file: {}", e),
                });
            }
        }
    }
    inputs
}

fn parse_inputs(
    mut inputs: Vec<(String, String)>,
    source_map: &Arc<SourceMap>,
    errors: &mut Vec<ParseErrorIssue>,
) -> Vec<ParsedSource> {
    inputs.sort_by(|a, b| a.0.cmp(&b.0));

    let results: Vec<_> = inputs
        .into_par_iter()
        .map(|(file_path, code)| {
            let result = parse_js_source(code, &file_path, Arc::clone(source_map));
            (file_path, result)
        })
        .collect();

    let mut parsed = Vec::with_capacity(results.len());
    for (file_path, result) in results {
        match result {
            Ok(source) => parsed.push(source),
            Err(e) => {
                warn!(file = %file_path, "failed to parse: {}", e);
                errors.push(ParseErrorIssue {
                    file_path,
                    error: e.to_string(),
                });
            }
        }
    }
    parsed
}

// ============================================================
// Check context
// ============================================================

/// Configuration and inputs of one command invocation.
///
/// Parsing happens on first access to [`CheckContext::unit`].
///
/// Configuration priority, highest first: CLI arguments, the
/// `.jsmsgrc.json` file, built-in defaults.
pub struct CheckContext {
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Source files to extract from, sorted.
    pub files: BTreeSet<String>,

    /// Extern files, resolved against `root_dir`.
    pub externs: Vec<String>,

    unit: OnceCell<CompilationUnit>,
}

impl CheckContext {
    /// Load configuration and scan source files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the source root is not
    /// valid UTF-8.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        match &config_result.path {
            Some(config_path) => info!(path = %config_path.display(), "loaded configuration"),
            None => info!("no .jsmsgrc.json found, using default configuration"),
        }

        let mut config = config_result.config;
        if let Some(style) = common_args.style {
            config.style = style;
        }
        if let Some(id_generator) = common_args.id_generator {
            config.id_generator = id_generator;
        }

        let externs: Vec<String> = config
            .externs
            .iter()
            .map(|extern_path| root_dir.join(extern_path).to_string_lossy().into_owned())
            .collect();

        let mut scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
        );
        if scan_result.skipped_count > 0 {
            warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }
        for extern_path in &externs {
            scan_result.files.remove(extern_path);
        }
        debug!(
            files = scan_result.files.len(),
            externs = externs.len(),
            style = %config.style,
            "scanned sources"
        );

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            externs,
            unit: OnceCell::new(),
        })
    }

    /// Parsed externs and sources (lazy initialization).
    pub fn unit(&self) -> &CompilationUnit {
        self.unit.get_or_init(|| {
            let files: Vec<String> = self.files.iter().cloned().collect();
            CompilationUnit::parse(&self.externs, &files)
        })
    }

    /// Run one traversal, feeding `consumer`.
    ///
    /// Returns every diagnostic of the run, parse errors included, sorted
    /// by location.
    pub fn run(&self, consumer: &mut dyn MessageConsumer) -> Vec<Issue> {
        let unit = self.unit();
        let mut issues: Vec<Issue> = unit
            .parse_errors
            .iter()
            .cloned()
            .map(Issue::from)
            .collect();

        let options = VisitorOptions {
            style: self.config.style,
        };
        MessageVisitor::new(
            options,
            self.config.id_generator.generator(),
            consumer,
            &mut issues,
        )
        .process(unit);

        issues.sort();
        issues
    }
}
