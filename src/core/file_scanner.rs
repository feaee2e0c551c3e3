use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::TEST_FILE_PATTERNS;

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// Patterns without `*` or `?` are literal paths, so `app/[id]` needs no escaping.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

pub struct ScanResult {
    /// Source files in sorted path order.
    pub files: BTreeSet<String>,
    /// Entries the walk could not read.
    pub skipped_count: usize,
}

/// Exclusion rules of one scan.
struct PathFilter {
    /// Literal entries, resolved against the base directory; they exclude
    /// everything below them.
    prefixes: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl PathFilter {
    fn new(base_dir: &Path, ignores: &[String], ignore_test_files: bool) -> Self {
        let mut prefixes = Vec::new();
        let mut patterns = Vec::new();

        for ignore in ignores {
            if !is_glob_pattern(ignore) {
                prefixes.push(base_dir.join(ignore));
                continue;
            }
            match Pattern::new(ignore) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn!(pattern = %ignore, "invalid ignore pattern: {}", e),
            }
        }

        if ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { prefixes, patterns }
    }

    fn excludes(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let text = path.to_string_lossy();
        self.patterns.iter().any(|pattern| pattern.matches(&text))
    }
}

/// Directories to walk: the base directory itself, or each `includes` entry
/// that exists. Glob entries expand to the directories they match.
fn walk_roots(base_dir: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        let path = base_dir.join(include);
        if !is_glob_pattern(include) {
            if path.exists() {
                roots.push(path);
            } else {
                warn!("include path does not exist: {}", path.display());
            }
            continue;
        }
        match glob(&path.to_string_lossy()) {
            Ok(matches) => roots.extend(matches.flatten().filter(|p| p.is_dir())),
            Err(e) => warn!(pattern = %include, "invalid include pattern: {}", e),
        }
    }
    roots
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Collect the JavaScript and TypeScript sources under `base_dir`.
///
/// Ignored directories are pruned rather than walked. Unreadable entries are
/// counted, logged and skipped.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
) -> ScanResult {
    let base_dir = Path::new(base_dir);
    let filter = PathFilter::new(base_dir, ignores, ignore_test_files);

    let mut result = ScanResult {
        files: BTreeSet::new(),
        skipped_count: 0,
    };

    for root in walk_roots(base_dir, includes) {
        let walker = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|entry: &DirEntry| !filter.excludes(entry.path()));
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_source_file(entry.path()) => {
                    result
                        .files
                        .insert(entry.path().to_string_lossy().into_owned());
                }
                Ok(_) => {}
                Err(e) => {
                    result.skipped_count += 1;
                    warn!("cannot access path: {}", e);
                }
            }
        }
    }

    debug!(files = result.files.len(), "scanned source tree");
    result
}
