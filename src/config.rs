//! The `.jsmsgrc.json` project file.
//!
//! Lookup starts at the source root and walks up through its ancestors until
//! a file is found or a repository root (a directory holding `.git`) has been
//! checked. Missing fields take their defaults, so `{}` is a valid file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{IdStrategy, MessageStyle};

pub const CONFIG_FILE_NAME: &str = ".jsmsgrc.json";

/// Test sources skipped when `ignoreTestFiles` is on.
pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*_test.js",
    "**/*.test.js",
    "**/*.test.ts",
    "**/*.spec.js",
    "**/*.spec.ts",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories to scan, relative to the source root. Empty scans the root.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Files contributing global declarations only.
    #[serde(default)]
    pub externs: Vec<String>,
    #[serde(default = "enabled")]
    pub ignore_test_files: bool,
    #[serde(default)]
    pub style: MessageStyle,
    #[serde(default)]
    pub id_generator: IdStrategy,
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            externs: Vec::new(),
            ignore_test_files: enabled(),
            style: MessageStyle::default(),
            id_generator: IdStrategy::default(),
        }
    }
}

impl Config {
    /// Reject patterns the scanner could not use.
    ///
    /// `ignores` are always compiled as globs. `includes` entries are only
    /// globs when they contain a wildcard. `externs` name single files.
    pub fn validate(&self) -> Result<()> {
        for ignore in &self.ignores {
            compile_pattern("ignores", ignore)?;
        }
        for include in self.includes.iter().filter(|i| i.contains(['*', '?'])) {
            compile_pattern("includes", include)?;
        }
        if let Some(extern_path) = self.externs.iter().find(|e| e.contains(['*', '?'])) {
            bail!(
                "Invalid entry in 'externs': \"{}\" (extern files must be listed individually)",
                extern_path
            );
        }
        Ok(())
    }
}

fn compile_pattern(field: &str, pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern)
        .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, pattern))
}

/// The configuration written by `jsmsg init`.
pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to generate default config.")
}

/// Search `start_dir` and its ancestors, stopping at a repository root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .scan(false, |reached_root, dir| {
            if *reached_root {
                return None;
            }
            *reached_root = dir.join(".git").exists();
            Some(dir.join(CONFIG_FILE_NAME))
        })
        .find(|candidate| candidate.is_file())
}

pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the configuration came from; `None` means built-in defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(ConfigLoadResult {
        config,
        path: Some(path),
    })
}
