//! Cargo-style rendering of diagnostics.
//!
//! ```text
//! error: Message MSG_A has no description  msg-no-description
//!   --> src/app.js:3:5
//!   |
//! 3 | var MSG_A = goog.getMsg('a');
//!   |     ^
//! ```
//!
//! Kept out of `core` so the pass can be used as a library.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::issues::{Issue, Report, ReportLocation, Severity};

pub const SUCCESS_MARK: &str = "\u{2713}";

pub const FAILURE_MARK: &str = "\u{2718}";

/// Print issues to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues, sorted by location, followed by a summary line.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let mut renderer = Renderer::new(writer, &sorted);
    for issue in &sorted {
        renderer.issue(issue);
    }
    renderer.summary(&sorted);
}

pub fn print_success_to<W: Write>(source_files: usize, messages: Option<usize>, writer: &mut W) {
    let files = plural(source_files, "source file", "source files");
    let text = match messages {
        Some(count) => format!(
            "Extracted {} from {} - no issues found",
            plural(count, "message", "messages"),
            files
        ),
        None => format!("Checked {} - no issues found", files),
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), text.green());
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

struct Location<'a> {
    file_path: &'a str,
    /// 0 for file-level issues.
    line: usize,
    /// 1-based.
    col: usize,
    source_line: Option<&'a str>,
}

impl<'a> Location<'a> {
    fn of(location: &'a ReportLocation<'a>) -> Self {
        match location {
            ReportLocation::Source(ctx) => Self {
                file_path: ctx.file_path(),
                line: ctx.line(),
                col: ctx.col(),
                source_line: ctx.source_line.as_deref(),
            },
            ReportLocation::File { path } => Self {
                file_path: path,
                line: 0,
                col: 0,
                source_line: None,
            },
        }
    }
}

struct Renderer<'w, W: Write> {
    writer: &'w mut W,
    /// Width of the line-number gutter, shared by every issue of a report.
    gutter: usize,
}

impl<'w, W: Write> Renderer<'w, W> {
    fn new(writer: &'w mut W, issues: &[Issue]) -> Self {
        let widest_line = issues
            .iter()
            .filter_map(|issue| match issue.location() {
                ReportLocation::Source(ctx) => Some(ctx.line()),
                ReportLocation::File { .. } => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            writer,
            gutter: widest_line.to_string().len(),
        }
    }

    fn issue(&mut self, issue: &Issue) {
        let location = issue.location();
        let location = Location::of(&location);
        let severity = issue.severity();

        let label = match severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };
        let _ = writeln!(
            self.writer,
            "{}: {}  {}",
            label,
            issue.message(),
            issue.rule().to_string().dimmed().cyan()
        );

        if location.line > 0 {
            let _ = writeln!(
                self.writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                location.file_path,
                location.line,
                location.col
            );
        } else {
            let _ = writeln!(self.writer, "  {} {}", "-->".blue(), location.file_path);
        }

        if let Some(source_line) = location.source_line {
            self.snippet(source_line, location.line, location.col, severity);
        }
        if let Some(details) = issue.details() {
            self.annotation("note:".bold(), &details);
        }
        if let Some(hint) = issue.hint() {
            self.annotation("hint:".bold().cyan(), hint);
        }

        let _ = writeln!(self.writer);
    }

    fn snippet(&mut self, source_line: &str, line: usize, col: usize, severity: Severity) {
        let caret = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };
        // Wide characters before the column shift the caret.
        let before: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let padding = UnicodeWidthStr::width(before.as_str());
        let gutter = self.gutter;

        let _ = writeln!(self.writer, "{:>gutter$} {}", "", "|".blue());
        let _ = writeln!(
            self.writer,
            "{:>gutter$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line
        );
        let _ = writeln!(
            self.writer,
            "{:>gutter$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret
        );
    }

    fn annotation(&mut self, label: ColoredString, text: &str) {
        let gutter = self.gutter;
        let _ = writeln!(self.writer, "{:>gutter$} {} {} {}", "", "=".blue(), label, text);
    }

    fn summary(&mut self, issues: &[Issue]) {
        let errors = issues.iter().filter(|i| i.is_error()).count();
        let warnings = issues.len() - errors;

        let _ = writeln!(
            self.writer,
            "{} {} problems ({}, {})",
            FAILURE_MARK.red(),
            issues.len(),
            plural(errors, "error", "errors").red(),
            plural(warnings, "warning", "warnings").yellow()
        );
    }
}
