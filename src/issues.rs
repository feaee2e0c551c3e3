//! Issue types for message extraction results.
//!
//! Each diagnostic the visitor can raise is its own self-contained struct
//! carrying everything the reporter needs. Diagnostics are delivered through
//! a [`DiagnosticSink`]; the visitor never inspects what the sink does with them.

use enum_dispatch::enum_dispatch;

use crate::core::{MSG_FALLBACK_FUNCTION_NAME, MSG_FUNCTION_NAME, SourceContext, SourceLocation};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    NoDescription,
    EmptyText,
    Malformed,
    NoValue,
    DuplicateKey,
    OrphanedCall,
    LegacySyntax,
    BadFallbackSyntax,
    FallbackArgument,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::NoDescription => write!(f, "msg-no-description"),
            Rule::EmptyText => write!(f, "msg-empty-text"),
            Rule::Malformed => write!(f, "msg-malformed"),
            Rule::NoValue => write!(f, "msg-no-value"),
            Rule::DuplicateKey => write!(f, "msg-duplicate-key"),
            Rule::OrphanedCall => write!(f, "msg-orphaned-call"),
            Rule::LegacySyntax => write!(f, "msg-legacy-syntax"),
            Rule::BadFallbackSyntax => write!(f, "msg-bad-fallback"),
            Rule::FallbackArgument => write!(f, "msg-fallback-arg"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Message Definitions
// ============================================================

/// A `goog.getMsg` message without a `@desc` (or with a blank one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoDescriptionIssue {
    pub context: SourceContext,
    pub key: String,
    /// Error under the strict style, warning otherwise.
    pub severity: Severity,
}

impl NoDescriptionIssue {
    pub fn rule() -> Rule {
        Rule::NoDescription
    }
}

/// The message text is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTextIssue {
    pub context: SourceContext,
    pub key: String,
}

impl EmptyTextIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyText
    }
}

/// The value of a message definition doesn't have any accepted shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedIssue {
    pub context: SourceContext,
    /// Human readable reason, pointing at the offending node.
    pub reason: String,
}

impl MalformedIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Malformed
    }
}

/// A message variable or property declared without a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoValueIssue {
    pub context: SourceContext,
    pub key: String,
}

impl NoValueIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NoValue
    }
}

/// A named message key defined more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub context: SourceContext,
    pub key: String,
    /// Where the key was defined before this definition.
    pub previous: SourceLocation,
}

impl DuplicateKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateKey
    }
}

/// A `goog.getMsg` call that is not the value of any message definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanedCallIssue {
    pub context: SourceContext,
    pub severity: Severity,
}

impl OrphanedCallIssue {
    pub fn rule() -> Rule {
        Rule::OrphanedCall
    }
}

/// A message defined without `goog.getMsg` (plain string or function wrapper).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacySyntaxIssue {
    pub context: SourceContext,
    pub key: String,
    pub severity: Severity,
}

impl LegacySyntaxIssue {
    pub fn rule() -> Rule {
        Rule::LegacySyntax
    }
}

// ============================================================
// Issue Types - Fallback Calls
// ============================================================

/// `goog.getMsgWithFallback` not called with two message references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadFallbackSyntaxIssue {
    pub context: SourceContext,
}

impl BadFallbackSyntaxIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::BadFallbackSyntax
    }
}

/// A fallback argument that doesn't resolve to a known message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackArgumentIssue {
    pub context: SourceContext,
    /// The argument as written (`MSG_A`, `some.ns.MSG_A`).
    pub reference: String,
}

impl FallbackArgumentIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::FallbackArgument
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while extracting messages.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    NoDescription(NoDescriptionIssue),
    EmptyText(EmptyTextIssue),
    Malformed(MalformedIssue),
    NoValue(NoValueIssue),
    DuplicateKey(DuplicateKeyIssue),
    OrphanedCall(OrphanedCallIssue),
    LegacySyntax(LegacySyntaxIssue),
    BadFallbackSyntax(BadFallbackSyntaxIssue),
    FallbackArgument(FallbackArgumentIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

// ============================================================
// Diagnostic Sink
// ============================================================

/// Receives diagnostics as they are raised. Fire and forget.
pub trait DiagnosticSink {
    fn report(&mut self, issue: Issue);
}

impl DiagnosticSink for Vec<Issue> {
    fn report(&mut self, issue: Issue) {
        self.push(issue);
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (source_line is present unless remapped).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls
/// through the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for NoDescriptionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("Message {} has no description", self.key)
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("add a @desc JSDoc tag to the definition")
    }
}

impl Report for EmptyTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "Message value of {} is just an empty string. Empty messages are forbidden",
            self.key
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for MalformedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("Message parse tree malformed. {}", self.reason)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for NoValueIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("Message {} has no value", self.key)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for DuplicateKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("Duplicate message variable name found for {}", self.key)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "initial definition {}:{}",
            self.previous.file_path, self.previous.line
        ))
    }
}

impl Report for OrphanedCallIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "{}() function could be used only with MSG_* property or variable",
            MSG_FUNCTION_NAME
        )
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for LegacySyntaxIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "Message {} not initialized using {}",
            self.key, MSG_FUNCTION_NAME
        )
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for BadFallbackSyntaxIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "Bad syntax. Expected syntax: {}(MSG_1, MSG_2)",
            MSG_FALLBACK_FUNCTION_NAME
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for FallbackArgumentIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "Could not find message entry for fallback argument {}",
            self.reference
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
