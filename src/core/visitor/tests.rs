use pretty_assertions::assert_eq;

use crate::core::consumer::{ExtractedMessages, FallbackPair};
use crate::core::context::CompilationUnit;
use crate::core::data::{Message, MessageStyle, Part};
use crate::core::id::KeyIdGenerator;
use crate::core::source_mapping::{LineMapping, OriginalMapping};
use crate::core::visitor::*;
use crate::issues::{Issue, Report, ReportLocation, Rule, Severity};

struct Outcome {
    extracted: ExtractedMessages,
    issues: Vec<Issue>,
}

impl Outcome {
    fn rules(&self) -> Vec<Rule> {
        self.issues.iter().map(Issue::rule).collect()
    }

    fn keys(&self) -> Vec<Option<&str>> {
        self.extracted.messages.iter().map(Message::key).collect()
    }

    fn message(&self, key: &str) -> &Message {
        self.extracted
            .messages
            .iter()
            .find(|m| m.key() == Some(key))
            .unwrap_or_else(|| panic!("no message {}", key))
    }

    fn only_issue(&self) -> &Issue {
        assert_eq!(self.issues.len(), 1, "issues: {:?}", self.issues);
        &self.issues[0]
    }
}

fn owned(inputs: &[(&str, &str)]) -> Vec<(String, String)> {
    inputs
        .iter()
        .map(|(path, code)| (path.to_string(), code.to_string()))
        .collect()
}

fn unit(externs: &[(&str, &str)], sources: &[(&str, &str)]) -> CompilationUnit {
    let unit = CompilationUnit::from_code(owned(externs), owned(sources));
    assert!(unit.parse_errors.is_empty(), "{:?}", unit.parse_errors);
    unit
}

fn process_unit(style: MessageStyle, unit: &CompilationUnit) -> Outcome {
    let mut extracted = ExtractedMessages::new();
    let mut issues = Vec::new();
    MessageVisitor::new(
        VisitorOptions { style },
        &KeyIdGenerator,
        &mut extracted,
        &mut issues,
    )
    .process(unit);
    Outcome { extracted, issues }
}

fn process(style: MessageStyle, sources: &[(&str, &str)]) -> Outcome {
    process_unit(style, &unit(&[], sources))
}

fn extract(code: &str) -> Outcome {
    process(MessageStyle::Closure, &[("a.js", code)])
}

fn position(issue: &Issue) -> (String, usize, usize) {
    match issue.location() {
        ReportLocation::Source(ctx) => (ctx.file_path().to_string(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path.to_string(), 0, 0),
    }
}

// ============================================================
// Definition sites
// ============================================================

#[test]
fn test_variable_message() {
    let outcome = extract(
        "/** @desc Says hello. */\nvar MSG_HELLO = goog.getMsg('Hello, {$name}!', {'name': userName});",
    );

    assert_eq!(outcome.rules(), vec![]);
    let message = outcome.message("MSG_HELLO");
    assert_eq!(message.id(), "MSG_HELLO");
    assert_eq!(
        message.parts(),
        &[
            Part::Text("Hello, ".to_string()),
            Part::Placeholder("name".to_string()),
            Part::Text("!".to_string()),
        ]
    );
    assert_eq!(message.desc(), Some("Says hello."));
    assert_eq!(message.source_name(), "a.js:2");
}

#[test]
fn test_assignment_message_with_meaning() {
    let outcome = extract(
        "/**\n * @desc Shown on the save button.\n * @meaning verb\n */\napp.messages.MSG_SAVE = goog.getMsg('Save');",
    );

    assert_eq!(outcome.rules(), vec![]);
    let message = outcome.message("MSG_SAVE");
    assert_eq!(message.desc(), Some("Shown on the save button."));
    assert_eq!(message.meaning(), Some("verb"));
}

#[test]
fn test_object_key_message() {
    let outcome = extract(
        r#"var msgs = {
  /** @desc Save */
  MSG_SAVE: goog.getMsg('Save'),
  'MSG_QUOTED': 'anything',
};"#,
    );

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(outcome.keys(), vec![Some("MSG_SAVE")]);
    assert_eq!(outcome.message("MSG_SAVE").desc(), Some("Save"));
}

#[test]
fn test_exported_message_takes_export_jsdoc() {
    let outcome = extract("/** @desc Exported. */\nexport const MSG_EXPORTED = goog.getMsg('Exported');");

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(outcome.message("MSG_EXPORTED").desc(), Some("Exported."));
}

#[test]
fn test_parenthesized_call_is_consumed() {
    let outcome = extract("/** @desc d */ var MSG_A = (goog.getMsg('a'));");

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(outcome.message("MSG_A").to_text(), "a");
}

#[test]
fn test_non_message_names_are_ignored() {
    let outcome = extract("var greeting = 'hi';\nvar {MSG_A} = obj;\nvar {x: MSG_B} = obj;");

    assert_eq!(outcome.rules(), vec![]);
    assert!(outcome.extracted.messages.is_empty());
}

#[test]
fn test_legal_aliases_are_skipped() {
    let outcome = extract(
        "/** @desc d */ var MSG_A = goog.getMsg('a');\nvar MSG_B = MSG_A;\nns.MSG_C = some.ns.MSG_A;",
    );

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(outcome.keys(), vec![Some("MSG_A")]);
}

#[test]
fn test_scoped_alias_prefix_is_stripped() {
    let outcome = extract("/** @desc d */ var $jscomp$scope$12$0$MSG_FOO = goog.getMsg('foo');");

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(outcome.keys(), vec![Some("MSG_FOO")]);
}

#[test]
fn test_renamed_identifier_uses_original_name() {
    let unit = unit(&[], &[("a.js", "/** @desc d */ var a1 = goog.getMsg('a');")]);
    let mut rename_map = RenameMap::new();
    rename_map.insert("a1", "MSG_RENAMED");

    let mut extracted = ExtractedMessages::new();
    let mut issues: Vec<Issue> = Vec::new();
    MessageVisitor::new(
        VisitorOptions::default(),
        &KeyIdGenerator,
        &mut extracted,
        &mut issues,
    )
    .with_rename_map(&rename_map)
    .process(&unit);

    assert_eq!(issues, vec![]);
    assert_eq!(extracted.messages[0].key(), Some("MSG_RENAMED"));
}

#[test]
fn test_externs_are_not_extracted() {
    let unit = unit(
        &[("externs.js", "/** @desc d */ var MSG_EXTERN = goog.getMsg('x');")],
        &[("a.js", "/** @desc d */ var MSG_A = goog.getMsg('a');")],
    );
    let outcome = process_unit(MessageStyle::Closure, &unit);

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(outcome.keys(), vec![Some("MSG_A")]);
}

// ============================================================
// Diagnostics
// ============================================================

#[test]
fn test_missing_description_follows_style() {
    let strict = extract("var MSG_A = goog.getMsg('a');");
    assert_eq!(strict.only_issue().rule(), Rule::NoDescription);
    assert_eq!(strict.only_issue().severity(), Severity::Error);
    assert_eq!(strict.keys(), vec![Some("MSG_A")]);

    let relaxed = process(MessageStyle::Relax, &[("a.js", "var MSG_A = goog.getMsg('a');")]);
    assert_eq!(relaxed.only_issue().severity(), Severity::Warning);
}

#[test]
fn test_blank_description_counts_as_missing() {
    let outcome = extract("/** @desc */ var MSG_A = goog.getMsg('a');");
    assert_eq!(outcome.rules(), vec![Rule::NoDescription]);
}

#[test]
fn test_orphaned_call() {
    let outcome = extract("var x = goog.getMsg('a');");

    let issue = outcome.only_issue();
    assert_eq!(issue.rule(), Rule::OrphanedCall);
    assert_eq!(issue.severity(), Severity::Error);
    assert_eq!(position(issue), ("a.js".to_string(), 1, 9));
}

#[test]
fn test_orphaned_call_used_as_argument() {
    let outcome = extract("f(goog.getMsg('x'));");

    let issue = outcome.only_issue();
    assert_eq!(issue.rule(), Rule::OrphanedCall);
    assert_eq!(position(issue), ("a.js".to_string(), 1, 3));
    assert!(outcome.extracted.messages.is_empty());
}

#[test]
fn test_orphaned_call_inside_rejected_value() {
    let outcome = extract("/** @desc d */ var MSG_A = foo(goog.getMsg('a'));");

    assert_eq!(outcome.rules(), vec![Rule::Malformed, Rule::OrphanedCall]);
    assert_eq!(
        outcome.issues[0].message(),
        "Message parse tree malformed. Message initialized using unrecognized function. Please use goog.getMsg() instead."
    );
    assert!(outcome.extracted.messages.is_empty());
}

#[test]
fn test_no_value() {
    let outcome = extract("var MSG_A;");

    let issue = outcome.only_issue();
    assert_eq!(issue.rule(), Rule::NoValue);
    assert_eq!(issue.message(), "Message MSG_A has no value");
    assert_eq!(position(issue), ("a.js".to_string(), 1, 5));
}

#[test]
fn test_placeholder_mismatch_is_malformed() {
    let outcome = extract("/** @desc d */ var MSG_A = goog.getMsg('{$a}', {'b': 1});");

    assert_eq!(
        outcome.only_issue().message(),
        "Message parse tree malformed. Unrecognized message placeholder referenced: a"
    );
    assert!(outcome.extracted.messages.is_empty());
}

#[test]
fn test_empty_text() {
    let outcome = extract("/** @desc d */ var MSG_A = goog.getMsg('');");

    assert_eq!(outcome.only_issue().rule(), Rule::EmptyText);
    assert_eq!(outcome.only_issue().severity(), Severity::Warning);
    assert_eq!(outcome.keys(), vec![Some("MSG_A")]);
}

#[test]
fn test_duplicate_key() {
    let outcome = extract(
        "/** @desc d */\nvar MSG_A = goog.getMsg('one');\n/** @desc d */\na.b.MSG_A = goog.getMsg('two');",
    );

    let issue = outcome.only_issue();
    assert_eq!(issue.rule(), Rule::DuplicateKey);
    assert_eq!(position(issue), ("a.js".to_string(), 4, 13));
    assert_eq!(issue.details().as_deref(), Some("initial definition a.js:2"));
    assert_eq!(outcome.extracted.messages.len(), 2);
}

#[test]
fn test_duplicate_key_across_files() {
    let outcome = process(
        MessageStyle::Closure,
        &[
            ("a.js", "/** @desc d */ var MSG_A = goog.getMsg('a');"),
            ("b.js", "/** @desc d */ var MSG_A = goog.getMsg('a');"),
        ],
    );

    let issue = outcome.only_issue();
    assert_eq!(issue.rule(), Rule::DuplicateKey);
    assert_eq!(position(issue).0, "b.js");
    assert_eq!(issue.details().as_deref(), Some("initial definition a.js:1"));
}

#[test]
fn test_external_messages_skip_duplicate_and_description_checks() {
    let outcome = extract(
        "var MSG_EXTERNAL_123 = goog.getMsg('x');\nvar MSG_EXTERNAL_123 = goog.getMsg('y');",
    );

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(outcome.extracted.messages.len(), 2);
    assert!(outcome.extracted.messages[0].is_external());
    assert_eq!(outcome.extracted.messages[0].id(), "123");
}

// ============================================================
// Styles and legacy definitions
// ============================================================

#[test]
fn test_legacy_string_rejected_in_closure_style() {
    let outcome = extract("var MSG_A = 'hello';");

    let issue = outcome.only_issue();
    assert_eq!(issue.rule(), Rule::LegacySyntax);
    assert_eq!(issue.severity(), Severity::Error);
    assert!(outcome.extracted.messages.is_empty());
}

#[test]
fn test_help_variable_is_a_message_in_closure_style() {
    let outcome = extract("var MSG_A_HELP = 'A greeting';");
    assert_eq!(outcome.rules(), vec![Rule::LegacySyntax]);
}

#[test]
fn test_legacy_string_with_help_variable_in_relax_style() {
    let outcome = process(
        MessageStyle::Relax,
        &[("a.js", "var MSG_A_HELP = 'A greeting';\nvar MSG_A = 'Hello';")],
    );

    assert_eq!(outcome.only_issue().rule(), Rule::LegacySyntax);
    assert_eq!(outcome.only_issue().severity(), Severity::Warning);
    assert_eq!(outcome.keys(), vec![Some("MSG_A")]);
    let message = outcome.message("MSG_A");
    assert_eq!(message.to_text(), "Hello");
    assert_eq!(message.desc(), Some("A greeting"));
}

#[test]
fn test_hidden_help_variable_after_message() {
    let outcome = process(
        MessageStyle::Legacy,
        &[("a.js", "var MSG_B = 'x' + 'y';\nvar MSG_B_HELP = '@hidden Internal';")],
    );

    assert_eq!(outcome.rules(), vec![]);
    let message = outcome.message("MSG_B");
    assert_eq!(message.to_text(), "xy");
    assert_eq!(message.desc(), Some("Internal"));
    assert!(message.is_hidden());
}

#[test]
fn test_jsdoc_description_wins_over_help_variable() {
    let outcome = process(
        MessageStyle::Legacy,
        &[(
            "a.js",
            "var MSG_A_HELP = 'From help';\n/** @desc From jsdoc */\nvar MSG_A = 'Hello';",
        )],
    );

    assert_eq!(outcome.message("MSG_A").desc(), Some("From jsdoc"));
}

#[test]
fn test_function_wrapper_in_legacy_style() {
    let outcome = process(
        MessageStyle::Legacy,
        &[(
            "a.js",
            "/** @desc Greets. */\nvar MSG_GREET = function(name) { return 'Hi ' + name + '!'; };",
        )],
    );

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(
        outcome.message("MSG_GREET").parts(),
        &[
            Part::Text("Hi ".to_string()),
            Part::Placeholder("name".to_string()),
            Part::Text("!".to_string()),
        ]
    );
}

#[test]
fn test_unparseable_legacy_value() {
    let outcome = process(MessageStyle::Legacy, &[("a.js", "var MSG_A = 42;")]);

    assert_eq!(
        outcome.only_issue().message(),
        "Message parse tree malformed. Cannot parse value of message MSG_A"
    );
}

// ============================================================
// Fallbacks
// ============================================================

#[test]
fn test_fallback_pair_resolved() {
    let outcome = extract(
        r#"/** @desc a */ var MSG_A = goog.getMsg('a');
/** @desc b */ var MSG_B = goog.getMsg('b');
var text = goog.getMsgWithFallback(MSG_A, MSG_B);"#,
    );

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(
        outcome.extracted.fallbacks,
        vec![FallbackPair {
            first: "MSG_A".to_string(),
            second: "MSG_B".to_string(),
        }]
    );
}

#[test]
fn test_fallback_qualified_arguments() {
    let outcome = extract(
        r#"/** @desc a */ ns.MSG_A = goog.getMsg('a');
/** @desc b */ ns.MSG_B = goog.getMsg('b');
goog.getMsgWithFallback(ns.MSG_A, other.ns.MSG_B);"#,
    );

    assert_eq!(outcome.rules(), vec![]);
    assert_eq!(outcome.extracted.fallbacks.len(), 1);
}

#[test]
fn test_fallback_bad_syntax() {
    let outcome = extract(
        "/** @desc a */ var MSG_A = goog.getMsg('a');\ngoog.getMsgWithFallback(MSG_A);\ngoog.getMsgWithFallback(MSG_A, 'b');",
    );

    assert_eq!(
        outcome.rules(),
        vec![Rule::BadFallbackSyntax, Rule::BadFallbackSyntax]
    );
    assert!(outcome.extracted.fallbacks.is_empty());
}

#[test]
fn test_fallback_unknown_argument() {
    let outcome = extract(
        "/** @desc a */ var MSG_A = goog.getMsg('a');\ngoog.getMsgWithFallback(MSG_A, MSG_MISSING);",
    );

    let issue = outcome.only_issue();
    assert_eq!(issue.rule(), Rule::FallbackArgument);
    assert_eq!(
        issue.message(),
        "Could not find message entry for fallback argument MSG_MISSING"
    );
    assert_eq!(position(issue), ("a.js".to_string(), 2, 32));
}

#[test]
fn test_fallback_before_definition_is_unresolved() {
    let outcome = extract(
        r#"function f() { return goog.getMsgWithFallback(MSG_A, MSG_B); }
/** @desc a */ var MSG_A = goog.getMsg('a');
/** @desc b */ var MSG_B = goog.getMsg('b');"#,
    );

    assert_eq!(outcome.rules(), vec![Rule::FallbackArgument]);
}

#[test]
fn test_unnamed_messages_resolve_per_scope() {
    let outcome = extract(
        r#"function one() {
  /** @desc a */
  var MSG_UNNAMED_1 = goog.getMsg('first');
  /** @desc b */
  var MSG_UNNAMED_2 = goog.getMsg('second');
  return goog.getMsgWithFallback(MSG_UNNAMED_1, MSG_UNNAMED_2);
}
function two() {
  /** @desc a */
  var MSG_UNNAMED_1 = goog.getMsg('other');
  /** @desc b */
  var MSG_UNNAMED_2 = goog.getMsg('again');
  return goog.getMsgWithFallback(MSG_UNNAMED_1, MSG_UNNAMED_2);
}"#,
    );

    assert_eq!(outcome.rules(), vec![]);
    let messages = &outcome.extracted.messages;
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].key(), None);
    assert!(messages[0].id().starts_with("MSG_UNNAMED_"));
    assert_ne!(messages[0].id(), messages[2].id());

    let fallbacks = &outcome.extracted.fallbacks;
    assert_eq!(fallbacks.len(), 2);
    assert_eq!(fallbacks[0].first, messages[0].id());
    assert_eq!(fallbacks[0].second, messages[1].id());
    assert_eq!(fallbacks[1].first, messages[2].id());
    assert_eq!(fallbacks[1].second, messages[3].id());
}

#[test]
fn test_unnamed_message_in_constructor_keeps_outer_binding() {
    let outcome = extract(
        r#"/** @desc a */
var MSG_UNNAMED_1 = goog.getMsg('global');
class Greeter {
  constructor(name) {
    /** @desc a */
    var MSG_UNNAMED_1 = goog.getMsg('ctor');
  }
}
/** @desc b */
var MSG_UNNAMED_2 = goog.getMsg('second');
var text = goog.getMsgWithFallback(MSG_UNNAMED_1, MSG_UNNAMED_2);"#,
    );

    assert_eq!(outcome.rules(), vec![]);
    let messages = &outcome.extracted.messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(
        outcome.extracted.fallbacks,
        vec![FallbackPair {
            first: messages[0].id().to_string(),
            second: messages[2].id().to_string(),
        }]
    );
}

#[test]
fn test_unnamed_messages_resolve_inside_getter() {
    let outcome = extract(
        r#"var labels = {
  get label() {
    /** @desc a */
    var MSG_UNNAMED_1 = goog.getMsg('first');
    /** @desc b */
    var MSG_UNNAMED_2 = goog.getMsg('second');
    return goog.getMsgWithFallback(MSG_UNNAMED_1, MSG_UNNAMED_2);
  }
};"#,
    );

    assert_eq!(outcome.rules(), vec![]);
    let messages = &outcome.extracted.messages;
    assert_eq!(
        outcome.extracted.fallbacks,
        vec![FallbackPair {
            first: messages[0].id().to_string(),
            second: messages[1].id().to_string(),
        }]
    );
}

#[test]
fn test_unnamed_messages_in_setter_and_static_block_are_local() {
    let outcome = extract(
        r#"/** @desc a */
var MSG_UNNAMED_1 = goog.getMsg('global');
var labels = {
  set label(value) {
    /** @desc a */
    var MSG_UNNAMED_1 = goog.getMsg('setter');
  }
};
class Registry {
  static {
    /** @desc a */
    var MSG_UNNAMED_1 = goog.getMsg('static');
  }
}
/** @desc b */
var MSG_UNNAMED_2 = goog.getMsg('second');
var text = goog.getMsgWithFallback(MSG_UNNAMED_1, MSG_UNNAMED_2);"#,
    );

    assert_eq!(outcome.rules(), vec![]);
    let messages = &outcome.extracted.messages;
    assert_eq!(messages.len(), 4);
    assert_eq!(outcome.extracted.fallbacks[0].first, messages[0].id());
    assert_eq!(outcome.extracted.fallbacks[0].second, messages[3].id());
}

#[test]
fn test_rerun_is_idempotent() {
    let unit = unit(
        &[],
        &[(
            "a.js",
            r#"/** @desc a */ var MSG_A = goog.getMsg('a');
/** @desc a */ var MSG_A = goog.getMsg('again');
var MSG_B = goog.getMsg('b');
f(goog.getMsg('orphan'));"#,
        )],
    );

    let first = process_unit(MessageStyle::Closure, &unit);
    let second = process_unit(MessageStyle::Closure, &unit);

    assert_eq!(
        first.rules(),
        vec![Rule::DuplicateKey, Rule::NoDescription, Rule::OrphanedCall]
    );
    assert_eq!(first.issues, second.issues);
    assert_eq!(first.extracted.messages, second.extracted.messages);
}

// ============================================================
// Source mapping
// ============================================================

#[test]
fn test_source_mapping_rewrites_locations() {
    let unit = unit(&[], &[("out.js", "var MSG_A = goog.getMsg('a');")]);
    let mut mapping = LineMapping::new();
    mapping.insert("out.js", 1, OriginalMapping::new("src/orig.ts", 10));

    let mut extracted = ExtractedMessages::new();
    let mut issues: Vec<Issue> = Vec::new();
    MessageVisitor::new(
        VisitorOptions::default(),
        &KeyIdGenerator,
        &mut extracted,
        &mut issues,
    )
    .with_source_mapping(&mapping)
    .process(&unit);

    assert_eq!(extracted.messages[0].source_name(), "src/orig.ts:10");
    assert_eq!(issues.len(), 1);
    let ReportLocation::Source(context) = issues[0].location() else {
        panic!("expected a source location");
    };
    assert_eq!(context.file_path(), "src/orig.ts");
    assert_eq!(context.line(), 10);
    assert_eq!(context.source_line, None);
}

#[test]
fn test_diagnostic_carries_source_line() {
    let outcome = extract("var MSG_A = goog.getMsg('a');");

    let ReportLocation::Source(context) = outcome.only_issue().location() else {
        panic!("expected a source location");
    };
    assert_eq!(
        context.source_line.as_deref(),
        Some("var MSG_A = goog.getMsg('a');")
    );
}
