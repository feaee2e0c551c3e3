//! Message value extraction.
//!
//! Turns the right-hand side of a message definition into message parts:
//!
//! - literal text: `'Hello'`, `'Hel' + 'lo'`, `` `Hello` ``
//! - function wrapper: `function(name) { return 'Hi ' + name; }`
//! - `goog.getMsg('Hi {$name}', {name: user.name}, {example: {name: 'Bob'}})`
//!
//! Every helper returns `ExtractResult`. The first shape violation aborts
//! extraction of the current definition.

use indexmap::{IndexMap, IndexSet};
use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    ArrowExpr, BinaryOp, BlockStmt, BlockStmtOrExpr, CallExpr, Callee, Expr, Function, Lit,
    MemberProp, ObjectLit, Pat, Prop, PropName, PropOrSpread, Stmt,
};

use crate::core::data::MessageBuilder;
use crate::core::extract::malformed::{ExtractResult, MalformedError};
use crate::core::names::{MSG_FUNCTION_NAME, is_lower_camel_case_with_numeric_suffixes};

const OPTION_ORIGINAL_CODE: &str = "original_code";
const OPTION_EXAMPLE: &str = "example";

// ============================================================
// Expression helpers
// ============================================================

/// Strip any number of enclosing parentheses.
pub fn unwrap_parens(expr: &Expr) -> &Expr {
    let mut expr = expr;
    while let Expr::Paren(paren) = expr {
        expr = &paren.expr;
    }
    expr
}

/// Dotted name of a reference such as `a`, `a.b.c` or `this.a`.
///
/// Returns `None` for anything involving computed or private members.
pub fn qualified_name(expr: &Expr) -> Option<String> {
    match unwrap_parens(expr) {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::This(_) => Some("this".to_string()),
        Expr::Member(member) => {
            let MemberProp::Ident(prop) = &member.prop else {
                return None;
            };
            let object = qualified_name(&member.obj)?;
            Some(format!("{}.{}", object, prop.sym))
        }
        _ => None,
    }
}

pub fn matches_qualified_name(expr: &Expr, name: &str) -> bool {
    qualified_name(expr).is_some_and(|qname| qname == name)
}

/// Whether the call invokes the function with the given dotted name.
pub fn callee_matches(call: &CallExpr, name: &str) -> bool {
    match &call.callee {
        Callee::Expr(callee) => matches_qualified_name(callee, name),
        Callee::Super(_) | Callee::Import(_) => false,
    }
}

/// Short human readable description of an expression kind.
pub fn node_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::Lit(Lit::Str(_)) => "string",
        Expr::Lit(Lit::Num(_)) => "number",
        Expr::Lit(Lit::Bool(_)) => "boolean",
        Expr::Lit(Lit::Null(_)) => "null",
        Expr::Lit(_) => "literal",
        Expr::Tpl(_) => "template literal",
        Expr::TaggedTpl(_) => "tagged template",
        Expr::Ident(_) => "name",
        Expr::This(_) => "this",
        Expr::Member(_) => "property access",
        Expr::Call(_) => "call",
        Expr::New(_) => "new expression",
        Expr::Bin(_) => "binary expression",
        Expr::Unary(_) => "unary expression",
        Expr::Cond(_) => "conditional",
        Expr::Assign(_) => "assignment",
        Expr::Fn(_) | Expr::Arrow(_) => "function",
        Expr::Object(_) => "object literal",
        Expr::Array(_) => "array literal",
        Expr::Paren(paren) => node_kind(&paren.expr),
        _ => "expression",
    }
}

fn stmt_kind(stmt: &Stmt) -> &'static str {
    match stmt {
        Stmt::Return(_) => "return",
        Stmt::Expr(_) => "expression statement",
        Stmt::Decl(_) => "declaration",
        Stmt::If(_) => "if",
        Stmt::Block(_) => "block",
        Stmt::Throw(_) => "throw",
        Stmt::Empty(_) => "empty statement",
        _ => "statement",
    }
}

/// Text of a string literal, a substitution-free template, or a `+`
/// concatenation of those.
pub fn extract_string(expr: &Expr) -> ExtractResult<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s
            .value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| MalformedError::new("String literal is not valid Unicode", s.span)),
        Expr::Tpl(tpl) => {
            if !tpl.exprs.is_empty() {
                return Err(MalformedError::new(
                    "Template literals with substitutions are not allowed.",
                    tpl.span,
                ));
            }
            tpl.quasis
                .first()
                .and_then(|quasi| quasi.cooked.as_ref())
                .and_then(|cooked| cooked.as_str())
                .map(str::to_string)
                .ok_or_else(|| MalformedError::new("Template literal has no text", tpl.span))
        }
        Expr::Bin(bin) if bin.op == BinaryOp::Add => {
            let mut text = extract_string(&bin.left)?;
            text.push_str(&extract_string(&bin.right)?);
            Ok(text)
        }
        Expr::Paren(paren) => extract_string(&paren.expr),
        other => Err(MalformedError::new(
            format!(
                "String literal or concatenation expected; found: {}",
                node_kind(other)
            ),
            other.span(),
        )),
    }
}

// ============================================================
// Variable values
// ============================================================

/// Accepted shapes for the value of a `var MSG_X = ...` declaration.
pub enum VariableValue<'a> {
    /// Literal text taken verbatim.
    Text(&'a Expr),
    /// Legacy function wrapper.
    Function(FunctionValue<'a>),
    /// `goog.getMsg(...)` call (or any call, rejected later).
    Call(&'a Expr),
}

impl<'a> VariableValue<'a> {
    pub fn classify(value: &'a Expr, key: &str) -> ExtractResult<Self> {
        match unwrap_parens(value) {
            text @ (Expr::Lit(Lit::Str(_)) | Expr::Tpl(_)) => Ok(VariableValue::Text(text)),
            text @ Expr::Bin(bin) if bin.op == BinaryOp::Add => Ok(VariableValue::Text(text)),
            Expr::Fn(fn_expr) => Ok(VariableValue::Function(FunctionValue::from_function(
                &fn_expr.function,
            )?)),
            Expr::Arrow(arrow) => Ok(VariableValue::Function(FunctionValue::from_arrow(arrow))),
            call @ Expr::Call(_) => Ok(VariableValue::Call(call)),
            other => Err(MalformedError::new(
                format!("Cannot parse value of message {}", key),
                other.span(),
            )),
        }
    }
}

// ============================================================
// Function wrappers
// ============================================================

pub enum FunctionBody<'a> {
    Block(&'a BlockStmt),
    /// Expression-bodied arrow, treated as its own return value.
    Expr(&'a Expr),
}

pub struct FunctionValue<'a> {
    params: Vec<&'a Pat>,
    body: FunctionBody<'a>,
}

impl<'a> FunctionValue<'a> {
    fn from_function(function: &'a Function) -> ExtractResult<Self> {
        let body = function
            .body
            .as_ref()
            .ok_or_else(|| MalformedError::new("Function body expected", function.span))?;
        Ok(Self {
            params: function.params.iter().map(|param| &param.pat).collect(),
            body: FunctionBody::Block(body),
        })
    }

    fn from_arrow(arrow: &'a ArrowExpr) -> Self {
        let body = match &*arrow.body {
            BlockStmtOrExpr::BlockStmt(block) => FunctionBody::Block(block),
            BlockStmtOrExpr::Expr(expr) => FunctionBody::Expr(expr),
        };
        Self {
            params: arrow.params.iter().collect(),
            body,
        }
    }
}

/// Build message parts from a legacy function wrapper.
///
/// Parameters name the placeholders. The body must start with a `return`
/// whose value is a concatenation of string literals and parameter names.
pub fn extract_from_function(
    builder: &mut MessageBuilder,
    function: &FunctionValue<'_>,
) -> ExtractResult {
    let mut param_names: IndexSet<String> = IndexSet::new();
    for param in &function.params {
        if let Pat::Ident(ident) = param {
            let name = ident.id.sym.to_string();
            if param_names.contains(&name) {
                return Err(MalformedError::new(
                    format!("Duplicate placeholder name: {}", name),
                    ident.id.span,
                ));
            }
            param_names.insert(name);
        }
    }

    let return_span = match function.body {
        FunctionBody::Block(block) => {
            let Some(first) = block.stmts.first() else {
                return Err(MalformedError::new(
                    "Return statement expected; found: nothing",
                    block.span,
                ));
            };
            let Stmt::Return(ret) = first else {
                return Err(MalformedError::new(
                    format!("Return statement expected; found: {}", stmt_kind(first)),
                    first.span(),
                ));
            };
            if let Some(arg) = &ret.arg {
                extract_from_return_value(builder, arg)?;
            }
            ret.span
        }
        FunctionBody::Expr(expr) => {
            extract_from_return_value(builder, expr)?;
            expr.span()
        }
    };

    let used: IndexSet<String> = builder
        .placeholders()
        .into_iter()
        .map(str::to_string)
        .collect();
    check_placeholders(&used, &param_names, return_span)
}

fn extract_from_return_value(builder: &mut MessageBuilder, expr: &Expr) -> ExtractResult {
    match expr {
        Expr::Lit(Lit::Str(_)) | Expr::Tpl(_) => {
            let text = extract_string(expr)?;
            builder.append_string_part(&text);
        }
        Expr::Ident(ident) => {
            builder.append_placeholder_reference(ident.sym.to_string());
        }
        Expr::Bin(bin) if bin.op == BinaryOp::Add => {
            extract_from_return_value(builder, &bin.left)?;
            extract_from_return_value(builder, &bin.right)?;
        }
        Expr::Paren(paren) => extract_from_return_value(builder, &paren.expr)?,
        other => {
            return Err(MalformedError::new(
                format!(
                    "String literal, name or concatenation expected; found: {}",
                    node_kind(other)
                ),
                other.span(),
            ));
        }
    }
    Ok(())
}

/// Referenced and declared placeholders must match exactly.
///
/// Unknown references are checked first; each mismatch is its own error.
fn check_placeholders(
    used: &IndexSet<String>,
    declared: &IndexSet<String>,
    span: Span,
) -> ExtractResult {
    if let Some(name) = used.iter().find(|name| !declared.contains(*name)) {
        return Err(MalformedError::new(
            format!("Unrecognized message placeholder referenced: {}", name),
            span,
        ));
    }
    if let Some(name) = declared.iter().find(|name| !used.contains(*name)) {
        return Err(MalformedError::new(
            format!("Unused message placeholder: {}", name),
            span,
        ));
    }
    Ok(())
}

// ============================================================
// goog.getMsg calls
// ============================================================

/// A `key: value` or shorthand `key` property of an object literal.
struct KeyedProp<'a> {
    name: String,
    span: Span,
    /// `None` for shorthand properties.
    value: Option<&'a Expr>,
}

fn keyed_prop(prop: &PropOrSpread) -> Option<KeyedProp<'_>> {
    let PropOrSpread::Prop(prop) = prop else {
        return None;
    };
    match &**prop {
        Prop::KeyValue(kv) => {
            let name = match &kv.key {
                PropName::Ident(ident) => ident.sym.to_string(),
                PropName::Str(s) => s.value.as_str()?.to_string(),
                _ => return None,
            };
            Some(KeyedProp {
                name,
                span: kv.key.span(),
                value: Some(&kv.value),
            })
        }
        Prop::Shorthand(ident) => Some(KeyedProp {
            name: ident.sym.to_string(),
            span: ident.span,
            value: None,
        }),
        _ => None,
    }
}

fn expect_object_lit<'a>(expr: &'a Expr, reason: &str) -> ExtractResult<&'a ObjectLit> {
    match unwrap_parens(expr) {
        Expr::Object(obj) => Ok(obj),
        other => Err(MalformedError::new(reason, other.span())),
    }
}

/// Build message parts from a `goog.getMsg(text, placeholders?, options?)` call.
pub fn extract_from_call(builder: &mut MessageBuilder, value: &Expr) -> ExtractResult {
    let Expr::Call(call) = unwrap_parens(value) else {
        return Err(MalformedError::new(
            format!(
                "Message must be initialized using {} function.",
                MSG_FUNCTION_NAME
            ),
            value.span(),
        ));
    };

    if !callee_matches(call, MSG_FUNCTION_NAME) {
        return Err(MalformedError::new(
            format!(
                "Message initialized using unrecognized function. Please use {}() instead.",
                MSG_FUNCTION_NAME
            ),
            call.callee.span(),
        ));
    }

    if let Some(spread) = call.args.iter().find_map(|arg| arg.spread) {
        return Err(MalformedError::new(
            format!("Spread arguments are not allowed in {}()", MSG_FUNCTION_NAME),
            spread,
        ));
    }

    let mut args = call.args.iter().map(|arg| &*arg.expr);

    let Some(text_node) = args.next() else {
        return Err(MalformedError::new(
            "Message string literal expected",
            call.span,
        ));
    };
    let text = extract_string(text_node)?;
    if builder.set_msg_text(&text).is_err() {
        return Err(MalformedError::new(
            format!("Placeholder incorrectly formatted in: {}", builder.display_key()),
            text_node.span(),
        ));
    }

    let mut declared: IndexSet<String> = IndexSet::new();
    let values = args.next();
    if let Some(values) = values {
        let obj = expect_object_lit(values, "Object literal expected for placeholder values")?;
        for prop in &obj.props {
            let Some(entry) = keyed_prop(prop) else {
                return Err(MalformedError::new(
                    "Placeholder values must be plain string keys",
                    prop.span(),
                ));
            };
            if !is_lower_camel_case_with_numeric_suffixes(&entry.name) {
                return Err(MalformedError::new(
                    format!("Placeholder name not in lowerCamelCase: {}", entry.name),
                    entry.span,
                ));
            }
            if declared.contains(&entry.name) {
                return Err(MalformedError::new(
                    format!("Duplicate placeholder name: {}", entry.name),
                    entry.span,
                ));
            }
            declared.insert(entry.name);
        }
    }

    let used: IndexSet<String> = builder
        .placeholders()
        .into_iter()
        .map(str::to_string)
        .collect();

    if let Some(options) = args.next() {
        extract_options_bag(builder, options, &used)?;
    }

    check_placeholders(&used, &declared, call.span)
}

/// Read `original_code` and `example` maps from the options bag.
/// Other option keys are ignored.
fn extract_options_bag(
    builder: &mut MessageBuilder,
    options: &Expr,
    used: &IndexSet<String>,
) -> ExtractResult {
    let obj = expect_object_lit(options, "Object literal expected for options")?;
    for prop in &obj.props {
        let Some(entry) = keyed_prop(prop) else {
            return Err(MalformedError::new("String key expected", prop.span()));
        };
        let is_placeholder_map = entry.name == OPTION_ORIGINAL_CODE || entry.name == OPTION_EXAMPLE;
        if !is_placeholder_map {
            continue;
        }
        let Some(value) = entry.value else {
            return Err(MalformedError::new("Object literal expected", entry.span));
        };
        let map = extract_placeholder_map(value, used)?;
        if entry.name == OPTION_ORIGINAL_CODE {
            builder.set_placeholder_original_code(map);
        } else {
            builder.set_placeholder_examples(map);
        }
    }
    Ok(())
}

fn extract_placeholder_map(
    value: &Expr,
    used: &IndexSet<String>,
) -> ExtractResult<IndexMap<String, String>> {
    let obj = expect_object_lit(value, "Object literal expected")?;
    let mut map = IndexMap::new();
    for prop in &obj.props {
        let Some(entry) = keyed_prop(prop) else {
            return Err(MalformedError::new("String key expected", prop.span()));
        };
        let text = match entry.value.map(unwrap_parens) {
            Some(Expr::Lit(Lit::Str(s))) => s.value.as_str().map(str::to_string),
            _ => None,
        };
        let Some(text) = text else {
            let span = entry.value.map_or(entry.span, |value| value.span());
            return Err(MalformedError::new("String literal expected", span));
        };
        if !used.contains(&entry.name) {
            return Err(MalformedError::new(
                format!("Unexpected placeholder name: {}", entry.name),
                entry.span,
            ));
        }
        if map.contains_key(&entry.name) {
            return Err(MalformedError::new(
                format!("Duplicate string key: {}", entry.name),
                entry.span,
            ));
        }
        map.insert(entry.name, text);
    }
    Ok(map)
}
