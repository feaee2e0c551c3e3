//! Message definition traversal.
//!
//! `MessageVisitor` walks every source of a compilation unit once, finds the
//! three syntactic forms of message definition (`var MSG_X = ...`,
//! `a.b.MSG_X = ...`, `{MSG_X: ...}`), extracts and validates each message and
//! hands it to a `MessageConsumer`. Problems go to a `DiagnosticSink`; the
//! traversal itself never fails.
//!
//! Nodes are visited post-order, so the `goog.getMsg` call of a definition is
//! always seen before the definition that consumes it. Calls still pending
//! when the traversal ends are orphans.

use std::collections::HashMap;

use indexmap::IndexMap;
use swc_common::{BytePos, SourceMap, Span, Spanned};
use swc_ecma_ast::{
    ArrowExpr, AssignExpr, AssignOp, AssignTarget, BlockStmt, BlockStmtOrExpr, CallExpr,
    Constructor, Decl, ExportDecl, Expr, Function, GetterProp, KeyValueProp, MemberProp, Module,
    ModuleItem, ParamOrTsParamProp, Pat, Program, PropName, SetterProp, SimpleAssignTarget,
    StaticBlock, Stmt, TsParamPropParam, VarDecl, VarDeclKind,
};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::debug;

use crate::core::consumer::{DefinitionKind, MessageConsumer, MessageDefinition};
use crate::core::context::CompilationUnit;
use crate::core::data::{Message, MessageBuilder, MessageStyle, SourceContext, SourceLocation};
use crate::core::extract::{
    ExtractResult, MalformedError, VariableValue, callee_matches, extract_from_call,
    extract_from_function, extract_string, qualified_name, unwrap_parens,
};
use crate::core::id::IdGenerator;
use crate::core::jsdoc::{JsDoc, find_jsdoc};
use crate::core::names::{
    DESC_SUFFIX, HIDDEN_DESC_PREFIX, MSG_FALLBACK_FUNCTION_NAME, MSG_FUNCTION_NAME, MSG_PREFIX,
    is_message_name, is_unnamed_message_name, remove_scoped_aliases_prefix,
};
use crate::core::parsers::js::{ExtractedComments, ParsedSource};
use crate::core::registry::MessageRegistry;
use crate::core::scope::{
    ScopeTracker, extract_binding_names, hoisted_var_names, lexical_names, module_names,
};
use crate::core::source_mapping::SourceMapping;
use crate::issues::{
    BadFallbackSyntaxIssue, DiagnosticSink, DuplicateKeyIssue, EmptyTextIssue,
    FallbackArgumentIssue, Issue, LegacySyntaxIssue, MalformedIssue, NoDescriptionIssue,
    NoValueIssue, OrphanedCallIssue,
};

#[cfg(test)]
mod tests;

/// Names as they were written before an earlier renaming pass.
#[derive(Debug, Clone, Default)]
pub struct RenameMap {
    originals: HashMap<String, String>,
}

impl RenameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `renamed` was originally called `original`.
    pub fn insert(&mut self, renamed: impl Into<String>, original: impl Into<String>) {
        self.originals.insert(renamed.into(), original.into());
    }

    pub fn original_name(&self, renamed: &str) -> Option<&str> {
        self.originals.get(renamed).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VisitorOptions {
    pub style: MessageStyle,
}

/// One traversal over a compilation unit.
///
/// Consumed by [`MessageVisitor::process`]; build a new one per unit.
pub struct MessageVisitor<'a> {
    options: VisitorOptions,
    id_generator: &'a dyn IdGenerator,
    consumer: &'a mut dyn MessageConsumer,
    sink: &'a mut dyn DiagnosticSink,
    source_mapping: Option<&'a dyn SourceMapping>,
    rename_map: Option<&'a RenameMap>,
}

impl<'a> MessageVisitor<'a> {
    pub fn new(
        options: VisitorOptions,
        id_generator: &'a dyn IdGenerator,
        consumer: &'a mut dyn MessageConsumer,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            options,
            id_generator,
            consumer,
            sink,
            source_mapping: None,
            rename_map: None,
        }
    }

    /// Report locations (and message source names) through `mapping`.
    pub fn with_source_mapping(mut self, mapping: &'a dyn SourceMapping) -> Self {
        self.source_mapping = Some(mapping);
        self
    }

    /// Match names against what they were before renaming.
    pub fn with_rename_map(mut self, rename_map: &'a RenameMap) -> Self {
        self.rename_map = Some(rename_map);
        self
    }

    /// Run the traversal over `unit`.
    ///
    /// Externs only contribute global declarations. Sources are walked in
    /// order; script sources share the global scope, module sources each get
    /// their own. Orphaned `goog.getMsg` calls are reported at the end.
    pub fn process(self, unit: &'a CompilationUnit) {
        let mut traversal = Traversal::new(self, &unit.source_map, &unit.comments);

        for source in &unit.externs {
            traversal.scopes.declare_all(top_level_names(source));
        }
        for source in unit.sources.iter().filter(|source| source.is_script()) {
            traversal.scopes.declare_all(top_level_names(source));
        }

        for source in &unit.sources {
            debug!(file = %source.file_path, "visiting source");
            traversal.file_path.clone_from(&source.file_path);
            source.program.visit_with(&mut traversal);
        }

        traversal.report_orphans();
    }
}

fn top_level_names(source: &ParsedSource) -> Vec<String> {
    match &source.program {
        Program::Script(script) => {
            let mut names = hoisted_var_names(&script.body);
            names.extend(lexical_names(&script.body));
            names
        }
        Program::Module(module) => module_names(&module.body),
    }
}

// ============================================================
// Traversal state
// ============================================================

/// Statements around a `var` declaration, searched for a `_HELP` companion.
#[derive(Clone, Copy, Default)]
struct Siblings<'n> {
    previous: Option<&'n Stmt>,
    next: Option<&'n Stmt>,
}

impl<'n> Siblings<'n> {
    fn of(stmts: &'n [Stmt], index: usize) -> Self {
        Self {
            previous: index.checked_sub(1).and_then(|i| stmts.get(i)),
            next: stmts.get(index + 1),
        }
    }

    fn of_items(items: &'n [ModuleItem], index: usize) -> Self {
        let stmt = |item: &'n ModuleItem| match item {
            ModuleItem::Stmt(stmt) => Some(stmt),
            ModuleItem::ModuleDecl(_) => None,
        };
        Self {
            previous: index
                .checked_sub(1)
                .and_then(|i| items.get(i))
                .and_then(stmt),
            next: items.get(index + 1).and_then(stmt),
        }
    }
}

/// A candidate message definition, before its name has been checked.
struct MessageSite<'n> {
    kind: DefinitionKind,
    /// The name as it appears in the source.
    written_key: &'n str,
    value: Option<&'n Expr>,
    /// Where site-level diagnostics point.
    span: Span,
    /// Positions whose leading comments may hold the JSDoc, in priority order.
    doc_positions: [BytePos; 2],
    siblings: Siblings<'n>,
}

struct Traversal<'a> {
    style: MessageStyle,
    id_generator: &'a dyn IdGenerator,
    consumer: &'a mut dyn MessageConsumer,
    sink: &'a mut dyn DiagnosticSink,
    source_mapping: Option<&'a dyn SourceMapping>,
    rename_map: Option<&'a RenameMap>,
    source_map: &'a SourceMap,
    comments: &'a ExtractedComments,

    file_path: String,
    scopes: ScopeTracker,
    registry: MessageRegistry,
    /// `goog.getMsg` calls not yet consumed by a definition, with their file.
    pending_calls: IndexMap<Span, String>,
    /// Start of the statement enclosing the current expression statement.
    statement_start: Option<BytePos>,
}

impl<'a> Traversal<'a> {
    fn new(
        visitor: MessageVisitor<'a>,
        source_map: &'a SourceMap,
        comments: &'a ExtractedComments,
    ) -> Self {
        Self {
            style: visitor.options.style,
            id_generator: visitor.id_generator,
            consumer: visitor.consumer,
            sink: visitor.sink,
            source_mapping: visitor.source_mapping,
            rename_map: visitor.rename_map,
            source_map,
            comments,
            file_path: String::new(),
            scopes: ScopeTracker::new(),
            registry: MessageRegistry::new(),
            pending_calls: IndexMap::new(),
            statement_start: None,
        }
    }

    fn report(&mut self, issue: impl Into<Issue>) {
        self.sink.report(issue.into());
    }

    fn original_name<'n>(&self, name: &'n str) -> &'n str
    where
        'a: 'n,
    {
        self.rename_map
            .and_then(|map| map.original_name(name))
            .unwrap_or(name)
    }

    // ------------------------------------------------------------
    // Locations
    // ------------------------------------------------------------

    fn context_in(&self, file_path: &str, span: Span) -> SourceContext {
        let loc = self.source_map.lookup_char_pos(span.lo);
        let col = loc.col_display + 1;

        if let Some(original) = self
            .source_mapping
            .and_then(|mapping| mapping.original_location(file_path, loc.line, col))
        {
            return SourceContext::new(SourceLocation::new(original.file, original.line, col), None);
        }

        let source_line = loc
            .file
            .get_line(loc.line.saturating_sub(1))
            .map(|line| line.to_string());
        SourceContext::new(SourceLocation::new(file_path, loc.line, col), source_line)
    }

    fn context_at(&self, span: Span) -> SourceContext {
        self.context_in(&self.file_path, span)
    }

    fn location_at(&self, span: Span) -> SourceLocation {
        let loc = self.source_map.lookup_char_pos(span.lo);
        SourceLocation::new(&self.file_path, loc.line, loc.col_display + 1)
    }

    /// `file:line`, through the source mapping when one answers.
    fn source_name_at(&self, span: Span) -> String {
        let location = self.context_at(span).location;
        format!("{}:{}", location.file_path, location.line)
    }

    fn jsdoc_at(&self, positions: &[BytePos]) -> Option<JsDoc> {
        positions
            .iter()
            .find_map(|pos| find_jsdoc(self.comments.leading_at(*pos)))
    }

    // ------------------------------------------------------------
    // Definition sites
    // ------------------------------------------------------------

    fn visit_message_var_decl(&mut self, var: &VarDecl, doc_pos: BytePos, siblings: Siblings<'_>) {
        for declarator in &var.decls {
            let Pat::Ident(name) = &declarator.name else {
                continue;
            };
            self.check_message_site(MessageSite {
                kind: DefinitionKind::Variable,
                written_key: &name.id.sym,
                value: declarator.init.as_deref(),
                span: name.id.span,
                doc_positions: [doc_pos, var.span.lo],
                siblings,
            });
        }
    }

    fn check_message_site(&mut self, site: MessageSite<'_>) {
        let key = self.original_name(site.written_key).to_string();
        let is_new_style = site
            .value
            .is_some_and(|value| matches!(unwrap_parens(value), Expr::Call(_)));

        if !is_message_name(&key, is_new_style, self.style) {
            return;
        }

        let Some(value) = site.value else {
            let context = self.context_at(site.span);
            self.report(NoValueIssue { context, key });
            return;
        };

        if self.is_legal_alias(value) {
            return;
        }

        if is_new_style {
            self.pending_calls.shift_remove(&unwrap_parens(value).span());
        } else if self.style != MessageStyle::Legacy {
            let context = self.context_at(site.span);
            self.report(LegacySyntaxIssue {
                context,
                key: key.clone(),
                severity: self.style.check_level(),
            });
            if self.style.is_strict() {
                return;
            }
        }

        let key = remove_scoped_aliases_prefix(&key).into_owned();
        let is_unnamed = is_unnamed_message_name(&key);

        let mut builder = MessageBuilder::new((!is_unnamed).then(|| key.clone()));
        builder.set_source_name(self.source_name_at(site.span));

        let extracted = match site.kind {
            DefinitionKind::Variable => self.extract_from_variable(&mut builder, value, &site),
            DefinitionKind::Assignment | DefinitionKind::ObjectKey => {
                if let Some(jsdoc) = self.jsdoc_at(&site.doc_positions) {
                    jsdoc.apply_to(&mut builder);
                }
                extract_from_call(&mut builder, value)
            }
        };
        if let Err(error) = extracted {
            let context = self.context_at(error.span);
            self.report(MalformedIssue {
                context,
                reason: error.reason,
            });
            return;
        }

        let message = builder.build(self.id_generator);
        let value_span = value.span();
        let location = self.location_at(value_span);

        if is_unnamed {
            if let Some(binding) = self.scopes.resolve(site.written_key) {
                self.registry.register_unnamed(binding, message.clone());
            }
        } else {
            if !message.is_external()
                && let Some(previous) = self.registry.location_of(&key).cloned()
            {
                let context = self.context_at(value_span);
                self.report(DuplicateKeyIssue {
                    context,
                    key: key.clone(),
                    previous,
                });
            }
            self.registry
                .register_named(&key, message.clone(), location.clone());
        }

        if message.is_empty() {
            let context = self.context_at(site.span);
            self.report(EmptyTextIssue {
                context,
                key: key.clone(),
            });
        }

        let has_desc = message.desc().is_some_and(|desc| !desc.trim().is_empty());
        if is_new_style && !has_desc && !message.is_external() {
            let context = self.context_at(site.span);
            self.report(NoDescriptionIssue {
                context,
                key: key.clone(),
                severity: self.style.check_level(),
            });
        }

        debug!(key = %key, id = %message.id(), "validated message");
        self.consumer.on_validated_message(
            &message,
            &MessageDefinition {
                kind: site.kind,
                value_span,
                location,
            },
        );
    }

    /// `var MSG_A = MSG_B;` or `var MSG_A = some.ns.MSG_B;` just re-exposes
    /// an existing message.
    fn is_legal_alias(&self, value: &Expr) -> bool {
        match unwrap_parens(value) {
            Expr::Ident(ident) => self.original_name(&ident.sym).starts_with(MSG_PREFIX),
            expr @ Expr::Member(member) => {
                qualified_name(expr).is_some()
                    && matches!(&member.prop, MemberProp::Ident(prop)
                        if self.original_name(&prop.sym).starts_with(MSG_PREFIX))
            }
            _ => false,
        }
    }

    fn extract_from_variable(
        &self,
        builder: &mut MessageBuilder,
        value: &Expr,
        site: &MessageSite<'_>,
    ) -> ExtractResult {
        match VariableValue::classify(value, builder.display_key())? {
            VariableValue::Text(text) => {
                self.init_legacy_metadata(builder, site)?;
                let text = extract_string(text)?;
                builder.append_string_part(&text);
            }
            VariableValue::Function(function) => {
                self.init_legacy_metadata(builder, site)?;
                extract_from_function(builder, &function)?;
            }
            VariableValue::Call(call) => {
                if let Some(jsdoc) = self.jsdoc_at(&site.doc_positions) {
                    jsdoc.apply_to(builder);
                }
                extract_from_call(builder, call)?;
            }
        }
        Ok(())
    }

    /// Legacy definitions take their metadata from JSDoc when it carries a
    /// description, and otherwise from a neighbouring `MSG_X_HELP` variable.
    fn init_legacy_metadata(
        &self,
        builder: &mut MessageBuilder,
        site: &MessageSite<'_>,
    ) -> ExtractResult {
        if let Some(jsdoc) = self.jsdoc_at(&site.doc_positions)
            && jsdoc.apply_to(builder)
        {
            return Ok(());
        }

        let Some(help_name) = builder.key().map(|key| format!("{}{}", key, DESC_SUFFIX)) else {
            return Ok(());
        };

        for sibling in [site.siblings.previous, site.siblings.next].into_iter().flatten() {
            let Stmt::Decl(Decl::Var(var)) = sibling else {
                continue;
            };
            if var.kind != VarDeclKind::Var {
                continue;
            }
            let Some(declarator) = var.decls.first() else {
                continue;
            };
            let Pat::Ident(name) = &declarator.name else {
                continue;
            };
            if &*name.id.sym != help_name.as_str() {
                continue;
            }

            let Some(init) = declarator.init.as_deref() else {
                return Err(MalformedError::new(
                    "String literal or concatenation expected; found: nothing",
                    declarator.span,
                ));
            };
            let desc = extract_string(init)?;
            match desc.strip_prefix(HIDDEN_DESC_PREFIX) {
                Some(rest) => {
                    builder.set_hidden(true);
                    builder.set_desc(rest.trim());
                }
                None => {
                    builder.set_desc(desc);
                }
            }
            return Ok(());
        }

        Ok(())
    }

    // ------------------------------------------------------------
    // Fallback calls
    // ------------------------------------------------------------

    fn check_fallback_call(&mut self, call: &CallExpr) {
        let references: Option<Vec<(String, Span)>> = (call.args.len() == 2)
            .then(|| {
                call.args
                    .iter()
                    .map(|arg| {
                        if arg.spread.is_some() {
                            return None;
                        }
                        qualified_name(&arg.expr)
                            .filter(|name| name.contains(MSG_PREFIX))
                            .map(|name| (name, arg.expr.span()))
                    })
                    .collect::<Option<Vec<_>>>()
            })
            .flatten();

        let Some(references) = references else {
            let context = self.context_at(call.span);
            self.report(BadFallbackSyntaxIssue { context });
            return;
        };

        let mut resolved: Vec<Message> = Vec::with_capacity(2);
        for (reference, span) in references {
            match self
                .registry
                .lookup_by_qualified_reference(&self.scopes, &reference)
            {
                Some(message) => resolved.push(message.clone()),
                None => {
                    let context = self.context_at(span);
                    self.report(FallbackArgumentIssue { context, reference });
                    return;
                }
            }
        }

        if let [first, second] = resolved.as_slice() {
            debug!(first = %first.id(), second = %second.id(), "resolved fallback pair");
            self.consumer.on_fallback_pair(call, first, second);
        }
    }

    fn report_orphans(&mut self) {
        let severity = self.style.check_level();
        for (span, file_path) in std::mem::take(&mut self.pending_calls) {
            let context = self.context_in(&file_path, span);
            self.report(OrphanedCallIssue { context, severity });
        }
    }

    // ------------------------------------------------------------
    // Scopes
    // ------------------------------------------------------------

    /// Walk a function-like body in a scope of its own.
    ///
    /// `param_names` are the names the parameters bind; `params` are the
    /// parameter nodes themselves, visited before the body.
    fn visit_function_scope<'p, P>(
        &mut self,
        param_names: Vec<String>,
        params: impl IntoIterator<Item = &'p P>,
        body: Option<&BlockStmtOrExprRef<'_>>,
    ) where
        P: VisitWith<Self> + 'p,
    {
        self.scopes.enter_scope();
        self.scopes.declare_all(param_names);
        if let Some(BlockStmtOrExprRef::Block(block)) = body {
            self.scopes.declare_all(hoisted_var_names(&block.stmts));
            self.scopes.declare_all(lexical_names(&block.stmts));
        }

        for param in params {
            param.visit_with(self);
        }
        match body {
            Some(BlockStmtOrExprRef::Block(block)) => self.visit_stmts(&block.stmts),
            Some(BlockStmtOrExprRef::Expr(expr)) => expr.visit_with(self),
            None => {}
        }
        self.scopes.exit_scope();
    }
}

fn pattern_names<'p>(pats: impl IntoIterator<Item = &'p Pat>) -> Vec<String> {
    pats.into_iter().flat_map(extract_binding_names).collect()
}

fn constructor_param_names(params: &[ParamOrTsParamProp]) -> Vec<String> {
    params
        .iter()
        .flat_map(|param| match param {
            ParamOrTsParamProp::Param(param) => extract_binding_names(&param.pat),
            ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                TsParamPropParam::Ident(ident) => vec![ident.id.sym.to_string()],
                TsParamPropParam::Assign(assign) => extract_binding_names(&assign.left),
            },
        })
        .collect()
}

enum BlockStmtOrExprRef<'n> {
    Block(&'n BlockStmt),
    Expr(&'n Expr),
}

// ============================================================
// Visit
// ============================================================

impl Visit for Traversal<'_> {
    fn visit_module(&mut self, module: &Module) {
        self.scopes.enter_scope();
        self.scopes.declare_all(module_names(&module.body));
        module.visit_children_with(self);
        self.scopes.exit_scope();
    }

    fn visit_function(&mut self, function: &Function) {
        for decorator in &function.decorators {
            decorator.visit_with(self);
        }
        let body = function.body.as_ref().map(BlockStmtOrExprRef::Block);
        self.visit_function_scope(
            pattern_names(function.params.iter().map(|p| &p.pat)),
            &function.params,
            body.as_ref(),
        );
    }

    fn visit_arrow_expr(&mut self, arrow: &ArrowExpr) {
        let body = match &*arrow.body {
            BlockStmtOrExpr::BlockStmt(block) => BlockStmtOrExprRef::Block(block),
            BlockStmtOrExpr::Expr(expr) => BlockStmtOrExprRef::Expr(expr),
        };
        self.visit_function_scope(pattern_names(&arrow.params), &arrow.params, Some(&body));
    }

    fn visit_constructor(&mut self, constructor: &Constructor) {
        constructor.key.visit_with(self);
        let body = constructor.body.as_ref().map(BlockStmtOrExprRef::Block);
        self.visit_function_scope(
            constructor_param_names(&constructor.params),
            &constructor.params,
            body.as_ref(),
        );
    }

    fn visit_getter_prop(&mut self, getter: &GetterProp) {
        getter.key.visit_with(self);
        let body = getter.body.as_ref().map(BlockStmtOrExprRef::Block);
        self.visit_function_scope(Vec::new(), std::iter::empty::<&Pat>(), body.as_ref());
    }

    fn visit_setter_prop(&mut self, setter: &SetterProp) {
        setter.key.visit_with(self);
        let params: Vec<&Pat> = setter
            .this_param
            .iter()
            .chain(std::iter::once(&*setter.param))
            .collect();
        let body = setter.body.as_ref().map(BlockStmtOrExprRef::Block);
        self.visit_function_scope(
            pattern_names(params.iter().copied()),
            params.iter().copied(),
            body.as_ref(),
        );
    }

    fn visit_static_block(&mut self, block: &StaticBlock) {
        let body = BlockStmtOrExprRef::Block(&block.body);
        self.visit_function_scope(Vec::new(), std::iter::empty::<&Pat>(), Some(&body));
    }

    fn visit_block_stmt(&mut self, block: &BlockStmt) {
        self.scopes.enter_scope();
        self.scopes.declare_all(lexical_names(&block.stmts));
        self.visit_stmts(&block.stmts);
        self.scopes.exit_scope();
    }

    fn visit_stmts(&mut self, stmts: &[Stmt]) {
        for (index, stmt) in stmts.iter().enumerate() {
            match stmt {
                Stmt::Decl(Decl::Var(var)) => {
                    var.visit_children_with(self);
                    self.visit_message_var_decl(var, var.span.lo, Siblings::of(stmts, index));
                }
                Stmt::Expr(expr_stmt) => {
                    let outer = self.statement_start.replace(expr_stmt.span.lo);
                    expr_stmt.visit_with(self);
                    self.statement_start = outer;
                }
                _ => stmt.visit_with(self),
            }
        }
    }

    fn visit_module_items(&mut self, items: &[ModuleItem]) {
        for (index, item) in items.iter().enumerate() {
            match item {
                ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) => {
                    var.visit_children_with(self);
                    self.visit_message_var_decl(var, var.span.lo, Siblings::of_items(items, index));
                }
                ModuleItem::Stmt(Stmt::Expr(expr_stmt)) => {
                    let outer = self.statement_start.replace(expr_stmt.span.lo);
                    expr_stmt.visit_with(self);
                    self.statement_start = outer;
                }
                _ => item.visit_with(self),
            }
        }
    }

    fn visit_export_decl(&mut self, export: &ExportDecl) {
        match &export.decl {
            Decl::Var(var) => {
                var.visit_children_with(self);
                self.visit_message_var_decl(var, export.span.lo, Siblings::default());
            }
            _ => export.visit_children_with(self),
        }
    }

    /// Declarations outside statement lists, such as `for (var ...)` heads.
    fn visit_var_decl(&mut self, var: &VarDecl) {
        var.visit_children_with(self);
        self.visit_message_var_decl(var, var.span.lo, Siblings::default());
    }

    fn visit_assign_expr(&mut self, assign: &AssignExpr) {
        assign.visit_children_with(self);

        if assign.op != AssignOp::Assign {
            return;
        }
        let AssignTarget::Simple(SimpleAssignTarget::Member(member)) = &assign.left else {
            return;
        };
        let MemberProp::Ident(prop) = &member.prop else {
            return;
        };

        let statement_start = self.statement_start.unwrap_or(assign.span.lo);
        self.check_message_site(MessageSite {
            kind: DefinitionKind::Assignment,
            written_key: &prop.sym,
            value: Some(&assign.right),
            span: assign.span,
            doc_positions: [assign.span.lo, statement_start],
            siblings: Siblings::default(),
        });
    }

    fn visit_key_value_prop(&mut self, prop: &KeyValueProp) {
        prop.visit_children_with(self);

        let PropName::Ident(key) = &prop.key else {
            return;
        };
        self.check_message_site(MessageSite {
            kind: DefinitionKind::ObjectKey,
            written_key: &key.sym,
            value: Some(&prop.value),
            span: key.span,
            doc_positions: [key.span.lo, key.span.lo],
            siblings: Siblings::default(),
        });
    }

    fn visit_call_expr(&mut self, call: &CallExpr) {
        call.visit_children_with(self);

        if callee_matches(call, MSG_FUNCTION_NAME) {
            self.pending_calls.insert(call.span, self.file_path.clone());
        } else if callee_matches(call, MSG_FALLBACK_FUNCTION_NAME) {
            self.check_fallback_call(call);
        }
    }
}
