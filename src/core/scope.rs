//! Lexical scope tracking for unnamed-message identity.
//!
//! Unnamed message names (`MSG_UNNAMED_*`) are not globally unique, so the
//! registry keys them by the binding in effect at the definition site rather
//! than by the name string. `ScopeTracker` hands out opaque `BindingId`s for
//! every declared name and resolves references innermost to outermost.

use std::collections::HashMap;

use swc_ecma_ast::{
    ArrowExpr, Class, Decl, Function, GetterProp, ImportSpecifier, ModuleDecl, ModuleItem,
    ObjectPatProp, Pat, SetterProp, Stmt, VarDecl, VarDeclKind,
};
use swc_ecma_visit::{Visit, VisitWith};

/// Opaque handle for one declared binding. Unique within one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u32);

/// Stack of lexical scopes (innermost last).
#[derive(Debug)]
pub struct ScopeTracker {
    scopes: Vec<HashMap<String, BindingId>>,
    next_id: u32,
}

impl Default for ScopeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTracker {
    /// Create a tracker holding only the global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
            next_id: 0,
        }
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Leave the innermost scope. The global scope is never popped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Declare `name` in the innermost scope.
    ///
    /// Redeclaring a name in the same scope (`var x; var x;`) yields the
    /// existing binding.
    pub fn declare(&mut self, name: &str) -> BindingId {
        if let Some(scope) = self.scopes.last()
            && let Some(id) = scope.get(name)
        {
            return *id;
        }
        let id = BindingId(self.next_id);
        self.next_id += 1;
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), id);
        }
        id
    }

    pub fn declare_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.declare(name.as_ref());
        }
    }

    /// The binding `name` refers to at the current position, if any.
    pub fn resolve(&self, name: &str) -> Option<BindingId> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }
}

/// All names bound by a declaration pattern.
pub fn extract_binding_names(pat: &Pat) -> Vec<String> {
    match pat {
        Pat::Ident(ident) => vec![ident.id.sym.to_string()],
        Pat::Object(obj) => obj
            .props
            .iter()
            .flat_map(|prop| match prop {
                ObjectPatProp::KeyValue(kv) => extract_binding_names(&kv.value),
                ObjectPatProp::Assign(assign) => vec![assign.key.sym.to_string()],
                ObjectPatProp::Rest(rest) => extract_binding_names(&rest.arg),
            })
            .collect(),
        Pat::Array(arr) => arr
            .elems
            .iter()
            .flatten()
            .flat_map(extract_binding_names)
            .collect(),
        Pat::Assign(assign) => extract_binding_names(&assign.left),
        Pat::Rest(rest) => extract_binding_names(&rest.arg),
        _ => vec![],
    }
}

/// Collects `var` names hoisted to the enclosing function (or program).
///
/// Nested functions, arrows, classes and accessor properties own their own
/// `var`s and are skipped.
#[derive(Default)]
struct HoistedVarCollector {
    names: Vec<String>,
}

impl Visit for HoistedVarCollector {
    fn visit_var_decl(&mut self, node: &VarDecl) {
        if node.kind == VarDeclKind::Var {
            for decl in &node.decls {
                self.names.extend(extract_binding_names(&decl.name));
            }
        }
    }

    fn visit_function(&mut self, _: &Function) {}

    fn visit_arrow_expr(&mut self, _: &ArrowExpr) {}

    fn visit_class(&mut self, _: &Class) {}

    fn visit_getter_prop(&mut self, _: &GetterProp) {}

    fn visit_setter_prop(&mut self, _: &SetterProp) {}
}

/// `var` names declared anywhere in a function body or script, excluding nested functions.
pub fn hoisted_var_names(stmts: &[Stmt]) -> Vec<String> {
    let mut collector = HoistedVarCollector::default();
    stmts.visit_with(&mut collector);
    collector.names
}

fn lexical_decl_names(decl: &Decl, names: &mut Vec<String>) {
    match decl {
        Decl::Var(var) if var.kind != VarDeclKind::Var => {
            for declarator in &var.decls {
                names.extend(extract_binding_names(&declarator.name));
            }
        }
        Decl::Fn(fn_decl) => names.push(fn_decl.ident.sym.to_string()),
        Decl::Class(class_decl) => names.push(class_decl.ident.sym.to_string()),
        _ => {}
    }
}

/// Names declared directly in a statement list with block scope
/// (`let`, `const`, `class` and function declarations).
pub fn lexical_names(stmts: &[Stmt]) -> Vec<String> {
    let mut names = Vec::new();
    for stmt in stmts {
        if let Stmt::Decl(decl) = stmt {
            lexical_decl_names(decl, &mut names);
        }
    }
    names
}

/// Every name a module body declares at its top level: imports, lexical
/// declarations (exported or not) and hoisted `var`s.
pub fn module_names(items: &[ModuleItem]) -> Vec<String> {
    let mut names = Vec::new();
    let mut collector = HoistedVarCollector::default();
    for item in items {
        match item {
            ModuleItem::Stmt(stmt) => {
                if let Stmt::Decl(decl) = stmt {
                    lexical_decl_names(decl, &mut names);
                }
                stmt.visit_with(&mut collector);
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                lexical_decl_names(&export.decl, &mut names);
                export.decl.visit_with(&mut collector);
            }
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => {
                for specifier in &import.specifiers {
                    let local = match specifier {
                        ImportSpecifier::Named(named) => &named.local,
                        ImportSpecifier::Default(default) => &default.local,
                        ImportSpecifier::Namespace(namespace) => &namespace.local,
                    };
                    names.push(local.sym.to_string());
                }
            }
            ModuleItem::ModuleDecl(_) => {}
        }
    }
    names.extend(collector.names);
    names
}
