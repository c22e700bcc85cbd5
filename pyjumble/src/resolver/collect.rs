//! Phase one: harvest every binding the source unit introduces.

use super::BindingResolver;
use ruff_python_ast::visitor::{
    walk_except_handler, walk_expr, walk_parameter, walk_pattern, walk_stmt, Visitor,
};
use ruff_python_ast::{self as ast, Expr, Pattern, Stmt};

impl BindingResolver {
    pub(super) fn collect_stmt(&mut self, stmt: &Stmt) {
        let mut collector = Collector { resolver: self };
        collector.visit_stmt(stmt);
    }
}

/// Source-order walker feeding the resolver's binding sets.
///
/// Any `Name` in store context counts as a local definition: assignment
/// targets, loop targets, comprehension targets and walrus targets all end
/// up here without per-construct handling.
struct Collector<'r> {
    resolver: &'r mut BindingResolver,
}

impl<'a> Visitor<'a> for Collector<'_> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        match stmt {
            Stmt::Import(node) => {
                for alias in &node.names {
                    // `import a.b` binds `a`; an alias binds the alias.
                    let binding = alias.asname.as_ref().map_or_else(
                        || alias.name.as_str().split('.').next().unwrap_or_default(),
                        ruff_python_ast::Identifier::as_str,
                    );
                    self.resolver.import_aliases.insert(binding.to_owned());
                }
            }
            Stmt::ImportFrom(node) => {
                for alias in &node.names {
                    let binding = alias.asname.as_ref().unwrap_or(&alias.name);
                    self.resolver
                        .import_aliases
                        .insert(binding.as_str().to_owned());
                }
            }
            Stmt::FunctionDef(node) => {
                self.resolver.local_defined.insert(node.name.to_string());
            }
            Stmt::ClassDef(node) => {
                self.resolver.local_defined.insert(node.name.to_string());
            }
            _ => {}
        }
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'a Expr) {
        if let Expr::Name(node) = expr {
            if node.ctx.is_store() {
                self.resolver.local_defined.insert(node.id.to_string());
            }
        }
        walk_expr(self, expr);
    }

    fn visit_parameter(&mut self, parameter: &'a ast::Parameter) {
        self.resolver
            .local_defined
            .insert(parameter.name.to_string());
        walk_parameter(self, parameter);
    }

    fn visit_except_handler(&mut self, handler: &'a ast::ExceptHandler) {
        let ast::ExceptHandler::ExceptHandler(node) = handler;
        if let Some(name) = &node.name {
            self.resolver.local_defined.insert(name.to_string());
        }
        walk_except_handler(self, handler);
    }

    fn visit_pattern(&mut self, pattern: &'a Pattern) {
        match pattern {
            Pattern::MatchAs(node) => {
                if let Some(name) = &node.name {
                    self.resolver.local_defined.insert(name.to_string());
                }
            }
            Pattern::MatchStar(node) => {
                if let Some(name) = &node.name {
                    self.resolver.local_defined.insert(name.to_string());
                }
            }
            Pattern::MatchMapping(node) => {
                if let Some(rest) = &node.rest {
                    self.resolver.local_defined.insert(rest.to_string());
                }
            }
            _ => {}
        }
        walk_pattern(self, pattern);
    }
}
