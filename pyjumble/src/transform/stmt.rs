//! Statement traversal for the rewrite pass.

use super::{decide_method_rename, RenameAction, TransformationPass};
use crate::constants::MAX_RECURSION_DEPTH;
use crate::resolver::SymbolResolver;
use ruff_python_ast::{self as ast, Stmt};

impl<R: SymbolResolver> TransformationPass<'_, R> {
    pub(super) fn visit_stmt(&mut self, stmt: &mut Stmt) {
        if self.depth >= MAX_RECURSION_DEPTH {
            return;
        }
        self.depth += 1;
        self.notify_progress();

        match stmt {
            Stmt::FunctionDef(node) => self.visit_function_def(node),
            Stmt::ClassDef(node) => self.visit_class_def(node),
            Stmt::Assign(node) => {
                self.visit_expr(&mut node.value);
                for target in &mut node.targets {
                    self.visit_expr(target);
                }
            }
            Stmt::AugAssign(node) => {
                self.visit_expr(&mut node.target);
                self.visit_expr(&mut node.value);
            }
            Stmt::AnnAssign(node) => {
                self.visit_expr(&mut node.target);
                self.visit_expr(&mut node.annotation);
                if let Some(value) = &mut node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::Expr(node) => self.visit_expr(&mut node.value),
            Stmt::Return(node) => {
                if let Some(value) = &mut node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::If(node) => {
                self.visit_expr(&mut node.test);
                for stmt in &mut node.body {
                    self.visit_stmt(stmt);
                }
                for clause in &mut node.elif_else_clauses {
                    if let Some(test) = &mut clause.test {
                        self.visit_expr(test);
                    }
                    for stmt in &mut clause.body {
                        self.visit_stmt(stmt);
                    }
                }
            }
            Stmt::For(node) => {
                self.visit_expr(&mut node.iter);
                self.visit_expr(&mut node.target);
                for stmt in node.body.iter_mut().chain(&mut node.orelse) {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::While(node) => {
                self.visit_expr(&mut node.test);
                for stmt in node.body.iter_mut().chain(&mut node.orelse) {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::With(node) => {
                for item in &mut node.items {
                    self.visit_expr(&mut item.context_expr);
                    if let Some(vars) = &mut item.optional_vars {
                        self.visit_expr(vars);
                    }
                }
                for stmt in &mut node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::Try(node) => {
                for stmt in &mut node.body {
                    self.visit_stmt(stmt);
                }
                for ast::ExceptHandler::ExceptHandler(handler) in &mut node.handlers {
                    if let Some(type_) = &mut handler.type_ {
                        self.visit_expr(type_);
                    }
                    for stmt in &mut handler.body {
                        self.visit_stmt(stmt);
                    }
                }
                for stmt in node.orelse.iter_mut().chain(&mut node.finalbody) {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::Raise(node) => {
                if let Some(exc) = &mut node.exc {
                    self.visit_expr(exc);
                }
                if let Some(cause) = &mut node.cause {
                    self.visit_expr(cause);
                }
            }
            Stmt::Assert(node) => {
                self.visit_expr(&mut node.test);
                if let Some(msg) = &mut node.msg {
                    self.visit_expr(msg);
                }
            }
            Stmt::Delete(node) => {
                for target in &mut node.targets {
                    self.visit_expr(target);
                }
            }
            Stmt::Match(node) => {
                self.visit_expr(&mut node.subject);
                for case in &mut node.cases {
                    self.visit_pattern(&mut case.pattern);
                    if let Some(guard) = &mut case.guard {
                        self.visit_expr(guard);
                    }
                    for stmt in &mut case.body {
                        self.visit_stmt(stmt);
                    }
                }
            }
            _ => {}
        }

        self.depth -= 1;
    }

    /// The name decision runs on exit, after the body is rewritten, so edits
    /// inside the body never see a half-renamed tree.
    fn visit_function_def(&mut self, node: &mut ast::StmtFunctionDef) {
        for decorator in &mut node.decorator_list {
            self.visit_expr(&mut decorator.expression);
        }
        self.visit_parameters(&mut node.parameters);
        if let Some(returns) = &mut node.returns {
            self.visit_expr(returns);
        }
        for stmt in &mut node.body {
            self.visit_stmt(stmt);
        }

        let scope = self.resolver.scope_kind_of(node.range);
        if let RenameAction::Rename(new_name) =
            decide_method_rename(node.name.as_str(), scope, self.ctx)
        {
            self.record(node.name.range, &new_name);
            node.name.id = ast::name::Name::from(new_name.as_str());
        }
    }

    fn visit_class_def(&mut self, node: &mut ast::StmtClassDef) {
        for decorator in &mut node.decorator_list {
            self.visit_expr(&mut decorator.expression);
        }
        if let Some(arguments) = &mut node.arguments {
            for base in &mut arguments.args {
                self.visit_expr(base);
            }
            for keyword in &mut arguments.keywords {
                self.visit_expr(&mut keyword.value);
            }
        }
        for stmt in &mut node.body {
            self.visit_stmt(stmt);
        }
    }

    pub(super) fn visit_parameters(&mut self, parameters: &mut ast::Parameters) {
        for arg in parameters
            .posonlyargs
            .iter_mut()
            .chain(&mut parameters.args)
        {
            if let Some(annotation) = &mut arg.parameter.annotation {
                self.visit_expr(annotation);
            }
            if let Some(default) = &mut arg.default {
                self.visit_expr(default);
            }
        }
        if let Some(arg) = &mut parameters.vararg {
            if let Some(annotation) = &mut arg.annotation {
                self.visit_expr(annotation);
            }
        }
        for arg in &mut parameters.kwonlyargs {
            if let Some(annotation) = &mut arg.parameter.annotation {
                self.visit_expr(annotation);
            }
            if let Some(default) = &mut arg.default {
                self.visit_expr(default);
            }
        }
        if let Some(arg) = &mut parameters.kwarg {
            if let Some(annotation) = &mut arg.annotation {
                self.visit_expr(annotation);
            }
        }
    }

    fn visit_pattern(&mut self, pattern: &mut ast::Pattern) {
        match pattern {
            ast::Pattern::MatchValue(node) => self.visit_expr(&mut node.value),
            ast::Pattern::MatchSequence(node) => {
                for p in &mut node.patterns {
                    self.visit_pattern(p);
                }
            }
            ast::Pattern::MatchMapping(node) => {
                for (key, value) in node.keys.iter_mut().zip(&mut node.patterns) {
                    self.visit_expr(key);
                    self.visit_pattern(value);
                }
            }
            ast::Pattern::MatchClass(node) => {
                self.visit_expr(&mut node.cls);
                for p in &mut node.arguments.patterns {
                    self.visit_pattern(p);
                }
                for keyword in &mut node.arguments.keywords {
                    self.visit_pattern(&mut keyword.pattern);
                }
            }
            ast::Pattern::MatchAs(node) => {
                if let Some(inner) = &mut node.pattern {
                    self.visit_pattern(inner);
                }
            }
            ast::Pattern::MatchOr(node) => {
                for p in &mut node.patterns {
                    self.visit_pattern(p);
                }
            }
            ast::Pattern::MatchSingleton(_) | ast::Pattern::MatchStar(_) => {}
        }
    }
}
