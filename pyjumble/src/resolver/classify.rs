//! Phase two: record scope and origin tags for every site the
//! transformation pass will ask about.

use super::{BindingResolver, OriginKind, ScopeKind};
use crate::constants::MAX_RECURSION_DEPTH;
use ruff_python_ast::{self as ast, Expr, Stmt};

impl BindingResolver {
    pub(super) fn classify_stmt(&mut self, stmt: &Stmt) {
        if self.depth >= MAX_RECURSION_DEPTH {
            return;
        }
        self.depth += 1;

        match stmt {
            Stmt::FunctionDef(node) => self.classify_function_def(node),
            Stmt::ClassDef(node) => self.classify_class_def(node),
            Stmt::Assign(node) => {
                self.classify_expr(&node.value);
                for target in &node.targets {
                    self.classify_expr(target);
                }
            }
            Stmt::AugAssign(node) => {
                self.classify_expr(&node.target);
                self.classify_expr(&node.value);
            }
            Stmt::AnnAssign(node) => {
                self.classify_expr(&node.target);
                self.classify_expr(&node.annotation);
                if let Some(value) = &node.value {
                    self.classify_expr(value);
                }
            }
            Stmt::Expr(node) => self.classify_expr(&node.value),
            Stmt::Return(node) => {
                if let Some(value) = &node.value {
                    self.classify_expr(value);
                }
            }
            Stmt::If(node) => {
                self.classify_expr(&node.test);
                for stmt in &node.body {
                    self.classify_stmt(stmt);
                }
                for clause in &node.elif_else_clauses {
                    if let Some(test) = &clause.test {
                        self.classify_expr(test);
                    }
                    for stmt in &clause.body {
                        self.classify_stmt(stmt);
                    }
                }
            }
            Stmt::For(node) => {
                self.classify_expr(&node.iter);
                self.classify_expr(&node.target);
                for stmt in node.body.iter().chain(&node.orelse) {
                    self.classify_stmt(stmt);
                }
            }
            Stmt::While(node) => {
                self.classify_expr(&node.test);
                for stmt in node.body.iter().chain(&node.orelse) {
                    self.classify_stmt(stmt);
                }
            }
            Stmt::With(node) => {
                for item in &node.items {
                    self.classify_expr(&item.context_expr);
                    if let Some(vars) = &item.optional_vars {
                        self.classify_expr(vars);
                    }
                }
                for stmt in &node.body {
                    self.classify_stmt(stmt);
                }
            }
            Stmt::Try(node) => {
                for stmt in &node.body {
                    self.classify_stmt(stmt);
                }
                for ast::ExceptHandler::ExceptHandler(handler) in &node.handlers {
                    if let Some(type_) = &handler.type_ {
                        self.classify_expr(type_);
                    }
                    for stmt in &handler.body {
                        self.classify_stmt(stmt);
                    }
                }
                for stmt in node.orelse.iter().chain(&node.finalbody) {
                    self.classify_stmt(stmt);
                }
            }
            Stmt::Raise(node) => {
                if let Some(exc) = &node.exc {
                    self.classify_expr(exc);
                }
                if let Some(cause) = &node.cause {
                    self.classify_expr(cause);
                }
            }
            Stmt::Assert(node) => {
                self.classify_expr(&node.test);
                if let Some(msg) = &node.msg {
                    self.classify_expr(msg);
                }
            }
            Stmt::Delete(node) => {
                for target in &node.targets {
                    self.classify_expr(target);
                }
            }
            Stmt::Match(node) => {
                self.classify_expr(&node.subject);
                for case in &node.cases {
                    self.classify_pattern(&case.pattern);
                    if let Some(guard) = &case.guard {
                        self.classify_expr(guard);
                    }
                    for stmt in &case.body {
                        self.classify_stmt(stmt);
                    }
                }
            }
            _ => {}
        }

        self.depth -= 1;
    }

    /// The definition's scope tag is the *enclosing* region, read before the
    /// function's own scope is pushed; that is what decides method-ness.
    fn classify_function_def(&mut self, node: &ast::StmtFunctionDef) {
        self.scopes.insert(node.range, self.current_scope());
        for decorator in &node.decorator_list {
            self.classify_expr(&decorator.expression);
        }
        self.classify_parameters(&node.parameters);
        if let Some(returns) = &node.returns {
            self.classify_expr(returns);
        }
        self.scope_stack.push(ScopeKind::Function);
        for stmt in &node.body {
            self.classify_stmt(stmt);
        }
        self.scope_stack.pop();
    }

    fn classify_class_def(&mut self, node: &ast::StmtClassDef) {
        for decorator in &node.decorator_list {
            self.classify_expr(&decorator.expression);
        }
        if let Some(arguments) = &node.arguments {
            for base in &arguments.args {
                self.classify_expr(base);
            }
            for keyword in &arguments.keywords {
                self.classify_expr(&keyword.value);
            }
        }
        self.scope_stack.push(ScopeKind::Class);
        for stmt in &node.body {
            self.classify_stmt(stmt);
        }
        self.scope_stack.pop();
    }

    fn classify_attribute(&mut self, node: &ast::ExprAttribute) {
        self.scopes.insert(node.range, self.current_scope());
        let origin = match &*node.value {
            Expr::Name(receiver) => {
                let id = receiver.id.as_str();
                if self.import_aliases.contains(id) {
                    OriginKind::External
                } else if self.local_defined.contains(id) {
                    OriginKind::Local
                } else {
                    OriginKind::Unknown
                }
            }
            // A literal receiver is a member access on a builtin type.
            Expr::StringLiteral(_)
            | Expr::BytesLiteral(_)
            | Expr::NumberLiteral(_)
            | Expr::FString(_)
            | Expr::List(_)
            | Expr::Dict(_)
            | Expr::Set(_)
            | Expr::Tuple(_) => OriginKind::External,
            // Chained receivers (`self.items.append`) and call results are
            // not resolvable here.
            _ => OriginKind::Unknown,
        };
        self.origins.insert(node.range, origin);
        self.classify_expr(&node.value);
    }

    fn classify_expr(&mut self, expr: &Expr) {
        if self.depth >= MAX_RECURSION_DEPTH {
            return;
        }
        self.depth += 1;

        match expr {
            Expr::Attribute(node) => self.classify_attribute(node),
            Expr::Call(node) => {
                self.classify_expr(&node.func);
                for arg in &node.arguments.args {
                    self.classify_expr(arg);
                }
                for keyword in &node.arguments.keywords {
                    self.classify_expr(&keyword.value);
                }
            }
            Expr::BoolOp(node) => {
                for value in &node.values {
                    self.classify_expr(value);
                }
            }
            Expr::BinOp(node) => {
                self.classify_expr(&node.left);
                self.classify_expr(&node.right);
            }
            Expr::UnaryOp(node) => self.classify_expr(&node.operand),
            Expr::Lambda(node) => {
                // Lambdas are function scopes; defaults evaluate outside.
                if let Some(parameters) = &node.parameters {
                    self.classify_parameters(parameters);
                }
                self.scope_stack.push(ScopeKind::Function);
                self.classify_expr(&node.body);
                self.scope_stack.pop();
            }
            Expr::If(node) => {
                self.classify_expr(&node.test);
                self.classify_expr(&node.body);
                self.classify_expr(&node.orelse);
            }
            Expr::Named(node) => {
                self.classify_expr(&node.target);
                self.classify_expr(&node.value);
            }
            Expr::Dict(node) => {
                for item in &node.items {
                    if let Some(key) = &item.key {
                        self.classify_expr(key);
                    }
                    self.classify_expr(&item.value);
                }
            }
            Expr::Set(node) => {
                for elt in &node.elts {
                    self.classify_expr(elt);
                }
            }
            Expr::ListComp(node) => {
                self.classify_comprehension(&node.generators, &[&node.elt]);
            }
            Expr::SetComp(node) => {
                self.classify_comprehension(&node.generators, &[&node.elt]);
            }
            Expr::DictComp(node) => {
                if let Some(key) = &node.key {
                    self.classify_comprehension(&node.generators, &[key, &node.value]);
                } else {
                    self.classify_comprehension(&node.generators, &[&node.value]);
                }
            }
            Expr::Generator(node) => {
                self.classify_comprehension(&node.generators, &[&node.elt]);
            }
            Expr::Await(node) => self.classify_expr(&node.value),
            Expr::Yield(node) => {
                if let Some(value) = &node.value {
                    self.classify_expr(value);
                }
            }
            Expr::YieldFrom(node) => self.classify_expr(&node.value),
            Expr::Compare(node) => {
                self.classify_expr(&node.left);
                for comparator in &node.comparators {
                    self.classify_expr(comparator);
                }
            }
            Expr::Subscript(node) => {
                self.classify_expr(&node.value);
                self.classify_expr(&node.slice);
            }
            Expr::FString(node) => {
                for part in &node.value {
                    match part {
                        ast::FStringPart::Literal(_) => {}
                        ast::FStringPart::FString(f) => {
                            for element in &f.elements {
                                if let ast::InterpolatedStringElement::Interpolation(interp) =
                                    element
                                {
                                    self.classify_expr(&interp.expression);
                                }
                            }
                        }
                    }
                }
            }
            Expr::List(node) => {
                for elt in &node.elts {
                    self.classify_expr(elt);
                }
            }
            Expr::Tuple(node) => {
                for elt in &node.elts {
                    self.classify_expr(elt);
                }
            }
            Expr::Slice(node) => {
                for part in [&node.lower, &node.upper, &node.step].into_iter().flatten() {
                    self.classify_expr(part);
                }
            }
            Expr::Starred(node) => self.classify_expr(&node.value),
            _ => {}
        }

        self.depth -= 1;
    }

    fn classify_parameters(&mut self, parameters: &ast::Parameters) {
        for arg in parameters.posonlyargs.iter().chain(&parameters.args) {
            if let Some(annotation) = &arg.parameter.annotation {
                self.classify_expr(annotation);
            }
            if let Some(default) = &arg.default {
                self.classify_expr(default);
            }
        }
        if let Some(arg) = &parameters.vararg {
            if let Some(annotation) = &arg.annotation {
                self.classify_expr(annotation);
            }
        }
        for arg in &parameters.kwonlyargs {
            if let Some(annotation) = &arg.parameter.annotation {
                self.classify_expr(annotation);
            }
            if let Some(default) = &arg.default {
                self.classify_expr(default);
            }
        }
        if let Some(arg) = &parameters.kwarg {
            if let Some(annotation) = &arg.annotation {
                self.classify_expr(annotation);
            }
        }
    }

    /// The outermost iterable of a comprehension evaluates in the enclosing
    /// scope; everything else lives in the comprehension's own scope.
    fn classify_comprehension(&mut self, generators: &[ast::Comprehension], exprs: &[&Expr]) {
        let Some((first, rest)) = generators.split_first() else {
            return;
        };
        self.classify_expr(&first.iter);
        self.scope_stack.push(ScopeKind::Other);
        self.classify_expr(&first.target);
        for if_expr in &first.ifs {
            self.classify_expr(if_expr);
        }
        for gen in rest {
            self.classify_expr(&gen.iter);
            self.classify_expr(&gen.target);
            for if_expr in &gen.ifs {
                self.classify_expr(if_expr);
            }
        }
        for expr in exprs {
            self.classify_expr(expr);
        }
        self.scope_stack.pop();
    }

    fn classify_pattern(&mut self, pattern: &ast::Pattern) {
        match pattern {
            ast::Pattern::MatchValue(node) => self.classify_expr(&node.value),
            ast::Pattern::MatchSequence(node) => {
                for p in &node.patterns {
                    self.classify_pattern(p);
                }
            }
            ast::Pattern::MatchMapping(node) => {
                for (key, value) in node.keys.iter().zip(&node.patterns) {
                    self.classify_expr(key);
                    self.classify_pattern(value);
                }
            }
            ast::Pattern::MatchClass(node) => {
                self.classify_expr(&node.cls);
                for p in &node.arguments.patterns {
                    self.classify_pattern(p);
                }
                for keyword in &node.arguments.keywords {
                    self.classify_pattern(&keyword.pattern);
                }
            }
            ast::Pattern::MatchAs(node) => {
                if let Some(inner) = &node.pattern {
                    self.classify_pattern(inner);
                }
            }
            ast::Pattern::MatchOr(node) => {
                for p in &node.patterns {
                    self.classify_pattern(p);
                }
            }
            ast::Pattern::MatchSingleton(_) | ast::Pattern::MatchStar(_) => {}
        }
    }
}
