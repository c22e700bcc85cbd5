//! Expression traversal for the rewrite pass.

use super::{decide_reference_rename, RenameAction, TransformationPass};
use crate::constants::MAX_RECURSION_DEPTH;
use crate::resolver::SymbolResolver;
use ruff_python_ast::{self as ast, Expr};

impl<R: SymbolResolver> TransformationPass<'_, R> {
    pub(super) fn visit_expr(&mut self, expr: &mut Expr) {
        if self.depth >= MAX_RECURSION_DEPTH {
            return;
        }
        self.depth += 1;
        self.notify_progress();

        match expr {
            Expr::Attribute(node) => self.visit_attribute(node),
            Expr::Call(node) => {
                self.visit_expr(&mut node.func);
                for arg in &mut node.arguments.args {
                    self.visit_expr(arg);
                }
                for keyword in &mut node.arguments.keywords {
                    self.visit_expr(&mut keyword.value);
                }
            }
            Expr::BoolOp(node) => {
                for value in &mut node.values {
                    self.visit_expr(value);
                }
            }
            Expr::BinOp(node) => {
                self.visit_expr(&mut node.left);
                self.visit_expr(&mut node.right);
            }
            Expr::UnaryOp(node) => self.visit_expr(&mut node.operand),
            Expr::Lambda(node) => {
                if let Some(parameters) = &mut node.parameters {
                    self.visit_parameters(parameters);
                }
                self.visit_expr(&mut node.body);
            }
            Expr::If(node) => {
                self.visit_expr(&mut node.test);
                self.visit_expr(&mut node.body);
                self.visit_expr(&mut node.orelse);
            }
            Expr::Named(node) => {
                self.visit_expr(&mut node.target);
                self.visit_expr(&mut node.value);
            }
            Expr::Dict(node) => {
                for item in &mut node.items {
                    if let Some(key) = &mut item.key {
                        self.visit_expr(key);
                    }
                    self.visit_expr(&mut item.value);
                }
            }
            Expr::Set(node) => {
                for elt in &mut node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::ListComp(node) => {
                for gen in &mut node.generators {
                    self.visit_comprehension(gen);
                }
                self.visit_expr(&mut node.elt);
            }
            Expr::SetComp(node) => {
                for gen in &mut node.generators {
                    self.visit_comprehension(gen);
                }
                self.visit_expr(&mut node.elt);
            }
            Expr::DictComp(node) => {
                for gen in &mut node.generators {
                    self.visit_comprehension(gen);
                }
                if let Some(key) = &mut node.key {
                    self.visit_expr(key);
                }
                self.visit_expr(&mut node.value);
            }
            Expr::Generator(node) => {
                for gen in &mut node.generators {
                    self.visit_comprehension(gen);
                }
                self.visit_expr(&mut node.elt);
            }
            Expr::Await(node) => self.visit_expr(&mut node.value),
            Expr::Yield(node) => {
                if let Some(value) = &mut node.value {
                    self.visit_expr(value);
                }
            }
            Expr::YieldFrom(node) => self.visit_expr(&mut node.value),
            Expr::Compare(node) => {
                self.visit_expr(&mut node.left);
                for comparator in &mut node.comparators {
                    self.visit_expr(comparator);
                }
            }
            Expr::Subscript(node) => {
                self.visit_expr(&mut node.value);
                self.visit_expr(&mut node.slice);
            }
            Expr::FString(node) => {
                for part in node.value.iter_mut() {
                    match part {
                        ast::FStringPart::Literal(_) => {}
                        ast::FStringPart::FString(f) => {
                            for element in f.elements.iter_mut() {
                                if let ast::InterpolatedStringElement::Interpolation(interp) =
                                    element
                                {
                                    self.visit_expr(&mut interp.expression);
                                }
                            }
                        }
                    }
                }
            }
            Expr::List(node) => {
                for elt in &mut node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Tuple(node) => {
                for elt in &mut node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Slice(node) => {
                for part in [&mut node.lower, &mut node.upper, &mut node.step]
                    .into_iter()
                    .flatten()
                {
                    self.visit_expr(part);
                }
            }
            Expr::Starred(node) => self.visit_expr(&mut node.value),
            _ => {}
        }

        self.depth -= 1;
    }

    /// The receiver is rewritten first; the member decision keys off the
    /// node's original range, which mutation does not disturb.
    fn visit_attribute(&mut self, node: &mut ast::ExprAttribute) {
        self.visit_expr(&mut node.value);

        let scope = self.resolver.scope_kind_of(node.range);
        let origin = self.resolver.origin_kind_of(node.range);
        if let RenameAction::Rename(new_name) =
            decide_reference_rename(node.attr.as_str(), scope, origin, self.ctx)
        {
            self.record(node.attr.range, &new_name);
            node.attr.id = ast::name::Name::from(new_name.as_str());
        }
    }

    fn visit_comprehension(&mut self, gen: &mut ast::Comprehension) {
        self.visit_expr(&mut gen.iter);
        self.visit_expr(&mut gen.target);
        for if_expr in &mut gen.ifs {
            self.visit_expr(if_expr);
        }
    }
}
