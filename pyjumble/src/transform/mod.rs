//! The rewrite pass: a depth-first, mutate-on-exit traversal applying the
//! rename policy to method definitions and attribute references.

#![allow(clippy::wildcard_imports)]

mod expr;
mod policy;
mod stmt;

pub use policy::{decide_method_rename, decide_reference_rename, RenameAction};

use crate::rename::RenameContext;
use crate::resolver::SymbolResolver;
use compact_str::CompactString;
use indicatif::ProgressBar;
use ruff_python_ast as ast;
use ruff_text_size::TextRange;

/// A single identifier replacement against the original source text.
///
/// Ranges always cover exactly one identifier leaf token, so splicing edits
/// can never change the shape of the surrounding code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte range of the original identifier.
    pub range: TextRange,
    /// The generated name replacing it.
    pub replacement: CompactString,
}

/// One traversal over one source unit.
///
/// Owns no rename state itself; the [`RenameContext`] is borrowed from the
/// caller so that reuse across units is the caller's explicit choice.
pub struct TransformationPass<'a, R: SymbolResolver> {
    resolver: &'a R,
    ctx: &'a mut RenameContext,
    edits: Vec<Edit>,
    spinner: Option<ProgressBar>,
    first_visit: bool,
    depth: usize,
}

impl<'a, R: SymbolResolver> TransformationPass<'a, R> {
    /// Creates a pass over `resolver` classifications writing renames into
    /// `ctx`.
    pub fn new(resolver: &'a R, ctx: &'a mut RenameContext) -> Self {
        Self {
            resolver,
            ctx,
            edits: Vec::new(),
            spinner: None,
            first_visit: true,
            depth: 0,
        }
    }

    /// Attaches a progress spinner, notified once on the first visited node.
    #[must_use]
    pub fn with_spinner(mut self, spinner: ProgressBar) -> Self {
        self.spinner = Some(spinner);
        self
    }

    /// Rewrites the module in place and returns the source edits for the
    /// sites that changed, ordered by position.
    pub fn run(mut self, module: &mut ast::ModModule) -> Vec<Edit> {
        for stmt in &mut module.body {
            self.visit_stmt(stmt);
        }
        let mut edits = self.edits;
        edits.sort_by_key(|edit| edit.range.start());
        edits
    }

    /// Side-channel only; fires once, before any rewrite decision.
    fn notify_progress(&mut self) {
        if self.first_visit {
            if let Some(spinner) = &self.spinner {
                spinner.tick();
            }
            self.first_visit = false;
        }
    }

    fn record(&mut self, range: TextRange, replacement: &CompactString) {
        self.edits.push(Edit {
            range,
            replacement: replacement.clone(),
        });
    }
}

/// Splices `edits` into `source`, leaving every untouched byte identical to
/// the input. Edits must be position-sorted and non-overlapping, which the
/// pass guarantees (one edit per identifier token).
#[must_use]
pub fn apply_edits(source: &str, edits: &[Edit]) -> String {
    let mut output = String::with_capacity(source.len() + edits.len() * 16);
    let mut cursor = 0usize;
    for edit in edits {
        let start = usize::from(edit.range.start());
        let end = usize::from(edit.range.end());
        if start < cursor {
            continue;
        }
        output.push_str(&source[cursor..start]);
        output.push_str(&edit.replacement);
        cursor = end;
    }
    output.push_str(&source[cursor..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{OriginKind, ScopeKind};
    use ruff_python_ast::Stmt;

    /// Resolver with no metadata at all; everything must pass through
    /// unchanged.
    struct BlindResolver;

    impl SymbolResolver for BlindResolver {
        fn scope_kind_of(&self, _range: TextRange) -> Option<ScopeKind> {
            None
        }

        fn origin_kind_of(&self, _range: TextRange) -> OriginKind {
            OriginKind::Unknown
        }
    }

    fn parse(source: &str) -> ast::ModModule {
        ruff_python_parser::parse_module(source)
            .unwrap()
            .into_syntax()
    }

    #[test]
    fn missing_metadata_fails_open() {
        let source = "class A:\n    def method(self):\n        return self.value\n";
        let mut module = parse(source);
        let mut ctx = RenameContext::with_seed(0);
        let edits = TransformationPass::new(&BlindResolver, &mut ctx).run(&mut module);
        assert!(edits.is_empty());
        assert_eq!(apply_edits(source, &edits), source);
        assert!(ctx.map().is_empty());
    }

    #[test]
    fn apply_edits_replaces_exact_ranges() {
        let source = "def foo():\n    return bar\n";
        let offset = u32::try_from(source.find("bar").unwrap()).unwrap();
        let edits = vec![Edit {
            range: TextRange::new(offset.into(), (offset + 3).into()),
            replacement: CompactString::from("llllIIII"),
        }];
        assert_eq!(apply_edits(source, &edits), "def foo():\n    return llllIIII\n");
    }

    #[test]
    fn rewritten_tree_matches_recorded_edits() {
        let source = "class A:\n    def helper(self):\n        return self.count_\n";
        let mut module = parse(source);
        let resolver = crate::resolver::BindingResolver::bind(&module);
        let mut ctx = RenameContext::with_seed(11);
        let edits = TransformationPass::new(&resolver, &mut ctx).run(&mut module);

        // `helper` (method) and `count_` (local attribute) both rewritten.
        assert_eq!(edits.len(), 2);
        let Stmt::ClassDef(class) = &module.body[0] else {
            panic!("expected class");
        };
        let Stmt::FunctionDef(method) = &class.body[0] else {
            panic!("expected method");
        };
        assert_eq!(
            method.name.as_str(),
            ctx.lookup("helper").unwrap(),
            "mutated tree and rename map disagree"
        );
    }

    #[test]
    fn structure_is_preserved() {
        let source = "class A:\n    def one(self):\n        self.x_ = 1\n\n    def two(self):\n        return self.x_\n";
        let mut module = parse(source);
        let resolver = crate::resolver::BindingResolver::bind(&module);
        let mut ctx = RenameContext::with_seed(5);
        let edits = TransformationPass::new(&resolver, &mut ctx).run(&mut module);
        let rewritten = apply_edits(source, &edits);

        let reparsed = parse(&rewritten);
        assert_eq!(reparsed.body.len(), module.body.len());
        let Stmt::ClassDef(class) = &reparsed.body[0] else {
            panic!("rewritten source no longer starts with the class");
        };
        assert_eq!(class.body.len(), 2);
    }
}
