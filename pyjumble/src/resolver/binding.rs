use super::{OriginKind, ScopeKind, SymbolResolver};
use ruff_python_ast::ModModule;
use ruff_text_size::TextRange;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::{smallvec, SmallVec};

/// Static, per-unit symbol classification built ahead of the rewrite.
///
/// Works in two phases over the already-parsed module:
/// 1. *collect* gathers every binding the unit introduces: import aliases
///    and locally defined names (classes, functions, parameters,
///    variables). References may precede definitions textually, so this
///    phase sees the whole module before anything is classified.
/// 2. *classify* walks again with a scope stack and records, keyed by the
///    node's [`TextRange`], the enclosing scope kind of every function
///    definition and attribute reference, plus the attribute's origin.
///
/// Origin is derived from the receiver: `alias.attr` where `alias` was
/// imported is [`OriginKind::External`]; `name.attr` where `name` is bound
/// inside the unit (including `self`/`cls` parameters) is
/// [`OriginKind::Local`]; a literal receiver belongs to a builtin type and
/// is External; everything else, notably chained receivers like
/// `self.items.append`, is [`OriginKind::Unknown`].
pub struct BindingResolver {
    pub(super) scopes: FxHashMap<TextRange, ScopeKind>,
    pub(super) origins: FxHashMap<TextRange, OriginKind>,
    /// Names bound by `import` / `from ... import` statements.
    pub(super) import_aliases: FxHashSet<String>,
    /// Simple names defined anywhere in the unit.
    pub(super) local_defined: FxHashSet<String>,
    /// Scope-kind stack used during the classify phase.
    pub(super) scope_stack: SmallVec<[ScopeKind; 8]>,
    /// Classification recursion depth, guarded by `MAX_RECURSION_DEPTH`.
    pub(super) depth: usize,
}

impl BindingResolver {
    /// Builds the classification tables for one module.
    #[must_use]
    pub fn bind(module: &ModModule) -> Self {
        let mut resolver = Self {
            scopes: FxHashMap::default(),
            origins: FxHashMap::default(),
            import_aliases: FxHashSet::default(),
            local_defined: FxHashSet::default(),
            scope_stack: smallvec![ScopeKind::Module],
            depth: 0,
        };
        for stmt in &module.body {
            resolver.collect_stmt(stmt);
        }
        for stmt in &module.body {
            resolver.classify_stmt(stmt);
        }
        resolver
    }

    pub(super) fn current_scope(&self) -> ScopeKind {
        *self.scope_stack.last().unwrap_or(&ScopeKind::Module)
    }
}

impl SymbolResolver for BindingResolver {
    fn scope_kind_of(&self, range: TextRange) -> Option<ScopeKind> {
        self.scopes.get(&range).copied()
    }

    fn origin_kind_of(&self, range: TextRange) -> OriginKind {
        self.origins
            .get(&range)
            .copied()
            .unwrap_or(OriginKind::Unknown)
    }
}
