//! Scope and origin classification consumed by the transformation pass.
//!
//! The pass itself never inspects bindings; it asks a [`SymbolResolver`]
//! where a node sits and where its referent comes from, and the resolver
//! answers with plain tags. Missing metadata is an answer too (`None` /
//! [`OriginKind::Unknown`]), never an error.

mod binding;
mod classify;
mod collect;

pub use binding::BindingResolver;

use ruff_text_size::TextRange;

/// The kind of lexical region directly enclosing a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// A function, method or lambda body.
    Function,
    /// Directly inside a class body.
    Class,
    /// Module top level.
    Module,
    /// Anything else, currently comprehension scopes.
    Other,
}

/// Whether a reference resolves to a symbol defined in the source unit
/// under transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginKind {
    /// Resolves to a definition written in this source unit.
    Local,
    /// Traceable to an import or a builtin/standard-type member.
    External,
    /// Not resolvable.
    Unknown,
}

/// Per-reference classification capability.
///
/// Both methods fail open: absent metadata yields `None` or
/// [`OriginKind::Unknown`] rather than an error, and the caller leaves the
/// node untouched.
pub trait SymbolResolver {
    /// Scope kind of the region enclosing the node at `range`.
    fn scope_kind_of(&self, range: TextRange) -> Option<ScopeKind>;

    /// Origin of the attribute reference at `range`.
    fn origin_kind_of(&self, range: TextRange) -> OriginKind;
}
