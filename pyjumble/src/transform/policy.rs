//! The rename decision policy, separated from traversal mechanics.
//!
//! Two pure decision functions cover the two node kinds that carry rename
//! decisions. The asymmetry between them is deliberate and load-bearing:
//! a definition inside a class body is user-authored by construction and
//! trusted unconditionally, while a member reference is textually identical
//! whether its receiver is user-defined or an external object, so only a
//! positive local-resolution signal authorizes a rewrite there.

use crate::constants::reserved_names;
use crate::rename::RenameContext;
use crate::resolver::{OriginKind, ScopeKind};
use compact_str::CompactString;

/// Outcome of a rename decision for one identifier site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameAction {
    /// Replace the identifier with this generated name.
    Rename(CompactString),
    /// Leave the site byte-identical to the input.
    Keep,
}

/// Decision for a function/method definition name.
///
/// Only definitions whose enclosing region is a class body are methods;
/// free functions belong to a different pass and stay untouched here.
pub fn decide_method_rename(
    name: &str,
    scope: Option<ScopeKind>,
    ctx: &mut RenameContext,
) -> RenameAction {
    match scope {
        Some(ScopeKind::Class) if !reserved_names().contains(name) => {
            RenameAction::Rename(ctx.get_or_create(name))
        }
        _ => RenameAction::Keep,
    }
}

/// Decision for an `object.member` reference.
///
/// Inside a function body a reference is rewritten only with positive
/// evidence: local origin and a non-reserved name. Anywhere else the map is
/// consulted read-only, so a name rides along only if a better-evidenced
/// site already renamed it.
pub fn decide_reference_rename(
    name: &str,
    scope: Option<ScopeKind>,
    origin: OriginKind,
    ctx: &mut RenameContext,
) -> RenameAction {
    let Some(scope) = scope else {
        return RenameAction::Keep;
    };
    if scope == ScopeKind::Function {
        if origin == OriginKind::Local && !reserved_names().contains(name) {
            RenameAction::Rename(ctx.get_or_create(name))
        } else {
            RenameAction::Keep
        }
    } else {
        match ctx.lookup(name) {
            Some(generated) => RenameAction::Rename(CompactString::from(generated)),
            None => RenameAction::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_in_class_scope_is_renamed() {
        let mut ctx = RenameContext::with_seed(1);
        let action = decide_method_rename("process", Some(ScopeKind::Class), &mut ctx);
        assert!(matches!(action, RenameAction::Rename(_)));
        assert!(ctx.lookup("process").is_some());
    }

    #[test]
    fn free_function_is_kept() {
        let mut ctx = RenameContext::with_seed(1);
        assert_eq!(
            decide_method_rename("process", Some(ScopeKind::Module), &mut ctx),
            RenameAction::Keep
        );
        assert!(ctx.map().is_empty());
    }

    #[test]
    fn reserved_method_is_kept() {
        let mut ctx = RenameContext::with_seed(1);
        assert_eq!(
            decide_method_rename("__init__", Some(ScopeKind::Class), &mut ctx),
            RenameAction::Keep
        );
    }

    #[test]
    fn local_function_scoped_reference_is_renamed() {
        let mut ctx = RenameContext::with_seed(2);
        let action = decide_reference_rename(
            "field",
            Some(ScopeKind::Function),
            OriginKind::Local,
            &mut ctx,
        );
        assert!(matches!(action, RenameAction::Rename(_)));
    }

    #[test]
    fn external_reference_is_kept_even_when_mapped() {
        let mut ctx = RenameContext::with_seed(2);
        ctx.get_or_create("field");
        assert_eq!(
            decide_reference_rename(
                "field",
                Some(ScopeKind::Function),
                OriginKind::External,
                &mut ctx,
            ),
            RenameAction::Keep
        );
    }

    #[test]
    fn unknown_origin_is_kept() {
        let mut ctx = RenameContext::with_seed(2);
        assert_eq!(
            decide_reference_rename(
                "field",
                Some(ScopeKind::Function),
                OriginKind::Unknown,
                &mut ctx,
            ),
            RenameAction::Keep
        );
    }

    #[test]
    fn reserved_reference_is_kept() {
        let mut ctx = RenameContext::with_seed(2);
        assert_eq!(
            decide_reference_rename(
                "append",
                Some(ScopeKind::Function),
                OriginKind::Local,
                &mut ctx,
            ),
            RenameAction::Keep
        );
    }

    #[test]
    fn class_scope_reference_only_applies_existing_mapping() {
        let mut ctx = RenameContext::with_seed(3);
        assert_eq!(
            decide_reference_rename(
                "field",
                Some(ScopeKind::Class),
                OriginKind::Local,
                &mut ctx,
            ),
            RenameAction::Keep
        );
        assert!(ctx.map().is_empty(), "lookup must not create entries");

        let generated = ctx.get_or_create("field");
        assert_eq!(
            decide_reference_rename(
                "field",
                Some(ScopeKind::Class),
                OriginKind::Unknown,
                &mut ctx,
            ),
            RenameAction::Rename(generated)
        );
    }

    #[test]
    fn missing_scope_metadata_is_kept() {
        let mut ctx = RenameContext::with_seed(4);
        assert_eq!(
            decide_reference_rename("field", None, OriginKind::Local, &mut ctx),
            RenameAction::Keep
        );
    }
}
