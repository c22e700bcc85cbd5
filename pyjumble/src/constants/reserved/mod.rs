//! Reserved-name table: identifiers the obfuscator must never rename.
//!
//! This is a pre-generated snapshot of the CPython 3.12 reflective surface,
//! checked in as a static data table rather than computed by live
//! introspection. Over-protecting (keeping a name that was actually safe to
//! rename) only costs obfuscation strength; under-protecting corrupts
//! programs, so the table errs on the large side.

mod part1;
mod part2;
mod part3;

use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Returns the set of names excluded from renaming.
///
/// Built once per process; duplicate entries across the parts collapse in
/// the set.
pub fn reserved_names() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for name in part1::NAMES
            .iter()
            .chain(part2::NAMES)
            .chain(part3::NAMES)
        {
            set.insert(*name);
        }
        set
    })
}
