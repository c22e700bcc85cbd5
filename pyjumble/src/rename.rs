//! Run-scoped rename state: the original name to generated name mapping.

use crate::generator::NameGenerator;
use compact_str::CompactString;
use rustc_hash::FxHashMap;

/// One-time-assignment mapping from original symbol names to generated
/// names.
///
/// Once a name has an entry, every later query within the run returns the
/// same generated string; this is the consistency backbone of the whole
/// obfuscation. There is no way to delete or overwrite an entry.
#[derive(Debug, Default)]
pub struct RenameMap {
    entries: FxHashMap<CompactString, CompactString>,
}

impl RenameMap {
    fn get_or_create(&mut self, original: &str, generator: &mut NameGenerator) -> CompactString {
        if let Some(existing) = self.entries.get(original) {
            return existing.clone();
        }
        let generated = generator.next_name();
        self.entries
            .insert(CompactString::from(original), generated.clone());
        generated
    }

    /// Read-only query; never creates an entry.
    #[must_use]
    pub fn lookup(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(CompactString::as_str)
    }

    /// Number of distinct original names renamed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no rename has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(original, generated)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Explicit per-run context owning the rename map and the generator feeding
/// it.
///
/// One context belongs to one transformation run. Callers that want names
/// kept consistent across several source units must thread the same context
/// through every run themselves; there is no ambient shared state.
#[derive(Debug, Default)]
pub struct RenameContext {
    map: RenameMap,
    generator: NameGenerator,
}

impl RenameContext {
    /// Context with an entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with a deterministic generator.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            map: RenameMap::default(),
            generator: NameGenerator::with_seed(seed),
        }
    }

    /// Returns the generated name for `original`, minting one on first use.
    pub fn get_or_create(&mut self, original: &str) -> CompactString {
        self.map.get_or_create(original, &mut self.generator)
    }

    /// Read-only query; used at sites that must not create new mappings.
    #[must_use]
    pub fn lookup(&self, original: &str) -> Option<&str> {
        self.map.lookup(original)
    }

    /// The accumulated rename map, for diagnostics and `--map` export.
    #[must_use]
    pub fn map(&self) -> &RenameMap {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_is_stable_within_a_run() {
        let mut ctx = RenameContext::with_seed(9);
        let first = ctx.get_or_create("foo");
        for _ in 0..8 {
            assert_eq!(ctx.get_or_create("foo"), first);
        }
        assert_eq!(ctx.map().len(), 1);
    }

    #[test]
    fn lookup_never_creates() {
        let ctx = RenameContext::with_seed(9);
        assert!(ctx.lookup("foo").is_none());
        assert!(ctx.map().is_empty());
    }

    #[test]
    fn distinct_names_get_distinct_entries() {
        let mut ctx = RenameContext::with_seed(3);
        ctx.get_or_create("foo");
        ctx.get_or_create("bar");
        assert_eq!(ctx.map().len(), 2);
        assert_eq!(ctx.lookup("foo"), ctx.lookup("foo"));
    }

    #[test]
    fn independent_contexts_do_not_share_state() {
        let mut a = RenameContext::with_seed(1);
        let b = RenameContext::with_seed(1);
        a.get_or_create("foo");
        assert!(b.lookup("foo").is_none());
    }
}
