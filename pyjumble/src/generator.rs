//! Confusable identifier generation.

use compact_str::CompactString;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The alphabet generated names are drawn from: Latin, Cyrillic-adjacent and
/// fullwidth glyphs that all render as some flavor of "I", "l", "i" or "j".
/// Every one of them is a valid Python identifier character.
pub const CONFUSABLE_GLYPHS: [char; 13] = [
    'I', 'l', 'i', 'Î', 'Ĳ', 'ĳ', 'ǉ', 'Ḭ', 'j', 'J', 'Ĵ', 'ⅉ', 'ｊ',
];

/// Length of every generated identifier, in characters.
pub const GENERATED_NAME_LEN: usize = 8;

/// Produces fresh confusable-character identifiers.
///
/// There is no uniqueness enforcement: two calls may coincidentally return
/// the same string, which merges the two originals in the output.
#[derive(Debug)]
pub struct NameGenerator {
    rng: StdRng,
}

impl NameGenerator {
    /// Creates a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic generator. Given the same seed and the same
    /// input tree, the whole rewrite is reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a fresh random identifier of [`GENERATED_NAME_LEN`] glyphs.
    pub fn next_name(&mut self) -> CompactString {
        (0..GENERATED_NAME_LEN)
            .map(|_| CONFUSABLE_GLYPHS[self.rng.gen_range(0..CONFUSABLE_GLYPHS.len())])
            .collect()
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
    }
}
