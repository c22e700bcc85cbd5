//! Static data tables and limits shared across the crate.

mod reserved;

pub use reserved::reserved_names;

/// Maximum traversal recursion depth before a visitor stops descending.
/// Prevents stack overflow on pathologically nested code; anything deeper
/// is simply left unchanged.
pub const MAX_RECURSION_DEPTH: usize = 200;

/// Name of the configuration file discovered upward from the target path.
pub const CONFIG_FILENAME: &str = ".pyjumble.toml";

/// Fallback configuration carrier (`[tool.pyjumble]` table).
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Folders never descended into, on top of gitignore rules.
#[allow(non_snake_case)]
pub fn DEFAULT_EXCLUDE_FOLDERS() -> &'static rustc_hash::FxHashSet<&'static str> {
    static SET: std::sync::OnceLock<rustc_hash::FxHashSet<&'static str>> =
        std::sync::OnceLock::new();
    SET.get_or_init(|| {
        [
            ".git",
            ".hg",
            ".mypy_cache",
            ".pytest_cache",
            ".ruff_cache",
            ".tox",
            ".venv",
            "__pycache__",
            "build",
            "dist",
            "node_modules",
            "venv",
        ]
        .into_iter()
        .collect()
    })
}
