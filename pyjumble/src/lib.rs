//! Pyjumble renames user-authored Python methods and attributes to
//! visually confusable identifiers while leaving builtins and imported
//! library members untouched.
//!
//! The pipeline per source unit: parse with `ruff_python_parser`, resolve
//! bindings into scope and origin tags ([`resolver`]), run the rewrite
//! traversal ([`transform`]) against a per-run rename map ([`rename`]), and
//! splice the resulting edits back into the source text so untouched bytes
//! stay byte-identical.

/// Command line argument definitions.
pub mod cli;
/// The obfuscation run driver.
pub mod commands;
/// Configuration file discovery and parsing.
pub mod config;
/// Static data tables and limits.
pub mod constants;
/// Shared entry function used by the binary.
pub mod entry_point;
/// Confusable-alphabet name generation.
pub mod generator;
/// Per-source driver: parse, resolve, rewrite.
pub mod obfuscate;
/// Terminal output helpers.
pub mod output;
/// The rename map and its owning context.
pub mod rename;
/// Scope and origin resolution for rewrite decisions.
pub mod resolver;
/// The rewrite traversal, decision policy and edit splicing.
pub mod transform;
/// Path display and line-index helpers.
pub mod utils;
