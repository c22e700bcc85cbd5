//! Terminal output: progress spinner and styled summary lines.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::utils::normalize_display_path;

/// Create and return the rewrite spinner.
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
#[must_use]
pub fn create_spinner() -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Randomizing methods and attributes...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Print the per-file result line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_file_line(
    writer: &mut impl Write,
    path: &Path,
    renamed_sites: usize,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {} ({renamed_sites} sites renamed)",
        "[OK]".green(),
        normalize_display_path(path)
    )
}

/// Print a parse warning for a skipped file.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_parse_warning(
    writer: &mut impl Write,
    path: &Path,
    error: &str,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {}: {error}",
        "[SKIP]".yellow().bold(),
        normalize_display_path(path)
    )
}

/// Print the end-of-run summary line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(
    writer: &mut impl Write,
    files: usize,
    renamed_sites: usize,
    skipped: usize,
) -> std::io::Result<()> {
    let headline = format!("Rewrote {renamed_sites} sites across {files} files");
    if skipped == 0 {
        writeln!(writer, "{}", headline.green().bold())
    } else {
        writeln!(
            writer,
            "{} {}",
            headline.green().bold(),
            format!("({skipped} skipped)").yellow()
        )
    }
}
