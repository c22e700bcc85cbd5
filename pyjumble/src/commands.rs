//! The obfuscation run driver: collect files, rewrite them, write results.

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;
use crate::obfuscate::Obfuscator;
use crate::output;
use crate::rename::RenameContext;
use crate::utils::LineIndex;

use anyhow::{Context as _, Result};
use colored::Colorize;
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for one obfuscation run, after CLI flags and configuration have
/// been merged.
#[derive(Debug, Default, Clone)]
pub struct ObfuscationOptions {
    /// Files or directories to rewrite.
    pub paths: Vec<PathBuf>,
    /// Rewrite input files in place.
    pub in_place: bool,
    /// Mirror rewritten files under this directory instead.
    pub output_dir: Option<PathBuf>,
    /// Fixed generator seed; entropy-seeded when `None`.
    pub seed: Option<u64>,
    /// Share one rename map across every file of the run.
    pub consistent: bool,
    /// Write the final rename map as JSON to this path.
    pub map_path: Option<PathBuf>,
    /// Folder names to skip during the walk.
    pub exclude_folders: Vec<String>,
    /// Suppress spinner and per-file lines.
    pub quiet: bool,
}

/// Outcome of one file, kept in input order for reporting.
enum FileReport {
    Rewritten { path: PathBuf, renamed_sites: usize },
    Skipped { path: PathBuf, reason: String },
}

/// Executes an obfuscation run and returns the process exit code.
///
/// # Errors
///
/// Returns an error on I/O failures writing results; per-file read and
/// parse failures are reported as warnings and skipped instead.
pub fn run_obfuscation<W: Write>(options: &ObfuscationOptions, writer: &mut W) -> Result<i32> {
    let files = collect_python_files(&options.paths, &options.exclude_folders);
    if files.is_empty() {
        writeln!(writer, "{}", "No Python files found.".yellow())?;
        return Ok(1);
    }

    // Only a file named directly on the command line prints to stdout.
    let to_stdout = files.len() == 1
        && options.paths.len() == 1
        && options.paths[0].is_file()
        && !options.in_place
        && options.output_dir.is_none();
    if !to_stdout && !options.in_place && options.output_dir.is_none() {
        writeln!(
            writer,
            "{}",
            "Directory input requires --in-place or --output-dir.".red()
        )?;
        return Ok(2);
    }

    let spinner = if options.quiet || to_stdout {
        None
    } else {
        Some(output::create_spinner())
    };

    // A shared rename map means a shared mutable context, so the consistent
    // mode runs sequentially. Independent maps parallelize per file.
    let share_context = options.consistent || options.map_path.is_some();
    let reports: Vec<FileReport> = if share_context {
        let mut ctx = make_context(options.seed);
        let result = files
            .iter()
            .map(|file| process_file(file, options, &mut ctx, spinner.as_ref(), writer))
            .collect::<Result<Vec<_>>>();
        let reports = result?;
        if let Some(map_path) = &options.map_path {
            write_rename_map(map_path, &ctx)?;
        }
        reports
    } else if to_stdout {
        let mut ctx = make_context(options.seed);
        vec![process_file(
            &files[0],
            options,
            &mut ctx,
            spinner.as_ref(),
            writer,
        )?]
    } else {
        files
            .par_iter()
            .map(|file| {
                let mut ctx = make_context(options.seed);
                process_file_to_disk(file, options, &mut ctx, spinner.as_ref())
            })
            .collect::<Result<Vec<_>>>()?
    };

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let mut rewritten = 0usize;
    let mut renamed_sites = 0usize;
    let mut skipped = 0usize;
    for report in &reports {
        match report {
            FileReport::Rewritten {
                path,
                renamed_sites: sites,
            } => {
                rewritten += 1;
                renamed_sites += sites;
                if !options.quiet && !to_stdout {
                    output::print_file_line(writer, path, *sites)?;
                }
            }
            FileReport::Skipped { path, reason } => {
                skipped += 1;
                output::print_parse_warning(writer, path, reason)?;
            }
        }
    }

    if !options.quiet && !to_stdout {
        output::print_summary(writer, rewritten, renamed_sites, skipped)?;
    }

    if rewritten == 0 && skipped > 0 {
        return Ok(1);
    }
    Ok(0)
}

fn make_context(seed: Option<u64>) -> RenameContext {
    seed.map_or_else(RenameContext::new, RenameContext::with_seed)
}

/// Processes one file, writing the result to `writer` in stdout mode and to
/// disk otherwise.
fn process_file<W: Write>(
    file: &Path,
    options: &ObfuscationOptions,
    ctx: &mut RenameContext,
    spinner: Option<&indicatif::ProgressBar>,
    writer: &mut W,
) -> Result<FileReport> {
    let writes_to_disk = options.in_place || options.output_dir.is_some();
    if writes_to_disk {
        return process_file_to_disk(file, options, ctx, spinner);
    }

    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            return Ok(FileReport::Skipped {
                path: file.to_path_buf(),
                reason: format!("failed to read file: {e}"),
            });
        }
    };
    match rewrite_source(&source, ctx, spinner) {
        Ok((output, sites)) => {
            writer.write_all(output.as_bytes())?;
            Ok(FileReport::Rewritten {
                path: file.to_path_buf(),
                renamed_sites: sites,
            })
        }
        Err(reason) => Ok(FileReport::Skipped {
            path: file.to_path_buf(),
            reason,
        }),
    }
}

/// Processes one file whose destination is a disk path.
fn process_file_to_disk(
    file: &Path,
    options: &ObfuscationOptions,
    ctx: &mut RenameContext,
    spinner: Option<&indicatif::ProgressBar>,
) -> Result<FileReport> {
    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            return Ok(FileReport::Skipped {
                path: file.to_path_buf(),
                reason: format!("failed to read file: {e}"),
            });
        }
    };

    match rewrite_source(&source, ctx, spinner) {
        Ok((output, sites)) => {
            let destination = destination_for(file, options)?;
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory {}", parent.display())
                })?;
            }
            fs::write(&destination, output)
                .with_context(|| format!("failed to write {}", destination.display()))?;
            Ok(FileReport::Rewritten {
                path: file.to_path_buf(),
                renamed_sites: sites,
            })
        }
        Err(reason) => Ok(FileReport::Skipped {
            path: file.to_path_buf(),
            reason,
        }),
    }
}

fn rewrite_source(
    source: &str,
    ctx: &mut RenameContext,
    spinner: Option<&indicatif::ProgressBar>,
) -> std::result::Result<(String, usize), String> {
    let mut obfuscator = Obfuscator::new();
    if let Some(spinner) = spinner {
        obfuscator = obfuscator.with_progress(spinner.clone());
    }
    match obfuscator.obfuscate_source(source, ctx) {
        Ok(outcome) => Ok((outcome.output, outcome.renamed_sites)),
        Err(e) => {
            let line = LineIndex::new(source).line_index(e.location.start());
            Err(format!("parse error at line {line}: {}", e.error))
        }
    }
}

/// Resolves the destination path for one rewritten file.
fn destination_for(file: &Path, options: &ObfuscationOptions) -> Result<PathBuf> {
    let Some(output_dir) = &options.output_dir else {
        return Ok(file.to_path_buf());
    };
    // Mirror the input layout under the output directory, keyed off the
    // input root the file was found under.
    for root in &options.paths {
        if root.is_dir() {
            if let Ok(relative) = file.strip_prefix(root) {
                return Ok(output_dir.join(relative));
            }
        }
    }
    let name = file
        .file_name()
        .with_context(|| format!("input path {} has no file name", file.display()))?;
    Ok(output_dir.join(name))
}

/// Writes the rename map as JSON with keys in sorted order.
fn write_rename_map(map_path: &Path, ctx: &RenameContext) -> Result<()> {
    let sorted: BTreeMap<&str, &str> = ctx.map().iter().collect();
    let json = serde_json::to_string_pretty(&sorted)?;
    fs::write(map_path, json)
        .with_context(|| format!("failed to write rename map to {}", map_path.display()))?;
    Ok(())
}

/// Collects `.py` files from the input paths, honoring gitignore rules and
/// the excluded folder list. Results are sorted for a stable run order.
fn collect_python_files(paths: &[PathBuf], exclude: &[String]) -> Vec<PathBuf> {
    let excludes: Vec<String> = exclude.to_vec();
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if path.extension().is_some_and(|ext| ext == "py") {
                files.push(path.clone());
            }
            continue;
        }

        let user_excludes = excludes.clone();
        let mut builder = WalkBuilder::new(path);
        builder.filter_entry(move |entry| {
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                let name = entry.file_name().to_string_lossy();
                if DEFAULT_EXCLUDE_FOLDERS().contains(name.as_ref()) {
                    return false;
                }
                return !user_excludes.iter().any(|ex| name == ex.as_str());
            }
            true
        });
        for entry in builder.build().flatten() {
            let entry_path = entry.path();
            if entry_path.is_file() && entry_path.extension().is_some_and(|ext| ext == "py") {
                files.push(entry_path.to_path_buf());
            }
        }
    }

    files.sort_unstable();
    files.dedup();
    files
}
