//! Shared entry function: parse arguments, merge configuration, run.

use crate::cli::Cli;
use crate::commands::{run_obfuscation, ObfuscationOptions};
use crate::config;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Runs the obfuscator with the given arguments using stdout as the writer.
///
/// # Errors
///
/// Returns an error if the run fails on I/O while writing results.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run pyjumble with the given arguments, writing output to the specified
/// writer.
///
/// This is the testable version of `run_with_args` that allows output
/// capture.
///
/// # Errors
///
/// Returns an error if the run fails on I/O while writing results.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["pyjumble".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, captured by
                    // the writer.
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    let config_anchor = cli
        .paths
        .first()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let config = config::load_from_path(&config_anchor);

    let mut exclude_folders = cli.exclude_folders;
    if exclude_folders.is_empty() {
        if let Some(folders) = config.pyjumble.exclude_folders {
            exclude_folders = folders;
        }
    }

    let options = ObfuscationOptions {
        paths: cli.paths,
        in_place: cli.in_place,
        output_dir: cli.output_dir,
        seed: cli.seed.or(config.pyjumble.seed),
        consistent: cli.consistent || config.pyjumble.consistent.unwrap_or(false),
        map_path: cli.map,
        exclude_folders,
        quiet: cli.quiet,
    };
    run_obfuscation(&options, writer)
}
