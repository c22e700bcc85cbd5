use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.pyjumble.toml):
  Create this file in your project root to set defaults.
  A [tool.pyjumble] table in pyproject.toml works too.

  [pyjumble]
  seed = 42                  # Fixed generator seed (reproducible output)
  consistent = true          # One rename map shared across all files
  exclude_folders = [\"build\", \"dist\", \".venv\"]
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Pyjumble - Renames Python methods and attributes to visually confusable identifiers",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Paths to obfuscate (files or directories).
    /// A single file with no output flag prints the result to stdout.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Rewrite the input files in place.
    #[arg(long)]
    pub in_place: bool,

    /// Write rewritten files under this directory, mirroring the input layout.
    #[arg(long, short = 'o', conflicts_with = "in_place")]
    pub output_dir: Option<PathBuf>,

    /// Seed the name generator for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Share one rename map across every file of the run.
    /// Without this flag each file gets an independent map.
    #[arg(long)]
    pub consistent: bool,

    /// Write the final rename map as JSON to this file.
    /// Implies --consistent, so the map covers the whole run.
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Folders to exclude from the walk.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Suppress the spinner and per-file summary lines.
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
