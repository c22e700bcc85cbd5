//! Main binary entry point for the pyjumble obfuscator.
//!
//! Delegates to the shared `entry_point::run_with_args()` function so the
//! binary and the library entry behave identically.

use anyhow::Result;

fn main() -> Result<()> {
    let code = pyjumble::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
