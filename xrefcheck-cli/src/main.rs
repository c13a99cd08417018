//! xrefcheck CLI - cross-reference checker for compiled module artifacts.
//!
//! Points the analysis engine at a build-output directory of module
//! descriptors, runs the six cross-reference checks, and prints one
//! warning line per surviving finding to stderr.
//!
//! Warnings are advisory: a completed run exits 0 no matter how many
//! warnings were printed. Only fatal initialization/analysis failures
//! (artifact directory missing, no valid artifacts) exit non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use xrefcheck_core::{
    init_structured_logging, load_config, print_diagnostics, summary_json, CheckKind, Xref,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cross-reference checker for compiled module artifacts")]
pub struct Cli {
    /// Directory of compiled artifacts to analyze
    #[arg(default_value = "build")]
    artifact_dir: String,

    /// Auxiliary library search path for out-of-set definitions (repeatable)
    #[arg(long = "lib", value_name = "DIR")]
    lib: Vec<String>,

    /// Check kinds to run (default: all six)
    #[arg(long = "check", value_name = "KIND")]
    check: Vec<String>,

    /// Print a machine-readable summary to stdout
    #[arg(long)]
    json: bool,
}

/// Parses check-kind names, rejecting unknown ones up front.
fn parse_checks(names: &[String]) -> Result<Vec<CheckKind>> {
    if names.is_empty() {
        return Ok(CheckKind::all().to_vec());
    }
    names
        .iter()
        .map(|name| {
            CheckKind::from_str(name).map_err(|e| anyhow::anyhow!("{}", e))
        })
        .collect()
}

fn main() -> Result<()> {
    // Global panic guard: internal errors must not leave a half-printed run
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] xrefcheck internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
    }));

    // Structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();

    // Config file fills in what the CLI left at defaults
    let config = load_config(Path::new(".")).context("Failed to load xrefcheck.toml")?;

    let mut artifact_dir = cli.artifact_dir.clone();
    let mut lib_dirs = cli.lib.clone();
    let mut check_names = cli.check.clone();
    if let Some(cfg) = config {
        if artifact_dir == "build" {
            if let Some(dir) = cfg.artifact_dir {
                artifact_dir = dir;
            }
        }
        if lib_dirs.is_empty() {
            lib_dirs = cfg.lib.unwrap_or_default();
        }
        if check_names.is_empty() {
            check_names = cfg.checks.unwrap_or_default();
        }
    }

    let checks = parse_checks(&check_names)?;

    let mut xref = Xref::new(&artifact_dir).with_checks(checks);
    for dir in &lib_dirs {
        xref = xref.with_lib_path(PathBuf::from(dir));
    }

    let report = xref
        .run()
        .with_context(|| format!("Cross-reference analysis of {} failed", artifact_dir))?;

    print_diagnostics(&report.diagnostics);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary_json(&report.diagnostics))?);
    }

    // Warnings are advisory: a completed analysis is a success.
    Ok(())
}
