//! Diagnostic formatting and output - warning lines and JSON summary.
//!
//! One line per surviving finding, written to stderr so stdout stays
//! clean for machine-readable output:
//!
//! ```text
//! src/a.src:12: Warning: a:foo/0 calls undefined function b:bar/1 (Xref)
//! ```
//!
//! Warnings are advisory by design; they never affect the exit code.

use crate::resolve::ResolvedLocation;
use crate::symbol::{CheckKind, Finding};
use serde_json::json;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// A fully-resolved, report-ready finding.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: CheckKind,
    pub finding: Finding,
    pub location: ResolvedLocation,
}

impl Diagnostic {
    /// Renders the single-line warning for this diagnostic.
    pub fn render(&self) -> String {
        format_finding(self.kind, &self.finding, &self.location)
    }
}

/// Formats one finding as a diagnostic line.
///
/// The action phrase is check-kind-specific; a finding whose shape does
/// not match its check kind falls back to a generic form rather than
/// failing the run.
pub fn format_finding(kind: CheckKind, finding: &Finding, location: &ResolvedLocation) -> String {
    let prefix = location.prefix();
    match (kind, finding) {
        (CheckKind::UndefinedFunctionCalls, Finding::Edge { source, target }) => {
            format!("{}Warning: {} calls undefined function {} (Xref)", prefix, source, target)
        }
        (CheckKind::UndefinedFunctions, Finding::Node(symbol)) => {
            format!("{}Warning: {} is undefined function (Xref)", prefix, symbol)
        }
        (CheckKind::LocalsNotUsed, Finding::Node(symbol)) => {
            format!("{}Warning: {} is unused local function (Xref)", prefix, symbol)
        }
        (CheckKind::ExportsNotUsed, Finding::Node(symbol)) => {
            format!("{}Warning: {} is unused export (Xref)", prefix, symbol)
        }
        (CheckKind::DeprecatedFunctionCalls, Finding::Edge { source, target }) => {
            format!("{}Warning: {} calls deprecated function {} (Xref)", prefix, source, target)
        }
        (CheckKind::DeprecatedFunctions, Finding::Node(symbol)) => {
            format!("{}Warning: {} is deprecated function (Xref)", prefix, symbol)
        }
        // Shape mismatch: generic fallback keeps the line informative.
        (kind, finding) => {
            let source = finding.representative();
            let target = finding.target().unwrap_or(source);
            format!("{}{} - {} xref check: {} (Xref)", prefix, source, target, kind)
        }
    }
}

/// Writes one newline-terminated line per diagnostic.
pub fn write_diagnostics<W: Write>(out: &mut W, diagnostics: &[Diagnostic]) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{}", diagnostic.render())?;
    }
    Ok(())
}

/// Prints diagnostics to stderr (the designated diagnostic stream).
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    // Diagnostics to a closed stderr are best dropped, not panicked on.
    let _ = write_diagnostics(&mut handle, diagnostics);
}

/// Builds a machine-readable summary: warning counts per check kind.
pub fn summary_json(diagnostics: &[Diagnostic]) -> serde_json::Value {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for kind in CheckKind::all() {
        counts.insert(kind.as_str(), 0);
    }
    for diagnostic in diagnostics {
        *counts.entry(diagnostic.kind.as_str()).or_insert(0) += 1;
    }
    json!({
        "warnings": diagnostics.len(),
        "checks": counts,
    })
}
