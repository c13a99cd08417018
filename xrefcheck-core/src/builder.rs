//! Builder pattern API for running a complete cross-reference analysis.
//!
//! Provides a fluent interface mirroring the driver's control flow:
//! scan artifacts -> build index -> evaluate checks -> filter ignored
//! findings -> resolve locations -> collect diagnostics.
//!
//! ```rust,ignore
//! use xrefcheck_core::prelude::*;
//!
//! let report = Xref::new("build")
//!     .with_lib_path("deps")
//!     .run()?;
//!
//! for diagnostic in &report.diagnostics {
//!     eprintln!("{}", diagnostic.render());
//! }
//! ```

use std::path::PathBuf;

use tracing::info;

use crate::checks::run_checks;
use crate::contracts::ContractRegistry;
use crate::error::XrefResult;
use crate::filter::filter_findings;
use crate::graph::build_index;
use crate::report::Diagnostic;
use crate::resolve::resolve;
use crate::scan::{load_artifacts, load_artifacts_lenient};
use crate::store::ArtifactStore;
use crate::symbol::CheckKind;

/// Builder for configuring a cross-reference run.
#[derive(Debug, Clone)]
pub struct Xref {
    /// Directory of compiled artifacts under analysis
    artifact_dir: PathBuf,

    /// Auxiliary library search paths (definitions only)
    lib_dirs: Vec<PathBuf>,

    /// Checks to evaluate (all six by default)
    checks: Vec<CheckKind>,
}

impl Xref {
    /// Create a new analysis builder for the given artifact directory.
    pub fn new(artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifact_dir: artifact_dir.into(),
            lib_dirs: Vec::new(),
            checks: CheckKind::all().to_vec(),
        }
    }

    /// Add an auxiliary library search path.
    pub fn with_lib_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lib_dirs.push(dir.into());
        self
    }

    /// Restrict the run to a subset of check kinds.
    pub fn with_checks(mut self, checks: impl IntoIterator<Item = CheckKind>) -> Self {
        self.checks = checks.into_iter().collect();
        self
    }

    /// Run the complete analysis and return the report.
    ///
    /// Fatal startup failures (artifact directory unreadable, no valid
    /// artifacts) abort before any diagnostics are produced. Warnings in
    /// the report are advisory; a report with findings is still `Ok`.
    pub fn run(&self) -> XrefResult<XrefReport> {
        // 1. Snapshot the artifact universe
        let analyzed = load_artifacts(&self.artifact_dir)?;
        let library = self
            .lib_dirs
            .iter()
            .flat_map(|dir| load_artifacts_lenient(dir))
            .collect();
        let store = ArtifactStore::build(analyzed, library);
        info!(modules = store.analyzed_len(), "artifacts loaded");

        // 2. Index and evaluate
        let registry = ContractRegistry::build(&store);
        let index = build_index(&store);
        let raw = run_checks(&index, &self.checks);

        // 3. Filter and resolve, in fixed check order
        let mut diagnostics = Vec::new();
        for (kind, findings) in raw {
            let kept = filter_findings(&store, &registry, kind, findings);
            for finding in kept {
                let location = resolve(&store, finding.representative());
                diagnostics.push(Diagnostic { kind, finding, location });
            }
        }
        info!(warnings = diagnostics.len(), "analysis complete");

        Ok(XrefReport {
            modules_analyzed: store.analyzed_len(),
            diagnostics,
        })
    }
}

/// Results of one complete cross-reference run.
#[derive(Debug)]
pub struct XrefReport {
    /// Number of modules in the analyzed set
    pub modules_analyzed: usize,
    /// Surviving findings, resolved and ready to print
    pub diagnostics: Vec<Diagnostic>,
}

impl XrefReport {
    /// Number of diagnostics produced by one check kind.
    pub fn count(&self, kind: CheckKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// Whether the run produced no warnings at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
