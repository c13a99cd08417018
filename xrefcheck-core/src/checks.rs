//! The cross-reference engine: evaluates the six fixed checks.
//!
//! Every check is a read-only pass over the immutable [`SymbolIndex`];
//! outputs are sorted by symbol identity so results are reproducible
//! across runs and independent of artifact load order.

use crate::error::XrefResult;
use crate::graph::{build_index, SymbolIndex};
use crate::scan::{load_artifacts, load_artifacts_lenient};
use crate::store::ArtifactStore;
use crate::symbol::{CheckKind, Finding, Symbol};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Evaluates the requested checks against a built index.
///
/// Raw findings only; ignore-rule filtering happens downstream in
/// [`crate::filter`].
pub fn run_checks(
    index: &SymbolIndex,
    kinds: &[CheckKind],
) -> BTreeMap<CheckKind, Vec<Finding>> {
    let mut results = BTreeMap::new();
    for &kind in kinds {
        let findings = run_check(index, kind);
        debug!(check = %kind, raw = findings.len(), "check evaluated");
        results.insert(kind, findings);
    }
    results
}

/// Loads artifacts, builds the index, and evaluates the checks.
///
/// This is the engine contract in one call: a fatal error here (artifact
/// directory unreadable, no valid artifacts) aborts before any findings
/// are produced — no partial results.
pub fn analyze(
    artifact_dir: &Path,
    lib_dirs: &[PathBuf],
    kinds: &[CheckKind],
) -> XrefResult<BTreeMap<CheckKind, Vec<Finding>>> {
    let analyzed = load_artifacts(artifact_dir)?;
    let library = lib_dirs
        .iter()
        .flat_map(|dir| load_artifacts_lenient(dir))
        .collect();
    let store = ArtifactStore::build(analyzed, library);
    let index = build_index(&store);
    Ok(run_checks(&index, kinds))
}

fn run_check(index: &SymbolIndex, kind: CheckKind) -> Vec<Finding> {
    match kind {
        CheckKind::UndefinedFunctionCalls => {
            edge_findings(index, |index, target| !index.is_defined(target))
        }
        CheckKind::UndefinedFunctions => {
            node_findings_from_targets(index, |index, target| !index.is_defined(target))
        }
        CheckKind::LocalsNotUsed => unused_definitions(index, false),
        CheckKind::ExportsNotUsed => unused_definitions(index, true),
        CheckKind::DeprecatedFunctionCalls => {
            edge_findings(index, |index, target| index.is_deprecated(target))
        }
        CheckKind::DeprecatedFunctions => {
            node_findings_from_targets(index, |index, target| index.is_deprecated(target))
        }
    }
}

/// Call edges whose target matches the predicate, in symbol order.
fn edge_findings(
    index: &SymbolIndex,
    flagged: impl Fn(&SymbolIndex, usize) -> bool,
) -> Vec<Finding> {
    index
        .call_edges()
        .into_iter()
        .filter(|&(_, target)| flagged(index, target))
        .map(|(source, target)| Finding::Edge {
            source: index.symbol(source).clone(),
            target: index.symbol(target).clone(),
        })
        .collect()
}

/// Node form of an edge analysis: the distinct flagged call targets.
fn node_findings_from_targets(
    index: &SymbolIndex,
    flagged: impl Fn(&SymbolIndex, usize) -> bool,
) -> Vec<Finding> {
    let targets: BTreeSet<Symbol> = index
        .call_edges()
        .into_iter()
        .filter(|&(_, target)| flagged(index, target))
        .map(|(_, target)| index.symbol(target).clone())
        .collect();
    targets.into_iter().map(Finding::Node).collect()
}

/// Analyzed definitions with the given visibility and no callers.
fn unused_definitions(index: &SymbolIndex, exported: bool) -> Vec<Finding> {
    index
        .analyzed_definitions()
        .iter()
        .copied()
        .filter(|&id| index.is_exported(id) == exported && !index.has_callers(id))
        .map(|id| Finding::Node(index.symbol(id).clone()))
        .collect()
}
