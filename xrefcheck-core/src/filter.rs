//! Finding filtering against collected ignore rules.
//!
//! Determines the modules implicated by a finding set, unions their
//! ignore rules for the current check kind, and drops exempted
//! findings. Filtering is a pure subsequence operation: it never
//! reorders or duplicates, only removes.

use crate::contracts::ContractRegistry;
use crate::ignore::ignores_for;
use crate::store::ArtifactStore;
use crate::symbol::{CheckKind, Finding, Symbol};
use std::collections::BTreeSet;
use tracing::debug;

/// Removes findings exempted by the implicated modules' ignore rules.
///
/// A finding is exempt when its source symbol or its edge target is in
/// the union of rules collected from each implicated source module
/// (edge findings implicate the caller's module, node findings their
/// own module).
pub fn filter_findings(
    store: &ArtifactStore,
    registry: &ContractRegistry,
    kind: CheckKind,
    findings: Vec<Finding>,
) -> Vec<Finding> {
    if findings.is_empty() {
        return findings;
    }

    let modules: BTreeSet<&str> = findings.iter().map(Finding::source_module).collect();
    let mut exempt: BTreeSet<Symbol> = BTreeSet::new();
    for module in modules {
        exempt.extend(ignores_for(store, registry, module, kind));
    }

    if exempt.is_empty() {
        return findings;
    }

    let before = findings.len();
    let kept: Vec<Finding> = findings
        .into_iter()
        .filter(|finding| {
            !exempt.contains(finding.representative())
                && !finding.target().is_some_and(|t| exempt.contains(t))
        })
        .collect();
    debug!(check = %kind, removed = before - kept.len(), "ignore filter applied");
    kept
}
