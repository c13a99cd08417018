//! Ignore-rule collection per (module, check kind).
//!
//! Reads a module's declared metadata attributes and normalizes every
//! ignore entry to a full symbol. For the unused-export check only, the
//! callbacks mandated by each contract the module conforms to are
//! implicitly "used" and join the exemption set.
//!
//! Introspection failures never propagate: a module that cannot be
//! found in the store contributes an empty rule set.

use crate::contracts::ContractRegistry;
use crate::store::ArtifactStore;
use crate::symbol::{CheckKind, Symbol};
use std::collections::BTreeSet;
use tracing::debug;

/// Collects the symbols exempted from reporting for one module under
/// one check kind.
pub fn ignores_for(
    store: &ArtifactStore,
    registry: &ContractRegistry,
    module: &str,
    kind: CheckKind,
) -> BTreeSet<Symbol> {
    let Some(artifact) = store.get(module) else {
        // Module not compiled/loaded: degrade to no rules.
        debug!(module, "module not in store, no ignore rules");
        return BTreeSet::new();
    };

    let mut exempt: BTreeSet<Symbol> = artifact
        .attributes
        .ignore_xref
        .iter()
        .map(|entry| entry.qualify(module))
        .collect();

    // Contract callbacks are auto-exempted only for the unused-export
    // check; for every other kind they are reported like any symbol.
    if kind == CheckKind::ExportsNotUsed {
        for contract in &artifact.attributes.conforms_to {
            for callback in registry.required_callbacks(contract) {
                exempt.insert(Symbol::new(
                    module,
                    callback.function.clone(),
                    callback.arity,
                ));
            }
        }
    }

    exempt
}
