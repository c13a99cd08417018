//! Contract registry: required-callback lists per contract name.
//!
//! A module may declare conformance to one or more contracts (dynamic
//! "behaviour"-style dispatch in the source system). Each contract
//! mandates a set of callback exports; conforming modules must export
//! them even when nothing in the analyzed universe calls them directly.
//!
//! The registry is populated by one fixed introspection pass over all
//! artifacts — required-callback lists are resolved through this
//! explicit interface, never by invoking arbitrary code.

use crate::artifact::CallbackDef;
use crate::store::ArtifactStore;
use std::collections::BTreeMap;

/// Map from contract name to the callbacks it mandates.
#[derive(Debug, Default)]
pub struct ContractRegistry {
    callbacks: BTreeMap<String, Vec<CallbackDef>>,
}

impl ContractRegistry {
    /// Populate the registry from every artifact (analyzed and library)
    /// that declares a callback list.
    pub fn build(store: &ArtifactStore) -> Self {
        let mut registry = Self::default();
        for artifact in store.all() {
            if !artifact.callbacks.is_empty() {
                registry
                    .callbacks
                    .insert(artifact.module.clone(), artifact.callbacks.clone());
            }
        }
        registry
    }

    /// The callbacks a contract requires; empty for unknown contracts.
    pub fn required_callbacks(&self, contract: &str) -> &[CallbackDef] {
        self.callbacks
            .get(contract)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of known contracts.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no contracts are known.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}
