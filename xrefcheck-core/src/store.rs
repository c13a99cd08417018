//! In-memory artifact store for one analysis run.
//!
//! Holds the analyzed modules plus any library-path modules. Library
//! modules contribute symbol definitions and contract callback lists so
//! calls into standard/third-party code are not misreported as
//! undefined, but they are never themselves analyzed for unused or
//! deprecated findings.

use crate::artifact::ModuleArtifact;
use std::collections::BTreeMap;
use tracing::warn;

/// Immutable snapshot of all module artifacts visible to one run.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    analyzed: BTreeMap<String, ModuleArtifact>,
    library: BTreeMap<String, ModuleArtifact>,
}

impl ArtifactStore {
    /// Build a store from analyzed and library artifacts.
    ///
    /// Duplicate module names within a set keep the first occurrence;
    /// an analyzed module shadows a library module of the same name.
    pub fn build(analyzed: Vec<ModuleArtifact>, library: Vec<ModuleArtifact>) -> Self {
        let mut store = Self::default();
        for artifact in analyzed {
            if store.analyzed.contains_key(&artifact.module) {
                warn!(module = %artifact.module, "duplicate analyzed module, keeping first");
                continue;
            }
            store.analyzed.insert(artifact.module.clone(), artifact);
        }
        for artifact in library {
            if store.analyzed.contains_key(&artifact.module)
                || store.library.contains_key(&artifact.module)
            {
                continue;
            }
            store.library.insert(artifact.module.clone(), artifact);
        }
        store
    }

    /// Look up a module's artifact, analyzed modules first.
    ///
    /// `None` means the module is outside the indexed universe; callers
    /// degrade gracefully (empty ignore set, unknown location).
    pub fn get(&self, module: &str) -> Option<&ModuleArtifact> {
        self.analyzed.get(module).or_else(|| self.library.get(module))
    }

    /// Whether a module belongs to the analyzed set.
    pub fn is_analyzed(&self, module: &str) -> bool {
        self.analyzed.contains_key(module)
    }

    /// Analyzed modules, in module-name order.
    pub fn analyzed(&self) -> impl Iterator<Item = &ModuleArtifact> {
        self.analyzed.values()
    }

    /// All modules (analyzed then library), in module-name order per set.
    pub fn all(&self) -> impl Iterator<Item = &ModuleArtifact> {
        self.analyzed.values().chain(self.library.values())
    }

    /// Number of analyzed modules.
    pub fn analyzed_len(&self) -> usize {
        self.analyzed.len()
    }
}
