//! Whole-program symbol index and call graph construction.
//!
//! Performance characteristics:
//! - Index build: O(|F| + |C|) where F = defined functions, C = call sites
//! - Caller queries: O(1) amortized via `DiGraphMap` adjacency
//!
//! Symbols are interned to compact ids so the graph stores `usize`
//! nodes; the unit edge type `()` minimizes the memory footprint, the
//! same shape the module-dependency graph uses in comparable tools.

use crate::store::ArtifactStore;
use crate::symbol::Symbol;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// Interned-symbol call graph plus definition metadata for one run.
///
/// Immutable once built; every check reads from it without mutation, so
/// per-check evaluation stays trivially parallelizable and output order
/// is fixed by symbol identity, never by traversal order.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    /// id -> symbol (interning table)
    symbols: Vec<Symbol>,
    /// symbol -> id
    ids: HashMap<Symbol, usize>,
    /// caller -> callee edges
    graph: DiGraphMap<usize, ()>,
    /// Definitions anywhere in the indexed universe (analyzed + library)
    defined: HashSet<usize>,
    /// Definitions from analyzed modules only, sorted by symbol identity
    analyzed_defs: Vec<usize>,
    /// Publicly exported definitions
    exported: HashSet<usize>,
    /// Definitions explicitly marked deprecated in module metadata
    deprecated: HashSet<usize>,
}

impl SymbolIndex {
    fn intern(&mut self, symbol: Symbol) -> usize {
        if let Some(&id) = self.ids.get(&symbol) {
            return id;
        }
        let id = self.symbols.len();
        self.symbols.push(symbol.clone());
        self.ids.insert(symbol, id);
        self.graph.add_node(id);
        id
    }

    /// The symbol behind an interned id.
    pub fn symbol(&self, id: usize) -> &Symbol {
        &self.symbols[id]
    }

    /// The interned id for a symbol, if it appears anywhere in the run.
    pub fn id_of(&self, symbol: &Symbol) -> Option<usize> {
        self.ids.get(symbol).copied()
    }

    /// Whether the symbol has a definition in the indexed universe.
    pub fn is_defined(&self, id: usize) -> bool {
        self.defined.contains(&id)
    }

    /// Whether the definition is publicly exported.
    pub fn is_exported(&self, id: usize) -> bool {
        self.exported.contains(&id)
    }

    /// Whether the definition is marked deprecated.
    pub fn is_deprecated(&self, id: usize) -> bool {
        self.deprecated.contains(&id)
    }

    /// Whether any call site anywhere targets this symbol.
    pub fn has_callers(&self, id: usize) -> bool {
        self.graph
            .neighbors_directed(id, Direction::Incoming)
            .next()
            .is_some()
    }

    /// Ids of analyzed-module definitions, sorted by symbol identity.
    pub fn analyzed_definitions(&self) -> &[usize] {
        &self.analyzed_defs
    }

    /// All caller -> callee edges, sorted by (source, target) symbol.
    ///
    /// Multiple call sites from one function to one target collapse into
    /// a single edge; the checks report relationships, not occurrences.
    pub fn call_edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .graph
            .all_edges()
            .map(|(s, t, _)| (s, t))
            .collect();
        edges.sort_by(|a, b| {
            (self.symbol(a.0), self.symbol(a.1)).cmp(&(self.symbol(b.0), self.symbol(b.1)))
        });
        edges
    }

    /// Number of distinct symbols seen (defined or called).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Builds the symbol index and call graph from the artifact store.
///
/// Library modules contribute definitions only; call edges are recorded
/// exclusively from analyzed modules, so library-internal calls never
/// produce findings.
pub fn build_index(store: &ArtifactStore) -> SymbolIndex {
    let mut index = SymbolIndex::default();

    // 1. Register all definitions (analyzed + library)
    for artifact in store.all() {
        let analyzed = store.is_analyzed(&artifact.module);
        for func in &artifact.functions {
            let id = index.intern(artifact.symbol_of(func));
            index.defined.insert(id);
            if analyzed {
                index.analyzed_defs.push(id);
                if func.exported {
                    index.exported.insert(id);
                }
                if func.deprecated {
                    index.deprecated.insert(id);
                }
            }
        }
    }

    // 2. Add call edges from analyzed modules
    for artifact in store.analyzed() {
        for func in &artifact.functions {
            let source = index.intern(artifact.symbol_of(func));
            for call in &func.calls {
                let target = index.intern(call.to_symbol());
                index.graph.add_edge(source, target, ());
            }
        }
    }

    index
        .analyzed_defs
        .sort_by(|&a, &b| index.symbols[a].cmp(&index.symbols[b]));
    index.analyzed_defs.dedup();

    index
}
