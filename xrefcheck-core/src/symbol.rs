//! Symbol model: fully-qualified function references, check kinds, findings.
//!
//! A [`Symbol`] is the `(module, function, arity)` triple that uniquely
//! identifies a function definition or call target within the analyzed
//! universe. It is immutable and ordered, so it works as a map/set key
//! and gives every check a deterministic output order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fully-qualified function reference: `module:function/arity`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Module identifier
    pub module: String,
    /// Function name
    pub function: String,
    /// Parameter count
    pub arity: u32,
}

impl Symbol {
    /// Create a new symbol.
    pub fn new(
        module: impl Into<String>,
        function: impl Into<String>,
        arity: u32,
    ) -> Self {
        Self {
            module: module.into(),
            function: function.into(),
            arity,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.module, self.function, self.arity)
    }
}

/// The fixed, closed set of cross-reference checks.
///
/// Ordered so that per-kind result maps iterate in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckKind {
    /// Call edges whose target has no definition anywhere
    UndefinedFunctionCalls,
    /// Symbols that are called but never defined (node form)
    UndefinedFunctions,
    /// Privately-scoped symbols defined but never called
    LocalsNotUsed,
    /// Exported symbols never called and not contract-exempted
    ExportsNotUsed,
    /// Call edges whose target is marked deprecated
    DeprecatedFunctionCalls,
    /// Deprecated symbols that are called (node form)
    DeprecatedFunctions,
}

impl CheckKind {
    /// All six checks, in reporting order.
    pub fn all() -> [CheckKind; 6] {
        [
            CheckKind::UndefinedFunctionCalls,
            CheckKind::UndefinedFunctions,
            CheckKind::LocalsNotUsed,
            CheckKind::ExportsNotUsed,
            CheckKind::DeprecatedFunctionCalls,
            CheckKind::DeprecatedFunctions,
        ]
    }

    /// Stable textual name, matching the CLI and config spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::UndefinedFunctionCalls => "undefined_function_calls",
            CheckKind::UndefinedFunctions => "undefined_functions",
            CheckKind::LocalsNotUsed => "locals_not_used",
            CheckKind::ExportsNotUsed => "exports_not_used",
            CheckKind::DeprecatedFunctionCalls => "deprecated_function_calls",
            CheckKind::DeprecatedFunctions => "deprecated_functions",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined_function_calls" => Ok(CheckKind::UndefinedFunctionCalls),
            "undefined_functions" => Ok(CheckKind::UndefinedFunctions),
            "locals_not_used" => Ok(CheckKind::LocalsNotUsed),
            "exports_not_used" => Ok(CheckKind::ExportsNotUsed),
            "deprecated_function_calls" => Ok(CheckKind::DeprecatedFunctionCalls),
            "deprecated_functions" => Ok(CheckKind::DeprecatedFunctions),
            other => Err(format!("unknown check kind: {}", other)),
        }
    }
}

/// A single raw analysis result, tagged by [`CheckKind`] at the map level.
///
/// Edge findings carry a caller and a callee (e.g. "calls undefined
/// function"); node findings carry a single symbol (e.g. "unused export").
/// Findings live only for the duration of one run and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Caller -> callee relationship flagged by a check
    Edge { source: Symbol, target: Symbol },
    /// A single flagged symbol
    Node(Symbol),
}

impl Finding {
    /// The symbol a diagnostic line is attributed to: the source symbol
    /// for edges, the symbol itself for nodes.
    pub fn representative(&self) -> &Symbol {
        match self {
            Finding::Edge { source, .. } => source,
            Finding::Node(symbol) => symbol,
        }
    }

    /// The callee for edge findings; `None` for node findings.
    pub fn target(&self) -> Option<&Symbol> {
        match self {
            Finding::Edge { target, .. } => Some(target),
            Finding::Node(_) => None,
        }
    }

    /// The module whose ignore rules apply to this finding.
    pub fn source_module(&self) -> &str {
        &self.representative().module
    }
}
