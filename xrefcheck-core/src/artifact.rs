//! Compiled-artifact descriptor types and loading.
//!
//! An artifact is a JSON module descriptor (`<module>.xref.json`) emitted
//! by the compilation step. It carries everything the analysis consumes:
//!
//! - declared attributes (ignore directives, contract conformance)
//! - embedded debug metadata (original source path, per-function lines)
//! - defined/exported functions with their outgoing call targets
//!
//! The two attribute shapes this tool consumes are modeled as explicit
//! typed fields rather than a dynamic key-value bag, so malformed input
//! fails at deserialization instead of deep inside a check.

use crate::error::{IoResultExt, XrefError, XrefResult};
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File-name suffix identifying an artifact descriptor.
pub const ARTIFACT_SUFFIX: &str = ".xref.json";

/// One compiled module's descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleArtifact {
    /// Module identifier
    pub module: String,
    /// Original source file path, if the compiler embedded it
    #[serde(default)]
    pub source: Option<String>,
    /// Declared module attributes
    #[serde(default)]
    pub attributes: ArtifactAttributes,
    /// Callback signatures this module mandates, when it defines a contract
    #[serde(default)]
    pub callbacks: Vec<CallbackDef>,
    /// Functions defined in this module
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
}

/// Declared attributes the analysis consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactAttributes {
    /// Symbols exempted from reporting, declared at module level
    #[serde(default)]
    pub ignore_xref: Vec<IgnoreEntry>,
    /// Names of contracts this module declares conformance to
    #[serde(default)]
    pub conforms_to: Vec<String>,
}

/// A declared ignore directive.
///
/// Two shapes exist in the wild: a fully-qualified triple, and a bare
/// `(function, arity)` pair that is qualified with the owning module.
/// `Qualified` must be listed first so untagged deserialization prefers
/// it when a `module` field is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IgnoreEntry {
    /// `(module, function, arity)` — used as-is
    Qualified {
        module: String,
        function: String,
        arity: u32,
    },
    /// `(function, arity)` — qualified with the declaring module
    Bare { function: String, arity: u32 },
}

impl IgnoreEntry {
    /// Normalize to a full [`Symbol`], qualifying bare pairs with `owner`.
    pub fn qualify(&self, owner: &str) -> Symbol {
        match self {
            IgnoreEntry::Qualified {
                module,
                function,
                arity,
            } => Symbol::new(module.clone(), function.clone(), *arity),
            IgnoreEntry::Bare { function, arity } => {
                Symbol::new(owner, function.clone(), *arity)
            }
        }
    }
}

/// A callback signature required by a contract definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackDef {
    pub function: String,
    pub arity: u32,
}

/// One defined function, with its call targets and debug line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub arity: u32,
    /// Publicly exported vs. privately scoped
    #[serde(default)]
    pub exported: bool,
    /// Explicitly marked deprecated in module metadata
    #[serde(default)]
    pub deprecated: bool,
    /// Defining line number from debug metadata, if present
    #[serde(default)]
    pub line: Option<u32>,
    /// Outgoing call targets from this function's body
    #[serde(default)]
    pub calls: Vec<CallTarget>,
}

/// A call-site target recorded by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTarget {
    pub module: String,
    pub function: String,
    pub arity: u32,
}

impl CallTarget {
    pub fn to_symbol(&self) -> Symbol {
        Symbol::new(self.module.clone(), self.function.clone(), self.arity)
    }
}

impl ModuleArtifact {
    /// The symbol a function definition in this module corresponds to.
    pub fn symbol_of(&self, func: &FunctionDef) -> Symbol {
        Symbol::new(self.module.clone(), func.name.clone(), func.arity)
    }

    /// Look up a function definition by name and arity.
    pub fn function(&self, name: &str, arity: u32) -> Option<&FunctionDef> {
        self.functions
            .iter()
            .find(|f| f.name == name && f.arity == arity)
    }
}

/// Checks whether a path names an artifact descriptor.
pub fn is_artifact_path(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(ARTIFACT_SUFFIX))
}

/// Loads and parses one artifact descriptor.
///
/// I/O failures and malformed JSON both surface as typed, recoverable
/// errors: callers decide whether to skip the module or abort.
pub fn load_artifact(path: &Path) -> XrefResult<ModuleArtifact> {
    let content = fs::read_to_string(path).with_path(path)?;
    serde_json::from_str(&content).map_err(|e| XrefError::artifact(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignore_entry_bare_is_qualified_with_owner() {
        let entry: IgnoreEntry =
            serde_json::from_str(r#"{"function": "legacy", "arity": 0}"#).unwrap();
        assert_eq!(entry, IgnoreEntry::Bare { function: "legacy".into(), arity: 0 });
        assert_eq!(entry.qualify("d"), Symbol::new("d", "legacy", 0));
    }

    #[test]
    fn test_ignore_entry_qualified_is_used_as_is() {
        let entry: IgnoreEntry =
            serde_json::from_str(r#"{"module": "m", "function": "f", "arity": 1}"#).unwrap();
        assert_eq!(entry.qualify("other"), Symbol::new("m", "f", 1));
    }

    #[test]
    fn test_artifact_minimal_fields_default() {
        let artifact: ModuleArtifact =
            serde_json::from_str(r#"{"module": "a"}"#).unwrap();
        assert_eq!(artifact.module, "a");
        assert!(artifact.source.is_none());
        assert!(artifact.functions.is_empty());
        assert!(artifact.attributes.ignore_xref.is_empty());
        assert!(artifact.callbacks.is_empty());
    }

    #[test]
    fn test_artifact_full_round_trip() {
        let json = r#"{
            "module": "a",
            "source": "src/a.src",
            "attributes": {
                "ignore_xref": [{"function": "legacy", "arity": 0}],
                "conforms_to": ["worker_contract"]
            },
            "functions": [
                {"name": "foo", "arity": 0, "exported": true, "line": 12,
                 "calls": [{"module": "b", "function": "bar", "arity": 1}]}
            ]
        }"#;
        let artifact: ModuleArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.source.as_deref(), Some("src/a.src"));
        assert_eq!(artifact.attributes.conforms_to, vec!["worker_contract"]);

        let foo = artifact.function("foo", 0).unwrap();
        assert!(foo.exported);
        assert!(!foo.deprecated);
        assert_eq!(foo.line, Some(12));
        assert_eq!(foo.calls[0].to_symbol(), Symbol::new("b", "bar", 1));
        assert_eq!(artifact.symbol_of(foo), Symbol::new("a", "foo", 0));
    }

    #[test]
    fn test_is_artifact_path_suffix() {
        // Only checks the suffix rule via a non-existent path: is_file fails
        assert!(!is_artifact_path(Path::new("/nonexistent/a.xref.json")));
    }
}
