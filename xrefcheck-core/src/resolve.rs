//! Symbol-to-source-location resolution from embedded debug metadata.
//!
//! Resolution is a pure function over the artifact store and degrades
//! in well-defined steps: module artifact absent -> no location at all;
//! artifact present but no source path -> no location; function missing
//! from the line table (e.g. synthesized functions with no counterpart
//! in the original source) -> file without line. It never fails the run.

use crate::store::ArtifactStore;
use crate::symbol::Symbol;
use std::fmt;

/// Outcome of resolving a symbol back to its source, best effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLocation {
    /// Source file and defining line both known
    FileLine { file: String, line: u32 },
    /// Source file known, line not derivable
    FileOnly { file: String },
    /// Nothing derivable (module not found, or no debug metadata)
    Unknown,
}

impl ResolvedLocation {
    /// The diagnostic-line prefix: `"<file>:<line>: "`, `"<file>: "`,
    /// or the empty string.
    pub fn prefix(&self) -> String {
        match self {
            ResolvedLocation::FileLine { file, line } => format!("{}:{}: ", file, line),
            ResolvedLocation::FileOnly { file } => format!("{}: ", file),
            ResolvedLocation::Unknown => String::new(),
        }
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedLocation::FileLine { file, line } => write!(f, "{}:{}", file, line),
            ResolvedLocation::FileOnly { file } => f.write_str(file),
            ResolvedLocation::Unknown => f.write_str("<unknown>"),
        }
    }
}

/// Resolves a symbol to its source file and defining line.
pub fn resolve(store: &ArtifactStore, symbol: &Symbol) -> ResolvedLocation {
    let Some(artifact) = store.get(&symbol.module) else {
        return ResolvedLocation::Unknown;
    };
    let Some(file) = artifact.source.clone() else {
        return ResolvedLocation::Unknown;
    };
    match artifact
        .function(&symbol.function, symbol.arity)
        .and_then(|f| f.line)
    {
        Some(line) => ResolvedLocation::FileLine { file, line },
        None => ResolvedLocation::FileOnly { file },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ModuleArtifact;

    fn store_from(json: &[&str]) -> ArtifactStore {
        let artifacts: Vec<ModuleArtifact> = json
            .iter()
            .map(|j| serde_json::from_str(j).unwrap())
            .collect();
        ArtifactStore::build(artifacts, vec![])
    }

    #[test]
    fn test_full_resolution() {
        let store = store_from(&[r#"{"module": "a", "source": "src/a.src",
            "functions": [{"name": "foo", "arity": 0, "line": 12}]}"#]);
        let loc = resolve(&store, &Symbol::new("a", "foo", 0));
        assert_eq!(loc, ResolvedLocation::FileLine { file: "src/a.src".into(), line: 12 });
        assert_eq!(loc.prefix(), "src/a.src:12: ");
    }

    #[test]
    fn test_function_not_in_line_table_degrades_to_file() {
        let store = store_from(&[r#"{"module": "a", "source": "src/a.src",
            "functions": [{"name": "foo", "arity": 0}]}"#]);
        // synthesized arity never present in the original source
        let loc = resolve(&store, &Symbol::new("a", "record_info", 2));
        assert_eq!(loc, ResolvedLocation::FileOnly { file: "src/a.src".into() });
        assert_eq!(loc.prefix(), "src/a.src: ");

        // present function without a recorded line degrades the same way
        let loc = resolve(&store, &Symbol::new("a", "foo", 0));
        assert_eq!(loc, ResolvedLocation::FileOnly { file: "src/a.src".into() });
    }

    #[test]
    fn test_module_not_found_is_unknown() {
        let store = store_from(&[r#"{"module": "a"}"#]);
        let loc = resolve(&store, &Symbol::new("ghost", "foo", 0));
        assert_eq!(loc, ResolvedLocation::Unknown);
        assert_eq!(loc.prefix(), "");
    }

    #[test]
    fn test_missing_debug_metadata_is_unknown() {
        let store = store_from(&[r#"{"module": "a",
            "functions": [{"name": "foo", "arity": 0, "line": 3}]}"#]);
        let loc = resolve(&store, &Symbol::new("a", "foo", 0));
        assert_eq!(loc, ResolvedLocation::Unknown);
    }
}
