//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use xrefcheck_core::prelude::*;
//! ```
//!
//! This provides the most commonly needed types for cross-reference
//! analysis without polluting the namespace with rarely-used items.

// Core analysis types
pub use crate::error::{XrefError, XrefResult};
pub use crate::symbol::{CheckKind, Finding, Symbol};

// Artifact loading
pub use crate::artifact::ModuleArtifact;
pub use crate::scan::{load_artifacts, load_artifacts_lenient};
pub use crate::store::ArtifactStore;

// Engine
pub use crate::checks::{analyze, run_checks};
pub use crate::graph::{build_index, SymbolIndex};

// Filtering and resolution
pub use crate::contracts::ContractRegistry;
pub use crate::filter::filter_findings;
pub use crate::ignore::ignores_for;
pub use crate::resolve::{resolve, ResolvedLocation};

// Reporting
pub use crate::report::{print_diagnostics, Diagnostic};

// Configuration
pub use crate::config::{load_config, XrefConfig};

// Builder API
pub use crate::builder::{Xref, XrefReport};
