//! xrefcheck-core: cross-reference analysis library for compiled module artifacts.
//!
//! This library analyzes a directory of compiled module descriptors to
//! detect calls to undefined functions, unused local and exported
//! functions, and calls to deprecated functions, reporting warnings with
//! source file/line attribution where derivable.
//!
//! # Features
//!
//! - **Undefined calls**: Find call sites whose target is defined nowhere
//! - **Unused locals/exports**: Find functions no call site ever reaches
//! - **Deprecated usage**: Find edges/nodes touching deprecated functions
//! - **Ignore directives**: Per-module metadata exempts known findings
//! - **Contract callbacks**: Required callbacks never count as unused exports
//! - **Location resolution**: Map symbols to file:line from debug metadata
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use xrefcheck_core::prelude::*;
//!
//! let report = Xref::new("build")
//!     .with_lib_path("deps")
//!     .run()?;
//!
//! for diagnostic in &report.diagnostics {
//!     eprintln!("{}", diagnostic.render());
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`symbol`]: Symbols, check kinds, findings
//! - [`artifact`]: Compiled-artifact descriptor types and loading
//! - [`scan`]: Parallel artifact discovery
//! - [`store`]: Analyzed + library artifact snapshot
//! - [`graph`]: Symbol index and call graph construction
//! - [`checks`]: The six cross-reference checks
//! - [`contracts`]: Contract -> required-callback registry
//! - [`ignore`]: Ignore-rule collection per (module, check)
//! - [`filter`]: Order-preserving finding filtering
//! - [`resolve`]: Symbol to source location resolution
//! - [`report`]: Diagnostic line formatting and output
//! - [`builder`]: Fluent API driving a complete run
//! - [`error`]: Typed error handling

pub mod artifact;
pub mod builder;
pub mod checks;
pub mod config;
pub mod contracts;
pub mod error;
pub mod filter;
pub mod graph;
pub mod ignore;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod store;
pub mod symbol;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, XrefError, XrefResult};

// Symbol model
pub use symbol::{CheckKind, Finding, Symbol};

// Artifact descriptors and loading
pub use artifact::{
    is_artifact_path, load_artifact, ArtifactAttributes, CallTarget, CallbackDef,
    FunctionDef, IgnoreEntry, ModuleArtifact, ARTIFACT_SUFFIX,
};
pub use scan::{gather_artifact_files, load_artifacts, load_artifacts_lenient};
pub use store::ArtifactStore;

// Engine
pub use checks::{analyze, run_checks};
pub use graph::{build_index, SymbolIndex};

// Filtering
pub use contracts::ContractRegistry;
pub use filter::filter_findings;
pub use ignore::ignores_for;

// Resolution and reporting
pub use report::{
    format_finding, print_diagnostics, summary_json, write_diagnostics, Diagnostic,
};
pub use resolve::{resolve, ResolvedLocation};

// Configuration
pub use config::{load_config, XrefConfig};

// Logging
pub use logging::init_structured_logging;

// Builder API
pub use builder::{Xref, XrefReport};

#[cfg(test)]
mod tests;
