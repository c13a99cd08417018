//! Parallel, deterministic artifact discovery and loading.
//!
//! Performance optimizations:
//! - Early directory pruning via `WalkDir::filter_entry` (O(1) subtree skip)
//! - Parallel descriptor parsing via Rayon
//! - Minimal work during traversal (only suffix check)
//!
//! The analyzed artifact directory is treated as an immutable snapshot:
//! one scan per run, no re-scanning mid-analysis.

use crate::artifact::{is_artifact_path, load_artifact, ModuleArtifact, ARTIFACT_SUFFIX};
use crate::error::{XrefError, XrefResult};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Directories to exclude by default (VCS and editor clutter).
const EXCLUDED_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// Checks if a directory entry should be pruned (excluded from traversal).
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

/// Gathers all `*.xref.json` descriptor files under `dir`, sorted.
///
/// Fails fatally when the directory does not exist or cannot be read;
/// the run must abort before any checks execute in that case.
pub fn gather_artifact_files(dir: &Path) -> XrefResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(XrefError::artifact_dir(
            dir,
            "not a readable directory",
        ));
    }

    let excludes: HashSet<&str> = EXCLUDED_DIRS.iter().copied().collect();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &excludes))
    {
        let entry = entry.map_err(|e| XrefError::artifact_dir(dir, e.to_string()))?;
        if is_artifact_path(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    // Sorted so downstream indexing is reproducible regardless of
    // filesystem enumeration order.
    files.sort();
    Ok(files)
}

/// Loads every artifact in the analyzed build directory.
///
/// Individual malformed descriptors are recoverable: they are logged and
/// skipped. A directory yielding zero valid artifacts is fatal.
pub fn load_artifacts(dir: &Path) -> XrefResult<Vec<ModuleArtifact>> {
    let files = gather_artifact_files(dir)?;
    let artifacts = parse_parallel(&files);

    if artifacts.is_empty() {
        return Err(XrefError::artifact_dir(
            dir,
            format!("no valid {} artifacts found", ARTIFACT_SUFFIX),
        ));
    }
    Ok(artifacts)
}

/// Loads artifacts from an auxiliary library search path.
///
/// Library paths only contribute definitions for symbols outside the
/// analyzed set, so a missing or empty directory degrades to an empty
/// list instead of aborting the run.
pub fn load_artifacts_lenient(dir: &Path) -> Vec<ModuleArtifact> {
    match gather_artifact_files(dir) {
        Ok(files) => parse_parallel(&files),
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "skipping library path");
            Vec::new()
        }
    }
}

/// Parses descriptors in parallel, dropping (and logging) invalid ones.
///
/// Input is sorted, and rayon's indexed collect preserves input order,
/// so the result is deterministic across runs.
fn parse_parallel(files: &[PathBuf]) -> Vec<ModuleArtifact> {
    files
        .par_iter()
        .filter_map(|path| match load_artifact(path) {
            Ok(artifact) => Some(artifact),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping invalid artifact");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("xrefcheck_scan_tests")
            .join(format!("{}_{}", tag, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_gather_missing_dir_is_fatal() {
        let err = gather_artifact_files(Path::new("/nonexistent/build")).unwrap_err();
        assert!(matches!(err, XrefError::ArtifactDir { .. }));
    }

    #[test]
    fn test_load_skips_invalid_and_keeps_valid() {
        let dir = temp_dir("mixed");
        fs::write(dir.join("a.xref.json"), r#"{"module": "a"}"#).unwrap();
        fs::write(dir.join("broken.xref.json"), "{ not json").unwrap();
        fs::write(dir.join("ignored.txt"), "not an artifact").unwrap();

        let artifacts = load_artifacts(&dir).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].module, "a");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_empty_dir_is_fatal() {
        let dir = temp_dir("empty");
        let err = load_artifacts(&dir).unwrap_err();
        assert!(matches!(err, XrefError::ArtifactDir { .. }));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_lenient_load_degrades_to_empty() {
        assert!(load_artifacts_lenient(Path::new("/nonexistent/lib")).is_empty());
    }

    #[test]
    fn test_gather_is_sorted() {
        let dir = temp_dir("sorted");
        for m in ["zeta", "alpha", "mid"] {
            fs::write(
                dir.join(format!("{}.xref.json", m)),
                format!(r#"{{"module": "{}"}}"#, m),
            )
            .unwrap();
        }
        let files = gather_artifact_files(&dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["alpha.xref.json", "mid.xref.json", "zeta.xref.json"]);
        fs::remove_dir_all(&dir).ok();
    }
}
