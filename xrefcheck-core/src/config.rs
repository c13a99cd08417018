//! Configuration loading from xrefcheck.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for xrefcheck.toml.
#[derive(Debug, Deserialize, Default)]
pub struct XrefConfig {
    /// Directory of compiled artifacts to analyze.
    pub artifact_dir: Option<String>,
    /// Auxiliary library search paths for out-of-set definitions.
    pub lib: Option<Vec<String>>,
    /// Subset of check kinds to run (names as spelled on the CLI).
    pub checks: Option<Vec<String>>,
}

/// Loads configuration from xrefcheck.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<XrefConfig>> {
    let path = root.join("xrefcheck.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid xrefcheck.toml")?;
    Ok(Some(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_parses_all_fields() {
        let dir = std::env::temp_dir().join(format!("xrefcheck_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("xrefcheck.toml"),
            "artifact_dir = \"build\"\nlib = [\"deps\"]\nchecks = [\"locals_not_used\"]\n",
        )
        .unwrap();

        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg.artifact_dir.as_deref(), Some("build"));
        assert_eq!(cfg.lib.as_deref(), Some(&["deps".to_string()][..]));
        assert_eq!(cfg.checks.as_deref(), Some(&["locals_not_used".to_string()][..]));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = std::env::temp_dir().join("xrefcheck_cfg_missing");
        fs::create_dir_all(&dir).unwrap();
        assert!(load_config(&dir).unwrap().is_none());
        fs::remove_dir_all(&dir).ok();
    }
}
