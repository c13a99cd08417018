//! End-to-end test suite for xrefcheck-core.
//!
//! Builds artifact directories on disk and drives complete runs through
//! the builder API, covering the analysis pipeline from scan to report.

use crate::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn setup_temp_dir(tag: &str) -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir()
        .join("xrefcheck_tests")
        .join(format!("{}_{}_{}", tag, timestamp, id));

    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_artifact(dir: &Path, value: serde_json::Value) {
    let module = value["module"].as_str().unwrap().to_string();
    let path = dir.join(format!("{}.xref.json", module));
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

/// The three-module scenario: A exports foo/0 calling B's undefined
/// bar/1; B has a never-called private baz/0; C conforms to a contract
/// requiring init/1 and exports exactly init/1.
fn setup_abc_scenario() -> (PathBuf, PathBuf) {
    let build = setup_temp_dir("abc_build");
    let lib = setup_temp_dir("abc_lib");

    write_artifact(
        &build,
        json!({
            "module": "a",
            "source": "src/a.src",
            "functions": [
                {"name": "foo", "arity": 0, "exported": true, "line": 3,
                 "calls": [{"module": "b", "function": "bar", "arity": 1}]}
            ]
        }),
    );
    write_artifact(
        &build,
        json!({
            "module": "b",
            "source": "src/b.src",
            "functions": [
                {"name": "baz", "arity": 0, "line": 7}
            ]
        }),
    );
    write_artifact(
        &build,
        json!({
            "module": "c",
            "source": "src/c.src",
            "attributes": {"conforms_to": ["worker_contract"]},
            "functions": [
                {"name": "init", "arity": 1, "exported": true, "line": 5}
            ]
        }),
    );
    write_artifact(
        &lib,
        json!({
            "module": "worker_contract",
            "callbacks": [{"function": "init", "arity": 1}]
        }),
    );

    (build, lib)
}

#[test]
fn test_abc_scenario_end_to_end() {
    let (build, lib) = setup_abc_scenario();
    let report = Xref::new(&build).with_lib_path(&lib).run().unwrap();

    assert_eq!(report.modules_analyzed, 3);

    // (a) one undefined call edge, A -> b:bar/1, attributed to A's source
    assert_eq!(report.count(CheckKind::UndefinedFunctionCalls), 1);
    let edge = report
        .diagnostics
        .iter()
        .find(|d| d.kind == CheckKind::UndefinedFunctionCalls)
        .unwrap();
    assert_eq!(
        edge.render(),
        "src/a.src:3: Warning: a:foo/0 calls undefined function b:bar/1 (Xref)"
    );

    // (b) one undefined function node for bar/1
    assert_eq!(report.count(CheckKind::UndefinedFunctions), 1);

    // (c) one unused local for b:baz/0
    let locals: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.kind == CheckKind::LocalsNotUsed)
        .collect();
    assert_eq!(locals.len(), 1);
    assert_eq!(
        locals[0].render(),
        "src/b.src:7: Warning: b:baz/0 is unused local function (Xref)"
    );

    // (d) the contract callback c:init/1 is never an unused export
    assert!(report
        .diagnostics
        .iter()
        .filter(|d| d.kind == CheckKind::ExportsNotUsed)
        .all(|d| d.finding.representative() != &Symbol::new("c", "init", 1)));

    fs::remove_dir_all(&build).ok();
    fs::remove_dir_all(&lib).ok();
}

#[test]
fn test_undefined_node_location_degrades_but_run_completes() {
    let (build, lib) = setup_abc_scenario();
    let report = Xref::new(&build).with_lib_path(&lib).run().unwrap();

    // b:bar/1 has no definition, so its node resolves through module b's
    // artifact; the node form is attributed to the *target* module. The
    // function is absent from b's line table, so the file-only prefix
    // applies and the run still reports everything else.
    let node = report
        .diagnostics
        .iter()
        .find(|d| d.kind == CheckKind::UndefinedFunctions)
        .unwrap();
    assert_eq!(
        node.render(),
        "src/b.src: Warning: b:bar/1 is undefined function (Xref)"
    );

    fs::remove_dir_all(&build).ok();
    fs::remove_dir_all(&lib).ok();
}

#[test]
fn test_module_absent_from_artifact_set_resolves_empty() {
    let build = setup_temp_dir("ghost");
    write_artifact(
        &build,
        json!({
            "module": "e",
            "source": "src/e.src",
            "functions": [
                {"name": "run", "arity": 0, "exported": true, "line": 2,
                 "calls": [{"module": "ghost", "function": "x", "arity": 1}]}
            ]
        }),
    );

    let report = Xref::new(&build).run().unwrap();

    // the node finding's module is nowhere in the store: empty prefix
    let node = report
        .diagnostics
        .iter()
        .find(|d| d.kind == CheckKind::UndefinedFunctions)
        .unwrap();
    assert_eq!(node.render(), "Warning: ghost:x/1 is undefined function (Xref)");

    // and the edge finding still resolves and prints normally
    let edge = report
        .diagnostics
        .iter()
        .find(|d| d.kind == CheckKind::UndefinedFunctionCalls)
        .unwrap();
    assert_eq!(
        edge.render(),
        "src/e.src:2: Warning: e:run/0 calls undefined function ghost:x/1 (Xref)"
    );

    fs::remove_dir_all(&build).ok();
}

#[test]
fn test_ignore_declared_local_yields_no_findings() {
    let build = setup_temp_dir("ignore_local");
    write_artifact(
        &build,
        json!({
            "module": "d",
            "source": "src/d.src",
            "attributes": {"ignore_xref": [{"function": "legacy", "arity": 0}]},
            "functions": [
                {"name": "legacy", "arity": 0, "line": 9}
            ]
        }),
    );

    let report = Xref::new(&build)
        .with_checks([CheckKind::LocalsNotUsed])
        .run()
        .unwrap();
    assert!(report.is_clean(), "ignored local must not be reported");

    fs::remove_dir_all(&build).ok();
}

#[test]
fn test_ignore_rules_apply_across_all_check_kinds() {
    let build = setup_temp_dir("ignore_all_kinds");
    write_artifact(
        &build,
        json!({
            "module": "m",
            "source": "src/m.src",
            "attributes": {"ignore_xref": [
                {"function": "go", "arity": 0},
                {"module": "nowhere", "function": "x", "arity": 1}
            ]},
            "functions": [
                {"name": "go", "arity": 0, "exported": true, "line": 1,
                 "calls": [{"module": "nowhere", "function": "x", "arity": 1}]}
            ]
        }),
    );

    // Rules are collected from implicated modules: the edge finding and
    // the unused-export finding both implicate m, so both are exempted.
    let report = Xref::new(&build)
        .with_checks([CheckKind::UndefinedFunctionCalls, CheckKind::ExportsNotUsed])
        .run()
        .unwrap();
    assert!(
        report.is_clean(),
        "both the unused export and the undefined call are ignore-declared: {:?}",
        report.diagnostics
    );

    fs::remove_dir_all(&build).ok();
}

#[test]
fn test_deprecated_calls_reported_with_location() {
    let build = setup_temp_dir("deprecated");
    write_artifact(
        &build,
        json!({
            "module": "old",
            "source": "src/old.src",
            "functions": [
                {"name": "creaky", "arity": 0, "exported": true,
                 "deprecated": true, "line": 4}
            ]
        }),
    );
    write_artifact(
        &build,
        json!({
            "module": "new",
            "source": "src/new.src",
            "functions": [
                {"name": "go", "arity": 0, "exported": true, "line": 11,
                 "calls": [{"module": "old", "function": "creaky", "arity": 0}]}
            ]
        }),
    );

    let report = Xref::new(&build)
        .with_checks([CheckKind::DeprecatedFunctionCalls, CheckKind::DeprecatedFunctions])
        .run()
        .unwrap();

    let lines: Vec<String> = report.diagnostics.iter().map(Diagnostic::render).collect();
    assert_eq!(
        lines,
        vec![
            "src/new.src:11: Warning: new:go/0 calls deprecated function old:creaky/0 (Xref)",
            "src/old.src:4: Warning: old:creaky/0 is deprecated function (Xref)",
        ]
    );

    fs::remove_dir_all(&build).ok();
}

#[test]
fn test_missing_artifact_dir_is_fatal() {
    let err = Xref::new("/nonexistent/build").run().unwrap_err();
    assert!(matches!(err, XrefError::ArtifactDir { .. }));
}

#[test]
fn test_run_is_deterministic() {
    let (build, lib) = setup_abc_scenario();

    let first: Vec<String> = Xref::new(&build)
        .with_lib_path(&lib)
        .run()
        .unwrap()
        .diagnostics
        .iter()
        .map(Diagnostic::render)
        .collect();
    let second: Vec<String> = Xref::new(&build)
        .with_lib_path(&lib)
        .run()
        .unwrap()
        .diagnostics
        .iter()
        .map(Diagnostic::render)
        .collect();

    assert_eq!(first, second);
    assert!(!first.is_empty());

    fs::remove_dir_all(&build).ok();
    fs::remove_dir_all(&lib).ok();
}

#[test]
fn test_analyze_contract_returns_all_requested_kinds() {
    let (build, lib) = setup_abc_scenario();

    let results = analyze(&build, &[lib.clone()], &CheckKind::all()).unwrap();
    assert_eq!(results.len(), 6);
    for kind in CheckKind::all() {
        assert!(results.contains_key(&kind), "missing result set for {}", kind);
    }

    // raw results are unfiltered: c:init/1 still appears here, the
    // exemption belongs to the filter stage
    let exports = &results[&CheckKind::ExportsNotUsed];
    assert!(exports.contains(&Finding::Node(Symbol::new("c", "init", 1))));

    fs::remove_dir_all(&build).ok();
    fs::remove_dir_all(&lib).ok();
}

#[test]
fn test_malformed_artifact_degrades_not_aborts() {
    let build = setup_temp_dir("malformed");
    write_artifact(
        &build,
        json!({
            "module": "ok_mod",
            "source": "src/ok.src",
            "functions": [{"name": "f", "arity": 0, "exported": true, "line": 1}]
        }),
    );
    fs::write(build.join("broken.xref.json"), "{ this is not json").unwrap();

    let report = Xref::new(&build).run().unwrap();
    assert_eq!(report.modules_analyzed, 1);

    fs::remove_dir_all(&build).ok();
}
