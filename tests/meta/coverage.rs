//! Keeps the src tree and the unit test mirror in lockstep

use std::collections::HashSet;
use std::fs;
use std::path::Path;

// Entry points and module organization files carry no unit test counterpart
fn exempt(path: &str) -> bool {
    path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
}

fn collect_relative_paths(root: &Path, dir: &Path, found: &mut HashSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_relative_paths(root, &path, found);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            if let Ok(relative) = path.strip_prefix(root) {
                found.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }
}

#[test]
fn test_src_and_unit_mirror_each_other() {
    let mut src_paths = HashSet::new();
    collect_relative_paths(Path::new("src"), Path::new("src"), &mut src_paths);
    assert!(!src_paths.is_empty(), "src directory not found from test cwd");

    let mut unit_paths = HashSet::new();
    collect_relative_paths(
        Path::new("tests/unit"),
        Path::new("tests/unit"),
        &mut unit_paths,
    );

    let missing_tests: Vec<&String> = src_paths
        .iter()
        .filter(|path| !exempt(path) && !unit_paths.contains(*path))
        .collect();
    assert!(
        missing_tests.is_empty(),
        "src files missing unit test counterparts: {missing_tests:?}"
    );

    let orphaned_tests: Vec<&String> = unit_paths
        .iter()
        .filter(|path| !exempt(path) && !src_paths.contains(*path))
        .collect();
    assert!(
        orphaned_tests.is_empty(),
        "unit tests without src counterparts: {orphaned_tests:?}"
    );
}
