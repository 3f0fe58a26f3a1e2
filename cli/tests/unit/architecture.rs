//! Structural tests for architectural boundary enforcement.
//!
//! These scan source files to verify that the layer boundaries hold: the
//! domain stays pure, services talk only to ports, and the AWS SDK is
//! confined to the infrastructure adapters.

use std::path::{Path, PathBuf};

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

/// Return `file:line` for every non-comment line in `dir` containing any of
/// `forbidden`.
fn violations(dir: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    for file in collect_rs_files(dir) {
        for (idx, line) in read_non_comment_lines(&file).iter().enumerate() {
            if forbidden.iter().any(|f| line.contains(f)) {
                found.push(format!("{}:{}: {}", file.display(), idx + 1, line.trim()));
            }
        }
    }
    found
}

#[test]
fn test_domain_has_no_outward_imports() {
    let found = violations(
        &src_dir().join("domain"),
        &[
            "crate::infra",
            "crate::application",
            "crate::commands",
            "crate::output",
            "tokio",
            "aws_",
            "std::process",
        ],
    );
    assert!(found.is_empty(), "domain boundary violations:\n{}", found.join("\n"));
}

#[test]
fn test_application_depends_only_on_domain_and_ports() {
    let found = violations(
        &src_dir().join("application"),
        &["crate::infra", "crate::commands", "crate::output", "aws_"],
    );
    assert!(
        found.is_empty(),
        "application boundary violations:\n{}",
        found.join("\n")
    );
}

#[test]
fn test_aws_sdk_is_confined_to_infra() {
    let infra = src_dir().join("infra");
    let mut found = Vec::new();
    for file in collect_rs_files(&src_dir()) {
        if file.starts_with(&infra) {
            continue;
        }
        for line in read_non_comment_lines(&file) {
            if line.contains("aws_sdk_ec2") || line.contains("aws_config") {
                found.push(format!("{}: {}", file.display(), line.trim()));
            }
        }
    }
    assert!(found.is_empty(), "AWS SDK used outside infra:\n{}", found.join("\n"));
}
