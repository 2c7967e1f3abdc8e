//! Runs the `palette-gen` binary against the library fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../palette-gen/tests/fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_palette-gen"))
        .args(args)
        .output()
        .expect("failed to run palette-gen")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn generate_writes_kotlin_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("output");
    let palette = fixture("radix-sample.json");

    let output = run(&[
        "generate",
        path_str(&palette),
        "--out-dir",
        path_str(&out_dir),
        "--package",
        "com.eklipse2k8.radixcolor",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = fs::read_to_string(out_dir.join("RadixColors.kt")).unwrap();
    assert!(text.contains("package com.eklipse2k8.radixcolor\n"));
    assert!(text.contains("    @JvmStatic val grayDark: List<Color> = listOf(\n"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 collections, 8 colors"));
}

#[test]
fn generate_with_config_file_and_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("palette-gen.yaml");
    fs::write(&config, "target: swift\nobject_name: Radix\n").unwrap();
    let palette = fixture("radix-sample.yaml");

    let output = run(&[
        "generate",
        path_str(&palette),
        "--config",
        path_str(&config),
        "--stdout",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("// Radix Colors for SwiftUI.\n"));
    assert!(stdout.contains("public enum Radix {\n"));
    assert!(stdout.contains("        Color(hsl: 0, 0.000, 0.000, 0.012),\n"));
}

#[test]
fn malformed_palette_fails_with_location() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("output");
    let palette = fixture("malformed.json");

    let output = run(&["generate", path_str(&palette), "--out-dir", path_str(&out_dir)]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("blue"));
    assert!(stderr.contains("blue2"));
    assert!(stderr.contains("hsl(210, 100%)"));
    assert!(!out_dir.exists());
}

#[test]
fn check_reports_summary() {
    let output = run(&["check", path_str(&fixture("radix-sample.json"))]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 collections, 8 colors (1 dark, 1 alpha)"));

    let output = run(&["check", path_str(&fixture("malformed.json"))]);
    assert!(!output.status.success());
}

#[test]
fn list_labels_dark_and_alpha_collections() {
    let output = run(&["list", path_str(&fixture("radix-sample.json"))]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("gray "));
    assert!(lines[1].starts_with("grayDark") && lines[1].contains("dark"));
    assert!(lines[2].starts_with("grayA") && lines[2].contains("alpha"));
    assert!(!lines[3].contains("dark"));
}

#[test]
fn unsupported_palette_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let palette = dir.path().join("colors.toml");
    fs::write(&palette, "").unwrap();
    let output = run(&["check", path_str(&palette)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported palette format"));
}
