use std::{path::Path, process::Command};

#[test]
fn test_catalog_file_not_present() {
    let not_present = "tests/data/no.such.catalog";

    let output = Command::new(env!("CARGO_BIN_EXE_catalog_validator"))
        .arg("--catalog-path")
        .arg(Path::new(env!("CARGO_MANIFEST_DIR")).join(not_present))
        .output()
        .unwrap();

    assert!(!output.status.success());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(err_msg.contains("failed to read catalog file") && err_msg.contains(not_present));
}

#[test]
fn test_catalog_file_not_valid() {
    let not_valid = "tests/data/illegal.toml";

    let output = Command::new(env!("CARGO_BIN_EXE_catalog_validator"))
        .arg("--catalog-path")
        .arg(Path::new(env!("CARGO_MANIFEST_DIR")).join(not_valid))
        .output()
        .unwrap();

    assert!(!output.status.success());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(err_msg.contains("failed to parse catalog file") && err_msg.contains(not_valid));
}

#[test]
fn test_catalog_with_unknown_row() {
    let unknown_row = "tests/data/unknown_row.toml";

    let output = Command::new(env!("CARGO_BIN_EXE_catalog_validator"))
        .arg("--catalog-path")
        .arg(Path::new(env!("CARGO_MANIFEST_DIR")).join(unknown_row))
        .output()
        .unwrap();

    assert!(!output.status.success());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(
        err_msg.contains("failed to parse catalog file")
            && err_msg.contains("refers to unknown parameter set 'SEAL n=32768'")
    );
}
