//! Shared utilities for integration tests.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// Paths outside the registered table.
#[allow(dead_code)]
pub const UNREGISTERED_PATHS: &[&str] = &[
    "", "/sm1", "/sm5", "/sm2/", "/SM2", "/sm3/extra", "sm3", "/sm4?x=1", "//", "/404",
];

/// The route table shipped with the repository.
#[allow(dead_code)]
pub fn shipped_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("routes.toml")
}

/// Write `content` to a temporary `.toml` file that lives as long as the handle.
#[allow(dead_code)]
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
