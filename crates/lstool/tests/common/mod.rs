//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the lstool binary built for this test run
pub fn lstool_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lstool"))
}

/// Run the lstool binary in the specified directory
pub fn run_lstool_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(lstool_binary())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute lstool binary")
}

/// Write `content` to `relative` under `root`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Read a file as UTF-8
pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read test file")
}
