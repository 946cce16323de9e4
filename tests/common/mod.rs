//! Common test utilities for preflight CLI tests.
//!
//! This module provides:
//! - `run_preflight`: spawn the real binary against a project root
//! - Fixtures: scaffold helpers for the audited project tree

pub mod fixtures;

use std::path::Path;
use std::process::{Command, Output};

/// Run the preflight binary with `root` as its working directory.
pub fn run_preflight(root: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_preflight");
    Command::new(bin)
        .current_dir(root)
        .args(args)
        .output()
        .expect("failed to spawn preflight")
}
