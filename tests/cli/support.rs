use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

/// Get a Command for campath, detached from the caller's campus override
pub fn campath() -> Command {
    let mut cmd = cargo_bin_cmd!("campath");
    cmd.env_remove("CAMPATH_CAMPUS").env_remove("CAMPATH_LOG");
    cmd
}

/// A campath command whose config directory is `dir`
pub fn campath_in(dir: &Path) -> Command {
    let mut cmd = campath();
    cmd.env("CAMPATH_CONFIG_DIR", dir);
    cmd
}

/// Fresh config directory plus a command bound to it.
/// Keep the directory alive for as long as the command runs.
pub fn isolated() -> (TempDir, Command) {
    let dir = tempfile::tempdir().unwrap();
    let cmd = campath_in(dir.path());
    (dir, cmd)
}

/// Parse stdout as JSON
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
