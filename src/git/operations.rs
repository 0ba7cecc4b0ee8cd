//! Low-level git operations

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use super::GitClient;
use crate::error::Error;

/// Runs the real `git` binary with the project root as working directory.
pub struct SystemGit;

impl GitClient for SystemGit {
    fn init(&self, root: &Path) -> Result<()> {
        run(root, &["init"], "init")
    }

    fn add_all(&self, root: &Path) -> Result<()> {
        run(root, &["add", "."], "add")
    }

    fn commit(&self, root: &Path, message: &str) -> Result<()> {
        run(root, &["commit", "-m", message], "commit")
    }
}

fn run(root: &Path, args: &[&str], op: &'static str) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .with_context(|| format!("Failed to run git {op} in {}", root.display()))?;

    if !output.status.success() {
        let detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::Git { op, detail }.into());
    }

    Ok(())
}
