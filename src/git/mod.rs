//! Version-control initialization for freshly generated projects.

mod operations;

pub use operations::SystemGit;

use std::path::Path;

use anyhow::Result;

/// Seam over the three git invocations so tests can substitute a fake.
pub trait GitClient {
    fn init(&self, root: &Path) -> Result<()>;
    fn add_all(&self, root: &Path) -> Result<()>;
    fn commit(&self, root: &Path, message: &str) -> Result<()>;
}
