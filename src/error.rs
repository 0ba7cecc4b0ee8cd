//! Generator error taxonomy.

use thiserror::Error;

use crate::names::MAX_NAME_LEN;

#[derive(Debug, Error)]
pub enum Error {
    /// A name argument would not have fit the original fixed-size path
    /// buffers. Checked before any filesystem mutation.
    #[error("{arg} name too long ({len} bytes, limit {})", MAX_NAME_LEN - 1)]
    NameTooLong { arg: &'static str, len: usize },

    /// A name argument is empty and would collapse into its parent path.
    /// Checked before any filesystem mutation.
    #[error("{arg} name must not be empty")]
    EmptyName { arg: &'static str },

    /// A git subprocess exited non-zero.
    #[error("git {op} failed: {detail}")]
    Git { op: &'static str, detail: String },
}
