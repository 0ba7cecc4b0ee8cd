//! Invocation parameters and name derivation.
//!
//! The three names are used verbatim as path components and as text
//! substituted into generated sources and build descriptors; validation is
//! limited to non-emptiness and the length ceiling the original tool
//! enforced with its fixed-size buffers, checked here before anything
//! touches the disk.

use crate::error::Error;

/// Capacity of the path buffers in the original generator. Names of this
/// length or longer are rejected up front.
pub const MAX_NAME_LEN: usize = 512;

/// The three names supplied on the command line, validated once.
#[derive(Debug, Clone)]
pub struct ProjectNames {
    pub project: String,
    pub app: String,
    pub lib: String,
}

impl ProjectNames {
    pub fn new(project: String, app: String, lib: String) -> Result<Self, Error> {
        check_len("project", &project)?;
        check_len("application", &app)?;
        check_len("library", &lib)?;
        Ok(Self { project, app, lib })
    }

    /// Upper-case form of the app name, used for CMake variable tokens.
    pub fn app_upper(&self) -> String {
        self.app.to_uppercase()
    }

    /// Upper-case form of the lib name, used for include guards, CMake
    /// variable tokens, and the `_DEBUG`/`_RELEASE` macro names.
    pub fn lib_upper(&self) -> String {
        self.lib.to_uppercase()
    }
}

fn check_len(arg: &'static str, name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptyName { arg });
    }
    if name.len() >= MAX_NAME_LEN {
        return Err(Error::NameTooLong {
            arg,
            len: name.len(),
        });
    }
    Ok(())
}
