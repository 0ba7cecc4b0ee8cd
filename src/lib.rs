pub mod error;
pub mod generator;
pub mod git;
pub mod names;
pub mod templates;

// Re-export commonly used types
pub use error::Error;
pub use names::ProjectNames;
