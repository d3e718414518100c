// Public modules
pub mod error;
pub mod refactor;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
