//! Appender implementations

pub mod file;
pub mod stdout;

pub use file::FileAppender;
pub use stdout::StdoutAppender;

// Re-export traits for backward compatibility
pub use crate::core::{Appender, AppenderCore};
