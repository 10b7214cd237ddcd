/// Shared utilities - error types and common aliases
pub mod error;
pub mod result;

pub use result::Result;
