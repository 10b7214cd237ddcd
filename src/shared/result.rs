/// Result alias with anyhow::Error, used across the crate so domain errors
/// and contextual wrapping compose at every layer boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
