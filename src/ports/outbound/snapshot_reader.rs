use crate::shared::Result;
use std::path::Path;

/// DependencySnapshotReader port for obtaining the resolved dependency tree
///
/// This port abstracts how the npm dependency snapshot is produced
/// (normally by invoking the npm CLI in the project directory).
pub trait DependencySnapshotReader {
    /// Produces the raw JSON dependency snapshot for a project
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing package.json
    ///
    /// # Returns
    /// The raw JSON text describing the resolved dependency tree
    ///
    /// # Errors
    /// Returns an error if:
    /// - npm cannot be spawned (not installed, not on PATH)
    /// - npm produces no usable output for the project
    fn read_snapshot(&self, project_path: &Path) -> Result<String>;
}
