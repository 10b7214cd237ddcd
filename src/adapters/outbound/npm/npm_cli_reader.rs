use crate::ports::outbound::DependencySnapshotReader;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;
use std::process::Command;

/// NpmCliReader adapter for obtaining the resolved dependency tree
///
/// This adapter implements the DependencySnapshotReader port by running
/// `npm ls --all --long --json` in the project directory. The `--long` flag
/// makes npm include package.json metadata (license, description) and the
/// on-disk install path for every resolved dependency.
pub struct NpmCliReader {
    npm_binary: String,
}

impl NpmCliReader {
    pub fn new() -> Self {
        Self::with_binary("npm")
    }

    /// Uses an alternative npm executable (from config or tests).
    pub fn with_binary(npm_binary: impl Into<String>) -> Self {
        Self {
            npm_binary: npm_binary.into(),
        }
    }
}

impl Default for NpmCliReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencySnapshotReader for NpmCliReader {
    fn read_snapshot(&self, project_path: &Path) -> Result<String> {
        let output = Command::new(&self.npm_binary)
            .args(["ls", "--all", "--long", "--json"])
            .current_dir(project_path)
            .output()
            .map_err(|e| SbomError::DependencyResolutionError {
                path: project_path.to_path_buf(),
                details: format!("Failed to run '{} ls': {}", self.npm_binary, e),
            })?;

        // npm ls exits non-zero for dependency problems (missing, invalid,
        // extraneous) but still prints the resolved tree; only an empty
        // stdout means resolution actually failed.
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.trim().is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let details = if stderr.trim().is_empty() {
                format!("'{} ls' produced no output ({})", self.npm_binary, output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(SbomError::DependencyResolutionError {
                path: project_path.to_path_buf(),
                details,
            }
            .into());
        }

        Ok(stdout)
    }
}
