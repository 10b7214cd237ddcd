use std::path::PathBuf;

/// SbomRequest - Internal request DTO for SBOM generation use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the external CLI surface.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the project directory containing package.json
    pub project_path: PathBuf,
    /// Whether to bypass license text collection and the gap audit
    pub skip_license_texts: bool,
}

impl SbomRequest {
    pub fn new(project_path: PathBuf, skip_license_texts: bool) -> Self {
        Self {
            project_path,
            skip_license_texts,
        }
    }
}
