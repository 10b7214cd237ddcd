use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// SbomMetadata value object representing SBOM metadata
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
    project_name: Option<String>,
    project_version: Option<String>,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
        project_name: Option<String>,
        project_version: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            serial_number,
            project_name,
            project_version,
        }
    }

    /// Creates metadata for a fresh generation run: current UTC timestamp,
    /// this tool's name/version, and a random urn:uuid serial number.
    pub fn generate(project_name: Option<String>, project_version: Option<String>) -> Self {
        Self::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
            project_name,
            project_version,
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    pub fn project_version(&self) -> Option<&str> {
        self.project_version.as_deref()
    }
}
