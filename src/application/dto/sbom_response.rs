use crate::sbom_generation::domain::{Component, SbomMetadata};

/// SbomResponse - Internal response DTO from SBOM generation use case
///
/// Carries the annotated component tree in its terminal state: license
/// texts are attached and the gap audit has passed by the time this DTO
/// reaches an adapter.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// The resolved, license-annotated component tree
    pub components: Vec<Component>,
    /// SBOM metadata (timestamp, tool info, serial number, root project)
    pub metadata: SbomMetadata,
    /// Number of licenses carrying attached text, for reporting
    pub licenses_with_text: usize,
}

impl SbomResponse {
    pub fn new(
        components: Vec<Component>,
        metadata: SbomMetadata,
        licenses_with_text: usize,
    ) -> Self {
        Self {
            components,
            metadata,
            licenses_with_text,
        }
    }
}
