use crate::sbom_generation::domain::{Component, SbomMetadata};
use crate::shared::Result;

/// SbomFormatter port for formatting SBOM output
///
/// This port abstracts the serialization of the annotated component tree
/// into a concrete document format (CycloneDX JSON today).
pub trait SbomFormatter {
    /// Formats the component tree and metadata into a document
    ///
    /// The tree handed in here is terminal: license attachment and the gap
    /// audit have already run, so every license is in its final state.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, components: &[Component], metadata: &SbomMetadata) -> Result<String>;
}
