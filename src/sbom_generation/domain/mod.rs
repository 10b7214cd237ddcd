pub mod component;
pub mod license;
pub mod sbom_metadata;

pub use component::Component;
pub use license::{AttachedText, AttachmentEncoding, License};
pub use sbom_metadata::SbomMetadata;
