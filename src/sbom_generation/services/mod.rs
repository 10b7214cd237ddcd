/// Domain services for SBOM generation
pub mod component_tree_builder;
pub mod license_attacher;
pub mod license_auditor;
pub mod license_locator;

pub use component_tree_builder::{ComponentTreeBuilder, ParsedSnapshot};
pub use license_attacher::LicenseTextAttacher;
pub use license_auditor::{LicenseGap, LicenseGapAuditor};
pub use license_locator::LicenseSourceLocator;
