//! npm-sbom - SBOM generation tool for npm projects
//!
//! This library generates Software Bill of Materials (SBOM) documents in
//! CycloneDX format from an npm project's resolved dependency tree,
//! attaching license text evidence found in each package's install
//! directory and auditing the tree for license gaps.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let snapshot_reader = NpmCliReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateSbomUseCase::new(snapshot_reader, progress_reporter);
//!
//! // Execute
//! let request = SbomRequest::new(PathBuf::from("."), false);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = CycloneDxFormatter::new();
//! let output = formatter.format(&response.components, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::npm::NpmCliReader;
    pub use crate::application::dto::{SbomRequest, SbomResponse};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        DependencySnapshotReader, OutputPresenter, ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        AttachedText, AttachmentEncoding, Component, License, SbomMetadata,
    };
    pub use crate::sbom_generation::policies::LicenseClassifier;
    pub use crate::sbom_generation::services::{
        ComponentTreeBuilder, LicenseGap, LicenseGapAuditor, LicenseSourceLocator,
        LicenseTextAttacher,
    };
    pub use crate::shared::Result;
}
