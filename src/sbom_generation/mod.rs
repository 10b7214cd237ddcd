/// SBOM generation - domain models, policies, and domain services
pub mod domain;
pub mod policies;
pub mod services;
