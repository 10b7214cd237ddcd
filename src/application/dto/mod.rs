/// Data Transfer Objects for the application layer
///
/// DTOs carry data between the use case and the adapters, keeping the
/// component tree and metadata types out of the CLI surface.
mod sbom_request;
mod sbom_response;

pub use sbom_request::SbomRequest;
pub use sbom_response::SbomResponse;
