/// Use cases - application workflows
mod generate_sbom;

pub use generate_sbom::GenerateSbomUseCase;
