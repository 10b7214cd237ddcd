/// Output format adapters
mod cyclonedx_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
