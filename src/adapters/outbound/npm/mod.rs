/// npm CLI adapters for dependency resolution
mod npm_cli_reader;

pub use npm_cli_reader::NpmCliReader;
