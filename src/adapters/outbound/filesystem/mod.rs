/// Filesystem adapters for writing the generated document
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
