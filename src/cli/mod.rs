pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{write_saved_files, OutputFormat};
