pub mod age_format;
pub mod key_writer;
pub mod ssh_format;

// Re-export commonly used items
pub use age_format::AgeKeyFiles;
pub use key_writer::KeyWriter;
pub use ssh_format::SshKeyFiles;
