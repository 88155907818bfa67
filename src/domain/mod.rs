pub mod config;
pub mod error;
pub mod key_file;
pub mod key_material;
pub mod seed;

// Re-export commonly used types
pub use config::{GenerationMode, KeygenConfig};
pub use error::{DomainError, DomainResult};
pub use key_file::{KeyFileKind, WrittenKeyFile};
pub use key_material::{AgeKeyPair, Ed25519KeyPair, GeneratedKeys};
pub use seed::{Seed, SeedHash};
