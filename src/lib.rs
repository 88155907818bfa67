// Library exports for testing and external integration

pub mod application;
pub mod crypto;
pub mod domain;
pub mod logging;
pub mod storage;

// Re-export commonly used items
pub use application::{KeyGeneration, KeygenOutcome};
pub use domain::{
    AgeKeyPair, DomainError, DomainResult, Ed25519KeyPair, GeneratedKeys, GenerationMode,
    KeyFileKind, KeygenConfig, Seed, SeedHash, WrittenKeyFile,
};
pub use storage::{AgeKeyFiles, KeyWriter, SshKeyFiles};
