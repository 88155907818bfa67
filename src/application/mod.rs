pub mod key_generation;

pub use key_generation::{KeyGeneration, KeygenOutcome};
