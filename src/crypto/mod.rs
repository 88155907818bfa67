pub mod age_identity;
pub mod ed25519;

// Re-export commonly used items
pub use age_identity::generate_age_identity;
pub use ed25519::Ed25519;
