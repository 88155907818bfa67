use crate::domain::{DomainError, DomainResult, Ed25519KeyPair, SeedHash};
use ed25519_dalek::SigningKey;
use tracing::debug;

/// Ed25519 key operations
pub struct Ed25519;

impl Ed25519 {
    /// Derive the key pair from a normalized seed.
    ///
    /// The 32-byte digest is used directly as the RFC 8032 private seed.
    pub fn derive(seed_hash: &SeedHash) -> Ed25519KeyPair {
        let pair = Ed25519KeyPair::new(SigningKey::from_bytes(seed_hash.as_bytes()));
        debug!(public_key = %hex::encode(pair.public_key()), "derived ed25519 key pair");
        pair
    }

    /// Generate a keypair from a raw 32-byte seed
    pub fn from_seed(seed: &[u8]) -> DomainResult<Ed25519KeyPair> {
        let seed: &[u8; 32] = seed.try_into().map_err(|_| {
            DomainError::CryptoError(format!(
                "Invalid seed length: {} (expected 32)",
                seed.len()
            ))
        })?;

        Ok(Ed25519KeyPair::new(SigningKey::from_bytes(seed)))
    }
}
