use ed25519_dalek::{SigningKey, VerifyingKey};
use secrecy::{ExposeSecret, Secret, SecretString};
use std::fmt;

/// Ed25519 key pair derived from a seed hash
#[derive(Clone)]
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    pub const PUBLIC_KEY_LEN: usize = 32;
    pub const EXPANDED_SECRET_LEN: usize = 64;

    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Public key bytes
    pub fn public_key(&self) -> [u8; Self::PUBLIC_KEY_LEN] {
        self.verifying_key().to_bytes()
    }

    /// Expanded private key: 32-byte seed followed by the 32-byte public key
    pub fn expanded_secret(&self) -> Secret<[u8; Self::EXPANDED_SECRET_LEN]> {
        Secret::new(self.signing_key.to_keypair_bytes())
    }
}

impl PartialEq for Ed25519KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.expanded_secret().expose_secret() == other.expanded_secret().expose_secret()
    }
}

impl Eq for Ed25519KeyPair {}

impl fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519KeyPair")
            .field("public_key", &hex::encode(self.public_key()))
            .finish_non_exhaustive()
    }
}

/// age X25519 identity and its recipient.
///
/// Generated from the OS random source, never from the seed, so two runs
/// with the same password produce different age keys.
pub struct AgeKeyPair {
    identity: age::x25519::Identity,
    recipient: age::x25519::Recipient,
}

impl AgeKeyPair {
    pub fn new(identity: age::x25519::Identity) -> Self {
        let recipient = identity.to_public();
        Self { identity, recipient }
    }

    pub fn identity(&self) -> &age::x25519::Identity {
        &self.identity
    }

    pub fn recipient(&self) -> &age::x25519::Recipient {
        &self.recipient
    }

    /// Canonical `AGE-SECRET-KEY-1...` text
    pub fn identity_text(&self) -> SecretString {
        self.identity.to_string()
    }

    /// Canonical `age1...` text
    pub fn recipient_text(&self) -> String {
        self.recipient.to_string()
    }
}

impl fmt::Debug for AgeKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgeKeyPair")
            .field("recipient", &self.recipient_text())
            .finish_non_exhaustive()
    }
}

/// Everything one run produces
#[derive(Debug)]
pub struct GeneratedKeys {
    pub ed25519: Ed25519KeyPair,
    pub age: AgeKeyPair,
}
