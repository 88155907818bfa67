use crate::domain::{AgeKeyPair, DomainError, DomainResult};
use age::x25519::{Identity, Recipient};
use secrecy::{ExposeSecret, SecretString};

/// Encoded contents of `key_age` and `key_age.pub`
pub struct AgeKeyFiles {
    /// `AGE-SECRET-KEY-1...`, no trailing newline
    pub identity: SecretString,
    /// `age1...`, no trailing newline
    pub recipient: String,
}

impl AgeKeyFiles {
    pub fn encode(pair: &AgeKeyPair) -> Self {
        Self {
            identity: pair.identity_text(),
            recipient: pair.recipient_text(),
        }
    }

    /// Parse identity text as written to `key_age`
    pub fn parse_identity(text: &str) -> DomainResult<Identity> {
        text.trim()
            .parse::<Identity>()
            .map_err(|e| DomainError::AgeKey(e.to_string()))
    }

    /// Parse recipient text as written to `key_age.pub`
    pub fn parse_recipient(text: &str) -> DomainResult<Recipient> {
        text.trim()
            .parse::<Recipient>()
            .map_err(|e| DomainError::AgeKey(e.to_string()))
    }

    /// Check that the identity text belongs to the recipient text
    pub fn matches(&self) -> DomainResult<bool> {
        let identity = Self::parse_identity(self.identity.expose_secret())?;
        Ok(identity.to_public().to_string() == self.recipient)
    }
}
