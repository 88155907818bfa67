use crate::crypto::{generate_age_identity, Ed25519};
use crate::domain::{
    DomainError, DomainResult, GeneratedKeys, GenerationMode, KeygenConfig, Seed, WrittenKeyFile,
};
use crate::storage::{AgeKeyFiles, KeyWriter, SshKeyFiles};
use secrecy::SecretString;
use tracing::{debug, info};

/// What a run produced
#[derive(Debug)]
pub enum KeygenOutcome {
    /// Files written, in write order
    Saved(Vec<WrittenKeyFile>),
    /// Age identity text for stdout, nothing written
    Printed(SecretString),
}

/// Key generation use case
pub struct KeyGeneration;

impl KeyGeneration {
    /// Derive the Ed25519 pair from the seed and generate a fresh age identity
    pub fn generate(seed: &Seed) -> GeneratedKeys {
        let seed_hash = seed.normalize();
        let ed25519 = Ed25519::derive(&seed_hash);
        let age = generate_age_identity();

        GeneratedKeys { ed25519, age }
    }

    /// Generate keys and save or print them according to the configured mode.
    ///
    /// Writes are not rolled back: if a later file fails, earlier files stay
    /// on disk.
    pub fn run(config: &KeygenConfig) -> DomainResult<KeygenOutcome> {
        debug!(mode = %config.mode, output_dir = %config.output_dir.display(), "starting key generation");
        let keys = Self::generate(&config.seed);

        if config.mode == GenerationMode::Print {
            return Ok(KeygenOutcome::Printed(keys.age.identity_text()));
        }

        let mut written = Vec::with_capacity(4);

        if config.mode.saves_ssh() {
            let files = SshKeyFiles::encode(&keys.ed25519, &config.comment)?;
            info!(fingerprint = %files.fingerprint, "SSH key pair ready");
            written.extend(KeyWriter::write_ssh_key_pair(&files, &config.output_dir)?);
        }

        if config.mode.saves_age() {
            let files = AgeKeyFiles::encode(&keys.age);
            if !files.matches()? {
                return Err(DomainError::AgeKey(
                    "identity does not match recipient".to_string(),
                ));
            }
            written.extend(KeyWriter::write_age_key_pair(&files, &config.output_dir)?);
        }

        Ok(KeygenOutcome::Saved(written))
    }
}
