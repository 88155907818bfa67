use secrecy::zeroize::Zeroize;
use secrecy::{ExposeSecret, SecretVec};
use sha2::{Digest, Sha256};
use std::ffi::OsStr;
use std::fmt;

/// User supplied password the keys are derived from, kept as raw bytes
pub struct Seed(SecretVec<u8>);

impl Seed {
    pub fn new(password: impl Into<Vec<u8>>) -> Self {
        Self(SecretVec::new(password.into()))
    }

    /// Take a command-line argument byte for byte, valid UTF-8 or not
    pub fn from_os_str(password: &OsStr) -> Self {
        #[cfg(unix)]
        let bytes = {
            use std::os::unix::ffi::OsStrExt;
            password.as_bytes()
        };
        #[cfg(not(unix))]
        let bytes = password.as_encoded_bytes();

        Self::new(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.expose_secret()
    }

    /// Hash the raw seed bytes down to the 32-byte Ed25519 seed.
    ///
    /// Single-pass SHA-256: no salt, no iteration count. This offers no
    /// brute-force resistance beyond the cost of one hash.
    pub fn normalize(&self) -> SeedHash {
        SeedHash::digest(self.as_bytes())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// SHA-256 digest of a seed, zeroized on drop
pub struct SeedHash([u8; 32]);

impl SeedHash {
    pub const LEN: usize = 32;

    pub fn digest(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl Drop for SeedHash {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for SeedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SeedHash([REDACTED])")
    }
}
