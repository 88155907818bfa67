use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The four artifacts a run can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyFileKind {
    SshPublic,
    SshPrivate,
    AgePrivate,
    AgePublic,
}

impl KeyFileKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::SshPublic => "id_ed25519.pub",
            Self::SshPrivate => "id_ed25519",
            Self::AgePrivate => "key_age",
            Self::AgePublic => "key_age.pub",
        }
    }

    /// Unix permission bits applied after writing
    pub fn mode(&self) -> u32 {
        if self.is_secret() {
            0o600
        } else {
            0o644
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::SshPrivate | Self::AgePrivate)
    }

    /// Human-readable label used in status lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::SshPublic => "SSH public key",
            Self::SshPrivate => "SSH private key",
            Self::AgePrivate => "age private key",
            Self::AgePublic => "age public key",
        }
    }
}

impl fmt::Display for KeyFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A key file that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenKeyFile {
    pub kind: KeyFileKind,
    /// Absolute path of the written file
    pub path: PathBuf,
    /// Permission bits, e.g. "0600"
    pub mode: String,
}

impl WrittenKeyFile {
    pub fn new(kind: KeyFileKind, path: PathBuf) -> Self {
        Self {
            kind,
            path,
            mode: format!("{:04o}", kind.mode()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_and_modes() {
        assert_eq!(KeyFileKind::SshPublic.file_name(), "id_ed25519.pub");
        assert_eq!(KeyFileKind::SshPrivate.file_name(), "id_ed25519");
        assert_eq!(KeyFileKind::AgePrivate.file_name(), "key_age");
        assert_eq!(KeyFileKind::AgePublic.file_name(), "key_age.pub");

        assert_eq!(KeyFileKind::SshPublic.mode(), 0o644);
        assert_eq!(KeyFileKind::SshPrivate.mode(), 0o600);
        assert_eq!(KeyFileKind::AgePrivate.mode(), 0o600);
        assert_eq!(KeyFileKind::AgePublic.mode(), 0o644);
    }

    #[test]
    fn test_written_key_file_json() {
        let written = WrittenKeyFile::new(KeyFileKind::AgePrivate, PathBuf::from("/tmp/key_age"));
        let json = serde_json::to_string(&written).unwrap();

        assert!(json.contains("\"kind\":\"age_private\""));
        assert!(json.contains("\"mode\":\"0600\""));
    }
}
