//! Key file writing utilities

use crate::domain::{DomainError, DomainResult, KeyFileKind, WrittenKeyFile};
use crate::storage::age_format::AgeKeyFiles;
use crate::storage::ssh_format::SshKeyFiles;
use secrecy::ExposeSecret;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write keys to their well-known file names
pub struct KeyWriter;

impl KeyWriter {
    /// Write `id_ed25519.pub` then `id_ed25519`
    pub fn write_ssh_key_pair(
        files: &SshKeyFiles,
        output_dir: &Path,
    ) -> DomainResult<[WrittenKeyFile; 2]> {
        let public = Self::write_key_file(
            output_dir,
            KeyFileKind::SshPublic,
            files.public_line.as_bytes(),
        )?;
        let private = Self::write_key_file(
            output_dir,
            KeyFileKind::SshPrivate,
            files.private_pem.expose_secret().as_bytes(),
        )?;

        Ok([public, private])
    }

    /// Write `key_age` then `key_age.pub`
    pub fn write_age_key_pair(
        files: &AgeKeyFiles,
        output_dir: &Path,
    ) -> DomainResult<[WrittenKeyFile; 2]> {
        let private = Self::write_key_file(
            output_dir,
            KeyFileKind::AgePrivate,
            files.identity.expose_secret().as_bytes(),
        )?;
        let public = Self::write_key_file(
            output_dir,
            KeyFileKind::AgePublic,
            files.recipient.as_bytes(),
        )?;

        Ok([private, public])
    }

    /// Write one key file, replacing any previous contents, and apply the
    /// kind's permission bits. Returns the absolute path of the file.
    pub fn write_key_file(
        output_dir: &Path,
        kind: KeyFileKind,
        contents: &[u8],
    ) -> DomainResult<WrittenKeyFile> {
        let path = output_dir.join(kind.file_name());
        let write_err = |source| DomainError::KeyWrite {
            path: path.clone(),
            source,
        };

        // Ensure output directory exists
        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir).map_err(write_err)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(kind.mode());
        }

        let mut file = options.open(&path).map_err(write_err)?;
        file.write_all(contents).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;

        // The create mode is masked by umask and ignored for existing files
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(kind.mode()))
                .map_err(write_err)?;
        }

        let absolute = std::fs::canonicalize(&path).map_err(write_err)?;
        info!(kind = %kind, path = %absolute.display(), "wrote key file");

        Ok(WrittenKeyFile::new(kind, absolute))
    }
}
