use clap::ValueEnum;
use seedkeys::{DomainResult, WrittenKeyFile};
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Report written files, one `<label> saved to: <path>` line each in text mode
pub fn write_saved_files(
    out: &mut impl Write,
    files: &[WrittenKeyFile],
    format: OutputFormat,
) -> DomainResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, files)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for file in files {
                writeln!(out, "{} saved to: {}", file.kind.label(), file.path.display())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedkeys::KeyFileKind;
    use std::path::PathBuf;

    fn files() -> Vec<WrittenKeyFile> {
        vec![
            WrittenKeyFile::new(KeyFileKind::AgePrivate, PathBuf::from("/keys/key_age")),
            WrittenKeyFile::new(KeyFileKind::AgePublic, PathBuf::from("/keys/key_age.pub")),
        ]
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        write_saved_files(&mut out, &files(), OutputFormat::Text).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "age private key saved to: /keys/key_age\nage public key saved to: /keys/key_age.pub\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_saved_files(&mut out, &files(), OutputFormat::Json).unwrap();

        let parsed: Vec<WrittenKeyFile> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, files());
    }
}
