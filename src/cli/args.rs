use crate::cli::output::OutputFormat;
use clap::{ArgAction, ArgGroup, Parser};
use seedkeys::{DomainError, DomainResult, GenerationMode, KeygenConfig, Seed};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "key_gen")]
#[command(about = "Derive an Ed25519 SSH key pair from a password and generate an age key pair", long_about = None)]
#[command(version)]
#[command(override_usage = "key_gen [OPTIONS] <PASSWORD>")]
#[command(after_help = "Without options, the program saves only age keys.")]
#[command(group(ArgGroup::new("mode").args(["ssh", "all", "print"]).multiple(false)))]
pub struct Cli {
    /// Save only SSH keys
    #[arg(long)]
    pub ssh: bool,

    /// Save all keys (SSH and age)
    #[arg(long)]
    pub all: bool,

    /// Only show the age private key (not saved)
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Directory the key files are written to
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Comment stored in the SSH key files
    #[arg(long)]
    pub comment: Option<String>,

    /// Report format for written files
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Password the SSH key is derived from (any bytes, not only UTF-8)
    #[arg(value_name = "PASSWORD")]
    pub passwords: Vec<OsString>,
}

impl Cli {
    pub fn mode(&self) -> GenerationMode {
        if self.ssh {
            GenerationMode::Ssh
        } else if self.all {
            GenerationMode::All
        } else if self.print {
            GenerationMode::Print
        } else {
            GenerationMode::Age
        }
    }

    /// Validate the positional arguments and build the run configuration
    pub fn into_config(self) -> DomainResult<KeygenConfig> {
        let mode = self.mode();
        let mut passwords = self.passwords;

        let password = match passwords.len() {
            1 => passwords.remove(0),
            0 => return Err(DomainError::Usage("password required".to_string())),
            n => {
                return Err(DomainError::Usage(format!(
                    "expected exactly one password, got {}",
                    n
                )))
            }
        };

        Ok(KeygenConfig::new(Seed::from_os_str(&password), mode)
            .with_output_dir(self.output_dir)
            .with_comment(self.comment.unwrap_or_default()))
    }
}
