use super::seed::Seed;
use std::fmt;
use std::path::PathBuf;

/// What a run generates and where the result goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// Save only the age key pair
    #[default]
    Age,
    /// Save only the SSH key pair
    Ssh,
    /// Save both key pairs
    All,
    /// Print the age identity to stdout, save nothing
    Print,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Ssh => "ssh",
            Self::All => "all",
            Self::Print => "print",
        }
    }

    pub fn saves_ssh(&self) -> bool {
        matches!(self, Self::Ssh | Self::All)
    }

    pub fn saves_age(&self) -> bool {
        matches!(self, Self::Age | Self::All)
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated settings for a single run
#[derive(Debug)]
pub struct KeygenConfig {
    pub seed: Seed,
    pub mode: GenerationMode,
    pub output_dir: PathBuf,
    /// Comment embedded in the OpenSSH key files
    pub comment: String,
}

impl KeygenConfig {
    pub fn new(seed: Seed, mode: GenerationMode) -> Self {
        Self {
            seed,
            mode,
            output_dir: PathBuf::from("."),
            comment: String::new(),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
