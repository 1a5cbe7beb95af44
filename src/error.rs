use std::path::PathBuf;
use thiserror::Error;

/// Host-side failures: reading, parsing and configuring a scan.
///
/// The extraction core never produces these. A class that is not a component
/// simply yields no `Component`.
#[derive(Debug, Error)]
pub enum LitError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file type: {0}")]
    UnsupportedLanguage(String),

    #[error("Parser language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Failed to parse file: {}", .0.display())]
    Parse(PathBuf),

    #[error("File too large: {} ({size} bytes, limit {limit})", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid detection pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid ignore pattern: {0}")]
    Glob(#[from] globset::Error),
}

impl LitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LitError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LitError>;
