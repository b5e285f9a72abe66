//! Unified error type for all synclog operations.
//!
//! None of these ever escape a log statement. They surface from configuration,
//! sink construction, and severity parsing, which the hosting program runs at
//! startup where it can still react.

/// Error type for synclog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error (opening a file sink, reading a config file).
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// A severity name or raw value outside the five defined levels.
    InvalidSeverity(String),
    /// A prefix generator failed to produce its text.
    Prefix(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidSeverity(s) => write!(f, "invalid severity: {s}"),
            Self::Prefix(s) => write!(f, "prefix generator failed: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
