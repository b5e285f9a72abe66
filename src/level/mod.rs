//! Severities stamped onto every line as its tag.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so hosts can compare severities when deciding what to log.
///
/// The enum has exactly five variants, so there is no way to hold a severity
/// whose tag lookup could go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    /// Development-time detail, the default for a bare line.
    #[default]
    Debug = 0,
    /// Normal operational milestones.
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warning = 2,
    /// Failures that prevent an operation from completing.
    Error = 3,
    /// Failures that threaten the whole process.
    Critical = 4,
}

/// Tag text indexed by discriminant.
const TAGS: [&str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

impl Severity {
    /// The tag written after the prefixes, e.g. `WARNING`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        TAGS[self as usize]
    }

    /// Convenience for iteration, used by the CLI demo and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Severity {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self, crate::Error> {
        Self::all()
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| crate::Error::InvalidSeverity(value.to_string()))
    }
}

impl FromStr for Severity {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "critical" | "crit" => Ok(Self::Critical),
            _ => Err(crate::Error::InvalidSeverity(s.to_string())),
        }
    }
}
