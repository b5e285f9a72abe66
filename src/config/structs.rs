//! Configuration struct definitions.

use serde::Deserialize;

/// Sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Destination kind (file, stdout, stderr, none).
    pub kind: String,
    /// Log file path, `~` allowed. Only read for `kind = "file"`.
    pub path: String,
    /// Append to an existing file instead of truncating it.
    pub append: bool,
}

impl Default for SinkConfig {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("", "", "synclog").map_or_else(
            || "logs/synclog.log".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .join("synclog.log")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            kind: "file".to_string(),
            path,
            append: true,
        }
    }
}

/// Prefix configuration. Enabled prefixes appear in field order: text, timestamp, thread.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrefixConfig {
    /// Literal text in front of every line; empty disables it.
    pub text: String,
    /// Stamp local date/time on every line.
    pub timestamp: bool,
    /// Timestamp format (strftime).
    pub timestamp_format: String,
    /// Stamp the name of the logging thread.
    pub thread: bool,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            timestamp: true,
            timestamp_format: crate::prefix::DEFAULT_TIMESTAMP_FORMAT.to_string(),
            thread: false,
        }
    }
}
