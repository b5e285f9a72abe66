//! TOML configuration: where lines go and what is stamped in front of them.
//!
//! Applying a config is the hosting program's startup sequence: open the sink,
//! build the prefix list, install both into a registry.

mod structs;

pub use structs::{PrefixConfig, SinkConfig};

use crate::internal;
use crate::prefix::{self, Prefix};
use crate::registry::Registry;
use crate::sink::{FileSink, Sink, StreamSink};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination selected by `[sink] kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    File,
    Stdout,
    Stderr,
    None,
}

/// A completely empty config file must still produce a working setup:
/// `#[serde(default)]` on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub sink: SinkConfig,
    pub prefix: PrefixConfig,
}

impl Config {
    /// Loads the config from the default location, falling back to defaults if it doesn't exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads the config from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text directly.
    ///
    /// # Errors
    /// Returns `Error::ConfigParse` on malformed TOML or mistyped fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/synclog/synclog.toml`, e.g. `~/.config/synclog/synclog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("synclog").join("synclog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown kinds disable output rather than guessing a destination.
    #[must_use]
    pub fn parse_sink_kind(&self) -> SinkKind {
        match self.sink.kind.to_lowercase().as_str() {
            "file" => SinkKind::File,
            "stdout" => SinkKind::Stdout,
            "stderr" => SinkKind::Stderr,
            "none" | "off" => SinkKind::None,
            other => {
                internal::warn("CONFIG", &format!("Unknown sink kind: {other}"));
                SinkKind::None
            }
        }
    }

    /// Sink file path with `~` and environment variables expanded.
    #[must_use]
    pub fn sink_path(&self) -> PathBuf {
        let expanded = shellexpand::full(&self.sink.path)
            .unwrap_or_else(|_| shellexpand::tilde(&self.sink.path));
        PathBuf::from(expanded.as_ref())
    }

    /// Opens the configured destination; `Ok(None)` means output is disabled.
    ///
    /// # Errors
    /// I/O errors from opening the log file.
    pub fn build_sink(&self) -> Result<Option<Box<dyn Sink>>, crate::Error> {
        let sink: Box<dyn Sink> = match self.parse_sink_kind() {
            SinkKind::File => Box::new(FileSink::open_with(self.sink_path(), self.sink.append)?),
            SinkKind::Stdout => Box::new(StreamSink::stdout()),
            SinkKind::Stderr => Box::new(StreamSink::stderr()),
            SinkKind::None => return Ok(None),
        };
        Ok(Some(sink))
    }

    /// Enabled prefixes in line order.
    #[must_use]
    pub fn build_prefixes(&self) -> Vec<Prefix> {
        let mut prefixes = Vec::new();
        if !self.prefix.text.is_empty() {
            prefixes.push(prefix::text(self.prefix.text.clone()));
        }
        if self.prefix.timestamp {
            prefixes.push(prefix::timestamp(self.prefix.timestamp_format.clone()));
        }
        if self.prefix.thread {
            prefixes.push(prefix::thread_name());
        }
        prefixes
    }

    /// Installs prefixes and sink into `registry`.
    ///
    /// Never fails: a sink that cannot be opened is reported on the diagnostic
    /// channel and output is disabled.
    pub fn apply(&self, registry: &Registry) {
        registry.install_prefixes(self.build_prefixes());

        let sink = match self.build_sink() {
            Ok(sink) => sink,
            Err(e) => {
                internal::error(
                    "CONFIG",
                    &format!("Failed to open {}: {e}", self.sink_path().display()),
                );
                None
            }
        };
        registry.install_sink(sink);
    }
}
