//! File sink, the default destination for a hosting program.

use super::Sink;
use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Unbuffered so every completed line reaches the OS in a single append.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Opens `path` for appending, creating it and its parent directories.
    ///
    /// # Errors
    /// Returns the I/O error if a directory cannot be created or the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        Self::open_with(path, true)
    }

    /// Like [`FileSink::open`], but `append = false` truncates an existing file.
    ///
    /// # Errors
    /// Returns the I/O error if a directory cannot be created or the file cannot be opened.
    pub fn open_with(path: impl AsRef<Path>, append: bool) -> Result<Self, crate::Error> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Where this sink writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Sink for FileSink {
    fn is_healthy(&self) -> bool {
        // The handle was opened for writing; it only goes bad if the file vanished underneath it.
        match self.file.metadata() {
            Ok(_) => true,
            Err(e) => {
                internal::warn(
                    "SINK",
                    &format!("{} is not writable: {e}", self.path.display()),
                );
                false
            }
        }
    }
}
