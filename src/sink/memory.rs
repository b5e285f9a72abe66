//! In-memory sink that lets tests and embedders read back exactly what was logged.

use super::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Clones share one buffer: install one clone, keep another to inspect.
#[derive(Debug, Clone)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
    healthy: bool,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    /// Empty, healthy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
            healthy: true,
        }
    }

    /// A sink that reports itself unhealthy, so installing it disables output.
    #[must_use]
    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            ..Self::new()
        }
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Drops everything written so far.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for MemorySink {
    fn is_healthy(&self) -> bool {
        self.healthy
    }
}
