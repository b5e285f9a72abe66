//! A file is the usual destination, but tests and embedders need somewhere else
//! to put lines. The `Sink` trait lets any writable text destination stand in.

mod file;
mod memory;
mod stream;

pub use file::FileSink;
pub use memory::MemorySink;
pub use stream::StreamSink;

use parking_lot::Mutex;
use std::io::{self, Write};

/// Writable text destination owned by the registry while installed.
///
/// Release on disposal is plain `Drop`: closing a file sink happens when the
/// last line that captured it finishes.
pub trait Sink: Write + Send {
    /// Sampled once at install time; a sink that reports `false` is marked
    /// invalid and every later line drops silently.
    fn is_healthy(&self) -> bool {
        true
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn is_healthy(&self) -> bool {
        (**self).is_healthy()
    }
}

/// The installed sink behind the mutex that serializes whole lines.
///
/// Lines hold an `Arc` to this, never to the registry, so finishing a line
/// does not need the registry lock.
pub struct SharedSink {
    inner: Mutex<Box<dyn Sink>>,
}

impl SharedSink {
    pub(crate) fn new(sink: Box<dyn Sink>) -> Self {
        Self {
            inner: Mutex::new(sink),
        }
    }

    pub(crate) fn is_healthy(&self) -> bool {
        self.inner.lock().is_healthy()
    }

    /// One lock, one `write_all`: another line can never land inside this one.
    pub(crate) fn write_line(&self, line: &str) -> io::Result<()> {
        let mut sink = self.inner.lock();
        sink.write_all(line.as_bytes())?;
        sink.flush()
    }
}

impl Drop for SharedSink {
    fn drop(&mut self) {
        let _ = self.inner.get_mut().flush();
    }
}
