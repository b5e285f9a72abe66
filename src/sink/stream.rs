//! Any `Write + Send` as a sink, stdout and stderr being the common cases.

use super::Sink;
use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

/// Wraps an arbitrary writer; always reports healthy.
pub struct StreamSink<W> {
    writer: W,
}

impl<W: Write + Send> StreamSink<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Gives the writer back, e.g. to inspect a `Vec<u8>` after uninstalling.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StreamSink<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamSink<Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> fmt::Debug for StreamSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSink").finish_non_exhaustive()
    }
}

impl<W: Write + Send> Write for StreamSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {}
