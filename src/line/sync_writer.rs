//! Per-line adapter over the shared sink.
//!
//! Appends land in a private buffer; the sink only sees the finished line, in
//! one locked write when the adapter is released. That is what keeps lines
//! from different threads from interleaving.

use crate::sink::SharedSink;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

pub struct SyncWriter {
    sink: Arc<SharedSink>,
    buffer: String,
}

impl SyncWriter {
    pub fn new(sink: Arc<SharedSink>) -> Self {
        Self {
            sink,
            buffer: String::new(),
        }
    }

    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Releases without writing anything.
    pub fn abandon(mut self) {
        self.buffer.clear();
    }

    /// Emits the buffered line and releases the sink.
    pub fn finish(self) {
        drop(self);
    }

    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let sink = &self.sink;
        let line = &self.buffer;
        // Write errors and panicking sinks are swallowed: the caller's statement must complete.
        let _ = panic::catch_unwind(AssertUnwindSafe(|| sink.write_line(line)));
        self.buffer.clear();
    }
}

impl Drop for SyncWriter {
    fn drop(&mut self) {
        self.emit();
    }
}
