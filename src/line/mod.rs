//! One log line, from its prefixes to its terminator.
//!
//! A `Line` snapshots the registry when it is built, buffers every append
//! privately and hands the finished text to the sink when it is dropped.
//! Nothing that goes wrong inside it reaches the caller.

mod sync_writer;
mod wide;

pub use wide::Wide;

use crate::internal;
use crate::level::Severity;
use crate::prefix::Prefix;
use crate::registry::Registry;
use std::fmt::{self, Write as _};
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::Arc;
use sync_writer::SyncWriter;

/// An in-flight log line.
///
/// Lives for one statement or scope on one thread; dropping it is what writes
/// the line. Lines built while no valid sink is installed, or whose prefixes
/// failed, hold no writer and silently ignore appends.
pub struct Line {
    writer: Option<SyncWriter>,
    severity: Severity,
    newline: bool,
    /// Not `Send`: a line belongs to the thread that started it.
    _thread_bound: PhantomData<Rc<()>>,
}

impl Line {
    /// Begins a line against `registry`, terminated with a newline.
    pub fn begin(registry: &Registry, severity: Severity) -> Self {
        Self::begin_with(registry, severity, true)
    }

    /// Begins a line against `registry`; `newline = false` leaves the line unterminated.
    pub fn begin_with(registry: &Registry, severity: Severity, newline: bool) -> Self {
        let view = registry.read_view();

        let mut line = Self {
            writer: view.sink().map(|sink| SyncWriter::new(Arc::clone(sink))),
            severity,
            newline,
            _thread_bound: PhantomData,
        };

        if let Some(mut writer) = line.writer.take() {
            match write_header(writer.buffer_mut(), view.prefixes(), severity) {
                Ok(()) => line.writer = Some(writer),
                Err(e) => {
                    internal::error("LINE", &e.to_string());
                    writer.abandon();
                }
            }
        }

        line
    }

    /// Appends `value`'s `Display` output.
    ///
    /// A `Display` impl that errors or panics contributes nothing; the line and
    /// later appends carry on.
    pub fn append<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        self.write_guarded(|buffer| write!(buffer, "{value}"));
        self
    }

    /// Appends pre-built format arguments, e.g. `line.append_fmt(format_args!("{x:.2}"))`.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.write_guarded(|buffer| buffer.write_fmt(args));
        self
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether this line will reach a sink.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    fn write_guarded<F>(&mut self, write: F)
    where
        F: FnOnce(&mut String) -> fmt::Result,
    {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let buffer = writer.buffer_mut();
        let mark = buffer.len();
        let result = panic::catch_unwind(AssertUnwindSafe(|| write(&mut *buffer)));
        if !matches!(result, Ok(Ok(()))) {
            buffer.truncate(mark);
        }
    }
}

/// Prefixes in order, each generated now, then `TAG: `.
fn write_header(
    buffer: &mut String,
    prefixes: &[Prefix],
    severity: Severity,
) -> Result<(), crate::Error> {
    for prefix in prefixes {
        buffer.push_str(&prefix.generate()?);
    }
    buffer.push_str(severity.as_str());
    buffer.push_str(": ");
    Ok(())
}

impl fmt::Write for Line {
    /// Never fails, so `write!` on a line can't short-circuit the caller.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }

    /// Formats the whole `write!` call under the same guard as [`Line::append_fmt`].
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.append_fmt(args);
        Ok(())
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("severity", &self.severity)
            .field("newline", &self.newline)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Line {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if self.newline {
                writer.buffer_mut().push('\n');
            }
            writer.finish();
        }
    }
}

/// Begins a line on the global registry, terminated with a newline.
pub fn line(severity: Severity) -> Line {
    Line::begin(Registry::global(), severity)
}

/// Begins a line on the global registry with an explicit newline choice.
pub fn line_with(severity: Severity, newline: bool) -> Line {
    Line::begin_with(Registry::global(), severity, newline)
}
