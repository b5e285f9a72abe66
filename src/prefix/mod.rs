//! Text fragments stamped in front of every line, evaluated fresh per line.
//!
//! A prefix is any zero-argument producer of text. The registry owns the
//! producers once installed, so they capture by value rather than borrowing
//! caller state that may go out of scope.

use chrono::Local;
use std::fmt::{self, Write as _};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Matches the date/time layout used by the bundled demo: `17-10-2026 14:03:59 `.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %X ";

type Producer = dyn Fn() -> Result<String, String> + Send + Sync;

/// Opaque, cloneable text producer.
#[derive(Clone)]
pub struct Prefix {
    producer: Arc<Producer>,
}

impl Prefix {
    /// Wraps an infallible producer.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(move || Ok(f())),
        }
    }

    /// Wraps a producer that can fail; an `Err` turns the line it was building into a no-op.
    pub fn try_new<F, E>(f: F) -> Self
    where
        F: Fn() -> Result<String, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        Self {
            producer: Arc::new(move || f().map_err(|e| e.to_string())),
        }
    }

    /// Runs the producer. A panic inside it is caught and reported as an error
    /// so it cannot unwind through the log statement.
    ///
    /// # Errors
    /// `Error::Prefix` when the producer returns an error or panics.
    pub fn generate(&self) -> Result<String, crate::Error> {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.producer)())) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(msg)) => Err(crate::Error::Prefix(msg)),
            Err(_) => Err(crate::Error::Prefix("generator panicked".to_string())),
        }
    }
}

impl<F> From<F> for Prefix
where
    F: Fn() -> String + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prefix").finish_non_exhaustive()
    }
}

/// Local time rendered with a strftime `format`.
///
/// A malformed format string fails the prefix instead of panicking.
pub fn timestamp(format: impl Into<String>) -> Prefix {
    let format = format.into();
    Prefix::try_new(move || {
        let mut out = String::new();
        write!(out, "{}", Local::now().format(&format))
            .map_err(|_| format!("invalid timestamp format: {format:?}"))?;
        Ok::<_, String>(out)
    })
}

/// The same literal on every line.
pub fn text(literal: impl Into<String>) -> Prefix {
    let literal = literal.into();
    Prefix::new(move || literal.clone())
}

/// `[name] ` of the thread building the line, or `[ThreadId(N)] ` for unnamed threads.
#[must_use]
pub fn thread_name() -> Prefix {
    Prefix::new(|| {
        let current = std::thread::current();
        current.name().map_or_else(
            || format!("[{:?}] ", current.id()),
            |name| format!("[{name}] "),
        )
    })
}
