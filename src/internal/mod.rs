//! Synclog's own diagnostic channel.
//!
//! Failures inside the facility cannot be logged into the sink that failed, so
//! they go to stderr instead. Writes here never fail the caller.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

static REPORTED: AtomicUsize = AtomicUsize::new(0);

/// One diagnostic line without its terminator: `synclog: <kind> [SCOPE] msg`.
#[doc(hidden)]
#[must_use]
pub fn format_diagnostic(kind: &str, scope: &str, msg: &str) -> String {
    format!("synclog: {kind} [{scope}] {msg}")
}

fn report(kind: &str, scope: &str, msg: &str) {
    REPORTED.fetch_add(1, Ordering::Relaxed);
    let _ = writeln!(io::stderr().lock(), "{}", format_diagnostic(kind, scope, msg));
}

/// Non-fatal anomalies such as an unhealthy sink.
pub fn warn(scope: &str, msg: &str) {
    report("warning", scope, msg);
}

/// Failures that disabled output, e.g. a sink that could not be opened.
pub fn error(scope: &str, msg: &str) {
    report("error", scope, msg);
}

/// How many diagnostics this process has emitted so far.
#[must_use]
pub fn reported() -> usize {
    REPORTED.load(Ordering::Relaxed)
}
