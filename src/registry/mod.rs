//! Process-wide sink and prefix configuration.
//!
//! Reads happen once per line and vastly outnumber writes (typically a single
//! install at startup), so the three fields sit together behind one
//! reader-optimised `RwLock` and are only ever replaced as a unit.

use crate::level::Severity;
use crate::line::Line;
use crate::prefix::Prefix;
use crate::sink::{SharedSink, Sink};
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

struct State {
    sink: Option<Arc<SharedSink>>,
    /// Only true while `sink` is `Some` and reported healthy when installed.
    sink_valid: bool,
    prefixes: Arc<[Prefix]>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            sink: None,
            sink_valid: false,
            prefixes: Arc::from(Vec::new()),
        }
    }
}

/// Snapshot a line takes at construction; later reconfiguration does not affect it.
#[derive(Clone)]
pub struct ReadView {
    sink: Option<Arc<SharedSink>>,
    valid: bool,
    prefixes: Arc<[Prefix]>,
}

impl ReadView {
    /// The captured sink, but only when it was valid at capture time.
    #[must_use]
    pub fn sink(&self) -> Option<&Arc<SharedSink>> {
        self.sink.as_ref().filter(|_| self.valid)
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }
}

/// Holds the single active sink and the ordered prefix list.
///
/// Tests build their own with [`Registry::new`]; hosting programs normally use
/// [`Registry::global`].
#[derive(Default)]
pub struct Registry {
    state: RwLock<State>,
}

impl Registry {
    /// Starts with no sink, so every line is a no-op until one is installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry. Created on first use and never dropped, so
    /// it stays usable from other statics' teardown.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Replaces the sink; `None` disables output.
    ///
    /// Health is sampled once here, not per write. An unhealthy sink is kept
    /// but marked invalid, and lines drop silently. The previous sink is
    /// released once the last line that captured it finishes.
    pub fn install_sink(&self, sink: Option<Box<dyn Sink>>) {
        let sink = sink.map(|s| Arc::new(SharedSink::new(s)));
        let valid = sink.as_ref().is_some_and(|s| s.is_healthy());

        let previous = {
            let mut state = self.state.write();
            state.sink_valid = valid;
            std::mem::replace(&mut state.sink, sink)
        };

        // Flushing/closing the old sink must not happen under the lock.
        drop(previous);
    }

    /// Shorthand for `install_sink(Some(Box::new(sink)))`.
    pub fn set_sink(&self, sink: impl Sink + 'static) {
        self.install_sink(Some(Box::new(sink)));
    }

    /// Shorthand for `install_sink(None)`.
    pub fn clear_sink(&self) {
        self.install_sink(None);
    }

    /// Replaces the whole prefix list; order is the order prefixes appear on each line.
    pub fn install_prefixes<I>(&self, prefixes: I)
    where
        I: IntoIterator<Item = Prefix>,
    {
        let prefixes: Arc<[Prefix]> = prefixes.into_iter().collect();
        let previous = std::mem::replace(&mut self.state.write().prefixes, prefixes);
        drop(previous);
    }

    /// Shared-lock snapshot of sink, validity and prefixes, all from the same configuration.
    #[must_use]
    pub fn read_view(&self) -> ReadView {
        let state = self.state.read();
        ReadView {
            sink: state.sink.clone(),
            valid: state.sink_valid,
            prefixes: Arc::clone(&state.prefixes),
        }
    }

    /// Whether lines constructed now would produce output.
    #[must_use]
    pub fn is_sink_valid(&self) -> bool {
        self.state.read().sink_valid
    }

    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.state.read().prefixes.len()
    }

    /// Begins a line bound to this registry, terminated with a newline.
    pub fn line(&self, severity: Severity) -> Line {
        Line::begin(self, severity)
    }

    /// Begins a line bound to this registry with an explicit newline choice.
    pub fn line_with(&self, severity: Severity, newline: bool) -> Line {
        Line::begin_with(self, severity, newline)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Registry")
            .field("sink_installed", &state.sink.is_some())
            .field("sink_valid", &state.sink_valid)
            .field("prefixes", &state.prefixes.len())
            .finish()
    }
}
