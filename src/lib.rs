#![forbid(unsafe_code)]

//! `synclog` - Thread-safe line logging to one swappable shared sink.
//!
//! Every log statement builds a [`Line`]: the configured prefixes and the
//! severity tag are written when the line starts, values are appended one by
//! one, and the finished line reaches the sink in a single locked write when
//! the line is dropped. Lines from concurrent threads therefore never
//! interleave, and the sink or prefix list can be swapped at any time.
//!
//! # Example
//!
//! ```
//! use synclog::{MemorySink, Registry, Severity};
//!
//! let registry = Registry::new();
//! let sink = MemorySink::new();
//! registry.set_sink(sink.clone());
//!
//! registry.line(Severity::Warning).append("Pi = ").append(3.14159);
//!
//! assert_eq!(sink.contents(), "WARNING: Pi = 3.14159\n");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `synclog` command-line binary

#[macro_use]
mod macros;

// Core modules (always available)
pub mod config;
pub mod error;
pub mod internal;
pub mod level;
pub mod line;
pub mod prefix;
pub mod registry;
pub mod sink;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use level::Severity;
pub use line::{Line, Wide, line, line_with};
pub use prefix::Prefix;
pub use registry::{ReadView, Registry};
pub use sink::{FileSink, MemorySink, Sink, StreamSink};
