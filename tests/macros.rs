//! Tests for the statement macros and the global registry.
//!
//! Everything touching the global registry lives in one test so parallel
//! tests can't reconfigure it underneath each other.

use synclog::{MemorySink, Prefix, Registry, Severity};

#[test]
fn macros_write_through_global_registry() {
    let sink = MemorySink::new();
    Registry::global().set_sink(sink.clone());
    Registry::global().install_prefixes(Vec::<Prefix>::new());

    synclog::log!(Severity::Warning, "Pi = ", 3.14159);
    synclog::debug!("Line ", 1);
    synclog::info!("Line ", 2);
    synclog::warning!();
    synclog::error!("Divide by zero");
    synclog::critical!("Line ", "End",);
    synclog::line_with(Severity::Info, false).append("tail");

    assert_eq!(
        sink.contents(),
        "WARNING: Pi = 3.14159\nDEBUG: Line 1\nINFO: Line 2\nWARNING: \n\
         ERROR: Divide by zero\nCRITICAL: Line End\nINFO: tail"
    );

    Registry::global().clear_sink();
    synclog::info!("after clear");
    assert!(!sink.contents().contains("after clear"));
}

#[test]
fn log_to_targets_explicit_registry() {
    let registry = Registry::new();
    let sink = MemorySink::new();
    registry.set_sink(sink.clone());

    synclog::log_to!(registry, Severity::Error, "code ", 7);
    synclog::log_to!(&registry, Severity::Info);

    assert_eq!(sink.contents(), "ERROR: code 7\nINFO: \n");
}
