//! The lazily created default logger. Kept in its own test binary so no other
//! test can configure the process-wide slot first.

use apputils::{Verbosity, global};
use std::sync::Arc;

#[test]
fn first_use_creates_default_logger() {
    assert!(!global::is_initialized());

    // Must not crash without setup; Debug is filtered, Trace (ordinal 4) is printed.
    apputils::debug!("suppressed by default");
    apputils::trace!("emitted by default");
    assert!(global::is_initialized());

    let logger = global::logger();
    assert_eq!(logger.verbosity(), Verbosity::Error);
    assert!(!logger.has_callback());
    assert!(!logger.enabled(Verbosity::Debug));
    assert!(!logger.enabled(Verbosity::Info));
    assert!(!logger.enabled(Verbosity::Warning));
    assert!(logger.enabled(Verbosity::Error));
    assert!(logger.enabled(Verbosity::Trace));

    // Reused, not rebuilt.
    assert!(Arc::ptr_eq(&logger, &global::logger()));
}
