//! Process-wide logger for code that has no [`Logger`] handed to it.
//!
//! Applications normally build a [`Logger`] at startup and either pass it down or
//! [`install`] it here. If nothing is installed, the first access creates the
//! default logger (threshold `Error`, no callback, RFC 3339 dates, stdout) and
//! keeps it for every later call.
//!
//! Installing replaces the whole `Arc<Logger>` at once; concurrent installs are
//! last-writer-wins. A log call clones the current `Arc` before doing anything,
//! so it sees one consistent configuration even if a swap happens mid-call.

use crate::caller::CallSite;
use crate::level::Verbosity;
use crate::logger::{LogCallback, Logger, LoggerOptions};
use std::fmt;
use std::panic::Location;
use std::sync::{Arc, PoisonError, RwLock};

static CURRENT: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// Replaces the process-wide logger with a stdout logger built from the three inputs.
pub fn setup(
    verbosity: Verbosity,
    callback: Option<Arc<dyn LogCallback>>,
    options: LoggerOptions,
) {
    install(Logger::new(verbosity, callback, options));
}

/// Replaces the process-wide logger.
pub fn install(logger: Logger) {
    install_shared(Arc::new(logger));
}

/// Replaces the process-wide logger with one the caller also keeps a handle to.
pub fn install_shared(logger: Arc<Logger>) {
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Some(logger);
}

/// Current logger, creating the default on first use.
#[must_use]
pub fn logger() -> Arc<Logger> {
    let current = CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    if let Some(logger) = current {
        return logger;
    }

    let mut slot = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(slot.get_or_insert_with(|| Arc::new(Logger::default())))
}

/// Whether anything (explicit setup or the lazy default) has populated the slot.
#[must_use]
pub fn is_initialized() -> bool {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Logs through the process-wide logger with an already-resolved caller.
pub fn log_at(
    message: &dyn fmt::Display,
    level: Verbosity,
    caller: &CallSite,
    extra: &[&dyn fmt::Debug],
) {
    logger().log_at(message, level, caller, extra);
}

/// Function form; the caller renders as `file:line`. See [`Logger::log`].
#[track_caller]
pub fn log(message: &dyn fmt::Display, level: Verbosity, extra: &[&dyn fmt::Debug]) {
    let caller = CallSite::from_location(Location::caller());
    log_at(message, level, &caller, extra);
}
