//! Logging macros. Each one captures the enclosing function with
//! [`call_site!`](crate::call_site), so the console line names the function the
//! macro was written in.
//!
//! `message` is any `Display` value; anything after it is extra data handed to
//! the callback as `&dyn Debug` and never printed on the console.

/// Logs through the process-wide logger.
///
/// ```
/// use apputils::Verbosity;
///
/// apputils::log!(Verbosity::Error, "disk full", "/var", 98);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $message:expr $(, $extra:expr)* $(,)?) => {
        $crate::global::log_at(
            &$message,
            $level,
            &$crate::call_site!(),
            &[$(&$extra as &dyn ::core::fmt::Debug),*],
        )
    };
}

/// Logs through an explicit [`Logger`](crate::Logger).
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $level:expr, $message:expr $(, $extra:expr)* $(,)?) => {
        $logger.log_at(
            &$message,
            $level,
            &$crate::call_site!(),
            &[$(&$extra as &dyn ::core::fmt::Debug),*],
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Trace, $($arg)+)
    };
}
