//! Identity of the code that issued a log call.
//!
//! Rust has no runtime frame walking in std, so the caller is resolved where the
//! call is written: [`call_site!`](crate::call_site) expands inside the calling
//! function and names it through `core::any::type_name` of a local item. The
//! reported function is always the *direct* caller of the logging call, never the
//! logging machinery and never an ancestor further up the chain.
//!
//! Function-form entry points use `#[track_caller]` instead. That yields the
//! file and line but no function name, so those sites render as `file:line`.
//! Only a site with neither renders as `unknown`.
//! Wrapping helpers that should be transparent (the equivalent of skipping extra
//! frames) can add `#[track_caller]` themselves.

use std::fmt;
use std::panic::Location;

/// Rendered in place of a function name when none could be resolved.
pub const UNKNOWN: &str = "unknown";

/// Where a log call came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    function: Option<&'static str>,
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Builds a site from the raw `type_name` of a probe item declared inside the
    /// calling function. Used by [`call_site!`](crate::call_site).
    #[doc(hidden)]
    #[must_use]
    pub fn from_probe(probe: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function: function_from_probe(probe),
            file,
            line,
        }
    }

    /// File and line of whoever called the `#[track_caller]` chain; no function name.
    #[must_use]
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            function: None,
            file: location.file(),
            line: location.line(),
        }
    }

    /// Placeholder for callers that couldn't be resolved.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            function: None,
            file: UNKNOWN,
            line: 0,
        }
    }

    /// Fully qualified function path, or [`UNKNOWN`].
    #[must_use]
    pub fn function(&self) -> &'static str {
        self.function.unwrap_or(UNKNOWN)
    }

    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Whether a function name was captured.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.function.is_some()
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Function path when resolved, else `file:line`, else [`UNKNOWN`].
impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => f.write_str(function),
            None if self.line > 0 => write!(f, "{}:{}", self.file, self.line),
            None => f.write_str(UNKNOWN),
        }
    }
}

/// Strips the probe's own name and any closure/async segments, leaving the
/// path of the named function that contains the call.
fn function_from_probe(probe: &'static str) -> Option<&'static str> {
    let mut name = probe.rsplit_once("::").map(|(path, _)| path)?;
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    if name.is_empty() { None } else { Some(name) }
}

/// Captures the [`CallSite`] of the function this macro is written in.
///
/// ```
/// fn handler() -> apputils::CallSite {
///     apputils::call_site!()
/// }
///
/// assert!(handler().function().ends_with("::handler"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __probe() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::from_probe(__type_name_of(__probe), file!(), line!())
    }};
}
