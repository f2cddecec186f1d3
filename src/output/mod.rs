//! Where finished console lines go. Stdout is the default; the `Output` trait lets
//! embedders and tests redirect lines without changing how they are formatted.

mod memory;
mod terminal;

pub use memory::MemoryOutput;
pub use terminal::TerminalOutput;

/// `Send + Sync` bounds enable concurrent logging from multiple threads without locks on the trait object.
pub trait Output: Send + Sync {
    /// Appends one already-formatted line (without trailing newline).
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write_line(&self, line: &str) -> Result<(), crate::Error>;

    /// Buffered sinks may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
