//! Console line rendering helpers: level colors and timestamps.

mod color;
mod timestamp;

pub use color::{Color, colorize};
pub use timestamp::{DateFormat, RFC3339};
