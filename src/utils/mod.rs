//! Utility module

mod span;
mod error;
mod diagnostic;

pub use span::{Interval, Position, SourceUnit};
pub use error::{Error, Frame, Result};
pub use diagnostic::underline;
