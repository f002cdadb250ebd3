//! Error handling for Jimmy Script

use crate::utils::Interval;
use std::fmt;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// One level of a runtime traceback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Label of the source unit executing at this level
    pub label: String,
    /// 1-indexed line
    pub line: usize,
    /// Name of the execution context
    pub context: String,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In {}, at line {}, in the context {}",
            self.label, self.line, self.context
        )
    }
}

/// Interpreter error
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ==================== Tokenizer Errors ====================

    #[error("Lexical Error: {message}")]
    Lexical { message: String, interval: Interval },

    // ==================== Parser Errors ====================

    #[error("Syntax Error: {message}")]
    Syntax { message: String, interval: Interval },

    // ==================== Evaluation Errors ====================

    #[error("Runtime Error: {message}")]
    Runtime {
        message: String,
        interval: Interval,
        /// Innermost context first
        traceback: Vec<Frame>,
    },
}

impl Error {
    pub fn lexical(message: impl Into<String>, interval: Interval) -> Self {
        Self::Lexical {
            message: message.into(),
            interval,
        }
    }

    pub fn syntax(message: impl Into<String>, interval: Interval) -> Self {
        Self::Syntax {
            message: message.into(),
            interval,
        }
    }

    /// Get the interval associated with this error
    pub fn interval(&self) -> &Interval {
        match self {
            Self::Lexical { interval, .. }
            | Self::Syntax { interval, .. }
            | Self::Runtime { interval, .. } => interval,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Lexical { message, .. }
            | Self::Syntax { message, .. }
            | Self::Runtime { message, .. } => message,
        }
    }

    /// Human-readable error category
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lexical { .. } => "Lexical Error",
            Self::Syntax { .. } => "Syntax Error",
            Self::Runtime { .. } => "Runtime Error",
        }
    }

    /// Traceback frames; empty unless this is a runtime error
    pub fn traceback(&self) -> &[Frame] {
        match self {
            Self::Runtime { traceback, .. } => traceback,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Position, SourceUnit};

    fn interval() -> Interval {
        let src = SourceUnit::new("<test>", "1 / 0");
        Interval::new(Position::new(4, 0, 4), Position::new(5, 0, 5), src)
    }

    #[test]
    fn test_headline() {
        let err = Error::syntax("missing ')'", interval());
        assert_eq!(err.to_string(), "Syntax Error: missing ')'");
        assert_eq!(err.kind(), "Syntax Error");
        assert!(err.traceback().is_empty());
    }

    #[test]
    fn test_runtime_accessors() {
        let err = Error::Runtime {
            message: "cannot divide by zero".to_string(),
            interval: interval(),
            traceback: vec![Frame {
                label: "<test>".to_string(),
                line: 1,
                context: "<program>".to_string(),
            }],
        };
        assert_eq!(err.message(), "cannot divide by zero");
        assert_eq!(err.interval().start.offset, 4);
        assert_eq!(
            err.traceback()[0].to_string(),
            "In <test>, at line 1, in the context <program>"
        );
    }
}
