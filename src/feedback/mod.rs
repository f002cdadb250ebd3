//! Structured Feedback Module
//!
//! Machine-readable output for tools driving the interpreter:
//! - JSON error reports with locations and tracebacks
//! - A per-submission result record

use serde::{Deserialize, Serialize};

use crate::runtime::Number;
use crate::utils::{Error, Frame, Interval};

// ==================== Structured Error Report ====================

/// A structured error report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code (e.g., "E0002")
    pub code: String,

    /// Error category ("Syntax Error", ...)
    pub kind: String,

    /// Human-readable message
    pub message: String,

    /// Location information
    pub location: Location,

    /// Innermost context first; empty for lexical and syntax errors
    pub traceback: Vec<TraceFrame>,

    /// Suggested fixes
    pub suggestions: Vec<String>,
}

/// 1-indexed source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl From<&Interval> for Location {
    fn from(interval: &Interval) -> Self {
        Self {
            file: interval.source.label.clone(),
            line: interval.start.line + 1,
            column: interval.start.column + 1,
            end_line: interval.end.line + 1,
            end_column: interval.end.column + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceFrame {
    pub file: String,
    pub line: usize,
    pub context: String,
}

impl From<&Frame> for TraceFrame {
    fn from(frame: &Frame) -> Self {
        Self {
            file: frame.label.clone(),
            line: frame.line,
            context: frame.context.clone(),
        }
    }
}

impl ErrorReport {
    /// Create a report from an interpreter error
    pub fn from_error(error: &Error) -> Self {
        let code = match error {
            Error::Lexical { .. } => "E0001",
            Error::Syntax { .. } => "E0002",
            Error::Runtime { .. } => "E0003",
        };

        Self {
            code: code.to_string(),
            kind: error.kind().to_string(),
            message: error.message().to_string(),
            location: Location::from(error.interval()),
            traceback: error.traceback().iter().map(TraceFrame::from).collect(),
            suggestions: suggestions_for(error),
        }
    }

    /// Output as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn suggestions_for(error: &Error) -> Vec<String> {
    let message = error.message();
    let mut suggestions = Vec::new();

    if message.starts_with("unknown identifier") {
        let name = error.interval().text();
        suggestions.push(format!("Bind it first, e.g. `let {} = 0`", name));
    } else if message == "missing ')'" {
        suggestions.push("Close the bracket opened earlier".to_string());
    } else if message == "assignment operator expected after identifier" {
        suggestions.push("Use one of `=`, `<-` or `be`".to_string());
    } else if message == "cannot divide by zero" {
        suggestions.push("Check the divisor before dividing".to_string());
    }

    suggestions
}

// ==================== Evaluation Feedback ====================

/// Outcome of one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationFeedback {
    pub success: bool,
    pub source: String,
    /// Rendered result, present on success
    pub value: Option<String>,
    pub diagnostics: Vec<ErrorReport>,
}

impl EvaluationFeedback {
    pub fn from_result(source: &str, result: &Result<Number, Error>) -> Self {
        match result {
            Ok(value) => Self {
                success: true,
                source: source.to_string(),
                value: Some(value.to_string()),
                diagnostics: vec![],
            },
            Err(error) => Self {
                success: false,
                source: source.to_string(),
                value: None,
                diagnostics: vec![ErrorReport::from_error(error)],
            },
        }
    }

    /// Output as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Output as compact JSON (for programmatic use)
    pub fn to_json_compact(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
