//! Execution contexts, used to build runtime tracebacks

use crate::utils::{Error, Frame, Interval};

/// Name of the outermost context of every submission
pub const PROGRAM_CONTEXT: &str = "<program>";

/// Where a piece of code runs.
///
/// Contexts form a chain from the innermost one out to the program; each
/// nested context remembers the interval it was entered from.
#[derive(Debug, Clone)]
pub struct ExecutionContext<'a> {
    pub name: String,
    pub parent: Option<&'a ExecutionContext<'a>>,
    pub parent_interval: Option<Interval>,
}

impl ExecutionContext<'static> {
    /// A top-level context
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            parent_interval: None,
        }
    }
}

impl<'a> ExecutionContext<'a> {
    /// A context entered from `entry` inside `self`
    pub fn nested(&'a self, name: impl Into<String>, entry: Interval) -> ExecutionContext<'a> {
        ExecutionContext {
            name: name.into(),
            parent: Some(self),
            parent_interval: Some(entry),
        }
    }

    /// Frames from this context outward, starting at `interval`
    pub fn traceback(&self, interval: &Interval) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut at = interval;
        let mut current = Some(self);

        while let Some(ctx) = current {
            frames.push(Frame {
                label: at.source.label.clone(),
                line: at.start.line + 1,
                context: ctx.name.clone(),
            });
            if let Some(entry) = &ctx.parent_interval {
                at = entry;
            }
            current = ctx.parent;
        }
        frames
    }

    /// A runtime error raised in this context
    pub fn error(&self, message: impl Into<String>, interval: Interval) -> Error {
        Error::Runtime {
            message: message.into(),
            traceback: self.traceback(&interval),
            interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Position, SourceUnit};

    fn line(n: usize) -> Interval {
        let src = SourceUnit::new("script.jim", "a\nb\nc\nd");
        Interval::point(Position::new(n * 2, n, 0), src)
    }

    #[test]
    fn test_root_traceback() {
        let root = ExecutionContext::root(PROGRAM_CONTEXT);
        let frames = root.traceback(&line(2));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].line, 3);
        assert_eq!(frames[0].context, "<program>");
        assert_eq!(frames[0].label, "script.jim");
    }

    #[test]
    fn test_nested_traceback_is_innermost_first() {
        let root = ExecutionContext::root(PROGRAM_CONTEXT);
        let outer = root.nested("outer", line(0));
        let inner = outer.nested("inner", line(1));

        let frames = inner.traceback(&line(3));
        let summary: Vec<(usize, &str)> = frames
            .iter()
            .map(|f| (f.line, f.context.as_str()))
            .collect();
        assert_eq!(summary, vec![(4, "inner"), (2, "outer"), (1, "<program>")]);
    }

    #[test]
    fn test_error_carries_traceback() {
        let root = ExecutionContext::root(PROGRAM_CONTEXT);
        let err = root.error("unknown identifier 'x'", line(0));
        assert_eq!(err.kind(), "Runtime Error");
        assert_eq!(err.traceback().len(), 1);
    }
}
