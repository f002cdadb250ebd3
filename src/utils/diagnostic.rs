//! Caret-underlined source excerpts and full error reports

use crate::utils::{Error, Interval};

/// Prompt-like gutter placed before the excerpt in error reports
const REPORT_GUTTER: &str = ">>> ";

/// Render the source lines covered by `interval`, each followed by a line of
/// carets under the covered columns.
///
/// The first source line is prefixed with `gutter`; every caret line is
/// padded by the gutter's width so the carets line up with it. Tabs are
/// removed from the excerpt, which shifts the text left of a tab by one
/// column relative to the carets.
pub fn underline(interval: &Interval, gutter: &str) -> String {
    let pad = gutter.chars().count();
    let first = interval.start.line;
    let last = interval.end.line.max(first);

    let mut out = Vec::new();
    for line_no in first..=last {
        let line = interval.source.line(line_no).unwrap_or("");
        let width = line.chars().count();

        let col_start = if line_no == first { interval.start.column } else { 0 };
        let col_end = if line_no == last { interval.end.column } else { width };
        // zero-width spans still point somewhere
        let carets = col_end.saturating_sub(col_start).max(1);

        let prefix = if line_no == first { gutter.to_string() } else { " ".repeat(pad) };
        out.push(format!("{}{}", prefix, line.replace('\t', "")));
        out.push(format!("{}{}", " ".repeat(pad + col_start), "^".repeat(carets)));
    }
    out.join("\n")
}

impl Error {
    /// The full diagnostic: headline, location, excerpt and (for runtime
    /// errors) the traceback
    pub fn report(&self) -> String {
        let interval = self.interval();
        let mut out = format!(
            "{}:\n    {}\nAt line {} in {}.\n\n{}\n",
            self.kind(),
            self.message(),
            interval.start.line + 1,
            interval.source.label,
            underline(interval, REPORT_GUTTER),
        );

        let traceback = self.traceback();
        if !traceback.is_empty() {
            out.push_str("Traceback (most recent call first):\n");
            for (depth, frame) in traceback.iter().enumerate() {
                out.push_str(&"    ".repeat(depth + 1));
                out.push_str(&frame.to_string());
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Frame, Position, SourceUnit};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_character() {
        let src = SourceUnit::new("<test>", "1 + 2");
        let iv = Interval::new(Position::new(2, 0, 2), Position::new(3, 0, 3), src);
        assert_eq!(underline(&iv, ""), "1 + 2\n  ^");
    }

    #[test]
    fn test_gutter_pads_carets() {
        let src = SourceUnit::new("<test>", "12 * 34");
        let iv = Interval::new(Position::new(5, 0, 5), Position::new(7, 0, 7), src);
        assert_eq!(underline(&iv, ">>> "), ">>> 12 * 34\n         ^^");
    }

    #[test]
    fn test_zero_width_gets_one_caret() {
        let src = SourceUnit::new("<test>", "1 +");
        let iv = Interval::point(Position::new(3, 0, 3), src);
        assert_eq!(underline(&iv, ""), "1 +\n   ^");
    }

    #[test]
    fn test_multi_line_span() {
        let src = SourceUnit::new("<test>", "(1 +\n 22)");
        let iv = Interval::new(Position::new(0, 0, 0), Position::new(9, 1, 4), src);
        assert_eq!(underline(&iv, ""), "(1 +\n^^^^\n 22)\n^^^^");
    }

    #[test]
    fn test_tabs_are_stripped() {
        let src = SourceUnit::new("<test>", "\t7");
        let iv = Interval::new(Position::new(1, 0, 1), Position::new(2, 0, 2), src);
        assert_eq!(underline(&iv, ""), "7\n ^");
    }

    #[test]
    fn test_runtime_report_has_traceback() {
        let src = SourceUnit::new("<stdin>", "5 / 0");
        let iv = Interval::new(Position::new(4, 0, 4), Position::new(5, 0, 5), src);
        let err = Error::Runtime {
            message: "cannot divide by zero".to_string(),
            interval: iv,
            traceback: vec![Frame {
                label: "<stdin>".to_string(),
                line: 1,
                context: "<program>".to_string(),
            }],
        };
        let expected = "Runtime Error:\n    cannot divide by zero\nAt line 1 in <stdin>.\n\n\
                        >>> 5 / 0\n        ^\n\
                        Traceback (most recent call first):\n\
                        \x20   In <stdin>, at line 1, in the context <program>\n";
        assert_eq!(err.report(), expected);
    }

    #[test]
    fn test_syntax_report_has_no_traceback() {
        let src = SourceUnit::new("<stdin>", "(1");
        let iv = Interval::point(Position::new(2, 0, 2), src);
        let report = Error::syntax("missing ')'", iv).report();
        assert!(report.starts_with("Syntax Error:\n    missing ')'\n"));
        assert!(!report.contains("Traceback"));
    }
}
