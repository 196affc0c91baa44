//! The diagnostic renderer and the top-level error type.

use crate::outcome::Expected;
use crate::view::View;
use std::fmt;
use thiserror::Error;

/// A parse failure, carrying enough information to render the §4.12-style
/// diagnostic and to be inspected programmatically.
#[derive(Debug, Clone, Error)]
#[error("{}", self.render())]
pub struct ParseFailure {
    line: usize,
    column: usize,
    source_line: String,
    unexpected: Unexpected,
    expected: Expected,
}

#[derive(Debug, Clone)]
enum Unexpected {
    Token(String),
    Eof,
}

impl ParseFailure {
    pub(crate) fn at(view: &View, expected: Expected) -> Self {
        let source_line = view.current_line().to_string();
        let unexpected = if view.is_at_end() {
            Unexpected::Eof
        } else {
            Unexpected::Token(view.peek(1).to_string())
        };
        ParseFailure {
            line: view.line(),
            column: view.column(),
            source_line,
            unexpected,
            expected,
        }
    }

    /// The 0-based line of the failure.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 0-based column of the failure.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The set of human-readable descriptions of what could have appeared
    /// at the failure position.
    pub fn expected(&self) -> &Expected {
        &self.expected
    }

    /// Render the full multi-line diagnostic described in §4.12.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let lineno = self.line + 1;
        let gutter = " ".repeat(lineno.to_string().len()) + " | ";
        let _ = writeln!(out, "{}:{}:", lineno, self.column + 1);
        let _ = writeln!(out, "{}", gutter.trim_end());
        let _ = writeln!(out, "{} | {}", lineno, self.source_line);
        let _ = writeln!(out, "{}{}^", gutter, " ".repeat(self.column));
        if self.expected.is_empty() {
            let _ = write!(out, "Parsing failed (no information)");
        } else {
            match &self.unexpected {
                Unexpected::Token(t) => {
                    let _ = writeln!(out, "unexpected {:?}", t);
                }
                Unexpected::Eof => {
                    let _ = writeln!(out, "unexpected EOF");
                }
            }
            let _ = write!(out, "expected {}", self.expected);
        }
        out
    }
}

// `write!`/`writeln!` need `fmt::Write` in scope for `String`.
use fmt::Write;
