//! Leaf parsers: the only combinators that read from the view directly.

use std::fmt;
use std::rc::Rc;

use regex::Regex;

use crate::outcome::{Expected, Outcome};
use crate::parser::Parser;

/// Match an exact literal string. Succeeds, consuming `s.chars().count()`
/// characters, when the next characters of input equal `s` exactly; a
/// zero-length `s` always succeeds without consuming.
pub fn lit(s: &'static str) -> Parser<&'static str> {
    let len = s.chars().count();
    Parser::new(move |view| {
        if view.peek(len) == s {
            view.consume(len);
            Outcome::success(!s.is_empty(), s)
        } else {
            Outcome::failure(false, Expected::one(format!("{:?}", s)))
        }
    })
}

/// An owned capture of a successful [`regex`] match: the full matched text
/// plus whatever groups the pattern declared, detached from
/// `regex::Captures`'s borrow of the input so it can live inside a
/// `'static` `Outcome<Match>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    text: String,
    groups: Vec<Option<String>>,
}

impl Match {
    /// The full text matched by the pattern.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The text captured by group `i`. Group 0 is the whole match; groups
    /// from 1 are the pattern's parenthesised groups, in order. Returns
    /// `None` for an out-of-range index or a group that did not
    /// participate in the match (e.g. inside an untaken alternation
    /// branch).
    pub fn group(&self, i: usize) -> Option<&str> {
        if i == 0 {
            return Some(&self.text);
        }
        self.groups.get(i - 1)?.as_deref()
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Match a regular expression, anchored at the cursor, via the `regex`
/// crate. The pattern is compiled once, when this function is called, and
/// cached inside the returned `Parser` for every subsequent run.
///
/// On a match, the cursor advances by the whole match's length and the
/// result is a [`Match`] exposing both the full matched text
/// (`.as_str()`) and any capture groups the pattern declared
/// (`.group(i)`), since a grammar that needs to pull a sub-match out of a
/// single regex (e.g. the digits out of a signed-number pattern) must not
/// have to re-parse the matched text with a second pattern.
pub fn regex(pattern: &str) -> Parser<Match> {
    let anchored = format!("^(?:{})", pattern);
    let compiled = Rc::new(Regex::new(&anchored).unwrap_or_else(|e| {
        panic!("invalid regex pattern {:?}: {}", pattern, e);
    }));
    let description = format!("text matching {:?}", pattern);
    Parser::new(move |view| match compiled.captures(view.rest()) {
        Some(caps) => {
            let end = caps.get(0).expect("group 0 always matches").end();
            let groups = (1..caps.len())
                .map(|i| caps.get(i).map(|g| g.as_str().to_string()))
                .collect();
            let text = view.consume_bytes(end).to_string();
            Outcome::success(end > 0, Match { text, groups })
        }
        None => Outcome::failure(false, Expected::one(description.clone())),
    })
}

/// Succeed, zero-width, only at the end of input.
pub fn eof() -> Parser<()> {
    Parser::new(|view| {
        if view.is_at_end() {
            Outcome::success(false, ())
        } else {
            Outcome::failure(false, Expected::one("EOF"))
        }
    })
}

/// Succeed, zero-width, with the current `(line, column)`.
pub fn pos() -> Parser<(usize, usize)> {
    Parser::new(|view| Outcome::success(false, (view.line(), view.column())))
}

/// Always succeed, zero-width, with a fixed value and an empty expected
/// set.
pub fn pure<T: Clone + 'static>(value: T) -> Parser<T> {
    Parser::new(move |_view| Outcome::success(false, value.clone()))
}

/// Always fail, zero-width, with an empty expected set. The identity
/// element for alternative.
pub fn empty<T: 'static>() -> Parser<T> {
    Parser::new(|_view| Outcome::failure(false, Expected::none()))
}
