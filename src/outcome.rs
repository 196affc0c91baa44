//! The uniform four-field result every parser produces.

use std::collections::BTreeSet;
use std::fmt;

/// A small, order-insensitive, deduplicating set of human-readable
/// descriptions of tokens a parser would have accepted.
///
/// Backed by a [`BTreeSet`] so that rendering the set (see
/// [`crate::error`]) is deterministic without a separate sort pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expected(BTreeSet<String>);

impl Expected {
    /// The empty expected set.
    pub fn none() -> Self {
        Expected(BTreeSet::new())
    }

    /// A set containing a single description.
    pub fn one(desc: impl Into<String>) -> Self {
        let mut set = BTreeSet::new();
        set.insert(desc.into());
        Expected(set)
    }

    /// The union of two expected sets.
    pub fn union(mut self, other: Expected) -> Self {
        self.0.extend(other.0);
        self
    }

    /// `true` if no descriptions are recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the descriptions in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Replace the contents of this set with a single label, used by
    /// [`crate::parser::Parser::label`].
    pub(crate) fn relabel(&mut self, label: &str) {
        self.0.clear();
        self.0.insert(label.to_string());
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&str> = self.iter().collect();
        match items.len() {
            0 => Ok(()),
            1 => write!(f, "{}", items[0]),
            2 => write!(f, "{} or {}", items[0], items[1]),
            n => {
                write!(f, "{}", items[..n - 1].join(", "))?;
                write!(f, " or {}", items[n - 1])
            }
        }
    }
}

impl FromIterator<String> for Expected {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Expected(iter.into_iter().collect())
    }
}

/// The uniform value returned by every parser invocation.
///
/// An `Outcome<T>` is a plain record rather than a `Result<T, E>`: on
/// failure `result` is `None` but `expected` is still populated, and on a
/// *committed* failure (`consumed == true`) `expected` is no longer
/// meaningful to the caller at all. Neither state maps cleanly onto a
/// two-variant sum type, so the four fields are tracked independently.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub succeeded: bool,
    pub consumed: bool,
    pub result: Option<T>,
    pub expected: Expected,
}

impl<T> Outcome<T> {
    /// Build a successful outcome.
    pub fn success(consumed: bool, result: T) -> Self {
        Outcome {
            succeeded: true,
            consumed,
            result: Some(result),
            expected: Expected::none(),
        }
    }

    /// Build a successful, zero-width outcome with an expected set (used
    /// by primitives like [`crate::primitive::pos`] that never fail but
    /// still want to describe what else could appear there).
    pub fn success_with_expected(consumed: bool, result: T, expected: Expected) -> Self {
        Outcome {
            succeeded: true,
            consumed,
            result: Some(result),
            expected,
        }
    }

    /// Build a failing outcome.
    pub fn failure(consumed: bool, expected: Expected) -> Self {
        Outcome {
            succeeded: false,
            consumed,
            result: None,
            expected,
        }
    }

    /// Map the success value, leaving `consumed`/`expected` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            succeeded: self.succeeded,
            consumed: self.consumed,
            result: self.result.map(f),
            expected: self.expected,
        }
    }

    /// Rebuild a failing outcome of a different result type, carrying over
    /// `consumed`/`expected`. Panics if this outcome succeeded; callers
    /// must check `succeeded` first.
    pub fn into_failure<U>(self) -> Outcome<U> {
        assert!(!self.succeeded, "into_failure called on a successful outcome");
        Outcome {
            succeeded: false,
            consumed: self.consumed,
            result: None,
            expected: self.expected,
        }
    }
}
