//! `aoccy`: a small, committed-by-default parser combinator library.
//!
//! A grammar is built as an ordinary value, a tree of [`Parser`](parser::Parser)
//! values produced by [primitives](primitive) and combined with the operator
//! surface on `Parser<T>` (sequence, alternative, repetition, map, bind,
//! label, lookahead, commit). Running the resulting parser against an input
//! string with [`Parser::parse_text`](parser::Parser::parse_text) yields
//! either a typed value or a [`ParseFailure`](error::ParseFailure) pointing
//! at a precise source location with the set of tokens the parser would
//! have accepted there.
//!
//! The defining discipline of this crate is described in the module docs
//! for [`parser`]: alternatives are committed by default once a branch has
//! consumed input, and [`parser::cp`] is the sole supported escape hatch
//! back into backtracking.

/// The four-field parse outcome and the expected-token set.
pub mod outcome;
/// A cursor over an input string tracking byte offset, line, and column.
pub mod view;
/// The diagnostic renderer and the top-level error type.
pub mod error;
/// The `Parser<T>` value and its operator/combinator surface.
pub mod parser;
/// Primitive parsers: literal, regex, eof, pos, pure, empty.
pub mod primitive;
/// Grammar-builder sugar: lexemes, symbols, and separated lists.
pub mod combinator;

pub use crate::error::ParseFailure;
pub use crate::outcome::{Expected, Outcome};
pub use crate::parser::{cp, defer, lookahead, Parser};
pub use crate::view::{Pos, View};

/// Commonly used functions and types, meant to be glob-imported.
///
/// ```
/// use aoccy::prelude::*;
///
/// let greeting = lit("hello") << regex(r"\s+").map(|_| ());
/// assert_eq!(greeting.parse_text("hello   ").unwrap(), "hello");
/// ```
pub mod prelude {
    pub use crate::combinator::{lexeme_gen, sep_by, sep_end_by, symbol_gen};
    pub use crate::error::ParseFailure;
    pub use crate::primitive::{empty, eof, lit, pos, pure, regex, Match};
    pub use crate::{cp, defer, lookahead, Parser};
}
