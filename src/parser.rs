//! The `Parser<T>` value and its operator surface.

use std::ops::{BitAnd, BitOr, BitXor, Not, RangeBounds, Shl, Shr};
use std::rc::Rc;

use crate::error::ParseFailure;
use crate::outcome::{Expected, Outcome};
use crate::view::View;

/// An immutable, cheaply-clonable parser producing a `T` on success.
///
/// A `Parser<T>` is nothing more than a reference-counted closure from a
/// [`View`] to an [`Outcome<T>`]. Building a grammar is just building a
/// tree of these values; running it is a single call to [`Parser::run`]
/// (or, at the top level, [`Parser::parse_text`]).
pub struct Parser<T> {
    run: Rc<dyn Fn(&mut View) -> Outcome<T>>,
}

// A manual impl, rather than `#[derive(Clone)]`, because the derive macro
// would add a spurious `T: Clone` bound: cloning a `Parser<T>` only clones
// the `Rc`, never a `T`.
impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run: self.run.clone(),
        }
    }
}

impl<T: 'static> Parser<T> {
    /// Build a parser directly from its underlying function. This is the
    /// primitive used by every combinator and primitive in this crate;
    /// user grammars will normally never need to call it directly.
    pub fn new(run: impl Fn(&mut View) -> Outcome<T> + 'static) -> Self {
        Parser { run: Rc::new(run) }
    }

    /// Run this parser against a view, producing its outcome.
    pub fn run(&self, view: &mut View) -> Outcome<T> {
        (self.run)(view)
    }

    /// Run this parser against a fresh view over `source`, returning the
    /// result on success or a rendered [`ParseFailure`] on failure.
    pub fn parse_text(&self, source: &str) -> Result<T, ParseFailure> {
        let mut view = View::new(source);
        let outcome = self.run(&mut view);
        match outcome.result {
            Some(result) if outcome.succeeded => Ok(result),
            _ => Err(ParseFailure::at(&view, outcome.expected)),
        }
    }

    /// Map the output of this parser through `f`.
    pub fn map<U: 'static>(&self, f: impl Fn(T) -> U + 'static) -> Parser<U> {
        let this = self.clone();
        Parser::new(move |view| this.run(view).map(&f))
    }

    /// Run `f` on the result and delegate to the parser it returns,
    /// OR-folding `consumed` with this parser's own consumption.
    pub fn bind<U: 'static>(&self, f: impl Fn(T) -> Parser<U> + 'static) -> Parser<U> {
        let this = self.clone();
        Parser::new(move |view| {
            let out = this.run(view);
            if !out.succeeded {
                return out.into_failure();
            }
            let consumed = out.consumed;
            let next = f(out.result.unwrap());
            let mut result = next.run(view);
            result.consumed = result.consumed || consumed;
            result
        })
    }

    /// Replace a successful result with a fixed value.
    pub fn set<U: Clone + 'static>(&self, value: U) -> Parser<U> {
        self.map(move |_| value.clone())
    }

    /// On uncommitted failure, replace the expected set with `{name}`.
    pub fn label(&self, name: impl Into<String>) -> Parser<T> {
        let this = self.clone();
        let name = name.into();
        Parser::new(move |view| {
            let mut out = this.run(view);
            if !out.succeeded && !out.consumed && !out.expected.is_empty() {
                out.expected.relabel(&name);
            }
            out
        })
    }

    /// Save the view, run this parser, and restore the view regardless of
    /// outcome. `consumed` is always reported as `false`.
    pub fn lookahead(&self) -> Parser<T> {
        let this = self.clone();
        Parser::new(move |view| {
            let pos = view.save();
            let mut out = this.run(view);
            view.load(pos);
            out.consumed = false;
            out
        })
    }

    /// Restore the view to its entry position and clear `consumed` if this
    /// parser failed having consumed input. This is the sole supported way
    /// to re-enable backtracking past consumption.
    pub fn commit(&self) -> Parser<T> {
        let this = self.clone();
        Parser::new(move |view| {
            let pos = view.save();
            let mut out = this.run(view);
            if !out.succeeded && out.consumed {
                view.load(pos);
                out.consumed = false;
            }
            out
        })
    }

    /// Attempt this parser, succeeding with `None` on uncommitted failure
    /// instead of propagating it. Exposed as `~p` via [`Not`].
    pub fn opt(&self) -> Parser<Option<T>> {
        let this = self.clone();
        Parser::new(move |view| {
            let out = this.run(view);
            if out.succeeded {
                return Outcome {
                    succeeded: true,
                    consumed: out.consumed,
                    result: Some(out.result),
                    expected: out.expected,
                };
            }
            if out.consumed {
                return out.into_failure();
            }
            Outcome {
                succeeded: true,
                consumed: false,
                result: Some(None),
                expected: out.expected,
            }
        })
    }

    /// Repeat this parser a number of times within `range`, collecting the
    /// results into a `Vec`. See §4.5: the first `lo` repetitions must all
    /// succeed, after which repetition stops cleanly on the first
    /// uncommitted failure (or continues up to the upper bound).
    pub fn repeat(&self, range: impl RangeBounds<usize>) -> Parser<Vec<T>> {
        let lo = match range.start_bound() {
            std::ops::Bound::Included(&n) => n,
            std::ops::Bound::Excluded(&n) => n + 1,
            std::ops::Bound::Unbounded => 0,
        };
        let hi = match range.end_bound() {
            std::ops::Bound::Included(&n) => Some(n + 1),
            std::ops::Bound::Excluded(&n) => Some(n),
            std::ops::Bound::Unbounded => None,
        };
        let this = self.clone();
        Parser::new(move |view| {
            let mut results = Vec::new();
            let mut consumed_any = false;
            for _ in 0..lo {
                let out = this.run(view);
                if !out.succeeded {
                    return out.into_failure();
                }
                consumed_any = consumed_any || out.consumed;
                results.push(out.result.unwrap());
            }
            let remaining = hi.map(|hi| hi.saturating_sub(lo));
            let mut taken = 0usize;
            let stop_expected = loop {
                if let Some(remaining) = remaining {
                    if taken >= remaining {
                        break Expected::none();
                    }
                }
                let out = this.run(view);
                if !out.succeeded {
                    if out.consumed {
                        return out.into_failure();
                    }
                    break out.expected;
                }
                consumed_any = consumed_any || out.consumed;
                results.push(out.result.unwrap());
                taken += 1;
            };
            Outcome::success_with_expected(consumed_any, results, stop_expected)
        })
    }

    /// `.repeat(0..)`: zero or more.
    pub fn many(&self) -> Parser<Vec<T>> {
        self.repeat(0..)
    }

    /// `.repeat(1..)`: one or more.
    pub fn at_least_one(&self) -> Parser<Vec<T>> {
        self.repeat(1..)
    }

    /// `.repeat(n..=n)`: exactly `n`.
    pub fn exactly(&self, n: usize) -> Parser<Vec<T>> {
        self.repeat(n..=n)
    }

    /// Sequence this parser with `other`, yielding a pair of both results.
    /// Exposed as `a & b`.
    pub fn then<U: 'static>(&self, other: Parser<U>) -> Parser<(T, U)> {
        let this = self.clone();
        Parser::new(move |view| {
            let first = this.run(view);
            if !first.succeeded {
                return first.into_failure();
            }
            let first_consumed = first.consumed;
            let first_expected = first.expected.clone();
            let second = other.run(view);
            let consumed = second.consumed || first_consumed;
            if !second.succeeded {
                return Outcome::failure(consumed, second.expected.union(first_expected));
            }
            let expected = if second.expected.is_empty() {
                Expected::none()
            } else {
                second.expected.union(first_expected)
            };
            Outcome::success_with_expected(
                consumed,
                (first.result.unwrap(), second.result.unwrap()),
                expected,
            )
        })
    }

    /// Sequence, keeping only the right-hand result. Exposed as `a >> b`.
    pub fn then_right<U: 'static>(&self, other: Parser<U>) -> Parser<U> {
        self.then(other).map(|(_, right)| right)
    }

    /// Sequence, keeping only the left-hand result. Exposed as `a << b`.
    pub fn then_left<U: 'static>(&self, other: Parser<U>) -> Parser<T> {
        self.then(other).map(|(left, _)| left)
    }

    /// Committed-by-default alternative. Exposed as `a | b`. See §4.2.
    pub fn or(&self, other: Parser<T>) -> Parser<T> {
        let this = self.clone();
        Parser::new(move |view| {
            let first = this.run(view);
            if first.succeeded || first.consumed {
                return first;
            }
            let second = other.run(view);
            if second.succeeded || second.consumed {
                return second;
            }
            Outcome::failure(false, first.expected.union(second.expected))
        })
    }

    /// `cp(self) | other`: try `self` with backtracking re-enabled, then
    /// fall back to `other`. Exposed as `a ^ b`.
    pub fn or_try(&self, other: Parser<T>) -> Parser<T> {
        self.commit().or(other)
    }

    /// Erase this parser's concrete closure type behind the same `Rc`
    /// representation every `Parser<T>` already uses. Since `Parser<T>` is
    /// always type-erased, this is simply `self.clone()`.
    pub fn boxed(&self) -> Parser<T> {
        self.clone()
    }
}

impl<T: 'static, U: 'static> BitAnd<Parser<U>> for Parser<T> {
    type Output = Parser<(T, U)>;
    fn bitand(self, rhs: Parser<U>) -> Self::Output {
        self.then(rhs)
    }
}

impl<T: 'static, U: 'static> Shr<Parser<U>> for Parser<T> {
    type Output = Parser<U>;
    fn shr(self, rhs: Parser<U>) -> Self::Output {
        self.then_right(rhs)
    }
}

impl<T: 'static, U: 'static> Shl<Parser<U>> for Parser<T> {
    type Output = Parser<T>;
    fn shl(self, rhs: Parser<U>) -> Self::Output {
        self.then_left(rhs)
    }
}

impl<T: 'static> BitOr for Parser<T> {
    type Output = Parser<T>;
    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: 'static> BitXor for Parser<T> {
    type Output = Parser<T>;
    fn bitxor(self, rhs: Parser<T>) -> Self::Output {
        self.or_try(rhs)
    }
}

impl<T: 'static> Not for Parser<T> {
    type Output = Parser<Option<T>>;
    fn not(self) -> Self::Output {
        self.opt()
    }
}

/// Wrap a nullary thunk producing a parser; the thunk is invoked on every
/// run, not at construction time, which is what lets mutually-recursive
/// grammar functions refer to each other without a forward-declaration
/// cell. See §4.9.
pub fn defer<T: 'static>(thunk: impl Fn() -> Parser<T> + 'static) -> Parser<T> {
    let calls = std::cell::Cell::new(0u32);
    Parser::new(move |view| {
        calls.set(calls.get().wrapping_add(1));
        tracing::trace!(calls = calls.get(), "entering deferred grammar rule");
        thunk().run(view)
    })
}

/// Save the view, run `p`, restore the view. `consumed` is always
/// reported `false`. See §4.8.
pub fn lookahead<T: 'static>(p: &Parser<T>) -> Parser<T> {
    p.lookahead()
}

/// Restore the view on consumed failure of `p`, clearing `consumed`. The
/// free-function form of [`Parser::commit`]. See §4.3.
pub fn cp<T: 'static>(p: &Parser<T>) -> Parser<T> {
    p.commit()
}
