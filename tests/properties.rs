//! Property-based tests for the algebraic laws the combinator surface is
//! meant to satisfy, run against small synthetic grammars rather than the
//! JSON/calculator demos so each law is isolated from incidental grammar
//! structure.

use aoccy::prelude::*;
use aoccy::view::View;
use proptest::prelude::*;

fn digits() -> Parser<String> {
    regex(r"[0-9]+").map(|m| m.as_str().to_string())
}

/// Running a parser never panics and always reports a consistent
/// `(succeeded, result)` pair: a result is present if and only if the
/// parser succeeded.
fn purity_holds<T: 'static>(p: &Parser<T>, input: &str) -> bool {
    let mut view = View::new(input);
    let out = p.run(&mut view);
    out.succeeded == out.result.is_some()
}

proptest! {
    #[test]
    fn purity_and_result_presence_agree(input in "[a-z0-9]{0,12}") {
        prop_assert!(purity_holds(&digits(), &input));
        prop_assert!(purity_holds(&lit("abc"), &input));
    }

    /// `consumed` is true exactly when the cursor actually advanced.
    #[test]
    fn consumed_matches_actual_advancement(input in "[0-9]{0,8}[a-z]{0,4}") {
        let mut view = View::new(&input);
        let before = view.idx();
        let out = digits().run(&mut view);
        prop_assert_eq!(out.consumed, view.idx() != before);
    }

    /// `a | b` behaves exactly like `a` whenever `a` succeeds or commits.
    #[test]
    fn alternative_prefers_a_committed_left_branch(input in "[0-9]{1,6}") {
        let a = digits();
        let b = lit("x").map(|s| s.to_string());
        let combined = a.clone() | b;
        let mut v1 = View::new(&input);
        let mut v2 = View::new(&input);
        prop_assert_eq!(a.run(&mut v1).result, combined.run(&mut v2).result);
    }

    /// Lookahead never advances the cursor, win or lose.
    #[test]
    fn lookahead_is_always_zero_width(input in "[a-z0-9]{0,10}") {
        let p = lookahead(&digits());
        let mut view = View::new(&input);
        let before = view.idx();
        let out = p.run(&mut view);
        prop_assert!(!out.consumed);
        prop_assert_eq!(view.idx(), before);
    }

    /// `map` is a functor: mapping with the identity function changes
    /// nothing observable about the outcome.
    #[test]
    fn map_identity_law(input in "[0-9]{0,6}[a-z]{0,4}") {
        let p = digits();
        let mapped = p.map(|s| s);
        let mut v1 = View::new(&input);
        let mut v2 = View::new(&input);
        let lhs = p.run(&mut v1);
        let rhs = mapped.run(&mut v2);
        prop_assert_eq!(lhs.result, rhs.result);
        prop_assert_eq!(lhs.consumed, rhs.consumed);
    }

    /// A repetition's result length always falls within the requested
    /// bounds when it succeeds.
    #[test]
    fn repetition_respects_its_bounds(input in "a{0,10}", lo in 0usize..4, extra in 0usize..4) {
        let hi = lo + extra;
        let rep = lit("a").repeat(lo..=hi);
        let mut view = View::new(&input);
        let out = rep.run(&mut view);
        if out.succeeded {
            let n = out.result.unwrap().len();
            prop_assert!(n >= lo && n <= hi);
        } else {
            prop_assert!(input.chars().take_while(|&c| c == 'a').count() < lo);
        }
    }

    /// `commit` always restores the cursor on a failed branch, regardless
    /// of how much the branch consumed before failing.
    #[test]
    fn commit_point_always_restores_position_on_failure(input in "[0-9]{0,6}") {
        let p = digits().then_right(lit("!"));
        let committed = cp(&p);
        let mut view = View::new(&input);
        let before = view.idx();
        let out = committed.run(&mut view);
        if !out.succeeded {
            prop_assert!(!out.consumed);
            prop_assert_eq!(view.idx(), before);
        }
    }
}
