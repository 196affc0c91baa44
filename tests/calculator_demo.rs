//! End-to-end coverage of the calculator demo grammar.

#[path = "../demos/calculator_grammar.rs"]
mod calculator_grammar;

use calculator_grammar::evaluate;

#[test]
fn evaluates_a_realistic_expression() {
    assert_eq!(evaluate("3 + 4 * (2 - 1) / 2").unwrap(), 5.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("1+2*3").unwrap(), evaluate(" 1 + 2 * 3 ").unwrap());
}

#[test]
fn rejects_trailing_garbage() {
    let err = evaluate("1 + 2 foo").unwrap_err();
    assert!(err.to_string().contains('^'));
}

#[test]
fn division_result_is_floating_point() {
    assert_eq!(evaluate("1 / 4").unwrap(), 0.25);
}
