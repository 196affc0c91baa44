//! A small arithmetic-expression calculator, built to show that `aoccy`
//! composes beyond the JSON worked example: standard precedence climbing
//! (`expr` over `+`/`-`, `term` over `*`/`/`) expressed as a left fold over
//! a repeated `(op, operand)` tail, with parenthesised sub-expressions tied
//! back into the grammar via `defer`.

use aoccy::prelude::*;

fn whitespace() -> Parser<()> {
    regex(r"\s*").map(|_| ())
}

fn symbol(s: &'static str) -> Parser<&'static str> {
    lit(s) << whitespace()
}

fn number() -> Parser<f64> {
    (regex(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?")
        .label("a number")
        .map(|m| m.as_str().parse().expect("regex guarantees a valid float literal"))
        << whitespace())
}

fn factor() -> Parser<f64> {
    defer(|| number() | (symbol("(") >> expr() << symbol(")"))).label("a number or parenthesised expression")
}

fn term() -> Parser<f64> {
    let op = symbol("*") | symbol("/");
    (factor() & (op & factor()).many()).map(|(first, rest)| {
        rest.into_iter().fold(first, |acc, (op, rhs)| match op {
            "*" => acc * rhs,
            "/" => acc / rhs,
            _ => unreachable!("op is either \"*\" or \"/\""),
        })
    })
}

fn expr() -> Parser<f64> {
    defer(|| {
        let op = symbol("+") | symbol("-");
        (term() & (op & term()).many()).map(|(first, rest)| {
            rest.into_iter().fold(first, |acc, (op, rhs)| match op {
                "+" => acc + rhs,
                "-" => acc - rhs,
                _ => unreachable!("op is either \"+\" or \"-\""),
            })
        })
    })
}

/// The top-level grammar: optional leading whitespace, an expression, then
/// mandatory end-of-input.
pub fn calculator() -> Parser<f64> {
    whitespace() >> expr() << eof()
}

/// Evaluate a complete arithmetic expression, rendering a diagnostic on
/// failure.
pub fn evaluate(source: &str) -> Result<f64, ParseFailure> {
    calculator().parse_text(source)
}
