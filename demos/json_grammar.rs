//! A JSON grammar built entirely from `aoccy`'s combinators.
//!
//! This mirrors the textbook JSON example distributed with combinator
//! libraries in this corpus: a handful of mutually-recursive productions
//! (`value`, `array`, `object`) tied together with `defer`, each production
//! labelled so that a syntax error reports "expected a value" rather than a
//! raw regex.

use std::collections::BTreeMap;

use aoccy::prelude::*;

/// A JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Json {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    Object(BTreeMap<String, Json>),
}

fn whitespace() -> Parser<()> {
    regex(r"[ \n\r\t]*").label("whitespace").map(|_| ())
}

fn symbol(s: &'static str) -> Parser<&'static str> {
    lit(s) << whitespace()
}

fn number() -> Parser<Json> {
    regex(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")
        .label("a number")
        .map(|m| Json::Number(m.as_str().parse().expect("regex guarantees a valid float literal")))
        << whitespace()
}

fn json_string() -> Parser<String> {
    regex(r#""(?:[^"\\\x00-\x1F]|\\["\\/bfnrt]|\\u[0-9a-fA-F]{4})*""#)
        .label("a string")
        .map(|m| unescape(m.as_str()))
        << whitespace()
}

fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = u32::from_str_radix(&hex, 16).unwrap_or(0xFFFD);
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

fn singleton() -> Parser<Json> {
    symbol("true").set(Json::Bool(true))
        | symbol("false").set(Json::Bool(false))
        | symbol("null").set(Json::Null)
}

fn array() -> Parser<Json> {
    defer(|| {
        (symbol("[") >> sep_by(symbol(","), value()) << symbol("]")).map(Json::Array)
    })
    .label("an array")
}

fn member() -> Parser<(String, Json)> {
    json_string() & (symbol(":") >> value())
}

fn object() -> Parser<Json> {
    defer(|| {
        (symbol("{") >> sep_by(symbol(","), member()) << symbol("}"))
            .map(|pairs| Json::Object(pairs.into_iter().collect()))
    })
    .label("an object")
}

fn value() -> Parser<Json> {
    defer(|| number() | json_string().map(Json::String) | singleton() | array() | object())
        .label("a value")
}

/// The top-level JSON grammar: optional leading whitespace, a value, then
/// mandatory end-of-input.
pub fn json() -> Parser<Json> {
    whitespace() >> value() << eof()
}

/// Parse a complete JSON document, rendering a diagnostic on failure.
pub fn parse(source: &str) -> Result<Json, ParseFailure> {
    json().parse_text(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_true() {
        assert_eq!(parse("true").unwrap(), Json::Bool(true));
    }

    #[test]
    fn parses_a_number_array() {
        let result = parse("  [ 1, 2, 3 ]\n").unwrap();
        assert_eq!(
            result,
            Json::Array(vec![Json::Number(1.0), Json::Number(2.0), Json::Number(3.0)])
        );
    }

    #[test]
    fn parses_nested_object() {
        let result = parse(r#"{"a": null, "b": [false]}"#).unwrap();
        let mut expected = BTreeMap::new();
        expected.insert("a".to_string(), Json::Null);
        expected.insert("b".to_string(), Json::Array(vec![Json::Bool(false)]));
        assert_eq!(result, Json::Object(expected));
    }

    #[test]
    fn rejects_trailing_comma_in_array() {
        let err = parse("[1,]").unwrap_err();
        assert_eq!(err.line(), 0);
        assert_eq!(err.column(), 3);
        assert_eq!(err.expected().to_string(), "a value");
    }

    #[test]
    fn rejects_missing_colon_in_object() {
        let err = parse(r#"{"a" 1}"#).unwrap_err();
        assert_eq!(err.expected().to_string(), "\":\"");
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(err.line(), 0);
        assert_eq!(err.column(), 0);
        assert_eq!(err.expected().to_string(), "a value");
    }

    #[test]
    fn handles_escape_sequences() {
        let result = parse(r#""a\nb\tc""#).unwrap();
        assert_eq!(result, Json::String("a\nb\tc".to_string()));
    }
}
