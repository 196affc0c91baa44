//! Grammar-builder sugar layered on top of the core combinators: whitespace
//! handling and separated lists. None of this needs access to `View`
//! internals — it is expressed entirely in terms of the public
//! `Parser<T>` surface.

use crate::parser::Parser;

/// Given a whitespace parser, return a closure that strips trailing
/// whitespace after any parser it is applied to. See §4.10.
pub fn lexeme_gen<W: 'static>(ws: Parser<W>) -> impl Fn(Parser<W>) -> Parser<W> {
    move |p: Parser<W>| p << ws.clone()
}

/// Given a whitespace parser, return a closure that parses a literal
/// symbol followed by trailing whitespace. See §4.10.
pub fn symbol_gen<W: 'static>(ws: Parser<W>) -> impl Fn(&'static str) -> Parser<&'static str> {
    move |s: &'static str| crate::primitive::lit(s) << ws.clone()
}

/// Zero or more `p`, separated by `sep`, with no trailing separator.
/// Yields `[]` if the first `p` fails without consuming input.
pub fn sep_by<S: 'static, T: 'static>(sep: Parser<S>, p: Parser<T>) -> Parser<Vec<T>> {
    let rest = sep.clone() >> p.clone();
    (p & rest.many())
        .map(|(first, mut rest)| {
            let mut out = Vec::with_capacity(rest.len() + 1);
            out.push(first);
            out.append(&mut rest);
            out
        })
        .opt()
        .map(|maybe_list| maybe_list.unwrap_or_default())
}

/// [`sep_by`] followed by an optional trailing separator. See §4.10.
pub fn sep_end_by<S: 'static, T: 'static>(sep: Parser<S>, p: Parser<T>) -> Parser<Vec<T>> {
    sep_by(sep.clone(), p) << sep.opt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{lit, regex};
    use pretty_assertions::assert_eq;

    #[test]
    fn sep_by_parses_a_comma_list() {
        let list = sep_by(lit(","), regex(r"[0-9]+"));
        let result = list.parse_text("1,2,3").unwrap();
        let result: Vec<&str> = result.iter().map(|m| m.as_str()).collect();
        assert_eq!(result, vec!["1", "2", "3"]);
    }

    #[test]
    fn sep_by_allows_empty_list() {
        let list = sep_by(lit(","), regex(r"[0-9]+"));
        let result = list.parse_text("").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn sep_by_rejects_trailing_separator() {
        let list = (sep_by(lit(","), regex(r"[0-9]+")) << crate::primitive::eof())
            .label("a list with no trailing comma");
        assert!(list.parse_text("1,2,").is_err());
    }

    #[test]
    fn sep_end_by_allows_trailing_separator() {
        let list = sep_end_by(lit(","), regex(r"[0-9]+"));
        let result = list.parse_text("1,2,").unwrap();
        let result: Vec<&str> = result.iter().map(|m| m.as_str()).collect();
        assert_eq!(result, vec!["1", "2"]);
    }

    #[test]
    fn lexeme_gen_strips_trailing_whitespace() {
        let ws = regex(r"[ \t]*");
        let lexeme = lexeme_gen(ws);
        let token = lexeme(lit("foo"));
        let mut view = crate::view::View::new("foo   bar");
        let out = token.run(&mut view);
        assert_eq!(out.result, Some("foo"));
        assert_eq!(view.idx(), 6);
    }

    #[test]
    fn symbol_gen_combines_literal_and_whitespace() {
        let ws = regex(r"\s*");
        let sym = symbol_gen(ws);
        let comma = sym(",");
        let mut view = crate::view::View::new(",  next");
        let out = comma.run(&mut view);
        assert_eq!(out.result, Some(","));
        assert_eq!(view.idx(), 3);
    }
}
