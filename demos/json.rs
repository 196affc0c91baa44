//! CLI wrapper: parse a JSON file given on the command line and print the
//! resulting value, or a rendered diagnostic on failure.

#[path = "json_grammar.rs"]
mod json_grammar;

use anyhow::{bail, Context};

fn main() -> anyhow::Result<()> {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: json <path>"),
    };
    let source = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    match json_grammar::parse(&source) {
        Ok(value) => {
            println!("{value:#?}");
            Ok(())
        }
        Err(failure) => {
            eprintln!("{failure}");
            std::process::exit(1);
        }
    }
}
