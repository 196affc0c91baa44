//! CLI wrapper: evaluate an arithmetic expression passed as a single
//! command-line argument.

#[path = "calculator_grammar.rs"]
mod calculator_grammar;

use anyhow::bail;

fn main() -> anyhow::Result<()> {
    let expression = match std::env::args().nth(1) {
        Some(expression) => expression,
        None => bail!("usage: calculator <expression>"),
    };
    match calculator_grammar::evaluate(&expression) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(failure) => {
            eprintln!("{failure}");
            std::process::exit(1);
        }
    }
}
