use anyhow::Result;
use bodmas_interpreter::interpreter::{evaluator, lexer, parser, tokens_to_string};
use clap::Parser;
use log::{debug, info};
use std::io::Write;

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate; read from standard input when omitted
    expression: Option<String>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let expression = match args.expression {
        Some(expression) => expression,
        None => read_expression()?,
    };

    info!("interpreting '{}'", expression.trim());

    let tokens = lexer::tokenize(&expression)?;
    debug!("tokens: {}", tokens_to_string(&tokens)?);
    let expression_tree = parser::parse(tokens)?;
    debug!("expression tree:\n{expression_tree}");
    let result = evaluator::evaluate(&expression_tree)?;

    println!("Result: {result}");
    Ok(())
}

fn read_expression() -> Result<String> {
    print!("Enter your expression: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}
