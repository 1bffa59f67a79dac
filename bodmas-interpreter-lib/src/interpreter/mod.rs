pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::debug;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{Context, Result};
use string_builder::Builder;
use syntax::expression_tree::Node;

/// Interprets the given arithmetic expression into its numeric value,
/// honoring the BODMAS order of operations.
///
/// This chains the three pipeline stages: tokenize, parse, evaluate.
/// The pipeline fails fast; the first malformed part of the input
/// aborts it with the failing stage's error.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use bodmas_interpreter::interpreter::interpret;
///
/// let result = interpret("2 + 3 * 4")?;
/// assert_eq!(result, 14.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn interpret(expression: &str) -> Result<f64> {
    let expression_tree = convert(expression)?;
    debug!(&expression_tree);
    let value = evaluator::evaluate(&expression_tree)?;
    Ok(value)
}

/// Converts the given input string into an equivalent expression tree,
/// which is easier to evaluate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The root of the equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use bodmas_interpreter::interpreter::convert;
///
/// let tree = convert("(2 + 3) * 4")?;
/// print!("{}", tree);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node> {
    let tokens = lexer::tokenize(expression)?;
    debug!(&tokens);
    let expression_tree = parser::parse(tokens)?;
    Ok(expression_tree)
}

/// Pretty-prints the given tokens with whitespace around binary
/// operators.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use bodmas_interpreter::interpreter::{tokens_to_string, lexer::tokenize};
///
/// let tokens = tokenize("2+3*(4-1)")?;
/// assert_eq!(tokens_to_string(&tokens)?, "2 + 3 * (4 - 1)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Multiply | TokenKind::Divide => {
                builder.append(" ");
                builder.append(token.text.as_str());
                builder.append(" ");
            }
            _ => builder.append(token.text.as_str()),
        }
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
