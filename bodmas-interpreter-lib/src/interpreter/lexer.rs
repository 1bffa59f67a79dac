use crate::interpreter::error::LexError;
use crate::interpreter::token::{Token, TokenKind};
use itertools::Itertools;

/// Scans the given expression into a sequence of tokens.
///
/// The scan is a single left-to-right pass. A `+` or `-` is classified
/// as binary when the previously emitted token ends an operand (a
/// number or `)`), and as unary otherwise. A `(` directly after a
/// number first emits a synthetic `*` token, so `2(3)` scans the same
/// as `2*(3)`.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in scan order. An empty or
/// all-whitespace input yields no tokens.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use bodmas_interpreter::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("2 + 3 * 4")?;
/// assert_eq!(tokens.len(), 5);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut characters = expression.chars().enumerate().peekable();

    while let Some(&(position, character)) = characters.peek() {
        match character {
            _ if character.is_whitespace() => {
                characters.next();
            }
            '0'..='9' => {
                let number: String = characters
                    .peeking_take_while(|&(_, c)| c.is_ascii_digit())
                    .map(|(_, c)| c)
                    .collect();
                tokens.push(Token::number(number));
            }
            '+' => {
                characters.next();
                let kind = if previous_ends_operand(&tokens) {
                    TokenKind::Plus
                } else {
                    TokenKind::UnaryPlus
                };
                tokens.push(Token::new(kind, "+"));
            }
            '-' => {
                characters.next();
                let kind = if previous_ends_operand(&tokens) {
                    TokenKind::Minus
                } else {
                    TokenKind::UnaryMinus
                };
                tokens.push(Token::new(kind, "-"));
            }
            '*' => {
                characters.next();
                tokens.push(Token::new(TokenKind::Multiply, "*"));
            }
            '/' | '÷' => {
                characters.next();
                tokens.push(Token::new(TokenKind::Divide, character.to_string()));
            }
            '(' => {
                characters.next();
                // Implicit multiplication: 2(3 + 4) scans as 2 * (3 + 4)
                if let Some(token) = tokens.last() {
                    if token.kind == TokenKind::Number {
                        tokens.push(Token::new(TokenKind::Multiply, "*"));
                    }
                }
                tokens.push(Token::new(TokenKind::OpenParenthesis, "("));
            }
            ')' => {
                characters.next();
                tokens.push(Token::new(TokenKind::CloseParenthesis, ")"));
            }
            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character,
                    position,
                })
            }
        }
    }

    Ok(tokens)
}

fn previous_ends_operand(tokens: &[Token]) -> bool {
    tokens
        .last()
        .map_or(false, |token| token.kind.ends_operand())
}
