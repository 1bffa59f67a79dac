use std::fmt;
use std::fmt::Formatter;

/// The lexical category of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    UnaryPlus,
    UnaryMinus,
    Multiply,
    Divide,
    OpenParenthesis,
    CloseParenthesis,
}

impl TokenKind {
    /// Whether a token of this kind ends an operand, i.e. can be
    /// directly followed by a binary operator. A `+` or `-` scanned
    /// right after such a token is binary; anywhere else it is unary.
    pub fn ends_operand(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::CloseParenthesis)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "a number"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::UnaryPlus => write!(f, "a unary '+'"),
            TokenKind::UnaryMinus => write!(f, "a unary '-'"),
            TokenKind::Multiply => write!(f, "'*'"),
            TokenKind::Divide => write!(f, "'/'"),
            TokenKind::OpenParenthesis => write!(f, "'('"),
            TokenKind::CloseParenthesis => write!(f, "')'"),
        }
    }
}

/// A discrete part of an expression: its kind together with the
/// literal text the scanner matched (so `÷` stays `÷`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Token {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn number(text: impl Into<String>) -> Token {
        Token::new(TokenKind::Number, text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_and_close_parenthesis_end_an_operand() {
        assert!(TokenKind::Number.ends_operand());
        assert!(TokenKind::CloseParenthesis.ends_operand());
    }

    #[test]
    fn operators_and_open_parenthesis_do_not_end_an_operand() {
        assert!(!TokenKind::Plus.ends_operand());
        assert!(!TokenKind::UnaryMinus.ends_operand());
        assert!(!TokenKind::Multiply.ends_operand());
        assert!(!TokenKind::OpenParenthesis.ends_operand());
    }

    #[test]
    fn token_displays_as_its_matched_text() {
        let token = Token::new(TokenKind::Divide, "÷");
        assert_eq!(token.to_string(), "÷");
    }
}
