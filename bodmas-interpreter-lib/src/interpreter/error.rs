use crate::interpreter::token::TokenKind;
use thiserror::Error;

/// An error raised while scanning text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside the recognized set (digits, `+ - * / ÷ ( )`
    /// and whitespace) was found.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// An error raised while building an expression tree from tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token kind was required but a different one was found.
    #[error("expected {expected} but found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// A specific token kind was required but the tokens ran out.
    #[error("expected {expected} but reached the end of the expression")]
    UnexpectedEnd { expected: TokenKind },

    /// A factor had to start here, but the token cannot start one.
    #[error("expected a number, a unary sign or '(' but found {found}")]
    ExpectedFactor { found: TokenKind },

    /// A factor had to start here, but the tokens ran out. This is also
    /// the failure for an empty expression.
    #[error("expected a number, a unary sign or '(' but reached the end of the expression")]
    MissingFactor,

    /// A complete expression was parsed but tokens remain.
    #[error("unexpected trailing {found} after a complete expression")]
    TrailingToken { found: TokenKind },
}

/// An error raised while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    /// A number literal whose text is not an integer numeral. The
    /// parser never builds such a node; this is only reachable with a
    /// hand-constructed tree.
    #[error("number literal '{text}' is not an integer")]
    MalformedLiteral { text: String },
}
