use crate::interpreter::error::ParseError;
use crate::interpreter::operator::{AdditiveOperator, MultiplicativeOperator};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{Token, TokenKind};

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to evaluate than the original token sequence.
///
/// The grammar is recursive descent with three precedence tiers:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := NUMBER | '+' factor | '-' factor | '(' expression ')'
/// ```
///
/// Both binary tiers are left-associative: each further
/// operator-operand pair becomes the new root with the tree built so
/// far as its left child. Unary minus is rewritten structurally into a
/// multiplication by `-1` (see [`Node::new_negation`]); unary plus
/// returns the inner factor unchanged.
///
/// Parsing (and later evaluation) recurses once per nesting level, so
/// the call stack bounds how deeply parenthesized or sign-chained an
/// expression can be.
///
/// # Arguments
///
/// * `tokens`: The tokens to parse, in infix order.
///
/// returns: The root of the equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use bodmas_interpreter::interpreter::lexer::tokenize;
/// use bodmas_interpreter::interpreter::parser::parse;
///
/// let tokens = tokenize("2 + 3 * 4")?;
/// let tree = parse(tokens)?;
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    let mut parser = Parser::new(tokens);
    let root = parser.parse_expression()?;

    // A full expression must consume every token.
    match parser.peek() {
        Some(token) => Err(ParseError::TrailingToken { found: token.kind }),
        None => Ok(root),
    }
}

/// The token sequence together with a cursor marking how far into it
/// parsing has advanced. Every consume moves the cursor strictly
/// forward.
struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Parser {
        Parser { tokens, cursor: 0 }
    }

    /// The token under the cursor, without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Consumes the token under the cursor, requiring it to be of the
    /// expected kind.
    fn consume(&mut self, expected: TokenKind) -> Result<&Token, ParseError> {
        match self.peek_kind() {
            Some(kind) if kind == expected => {
                self.cursor += 1;
                Ok(&self.tokens[self.cursor - 1])
            }
            Some(kind) => Err(ParseError::UnexpectedToken {
                expected,
                found: kind,
            }),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    /// expression := term (('+' | '-') term)*
    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut expression = self.parse_term()?;

        while let Some(kind) = self.peek_kind() {
            let operator = match kind {
                TokenKind::Plus => AdditiveOperator::Add,
                TokenKind::Minus => AdditiveOperator::Subtract,
                _ => break,
            };
            self.consume(kind)?;
            let right = self.parse_term()?;
            expression = Node::new_additive(operator, expression, right);
        }

        Ok(expression)
    }

    /// term := factor (('*' | '/') factor)*
    fn parse_term(&mut self) -> Result<Node, ParseError> {
        let mut term = self.parse_factor()?;

        while let Some(kind) = self.peek_kind() {
            let operator = match kind {
                TokenKind::Multiply => MultiplicativeOperator::Multiply,
                TokenKind::Divide => MultiplicativeOperator::Divide,
                _ => break,
            };
            self.consume(kind)?;
            let right = self.parse_factor()?;
            term = Node::new_multiplicative(operator, term, right);
        }

        Ok(term)
    }

    /// factor := NUMBER | '+' factor | '-' factor | '(' expression ')'
    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Number) => {
                let token = self.consume(TokenKind::Number)?;
                Ok(Node::new_number_literal(token.text.clone()))
            }
            Some(TokenKind::UnaryMinus) => {
                self.consume(TokenKind::UnaryMinus)?;
                let factor = self.parse_factor()?;
                Ok(Node::new_negation(factor))
            }
            Some(TokenKind::UnaryPlus) => {
                // Unary plus is a no-op; the inner factor passes through.
                self.consume(TokenKind::UnaryPlus)?;
                self.parse_factor()
            }
            Some(TokenKind::OpenParenthesis) => {
                self.consume(TokenKind::OpenParenthesis)?;
                let expression = self.parse_expression()?;
                self.consume(TokenKind::CloseParenthesis)?;
                Ok(expression)
            }
            Some(kind) => Err(ParseError::ExpectedFactor { found: kind }),
            None => Err(ParseError::MissingFactor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn parse_text(expression: &str) -> Result<Node, ParseError> {
        parse(tokenize(expression).unwrap())
    }

    fn number(text: &str) -> Node {
        Node::new_number_literal(text)
    }

    #[test]
    fn single_number_returns_literal_node() {
        let tree = parse_text("42").unwrap();

        assert_eq!(tree, number("42"));
    }

    #[test]
    fn subtraction_chain_folds_left() {
        let tree = parse_text("8-3-2").unwrap();

        let expected = Node::new_subtraction(
            Node::new_subtraction(number("8"), number("3")),
            number("2"),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn division_chain_folds_left() {
        let tree = parse_text("8/4/2").unwrap();

        let expected =
            Node::new_division(Node::new_division(number("8"), number("4")), number("2"));
        assert_eq!(tree, expected);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let tree = parse_text("2+3*4").unwrap();

        let expected = Node::new_addition(
            number("2"),
            Node::new_multiplication(number("3"), number("4")),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn parentheses_override_precedence() {
        let tree = parse_text("(2+3)*4").unwrap();

        let expected = Node::new_multiplication(
            Node::new_addition(number("2"), number("3")),
            number("4"),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn unary_minus_rewrites_to_multiplication_by_negative_one() {
        let tree = parse_text("-2").unwrap();

        assert_eq!(tree, Node::new_multiplication(number("-1"), number("2")));
    }

    #[test]
    fn double_negation_nests_instead_of_folding() {
        let tree = parse_text("--2").unwrap();

        let expected = Node::new_multiplication(
            number("-1"),
            Node::new_multiplication(number("-1"), number("2")),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn unary_plus_passes_the_inner_factor_through() {
        let tree = parse_text("+2").unwrap();

        assert_eq!(tree, number("2"));
    }

    #[test]
    fn implicit_multiplication_needs_no_special_handling() {
        let tree = parse_text("2(3)").unwrap();

        assert_eq!(tree, Node::new_multiplication(number("2"), number("3")));
    }

    #[test]
    fn missing_right_operand_returns_error() {
        let error = parse_text("2+").unwrap_err();

        assert_eq!(error, ParseError::MissingFactor);
    }

    #[test]
    fn trailing_token_returns_error() {
        let error = parse_text("2+3)").unwrap_err();

        assert_eq!(
            error,
            ParseError::TrailingToken {
                found: TokenKind::CloseParenthesis,
            }
        );
    }

    #[test]
    fn unclosed_parenthesis_returns_error() {
        let error = parse_text("(2+3").unwrap_err();

        assert_eq!(
            error,
            ParseError::UnexpectedEnd {
                expected: TokenKind::CloseParenthesis,
            }
        );
    }

    #[test]
    fn operator_at_factor_position_returns_error() {
        let error = parse_text("2+*3").unwrap_err();

        assert_eq!(
            error,
            ParseError::ExpectedFactor {
                found: TokenKind::Multiply,
            }
        );
    }

    #[test]
    fn empty_token_sequence_returns_error() {
        let error = parse(vec![]).unwrap_err();

        assert_eq!(error, ParseError::MissingFactor);
    }
}
