use crate::interpreter::error::EvalError;
use crate::interpreter::syntax::expression_tree::Node;

/// Evaluates the given expression tree into a numeric value.
///
/// Number literals are parsed as integers; the result type is `f64`
/// because division is true division (`5/2` is `2.5`). For both binary
/// node kinds the left child is evaluated before the right one.
///
/// # Arguments
///
/// * `node`: The root of the expression tree to evaluate.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use bodmas_interpreter::interpreter::evaluator::evaluate;
/// use bodmas_interpreter::interpreter::syntax::expression_tree::Node;
///
/// let tree = Node::new_addition(
///     Node::new_number_literal("2"),
///     Node::new_number_literal("3"),
/// );
/// assert_eq!(evaluate(&tree)?, 5.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(node: &Node) -> Result<f64, EvalError> {
    match node {
        Node::NumberLiteral(value) => {
            let integer: i64 = value.parse().map_err(|_| EvalError::MalformedLiteral {
                text: value.clone(),
            })?;
            Ok(integer as f64)
        }
        Node::AdditiveExpression {
            operator,
            left,
            right,
        } => {
            let left_value = evaluate(left)?;
            let right_value = evaluate(right)?;
            Ok(operator.apply(left_value, right_value))
        }
        Node::MultiplicativeExpression {
            operator,
            left,
            right,
        } => {
            let left_value = evaluate(left)?;
            let right_value = evaluate(right)?;
            operator.apply(left_value, right_value)
        }
    }
}
