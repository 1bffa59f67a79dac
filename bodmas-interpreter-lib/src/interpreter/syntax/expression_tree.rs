use crate::interpreter::operator::{AdditiveOperator, MultiplicativeOperator};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A node of a binary expression tree.
///
/// Once built, a tree is never mutated: the parser constructs it in one
/// pass and the evaluator consumes it in one pass. Every node owns its
/// children outright, so the ownership structure is exactly the tree
/// structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    // Terminal symbols (leaves)
    NumberLiteral(String),
    // Non-terminal symbols (non-leaves)
    AdditiveExpression {
        operator: AdditiveOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    MultiplicativeExpression {
        operator: MultiplicativeOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn new_number_literal(value: impl Into<String>) -> Node {
        Node::NumberLiteral(value.into())
    }

    pub fn new_additive(operator: AdditiveOperator, left: Node, right: Node) -> Node {
        Node::AdditiveExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn new_multiplicative(operator: MultiplicativeOperator, left: Node, right: Node) -> Node {
        Node::MultiplicativeExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn new_addition(left: Node, right: Node) -> Node {
        Self::new_additive(AdditiveOperator::Add, left, right)
    }

    pub fn new_subtraction(left: Node, right: Node) -> Node {
        Self::new_additive(AdditiveOperator::Subtract, left, right)
    }

    pub fn new_multiplication(left: Node, right: Node) -> Node {
        Self::new_multiplicative(MultiplicativeOperator::Multiply, left, right)
    }

    pub fn new_division(left: Node, right: Node) -> Node {
        Self::new_multiplicative(MultiplicativeOperator::Divide, left, right)
    }

    /// The structural form of unary minus: `-x` becomes `(-1) * x`.
    /// Chained signs nest, so `--x` becomes `(-1) * ((-1) * x)`.
    pub fn new_negation(operand: Node) -> Node {
        Self::new_multiplication(Node::new_number_literal("-1"), operand)
    }

    fn build_tree(&self, builder: &mut TreeBuilder) {
        match self {
            Node::NumberLiteral(value) => {
                builder.add_empty_child(value.clone());
            }
            Node::AdditiveExpression {
                operator,
                left,
                right,
            } => {
                builder.begin_child(operator.to_string());
                left.build_tree(builder);
                right.build_tree(builder);
                builder.end_child();
            }
            Node::MultiplicativeExpression {
                operator,
                left,
                right,
            } => {
                builder.begin_child(operator.to_string());
                left.build_tree(builder);
                right.build_tree(builder);
                builder.end_child();
            }
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut builder = TreeBuilder::new("expression".into());
        self.build_tree(&mut builder);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}
