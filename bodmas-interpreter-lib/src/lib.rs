//! An interpreter for arithmetic expressions following the BODMAS
//! order of operations.
//!
//! The pipeline has three stages: the lexer turns text into tokens,
//! the parser turns tokens into an expression tree, and the evaluator
//! walks the tree to produce a numeric value.

pub mod interpreter;
