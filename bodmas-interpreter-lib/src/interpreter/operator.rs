use crate::interpreter::error::EvalError;
use std::fmt;
use std::fmt::Formatter;

/// A binary operator at the additive precedence tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AdditiveOperator {
    Add,
    Subtract,
}

/// A binary operator at the multiplicative precedence tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MultiplicativeOperator {
    Multiply,
    Divide,
}

impl AdditiveOperator {
    pub fn symbol(&self) -> char {
        match self {
            AdditiveOperator::Add => '+',
            AdditiveOperator::Subtract => '-',
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            AdditiveOperator::Add => left + right,
            AdditiveOperator::Subtract => left - right,
        }
    }
}

impl MultiplicativeOperator {
    pub fn symbol(&self) -> char {
        match self {
            MultiplicativeOperator::Multiply => '*',
            MultiplicativeOperator::Divide => '/',
        }
    }

    /// Applies the operator to the two operands. Division is true
    /// division, and a zero divisor is an error rather than an
    /// infinity.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            MultiplicativeOperator::Multiply => Ok(left * right),
            MultiplicativeOperator::Divide => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl fmt::Display for AdditiveOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for MultiplicativeOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_operators_apply_their_arithmetic() {
        assert_eq!(AdditiveOperator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(AdditiveOperator::Subtract.apply(2.0, 3.0), -1.0);
    }

    #[test]
    fn multiplication_applies_its_arithmetic() {
        assert_eq!(
            MultiplicativeOperator::Multiply.apply(2.0, 3.0).unwrap(),
            6.0
        );
    }

    #[test]
    fn division_is_true_division() {
        assert_eq!(MultiplicativeOperator::Divide.apply(5.0, 2.0).unwrap(), 2.5);
    }

    #[test]
    fn division_by_zero_returns_error() {
        let result = MultiplicativeOperator::Divide.apply(8.0, 0.0);

        assert_eq!(result.unwrap_err(), EvalError::DivisionByZero);
    }

    #[test]
    fn operators_display_as_their_symbol() {
        assert_eq!(AdditiveOperator::Subtract.to_string(), "-");
        assert_eq!(MultiplicativeOperator::Divide.to_string(), "/");
    }
}
