use log::{debug, trace};

use crate::expression::ast::{BinaryOperator, Expression};
use crate::expression::errors::ExpressionError;

#[inline]
fn apply(op: BinaryOperator, left: i64, right: i64) -> Result<i64, ExpressionError> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
        BinaryOperator::Mul => left.checked_mul(right),
        BinaryOperator::Div => {
            if right == 0 {
                debug!("Division by zero attempted: {} / 0", left);
                return Err(ExpressionError::DivisionByZero);
            }
            // Truncates toward zero; only i64::MIN / -1 overflows
            left.checked_div(right)
        }
    };

    match result {
        Some(value) => {
            trace!("{} {} {} = {}", left, op.symbol(), right, value);
            Ok(value)
        }
        None => {
            debug!("Overflow evaluating {} {} {}", left, op.symbol(), right);
            Err(ExpressionError::Overflow {
                left,
                symbol: op.symbol(),
                right,
            })
        }
    }
}

/// Work left on an operator node while its subtrees are evaluated
enum Pending<'a> {
    /// Left side is being evaluated, right side still to visit
    Right(BinaryOperator, &'a Expression),
    /// Left side evaluated, right side is being evaluated
    Apply(BinaryOperator, i64),
}

impl Expression {
    /// Evaluates the tree with an explicit stack, so the depth of a long
    /// operator chain never reaches the call stack.
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - An operation whose result does not fit in an `i64`
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        let mut pending: Vec<Pending> = Vec::new();
        let mut node = self;

        loop {
            // Walk down the left spine to a literal
            let mut value = loop {
                match node {
                    Expression::Literal(value) => break *value,
                    Expression::Group(inner) => node = inner.as_ref(),
                    Expression::BinaryOp(op, l, r) => {
                        pending.push(Pending::Right(*op, r.as_ref()));
                        node = l.as_ref();
                    }
                }
            };

            // Fold finished operands upward until a right side is still unvisited
            loop {
                match pending.pop() {
                    None => {
                        debug!("Expression evaluated to: {}", value);
                        return Ok(value);
                    }
                    Some(Pending::Right(op, right)) => {
                        pending.push(Pending::Apply(op, value));
                        node = right;
                        break;
                    }
                    Some(Pending::Apply(op, left)) => {
                        value = apply(op, left, value).inspect_err(|e| {
                            debug!("Expression evaluation failed: {}", e);
                        })?;
                    }
                }
            }
        }
    }
}
