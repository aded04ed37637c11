//! Stackcalc - integer arithmetic expressions from token streams
//!
//! Tokens are reduced into an immutable expression tree by a two-stack
//! algorithm that folds operators strictly in the order they arrive. The
//! tree can then be evaluated to an `i64` or rendered back to its canonical
//! single-space-separated text.

pub mod checks;
mod errors;
pub mod expression;
pub mod reduction;
pub mod tokenizer;

// Re-export the main public API
pub use errors::CalcError;
pub use expression::{BinaryOperator, Expression, ExpressionError};
pub use reduction::{ReductionError, build};
pub use tokenizer::{TokenizeError, tokenize};

/// Tokenize `input` and reduce the tokens into an expression tree
///
/// # Errors
///
/// This function will return an error if:
/// * The input contains a character that is not a digit, whitespace or one of `+ - * / ( )`
/// * The tokens do not form a well-formed expression
///
/// # Examples
///
/// ```
/// use stackcalc::parse;
///
/// let expr = parse("1 + (2 * 3)").unwrap();
/// assert_eq!(expr.render(), "1 + ( 2 * 3 )");
/// ```
pub fn parse(input: &str) -> Result<Expression, CalcError> {
    let tokens = tokenize(input)?;
    Ok(build(&tokens)?)
}

/// Parse and evaluate `input` in one step
///
/// # Errors
///
/// Returns every error [`parse`] can, plus division by zero and `i64`
/// overflow during evaluation.
///
/// # Examples
///
/// ```
/// use stackcalc::evaluate_str;
///
/// // Operators fold left to right: ((2 + 5) - 1) * 5 / 2
/// assert_eq!(evaluate_str("2 + 5 - 1 * 5 / 2").unwrap(), 15);
/// ```
pub fn evaluate_str(input: &str) -> Result<i64, CalcError> {
    let expr = parse(input)?;
    Ok(expr.evaluate()?)
}

#[cfg(test)]
mod proptests;
