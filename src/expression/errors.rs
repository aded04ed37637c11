use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow in {left} {symbol} {right}")]
    Overflow { left: i64, symbol: char, right: i64 },
}
