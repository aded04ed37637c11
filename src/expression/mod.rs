//! Expression tree, its evaluation and its canonical rendering

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{BinaryOperator, Expression, GROUP_PRIORITY};
pub use display::{GROUP_CLOSE, GROUP_OPEN};
pub use errors::ExpressionError;
