use thiserror::Error;

use crate::expression::ExpressionError;
use crate::reduction::ReductionError;
use crate::tokenizer::TokenizeError;

/// Any failure on the way from text to a value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Reduction(#[from] ReductionError),
    #[error(transparent)]
    Expression(#[from] ExpressionError),
}
