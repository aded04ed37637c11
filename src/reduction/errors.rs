use thiserror::Error;

/// Structural failures while reducing a token sequence into a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReductionError {
    #[error("Don't understand operation '{0}'")]
    UnknownOperator(String),
    #[error("Missing right operand for {0}")]
    MissingRightOperand(String),
    #[error("Missing left operand for {0}")]
    MissingLeftOperand(String),
    #[error("Don't know what to do with '{0}'")]
    UnconsumedOperator(String),
    #[error("Operands left over starting with \"{0}\"")]
    LeftoverOperands(String),
    #[error("Expression evaluated to nothing")]
    EmptyExpression,
    #[error("Literal '{0}' is not a valid integer")]
    InvalidLiteral(String),
    #[error("Missing ')' to close group")]
    UnclosedGroup,
    #[error("Unmatched ')'")]
    UnmatchedGroupClose,
    #[error("Groups nested deeper than {limit} levels")]
    GroupTooDeep { limit: usize },
}
