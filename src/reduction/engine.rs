use log::{debug, trace};

use crate::expression::{BinaryOperator, Expression, GROUP_CLOSE, GROUP_OPEN};
use crate::reduction::constants::MAX_GROUP_DEPTH;
use crate::reduction::errors::ReductionError;

/// An operator token waiting for its right operand
#[derive(Debug, Clone, Copy)]
struct PendingOperator<'a> {
    token: &'a str,
    /// Operand stack height when the operator arrived. Anything above it
    /// came after the operator and can serve as its right operand.
    operands_below: usize,
}

/// The two stacks for one grouping level
#[derive(Debug, Default)]
struct Workspace<'a> {
    operators: Vec<PendingOperator<'a>>,
    operands: Vec<Expression>,
}

impl<'a> Workspace<'a> {
    fn push_operand(&mut self, operand: Expression) {
        self.operands.push(operand);
    }

    fn push_operator(&mut self, token: &'a str) {
        trace!("Pushing operator '{}'", token);
        self.operators.push(PendingOperator {
            token,
            operands_below: self.operands.len(),
        });
    }

    /// Reduce every pending operator, most recent first
    fn drain(&mut self) -> Result<(), ReductionError> {
        while let Some(pending) = self.operators.pop() {
            let token = pending.token;
            let op = BinaryOperator::from_symbol(token)
                .ok_or_else(|| ReductionError::UnknownOperator(token.to_string()))?;

            if self.operands.len() <= pending.operands_below {
                return Err(ReductionError::MissingRightOperand(token.to_string()));
            }
            let right = self
                .operands
                .pop()
                .ok_or_else(|| ReductionError::MissingRightOperand(token.to_string()))?;
            let left = self
                .operands
                .pop()
                .ok_or_else(|| ReductionError::MissingLeftOperand(token.to_string()))?;

            trace!(
                "Reduced '{}', {} operands pending",
                token,
                self.operands.len() + 1
            );
            self.operands.push(Expression::binary(op, left, right));
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Expression, ReductionError> {
        self.drain()?;

        if let Some(pending) = self.operators.pop() {
            return Err(ReductionError::UnconsumedOperator(pending.token.to_string()));
        }

        let value = self
            .operands
            .pop()
            .ok_or(ReductionError::EmptyExpression)?;

        if let Some(leftover) = self.operands.pop() {
            return Err(ReductionError::LeftoverOperands(leftover.to_string()));
        }

        Ok(value)
    }
}

fn is_literal(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit())
}

fn is_single(token: &str, symbol: char) -> bool {
    let mut chars = token.chars();
    chars.next() == Some(symbol) && chars.next().is_none()
}

fn parse_literal(token: &str) -> Result<Expression, ReductionError> {
    token
        .parse::<i64>()
        .map(Expression::literal)
        .map_err(|_| ReductionError::InvalidLiteral(token.to_string()))
}

/// Reduce tokens up to the end of input (outermost level) or up to the
/// `)` closing the group opened at `depth`.
fn reduce_level<'a, I>(tokens: &mut I, depth: usize) -> Result<Expression, ReductionError>
where
    I: Iterator<Item = &'a str>,
{
    if depth > MAX_GROUP_DEPTH {
        return Err(ReductionError::GroupTooDeep {
            limit: MAX_GROUP_DEPTH,
        });
    }

    let mut workspace = Workspace::default();
    let mut closed = false;

    while let Some(token) = tokens.next() {
        if is_literal(token) {
            trace!("Literal '{}' at depth {}", token, depth);
            workspace.push_operand(parse_literal(token)?);
            continue;
        }

        if is_single(token, GROUP_OPEN) {
            let inner = reduce_level(tokens, depth + 1)?;
            trace!("Closed group at depth {}", depth + 1);
            workspace.push_operand(Expression::group(inner));
            continue;
        }

        if is_single(token, GROUP_CLOSE) {
            if depth == 0 {
                return Err(ReductionError::UnmatchedGroupClose);
            }
            closed = true;
            break;
        }

        // Everything already pending becomes the left operand of this one
        workspace.drain()?;
        workspace.push_operator(token);
    }

    if depth > 0 && !closed {
        return Err(ReductionError::UnclosedGroup);
    }

    workspace.finish()
}

/// Build an expression tree from a token sequence.
///
/// Operators are folded strictly in arrival order, so `2 + 5 - 1 * 5 / 2`
/// becomes `(((2 + 5) - 1) * 5) / 2`. Declared operator priorities play no
/// part. A `(` token starts a nested reduction that ends at its matching
/// `)` and yields a [`Expression::Group`] operand.
///
/// # Errors
///
/// Returns a [`ReductionError`] describing the first structural problem
/// found: an unknown operator, a missing operand, leftover operands,
/// unbalanced parentheses, an unparsable literal or an empty sequence.
pub fn build<T: AsRef<str>>(tokens: &[T]) -> Result<Expression, ReductionError> {
    debug!("Reducing {} tokens", tokens.len());

    let mut stream = tokens.iter().map(|token| token.as_ref());
    let result = reduce_level(&mut stream, 0);

    match &result {
        Ok(expression) => debug!("Built expression: {}", expression),
        Err(e) => debug!("Reduction failed: {}", e),
    }

    result
}
