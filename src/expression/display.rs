use std::fmt;

use crate::expression::ast::Expression;

/// Opening and closing symbols written around a group.
pub const GROUP_OPEN: char = '(';
pub const GROUP_CLOSE: char = ')';

/// Output still to be written, in reverse order on the stack
enum Piece<'a> {
    Node(&'a Expression),
    Operator(char),
    Open,
    Close,
}

impl fmt::Display for Expression {
    /// Single-space separated infix. No parentheses are inferred: only
    /// [`Expression::Group`] nodes produce them, so the output is the spaced
    /// form of the tokens the tree was built from.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Expression::Literal(value)) => write!(f, "{}", value)?,
                Piece::Node(Expression::BinaryOp(op, l, r)) => {
                    pieces.push(Piece::Node(r.as_ref()));
                    pieces.push(Piece::Operator(op.symbol()));
                    pieces.push(Piece::Node(l.as_ref()));
                }
                Piece::Node(Expression::Group(inner)) => {
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(inner.as_ref()));
                    pieces.push(Piece::Open);
                }
                Piece::Operator(symbol) => write!(f, " {} ", symbol)?,
                Piece::Open => write!(f, "{} ", GROUP_OPEN)?,
                Piece::Close => write!(f, " {}", GROUP_CLOSE)?,
            }
        }

        Ok(())
    }
}

impl Expression {
    /// Canonical text of the tree, same as its `Display` output
    pub fn render(&self) -> String {
        self.to_string()
    }
}
