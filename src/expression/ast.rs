use std::mem;

/// Binding priority declared for grouping. Informational only, like
/// [`BinaryOperator::priority`].
pub const GROUP_PRIORITY: u8 = 3;

/// The four integer operators a [`Expression::BinaryOp`] node can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
    ];

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }

    /// Classify an operator token. Only single-character tokens match.
    pub fn from_symbol(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::ALL.into_iter().find(|op| op.symbol() == c),
            _ => None,
        }
    }

    /// Declared binding priority. The reduction engine folds operators in
    /// arrival order and never reads this value.
    pub fn priority(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => 1,
            BinaryOperator::Mul | BinaryOperator::Div => 2,
        }
    }
}

/// Immutable integer expression tree
#[derive(Debug, Clone)]
pub enum Expression {
    Literal(i64),
    BinaryOp(BinaryOperator, Box<Expression>, Box<Expression>),
    Group(Box<Expression>), // parenthesized, transparent to evaluation
}

impl Expression {
    pub fn literal(value: i64) -> Self {
        Expression::Literal(value)
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp(op, Box::new(left), Box::new(right))
    }

    /// Wrap an already built tree in parentheses
    pub fn group(inner: Expression) -> Self {
        Expression::Group(Box::new(inner))
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some(pair) = pairs.pop() {
            match pair {
                (Expression::Literal(a), Expression::Literal(b)) if a == b => {}
                (Expression::BinaryOp(op_a, l_a, r_a), Expression::BinaryOp(op_b, l_b, r_b))
                    if op_a == op_b =>
                {
                    pairs.push((r_a.as_ref(), r_b.as_ref()));
                    pairs.push((l_a.as_ref(), l_b.as_ref()));
                }
                (Expression::Group(a), Expression::Group(b)) => {
                    pairs.push((a.as_ref(), b.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expression {}

/// Detach the non-leaf children of `expr`, leaving literals in their place
fn take_children(expr: &mut Expression, detached: &mut Vec<Expression>) {
    let mut detach = |child: &mut Box<Expression>| {
        if !matches!(**child, Expression::Literal(_)) {
            detached.push(mem::replace(&mut **child, Expression::Literal(0)));
        }
    };

    match expr {
        Expression::Literal(_) => {}
        Expression::BinaryOp(_, l, r) => {
            detach(l);
            detach(r);
        }
        Expression::Group(inner) => detach(inner),
    }
}

impl Drop for Expression {
    /// A left-folded chain is as deep as its operator count; teardown walks
    /// an explicit stack instead of recursing through `Box`.
    fn drop(&mut self) {
        let mut detached = Vec::new();
        take_children(self, &mut detached);
        while let Some(mut node) = detached.pop() {
            take_children(&mut node, &mut detached);
        }
    }
}
