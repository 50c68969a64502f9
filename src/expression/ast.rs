use crate::expression::errors::ExpressionError;
use crate::expression::token::{Number, Operator, Program, Token};

/// Expression tree rebuilt from a postfix program for infix rendering
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Leaf(Number),
    Node(Box<Expression>, Operator, Box<Expression>),
}

impl Expression {
    /// Replays the program on a stack of subtrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the program does not reduce to exactly one expression.
    pub fn from_program(program: &Program) -> Result<Self, ExpressionError> {
        let mut stack: Vec<Expression> = Vec::with_capacity(program.len());

        for (position, token) in program.tokens().iter().enumerate() {
            match token {
                Token::Operand(operand) => stack.push(Expression::Leaf(operand.value)),
                Token::Operator(op) => {
                    let (Some(y), Some(x)) = (stack.pop(), stack.pop()) else {
                        return Err(ExpressionError::StackUnderflow { position });
                    };
                    stack.push(Expression::Node(Box::new(x), *op, Box::new(y)));
                }
            }
        }

        let remaining = stack.len();
        match (stack.pop(), remaining) {
            (Some(root), 1) => Ok(root),
            (None, _) => Err(ExpressionError::EmptyProgram),
            (Some(_), remaining) => Err(ExpressionError::UnreducedStack { remaining }),
        }
    }

    /// Loosest binding rank on the unbracketed top-level chain; 0 for a leaf.
    ///
    /// Children that would be spliced into the chain never bind looser than their
    /// parent, so the root operator governs.
    pub fn precedence(&self) -> u8 {
        match self {
            Expression::Leaf(_) => 0,
            Expression::Node(_, op, _) => op.precedence(),
        }
    }

    /// Evaluates the tree in the same way the program it came from evaluates
    ///
    /// # Errors
    ///
    /// Returns an error on division by zero or overflow.
    pub fn evaluate(&self) -> Result<Number, ExpressionError> {
        match self {
            Expression::Leaf(n) => Ok(*n),
            Expression::Node(l, op, r) => op.apply(l.evaluate()?, r.evaluate()?),
        }
    }
}
