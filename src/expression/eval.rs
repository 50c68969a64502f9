use log::trace;

use crate::expression::errors::ExpressionError;
use crate::expression::token::{Number, Program, Token};

/// Runs a postfix program on an operand stack.
///
/// # Errors
///
/// Returns an error when the program is not a single well-formed expression:
/// - An operator finds fewer than two operands
/// - Division by zero or arithmetic overflow
/// - More than one value (or none) remains at the end
pub fn evaluate(program: &Program) -> Result<Number, ExpressionError> {
    let mut stack: Vec<Number> = Vec::with_capacity(program.len());

    for (position, token) in program.tokens().iter().enumerate() {
        match token {
            Token::Operand(operand) => stack.push(operand.value),
            Token::Operator(op) => {
                let (Some(y), Some(x)) = (stack.pop(), stack.pop()) else {
                    return Err(ExpressionError::StackUnderflow { position });
                };
                stack.push(op.apply(x, y)?);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(ExpressionError::EmptyProgram),
        rest => Err(ExpressionError::UnreducedStack {
            remaining: rest.len(),
        }),
    }
}

impl Program {
    /// Evaluates the program, mapping every failure to `None`
    pub fn value(&self) -> Option<Number> {
        match evaluate(self) {
            Ok(value) => Some(value),
            Err(e) => {
                trace!("Program '{}' is invalid: {}", self, e);
                None
            }
        }
    }
}
