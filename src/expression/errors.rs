use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Operator at position {position} has fewer than two operands")]
    StackUnderflow { position: usize },
    #[error("Program left {remaining} values on the stack")]
    UnreducedStack { remaining: usize },
    #[error("Program is empty")]
    EmptyProgram,
    #[error("Unknown token '{0}'")]
    UnknownToken(String),
}
