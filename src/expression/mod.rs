//! Postfix programs, their evaluation and their rendering

mod ast;
mod display;
mod errors;
mod eval;
mod token;

pub use ast::Expression;
pub use display::{Notation, format_program};
pub use errors::ExpressionError;
pub use eval::evaluate;
pub use token::{Number, Operand, Operator, Program, Token};

#[cfg(test)]
mod proptests;
