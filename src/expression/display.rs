use std::fmt;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::token::{Operator, Program};

/// Output notation for a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Postfix,
    Infix,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn needs_parens(child: &Expression, parent: Operator, is_right: bool) -> bool {
            match child {
                Expression::Leaf(_) => false,
                Expression::Node(..) => {
                    let rank = child.precedence();
                    rank > parent.precedence()
                        || (is_right && !parent.is_associative() && rank == parent.precedence())
                }
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Leaf(n) => write!(f, "{}", n),
                Expression::Node(l, op, r) => {
                    write_with_parens(f, l, needs_parens(l, *op, false))?;
                    write!(f, " {} ", op)?;
                    write_with_parens(f, r, needs_parens(r, *op, true))
                }
            }
        }

        fmt_expression(f, self)
    }
}

/// Renders a program in the requested notation.
///
/// # Errors
///
/// Infix rendering fails if the program does not reduce to a single expression.
pub fn format_program(program: &Program, notation: Notation) -> Result<String, ExpressionError> {
    match notation {
        Notation::Postfix => Ok(program.to_string()),
        Notation::Infix => Ok(Expression::from_program(program)?.to_string()),
    }
}
