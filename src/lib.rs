//! Twentyfour - an RPN-based solver for the 24 game and similar puzzles
//!
//! Every arrangement of the given numbers and the operators `+ - * /` is tried as a
//! postfix program. Programs that evaluate exactly to the target are kept and can be
//! rendered in postfix or minimally parenthesized infix notation.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{
    Expression, ExpressionError, Notation, Number, Operand, Operator, Program, Token, evaluate,
    format_program,
};
pub use solver::{DedupMode, SearchStats, Solutions, Solver, SolverConfig, SolverError};
pub use utils::{UtilsError, validate_numbers};

/// Find every program over `numbers` that evaluates to `target`
///
/// This is a convenience function that builds a solver from `config` and runs one search.
///
/// # Arguments
///
/// * `numbers` - The numbers to combine; each is used exactly once
/// * `target` - The value to reach
/// * `config` - Search options (first solution only, dedup mode, parallelism)
///
/// # Errors
///
/// Returns an error if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use twentyfour::{Notation, SolverConfig, solve};
///
/// let config = SolverConfig {
///     first_only: true,
///     ..SolverConfig::default()
/// };
/// let solutions = solve(&[1, 2, 3, 4], 24, config).unwrap();
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(
///     solutions.render(Notation::Infix).unwrap(),
///     vec!["(1 + 2 + 3) * 4".to_string()]
/// );
/// ```
pub fn solve(numbers: &[i64], target: i64, config: SolverConfig) -> Result<Solutions, SolverError> {
    Solver::new(config).solve(numbers, target)
}
