use std::collections::HashSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Number, Operand, Operator, Program, Token};
use crate::iterator::{OperatorProduct, Permutations, is_canonical};
use crate::solver::config::{DedupMode, SolverConfig};
use crate::solver::errors::SolverError;
use crate::solver::solutions::Solutions;
use crate::utils::{to_operands, validate_numbers};

/// Exhaustive search for postfix programs that hit a target value
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the programs combining all `numbers` that evaluate to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` is empty.
    pub fn solve(&self, numbers: &[i64], target: i64) -> Result<Solutions, SolverError> {
        validate_numbers(numbers)?;

        let operands = to_operands(numbers, self.config.dedup == DedupMode::ByValue);
        let target = Number::from_integer(target);

        info!(
            "Searching {:?} for {} (first_only={}, dedup={:?}, parallel={})",
            numbers, target, self.config.first_only, self.config.dedup, self.config.parallel
        );

        let solutions = if self.config.parallel {
            self.search_parallel(&operands, target)
        } else {
            self.search_sequential(&operands, target)
        };

        let stats = solutions.stats();
        info!(
            "Found {} solutions: {} combinations, {} candidates, {} duplicates, {} evaluated, {} valid",
            solutions.len(),
            stats.combinations,
            stats.candidates,
            stats.duplicates,
            stats.evaluated,
            stats.valid
        );

        Ok(solutions)
    }

    fn search_sequential(&self, operands: &[Operand], target: Number) -> Solutions {
        let mut tried = HashSet::new();
        let mut found = Solutions::default();

        for ops in OperatorProduct::new(operands.len().saturating_sub(1)) {
            if self.search_combination(operands, &ops, target, &mut tried, &mut found) {
                break;
            }
        }

        found
    }

    /// Every ordering of a non-canonical combination repeats one of its canonical
    /// arrangement, so only canonical combinations are searched, each with its own
    /// tried set. Results are concatenated in enumeration order.
    fn search_parallel(&self, operands: &[Operand], target: Number) -> Solutions {
        let combinations: Vec<Vec<Operator>> =
            OperatorProduct::new(operands.len().saturating_sub(1))
                .filter(|ops| is_canonical(ops))
                .collect();

        debug!(
            "Dispatching {} operator combinations to the thread pool",
            combinations.len()
        );

        let search_one = |ops: &Vec<Operator>| {
            let mut tried = HashSet::new();
            let mut found = Solutions::default();
            self.search_combination(operands, ops, target, &mut tried, &mut found);
            found
        };

        if self.config.first_only {
            return combinations
                .par_iter()
                .map(search_one)
                .find_map_first(|found| (!found.is_empty()).then_some(found))
                .unwrap_or_default();
        }

        combinations
            .par_iter()
            .map(search_one)
            .collect::<Vec<_>>()
            .into_iter()
            .fold(Solutions::default(), |mut acc, found| {
                acc.merge(found);
                acc
            })
    }

    /// Tries every ordering of `operands` followed by `ops`; returns true when the
    /// search should stop.
    fn search_combination(
        &self,
        operands: &[Operand],
        ops: &[Operator],
        target: Number,
        tried: &mut HashSet<Program>,
        found: &mut Solutions,
    ) -> bool {
        debug!("Trying operator combination {:?}", ops);
        found.stats.combinations += 1;

        let tokens: Vec<Token> = operands
            .iter()
            .copied()
            .map(Token::Operand)
            .chain(ops.iter().copied().map(Token::Operator))
            .collect();

        for candidate in Permutations::new(tokens) {
            found.stats.candidates += 1;
            let program = Program::new(candidate);

            if tried.contains(&program) {
                found.stats.duplicates += 1;
                continue;
            }

            found.stats.evaluated += 1;
            let value = program.value();
            if value.is_some() {
                found.stats.valid += 1;
            }

            if value == Some(target) {
                debug!("Accepted '{}'", program);
                tried.insert(program.clone());
                found.programs.push(program);
                if self.config.first_only {
                    return true;
                }
            } else {
                tried.insert(program);
            }
        }

        false
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
