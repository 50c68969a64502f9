use std::ops::AddAssign;

use crate::expression::{Notation, Program, format_program};
use crate::solver::errors::SolverError;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Operator combinations whose orderings were enumerated
    pub combinations: usize,
    /// Token orderings produced by the generator
    pub candidates: usize,
    /// Orderings skipped because the same sequence was already tried
    pub duplicates: usize,
    pub evaluated: usize,
    /// Evaluated programs that reduced to a single value
    pub valid: usize,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.combinations += other.combinations;
        self.candidates += other.candidates;
        self.duplicates += other.duplicates;
        self.evaluated += other.evaluated;
        self.valid += other.valid;
    }
}

/// Accepted programs in the order they were found
#[derive(Debug, Clone, Default)]
pub struct Solutions {
    pub(crate) programs: Vec<Program>,
    pub(crate) stats: SearchStats,
}

impl Solutions {
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Program> {
        self.programs.iter()
    }

    pub fn into_programs(self) -> Vec<Program> {
        self.programs
    }

    /// Renders every solution in the given notation.
    ///
    /// # Errors
    ///
    /// Fails only if a stored program does not reduce to one expression.
    pub fn render(&self, notation: Notation) -> Result<Vec<String>, SolverError> {
        self.programs
            .iter()
            .map(|program| format_program(program, notation).map_err(SolverError::from))
            .collect()
    }

    pub(crate) fn merge(&mut self, other: Solutions) {
        self.programs.extend(other.programs);
        self.stats += other.stats;
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Program;
    type IntoIter = std::slice::Iter<'a, Program>;

    fn into_iter(self) -> Self::IntoIter {
        self.programs.iter()
    }
}
