/// How operands built from equal input numbers are told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupMode {
    /// Every input position is its own operand, even when values repeat
    #[default]
    BySlot,
    /// Inputs with equal values are interchangeable
    ByValue,
}

/// Configuration for the search
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Stop at the first program that hits the target
    pub first_only: bool,
    pub dedup: DedupMode,
    /// Spread operator combinations over the rayon thread pool
    pub parallel: bool,
}
