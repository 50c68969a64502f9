mod config;
mod core;
mod errors;
mod solutions;

pub use config::{DedupMode, SolverConfig};
pub use self::core::Solver;
pub use errors::SolverError;
pub use solutions::{SearchStats, Solutions};
