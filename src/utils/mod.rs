//! Input preparation helpers

mod errors;
mod operands;
mod validation;

pub use errors::UtilsError;
pub use operands::to_operands;
pub use validation::validate_numbers;
