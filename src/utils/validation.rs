use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if no numbers were given.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("Number list is empty");
        return Err(UtilsError::EmptyNumbers);
    }

    Ok(())
}
