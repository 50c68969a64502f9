use log::debug;

use crate::expression::{Number, Operand};

/// Turns input numbers into operands.
///
/// With `share_equal_values`, every operand takes the slot of the first input
/// holding the same value; otherwise each keeps its own position.
pub fn to_operands(numbers: &[i64], share_equal_values: bool) -> Vec<Operand> {
    let operands: Vec<Operand> = numbers
        .iter()
        .enumerate()
        .map(|(position, &n)| {
            let slot = if share_equal_values {
                numbers.iter().position(|&m| m == n).unwrap_or(position)
            } else {
                position
            };
            Operand::new(Number::from_integer(n), slot)
        })
        .collect();

    debug!("Prepared {} operands", operands.len());
    operands
}
