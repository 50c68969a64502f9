use crate::expression::Operator;

/// Cartesian power of [`Operator::ALL`], last position varying fastest
#[derive(Debug, Clone)]
pub struct OperatorProduct {
    digits: Vec<usize>,
    done: bool,
}

impl OperatorProduct {
    pub fn new(repeat: usize) -> Self {
        Self {
            digits: vec![0; repeat],
            done: false,
        }
    }

    /// Number of combinations this iterator yields in total
    pub fn total(repeat: usize) -> usize {
        Operator::ALL.len().pow(repeat as u32)
    }
}

impl Iterator for OperatorProduct {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.digits.iter().map(|&d| Operator::ALL[d]).collect();

        // odometer step
        self.done = true;
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < Operator::ALL.len() {
                self.done = false;
                break;
            }
            *digit = 0;
        }

        Some(current)
    }
}

/// Whether `ops` is the first arrangement of its multiset in [`OperatorProduct`] order
pub fn is_canonical(ops: &[Operator]) -> bool {
    ops.windows(2).all(|pair| pair[0] <= pair[1])
}
