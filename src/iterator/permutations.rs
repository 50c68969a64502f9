/// Iterates over all orderings of `items`, in lexicographic order of positions.
///
/// Items are never compared, so equal items at different positions still yield
/// separate (identical looking) orderings.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let indices = (0..items.len()).collect();
        Self {
            items,
            indices,
            started: false,
            done: false,
        }
    }

    /// Rearranges `indices` into the next larger ordering, returning false past the last one
    fn advance(&mut self) -> bool {
        let n = self.indices.len();
        if n < 2 {
            return false;
        }

        let Some(pivot) = (0..n - 1).rev().find(|&i| self.indices[i] < self.indices[i + 1]) else {
            return false;
        };

        let successor = (pivot + 1..n)
            .rev()
            .find(|&j| self.indices[j] > self.indices[pivot])
            .unwrap_or(pivot + 1);

        self.indices.swap(pivot, successor);
        self.indices[pivot + 1..].reverse();
        true
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }

        Some(self.indices.iter().map(|&i| self.items[i].clone()).collect())
    }
}
