/*!
# Utilities

Small helpers shared across the crate:
- [`Probability`] validates probabilities for the random generators in [`gens`](crate::gens),
- [`ResetBuffer`] re-initializes caller-owned buffers in place so that matrices and search
  results can be reused across repeated computations without reallocation.
*/

use num::{One, Zero};

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// A growable buffer that can be cleared and fitted to a new size while keeping its allocation.
pub trait ResetBuffer<T> {
    /// Clears the buffer and refills it with `len` copies of `fill`.
    /// Capacity is only ever grown, never released.
    fn reset_to(&mut self, len: usize, fill: T);

    /// Clears the buffer and refills it with `len` values produced by `f(index)`.
    fn reset_with<F: FnMut(usize) -> T>(&mut self, len: usize, f: F);
}

impl<T: Clone> ResetBuffer<T> for Vec<T> {
    fn reset_to(&mut self, len: usize, fill: T) {
        self.clear();
        self.resize(len, fill);
    }

    fn reset_with<F: FnMut(usize) -> T>(&mut self, len: usize, f: F) {
        self.clear();
        self.extend((0..len).map(f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities() {
        for p in [0.0, 0.3, 1.0] {
            assert!(p.is_valid_probility());
        }
        for p in [-0.1, 1.01, 7.0] {
            assert!(!p.is_valid_probility());
        }
    }

    #[test]
    fn reset_keeps_allocation() {
        let mut buf = vec![7u32; 100];
        let cap = buf.capacity();

        buf.reset_to(10, 0);
        assert_eq!(buf, vec![0; 10]);
        assert_eq!(buf.capacity(), cap);

        buf.reset_with(4, |i| i as u32 * 2);
        assert_eq!(buf, vec![0, 2, 4, 6]);

        buf.reset_to(150, 1);
        assert_eq!(buf.len(), 150);
        assert!(buf.iter().all(|&x| x == 1));
    }
}
