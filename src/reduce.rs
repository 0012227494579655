/*!
# Weight Reducers

A multigraph may hold several edges between the same ordered pair of vertices. When building a
[`WeightedAdjacencyMatrix`](crate::repr::WeightedAdjacencyMatrix) their weights are collapsed
into a single cell by an [`EdgeWeightReducer`]: the first edge of a pair is seeded with
`reduce(identity, w)` and every further edge is folded in with `reduce(cell, w)`.

A reducer must be associative and satisfy `reduce(identity, x) == x` for all finite `x`.
For commutative reducers the resulting cell is independent of the edge order.

Provided reducers:
- [`MinimumReducer`]: identity `+inf`, keeps the lightest edge,
- [`MaximumReducer`]: identity `-inf`, keeps the heaviest edge,
- [`SumReducer`]: identity `0`, adds all weights,
- [`FnReducer`]: any identity / closure pair supplied by the caller.
*/

use crate::weight::*;

/// Associative fold collapsing parallel edge weights into a single value.
pub trait EdgeWeightReducer<W: Weight> {
    /// Neutral element of [`EdgeWeightReducer::reduce`]
    fn identity(&self) -> W;

    /// Folds `weight` into the accumulated value `acc`
    fn reduce(&self, acc: W, weight: W) -> W;
}

/// Keeps the minimum weight; short-circuits if either operand is `+inf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimumReducer;

impl<W: Weight> EdgeWeightReducer<W> for MinimumReducer {
    fn identity(&self) -> W {
        W::positive_infinity()
    }

    fn reduce(&self, acc: W, weight: W) -> W {
        min_weight(acc, weight)
    }
}

/// Keeps the maximum weight; short-circuits if either operand is `-inf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaximumReducer;

impl<W: Weight> EdgeWeightReducer<W> for MaximumReducer {
    fn identity(&self) -> W {
        W::negative_infinity()
    }

    fn reduce(&self, acc: W, weight: W) -> W {
        max_weight(acc, weight)
    }
}

/// Sums all weights.
/// ** Panics if a finite sum has no finite value in the weight type **
#[derive(Debug, Default, Clone, Copy)]
pub struct SumReducer;

impl<W: Weight> EdgeWeightReducer<W> for SumReducer {
    fn identity(&self) -> W {
        W::zero()
    }

    fn reduce(&self, acc: W, weight: W) -> W {
        acc.infinite_sum(weight)
    }
}

/// A reducer built from an identity value and a closure.
///
/// # Examples
/// ```
/// use digraphs::reduce::*;
///
/// // keeps the weight of the most recently inserted edge
/// let last = FnReducer::new(0i32, |_, w| w);
/// assert_eq!(last.reduce(last.identity(), 4), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnReducer<W, F> {
    identity: W,
    reduce: F,
}

impl<W, F> FnReducer<W, F>
where
    W: Weight,
    F: Fn(W, W) -> W,
{
    /// Creates a new reducer from an identity value and a reduction closure
    pub fn new(identity: W, reduce: F) -> Self {
        Self { identity, reduce }
    }
}

impl<W, F> EdgeWeightReducer<W> for FnReducer<W, F>
where
    W: Weight,
    F: Fn(W, W) -> W,
{
    fn identity(&self) -> W {
        self.identity
    }

    fn reduce(&self, acc: W, weight: W) -> W {
        (self.reduce)(acc, weight)
    }
}
