use std::fmt::{Debug, Display};

use crate::vertex::VertexId;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An edge stored inside its source vertex: a payload, a weight and the target vertex.
///
/// There is no separate edge identity; an edge is addressed through its source vertex
/// and its position in that vertex's edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E, W> {
    pub(crate) value: E,
    pub(crate) weight: W,
    pub(crate) target: VertexId,
}

impl<E, W> Edge<E, W> {
    pub(crate) fn new(target: VertexId, value: E, weight: W) -> Self {
        Self {
            value,
            weight,
            target,
        }
    }

    /// Returns the vertex this edge points to
    #[inline]
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Returns the payload of this edge
    #[inline]
    pub fn value(&self) -> &E {
        &self.value
    }

    /// Returns a mutable reference to the payload of this edge
    #[inline]
    pub fn value_mut(&mut self) -> &mut E {
        &mut self.value
    }

    /// Returns a mutable reference to the weight of this edge
    #[inline]
    pub fn weight_mut(&mut self) -> &mut W {
        &mut self.weight
    }

    /// Overwrites the weight of this edge
    #[inline]
    pub fn set_weight(&mut self, weight: W) {
        self.weight = weight;
    }
}

impl<E, W: Copy> Edge<E, W> {
    /// Returns the weight of this edge
    #[inline]
    pub fn weight(&self) -> W {
        self.weight
    }
}

/// A structural view of a directed edge FROM `.0` TO `.1` without payload or weight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arc(pub VertexId, pub VertexId);

impl Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}->{})", self.0, self.1)
    }
}

impl Debug for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Arc {
    /// Returns *true* if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the arc by switching the endpoints
    pub fn reverse(&self) -> Self {
        Arc(self.1, self.0)
    }

    /// Returns *true* if the arc points from a smaller to a larger ID
    pub fn is_forward(&self) -> bool {
        self.0 < self.1
    }

    /// Simple bijection from `0..n^2` to all possible arcs between `n` vertices
    pub fn from_u64(x: u64, n: u64) -> Self {
        debug_assert!(x < n * n);

        let u = x / n;
        let v = x % n;
        Arc(u as VertexId, v as VertexId)
    }
}

impl From<(VertexId, VertexId)> for Arc {
    fn from(value: (VertexId, VertexId)) -> Self {
        Arc(value.0, value.1)
    }
}

impl From<&(VertexId, VertexId)> for Arc {
    fn from(value: &(VertexId, VertexId)) -> Self {
        Arc(value.0, value.1)
    }
}

impl From<&Arc> for Arc {
    fn from(value: &Arc) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_from_u64() {
        let n = 7u64;
        let arcs: Vec<Arc> = (0..n * n).map(|x| Arc::from_u64(x, n)).collect();
        assert_eq!(arcs.len(), 49);
        assert_eq!(arcs[0], Arc(0, 0));
        assert_eq!(arcs[8], Arc(1, 1));
        assert_eq!(arcs[48], Arc(6, 6));

        let mut sorted = arcs.clone();
        sorted.dedup();
        assert_eq!(sorted, arcs);
    }

    #[test]
    fn arc_helpers() {
        assert!(Arc(3, 3).is_loop());
        assert!(!Arc(2, 3).is_loop());
        assert_eq!(Arc(2, 3).reverse(), Arc(3, 2));
        assert!(Arc(2, 3).is_forward());
        assert_eq!(format!("{}", Arc(1, 4)), "(1->4)");
    }
}
