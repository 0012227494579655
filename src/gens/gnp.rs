use itertools::Either;
use rand_distr::{Distribution, Geometric};

use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average out-degree of a vertex
    AvgDeg(f64),
}

/// `G(n,p)` digraphs contain every possible arc between `n` vertices with probability `p`
/// independent from each other.
///
/// Instead of flipping a coin for each of the `n^2` candidates, the generator jumps from one
/// selected candidate to the next by geometrically distributed gaps. Candidates dropped by
/// [`Gnp::no_loops`] and [`Gnp::acyclic`] are filtered from that stream.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: GnpType,
    no_loops: bool,
    acyclic: bool,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `prob` is not a valid probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "{prob} is not a probability");
        self.p = GnpType::Prob(prob);
        self
    }

    /// Drops self-loops
    pub fn no_loops(mut self) -> Self {
        self.no_loops = true;
        self
    }

    /// Only keeps arcs `(u, v)` with `u < v`, which makes the result acyclic
    pub fn acyclic(mut self) -> Self {
        self.acyclic = true;
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("probability of Gnp was not set"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = d / self.n as f64;
                assert!(
                    p.is_valid_probility(),
                    "average degree {d} is invalid for {} vertices",
                    self.n
                );
                p
            }
        }
    }
}

impl NumVerticesGen for Gnp {
    fn vertices(mut self, n: NumVertices) -> Self {
        self.n = n as u64;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl ArcGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Arc> {
        let p = self.probability();
        let (n, no_loops, acyclic) = (self.n, self.no_loops, self.acyclic);
        let candidates = n * n;

        let selected = match p {
            0.0 => Either::Left(Either::Left(std::iter::empty())),
            1.0 => Either::Left(Either::Right(0..candidates)),
            _ => Either::Right(GeometricJumps::new(rng, p, candidates)),
        };

        selected
            .map(move |x| Arc::from_u64(x, n))
            .filter(move |a| !(no_loops && a.is_loop()) && !(acyclic && !a.is_forward()))
    }
}

/// Strictly increasing values below `stop`, each included independently with probability `p`
struct GeometricJumps<'a, R> {
    rng: &'a mut R,
    distr: Geometric,
    next: u64,
    stop: u64,
}

impl<'a, R: Rng> GeometricJumps<'a, R> {
    /// ** Panics unless `0 < p < 1` **
    fn new(rng: &'a mut R, p: f64, stop: u64) -> Self {
        let Ok(distr) = Geometric::new(p) else {
            panic!("cannot jump with probability {p}");
        };

        Self {
            rng,
            distr,
            next: 0,
            stop,
        }
    }
}

impl<R: Rng> Iterator for GeometricJumps<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let x = self.next.checked_add(self.distr.sample(&mut *self.rng))?;
        if x >= self.stop {
            self.next = self.stop;
            return None;
        }

        self.next = x + 1;
        Some(x)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn jumps_are_increasing() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let jumps = GeometricJumps::new(rng, 0.1, 10_000).collect_vec();

        assert!(jumps.iter().tuple_windows().all(|(a, b)| a < b));
        assert!(jumps.iter().all(|&x| x < 10_000));
        // expected 1000
        assert!((800..1200).contains(&jumps.len()));
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        let n = 500;
        let arcs = Gnp::new().vertices(n).avg_deg(4.0).generate(rng);
        let avg = arcs.len() as f64 / n as f64;
        assert!((3.5..4.5).contains(&avg));
    }

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0);
        assert!(Gnp::new().vertices(7).prob(0.0).generate(rng).is_empty());

        let all = Gnp::new().vertices(4).prob(1.0).no_loops().generate(rng);
        assert_eq!(all.len(), 12);
        assert!(all.iter().all_unique());
    }

    #[test]
    #[should_panic]
    fn probability_not_set() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0);
        Gnp::new().vertices(3).generate(rng);
    }
}
