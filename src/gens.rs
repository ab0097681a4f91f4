/*!
# Graph Generators

This module provides builder-style generators for random weighted graphs,
mainly intended for fuzzing the algorithms in this crate against brute-force
references.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnw::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The `RandomGraph` trait additionally abstracts the generation of whole graph
instances for all graph types implementing `GraphFromScratch`.
*/

use std::ops::RangeInclusive;

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{prelude::*, utils::Probability};

/// Trait for generators that allow setting the number of nodes.
///
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// `G(n,p,w)` graphs generate every normalized edge on `n` nodes with
/// probability `p` independent from each other, each carrying a weight drawn
/// uniformly from an inclusive range.
///
/// Only normalized candidates `(u, v)` with `u < v` are considered, so the
/// stream never emits self-loops or both orientations of the same edge.
#[derive(Debug, Clone)]
pub struct Gnw {
    n: NumNodes,
    p: f64,
    weights: RangeInclusive<Weight>,
}

impl Default for Gnw {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.0,
            weights: 1..=1,
        }
    }
}

impl Gnw {
    /// Creates a new empty `G(n,p,w)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = prob;
        self
    }

    /// Updates the inclusive weight range
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        assert!(weights.start() <= weights.end());
        self.weights = weights;
        self
    }
}

impl NumNodesGen for Gnw {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnw {
    /// Creates a streaming generator over random weighted edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        assert!(self.n > 0, "At least one node must be generated!");

        let n = self.n;
        let p = self.p;
        let weight_dist = Uniform::new_inclusive(*self.weights.start(), *self.weights.end())
            .expect("Invalid weight range");

        (0..n)
            .flat_map(move |u| ((u + 1)..n).map(move |v| (u, v)))
            .filter_map(move |(u, v)| {
                rng.random_bool(p)
                    .then(|| Edge(u, v, weight_dist.sample(rng)))
            })
    }
}

/// Trait for building full graph instances from the random models above.
///
/// Requires that the implementing type supports construction from a set of edges.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p,w)` graph with edge probability `p` and
    /// weights drawn uniformly from `weights`.
    fn gnw<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Weight>) -> Result<Self>
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph where every edge has weight `1`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        Self::gnw(rng, n, p, 1..=1)
    }
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnw<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Weight>) -> Result<Self>
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnw::new().nodes(n).prob(p).weights(weights).stream(rng),
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::repr::AdjArrayUndir;

    #[test]
    fn full_probability_yields_complete_graph() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for n in 1..20 {
            let graph = AdjArrayUndir::gnp(&mut rng, n, 1.0).unwrap();
            assert_eq!(graph.number_of_edges(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn zero_probability_yields_empty_graph() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let graph = AdjArrayUndir::gnp(&mut rng, 30, 0.0).unwrap();
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn edges_are_normalized_and_loop_free() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let edges = Gnw::new().nodes(25).prob(0.5).generate(&mut rng);

        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
    }

    #[test]
    fn weights_respect_inclusive_bounds() {
        let mut rng = Pcg64Mcg::seed_from_u64(4);
        let graph = AdjArrayUndir::gnw(&mut rng, 20, 1.0, -5..=5).unwrap();

        let mut seen_lo = false;
        let mut seen_hi = false;
        for Edge(_, _, w) in graph.edges(true) {
            assert!((-5..=5).contains(&w));
            seen_lo |= w == -5;
            seen_hi |= w == 5;
        }
        // 190 draws from 11 values, both endpoints should show up
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn unit_weights_by_default() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let edges = Gnw::new().nodes(10).prob(1.0).generate(&mut rng);
        assert!(edges.iter().all(|e| e.weight() == 1));
    }
}
