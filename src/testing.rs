/// Every undirected graph representation should pass this harness.
///
/// Expands to a `#[cfg(test)]` module that fuzzes the construction and
/// edge-editing traits of `$graph` against a hash-map mirror of the edge set.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use std::collections::HashMap;

            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            use crate::{ops::*, prelude::*, repr::*};

            /// Creates a list of random normalized weighted edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                (0..m_ub)
                    .filter_map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w = rng.random_range(-100..=100);

                        (u != v).then(|| Edge(u, v, w).normalized())
                    })
                    .collect_vec()
            }

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n).unwrap();

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert!(graph.is_singleton());

                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!((0..n).all(|u| graph.degree_of(u) == 0));
                }
            }

            #[test]
            fn graph_new_rejects_zero_vertices() {
                assert_eq!(<$graph>::new(0).unwrap_err(), GraphError::EmptyGraph);
            }

            #[test]
            fn edge_editing_mirrors_a_map() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5] {
                        let mut graph = <$graph>::new(n).unwrap();
                        let mut mirror: HashMap<(Node, Node), Weight> = HashMap::new();

                        for Edge(u, v, w) in random_edges(rng, n, m_ub) {
                            let inserted = graph.add_edge(u, v, w).unwrap();
                            assert_eq!(inserted, mirror.insert((u, v), w).is_none());

                            // symmetric lookup in both orientations
                            assert_eq!(graph.weight_of(u, v), Some(w));
                            assert_eq!(graph.weight_of(v, u), Some(w));
                        }

                        assert_eq!(graph.number_of_edges() as usize, mirror.len());

                        // delete roughly half of the stored edges
                        let victims = mirror
                            .keys()
                            .copied()
                            .enumerate()
                            .filter(|(i, _)| i % 2 == 0)
                            .map(|(_, e)| e)
                            .collect_vec();

                        for (u, v) in victims {
                            graph.remove_edge(u, v).unwrap();
                            mirror.remove(&(u, v));

                            // removal is total in both orientations
                            assert!(!graph.has_edge(u, v));
                            assert!(!graph.has_edge(v, u));

                            // a second removal must fail
                            assert_eq!(
                                graph.remove_edge(u, v).unwrap_err(),
                                GraphError::MissingEdge(u, v)
                            );

                            assert_eq!(graph.number_of_edges() as usize, mirror.len());
                        }

                        for ((u, v), w) in mirror {
                            assert_eq!(graph.weight_of(u, v), Some(w));
                        }
                    }
                }
            }

            #[test]
            fn repeated_insertion_overwrites_weight() {
                let mut graph = <$graph>::new(4).unwrap();

                assert!(graph.add_edge(0, 1, 7).unwrap());
                assert!(!graph.add_edge(1, 0, 3).unwrap());

                assert_eq!(graph.number_of_edges(), 1);
                assert_eq!(graph.weight_of(0, 1), Some(3));
                assert_eq!(graph.weight_of(1, 0), Some(3));
            }

            #[test]
            fn remove_then_readd_restores_state() {
                let mut graph = <$graph>::new(5).unwrap();
                graph
                    .add_edges([(0, 1, 4), (1, 2, -2), (2, 3, 9)])
                    .unwrap();

                graph.remove_edge(1, 2).unwrap();
                assert!(!graph.has_edge(1, 2));
                assert!(graph.add_edge(1, 2, -2).unwrap());

                assert_eq!(graph.number_of_edges(), 3);
                let edges = graph.ordered_edges(true).collect_vec();
                assert_eq!(edges, vec![Edge(0, 1, 4), Edge(1, 2, -2), Edge(2, 3, 9)]);
            }

            #[test]
            fn rejects_self_loops_and_invalid_vertices() {
                let mut graph = <$graph>::new(3).unwrap();

                assert_eq!(
                    graph.add_edge(1, 1, 5).unwrap_err(),
                    GraphError::SelfLoop(1)
                );
                assert_eq!(
                    graph.add_edge(0, 3, 5).unwrap_err(),
                    GraphError::InvalidVertex(3)
                );
                assert_eq!(
                    graph.remove_edge(7, 0).unwrap_err(),
                    GraphError::InvalidVertex(7)
                );
                assert_eq!(graph.number_of_edges(), 0);
            }

            #[test]
            fn adjacency_iteration_is_consistent() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [10 as NumNodes, 30] {
                    let mut graph = <$graph>::new(n).unwrap();
                    for Edge(u, v, w) in random_edges(rng, n, n * 4) {
                        graph.add_edge(u, v, w).unwrap();
                    }

                    let m = graph.number_of_edges();

                    // handshake lemma
                    let degree_sum: NumEdges = (0..n).map(|u| graph.degree_of(u)).sum();
                    assert_eq!(degree_sum, 2 * m);

                    // normalized edge iteration yields every edge exactly once
                    assert_eq!(graph.edges(true).count() as NumEdges, m);
                    assert_eq!(graph.edges(false).count() as NumEdges, 2 * m);
                    assert_eq!(
                        graph.ordered_edges(true).collect_vec(),
                        graph.edges(true).sorted_unstable().collect_vec()
                    );

                    // neighborhoods agree with edge lookups
                    for u in graph.vertices() {
                        for Neighbor { node: v, weight } in graph.neighbors_of(u) {
                            assert_eq!(graph.weight_of(v, u), Some(weight));
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
