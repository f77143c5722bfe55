//! Uniform-cost search: Dijkstra's algorithm for a single target.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;
use std::fmt::Debug;

use num::{CheckedAdd, Zero};
use tracing::{debug, trace};

use crate::algorithm::SearchQueue;
use crate::errors::{SearchError, SearchResult};
use crate::graph::{Arc, Graph, GraphPath, NodeIndex};

/// A node waiting in the queue, with the cost it had when it was queued.
#[derive(Debug, Clone, Copy)]
struct CostElement<W> {
    cost: W,
    index: NodeIndex,
}

impl<W> PartialEq for CostElement<W>
where
    W: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W> Eq for CostElement<W> where W: Ord {}

impl<W> Ord for CostElement<W>
where
    W: Ord,
{
    // Cheaper sorts higher, so the max-heap pops the cheapest first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.index.cmp(&other.index))
            .reverse()
    }
}

impl<W> PartialOrd for CostElement<W>
where
    W: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always yields the cheapest known node next.
#[derive(Debug)]
pub struct CostQueue<W>
where
    W: Ord,
{
    queue: BinaryHeap<CostElement<W>>,
}

impl<W> Default for CostQueue<W>
where
    W: Ord,
{
    fn default() -> Self {
        CostQueue {
            queue: BinaryHeap::new(),
        }
    }
}

impl<W> SearchQueue for CostQueue<W>
where
    W: Ord,
{
    type Candidate = (W, NodeIndex);

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|e| (e.cost, e.index))
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push(CostElement {
            cost: item.0,
            index: item.1,
        });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Find the cheapest path from `start` to `target`.
///
/// The graph must have been prepared with
/// [Graph::reset_search_state] since the last search. Afterwards every
/// reached node holds its best known cost and the node it was reached
/// from, and every node which was reached is marked.
///
/// A node is finalized the first time it leaves the queue. Its cost can
/// not improve after that, so it is never relaxed again and any older
/// queue entries for it are skipped.
///
/// Fails with [SearchError::NoPathFound] when the target can not be
/// reached, with [SearchError::NegativeWeight] if a negative arc is
/// encountered, and with [SearchError::CostOverflow] when a path cost
/// no longer fits in `W`.
pub fn uniform_cost_search<T, W>(
    graph: &mut Graph<T, W>,
    start: NodeIndex,
    target: NodeIndex,
) -> SearchResult<GraphPath<W>>
where
    W: Copy + Ord + Zero + CheckedAdd + Debug,
{
    graph.node(target)?;

    let origin = graph.node_mut(start)?;
    origin.search.cost = Some(W::zero());
    origin.search.previous = None;
    origin.set_marked(true);

    let mut queue = CostQueue::default();
    queue.push((W::zero(), start));

    let mut expanded = 0usize;
    while let Some((cost, index)) = queue.pop() {
        let node = graph.node_mut(index)?;
        if node.search.finalized {
            continue;
        }
        node.search.finalized = true;

        if index == target {
            let path = graph.trace_back(target)?;
            debug!(
                start,
                target,
                ?cost,
                arcs = path.len(),
                expanded,
                "found cheapest path"
            );
            return Ok(path);
        }
        expanded += 1;

        let arcs: Vec<Arc<W>> = node.arcs().to_vec();
        for arc in arcs {
            let to = arc.destination();
            if arc.weight() < W::zero() {
                return Err(SearchError::NegativeWeight { from: index, to });
            }

            let child = graph.node_mut(to)?;
            if child.search.finalized {
                continue;
            }
            let candidate = cost
                .checked_add(&arc.weight())
                .ok_or(SearchError::CostOverflow { from: index, to })?;
            child.set_marked(true);

            if child.search.cost.map_or(true, |known| candidate < known) {
                trace!(from = index, to, cost = ?candidate, "relaxed");
                child.search.cost = Some(candidate);
                child.search.previous = Some(index);
                queue.push((candidate, to));
            }
        }
    }

    debug!(start, target, expanded, "no path found");
    Err(SearchError::NoPathFound { start, target })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::GraphError;

    use proptest::prelude::*;

    fn abcd() -> Graph<&'static str, u32> {
        let mut graph = Graph::new(5);
        for (i, label) in ["A", "B", "C", "D", "Z"].iter().enumerate() {
            graph.add_node(*label, i).unwrap();
        }
        graph.add_arc(0, 1, 1).unwrap();
        graph.add_arc(0, 2, 4).unwrap();
        graph.add_arc(1, 2, 1).unwrap();
        graph.add_arc(1, 3, 5).unwrap();
        graph.add_arc(2, 3, 1).unwrap();
        graph
    }

    fn labels(graph: &Graph<&'static str, u32>, path: &GraphPath<u32>) -> Vec<&'static str> {
        path.nodes()
            .iter()
            .map(|i| *graph.node(*i).unwrap().payload())
            .collect()
    }

    #[test]
    fn cost_queue_pops_cheapest() {
        let mut queue = CostQueue::default();
        queue.push((7u32, 0));
        queue.push((2, 1));
        queue.push((5, 2));
        queue.push((2, 3));
        assert_eq!(queue.len(), 4);

        let order: Vec<(u32, NodeIndex)> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(order, vec![(2, 1), (2, 3), (5, 2), (7, 0)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn cheapest_path_is_not_fewest_hops() {
        let mut graph = abcd();
        graph.reset_search_state();
        let path = uniform_cost_search(&mut graph, 0, 3).unwrap();

        assert_eq!(labels(&graph, &path), vec!["A", "B", "C", "D"]);
        assert_eq!(path.weight(), Some(3));
        assert_eq!(path.weights(), &[1, 1, 1]);
        assert_eq!(graph.node(3).unwrap().cost(), Some(3));
        assert_eq!(graph.node(2).unwrap().previous(), Some(1));
    }

    #[test]
    fn unreachable_target_is_reported() {
        let mut graph = abcd();
        graph.reset_search_state();
        assert_eq!(
            uniform_cost_search(&mut graph, 0, 4),
            Err(SearchError::NoPathFound {
                start: 0,
                target: 4
            })
        );
    }

    #[test]
    fn start_is_target() {
        let mut graph = abcd();
        graph.reset_search_state();
        let path = uniform_cost_search(&mut graph, 2, 2).unwrap();
        assert_eq!(path.nodes(), &[2]);
        assert_eq!(path.weight(), Some(0));
    }

    #[test]
    fn missing_endpoints() {
        let mut graph = abcd();
        graph.remove_node(4).unwrap();
        graph.reset_search_state();
        assert_eq!(
            uniform_cost_search(&mut graph, 0, 4),
            Err(SearchError::Graph(GraphError::NodeMissing(4)))
        );
        assert_eq!(
            uniform_cost_search(&mut graph, 12, 0),
            Err(SearchError::Graph(GraphError::OutOfRange {
                index: 12,
                capacity: 5
            }))
        );
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut graph: Graph<&str, i32> = Graph::new(3);
        graph.add_node("A", 0).unwrap();
        graph.add_node("B", 1).unwrap();
        graph.add_node("C", 2).unwrap();
        graph.add_arc(0, 1, 2).unwrap();
        graph.add_arc(1, 2, -1).unwrap();

        assert_eq!(
            graph.shortest_path(0, 2),
            Err(SearchError::NegativeWeight { from: 1, to: 2 })
        );
    }

    #[test]
    fn cost_overflow_is_reported() {
        let mut graph: Graph<&str, u32> = Graph::new(3);
        graph.add_node("A", 0).unwrap();
        graph.add_node("B", 1).unwrap();
        graph.add_node("C", 2).unwrap();
        graph.add_arc(0, 1, 3_000_000_000).unwrap();
        graph.add_arc(1, 2, 3_000_000_000).unwrap();

        assert_eq!(
            graph.shortest_path(0, 2),
            Err(SearchError::CostOverflow { from: 1, to: 2 })
        );

        // The first arc alone still fits.
        let path = graph.shortest_path(0, 1).unwrap();
        assert_eq!(path.weight(), Some(3_000_000_000));
    }

    #[test]
    fn finalized_nodes_are_not_relaxed() {
        // B is settled at cost 1 before the arc C -> B (cost 2 + 0) is seen.
        let mut graph: Graph<&str, u32> = Graph::new(4);
        for (i, label) in ["A", "B", "C", "D"].iter().enumerate() {
            graph.add_node(*label, i).unwrap();
        }
        graph.add_arc(0, 1, 1).unwrap();
        graph.add_arc(0, 2, 2).unwrap();
        graph.add_arc(2, 1, 0).unwrap();
        graph.add_arc(1, 3, 10).unwrap();

        let path = graph.shortest_path(0, 3).unwrap();
        assert_eq!(path.nodes(), &[0, 1, 3]);
        assert_eq!(path.weight(), Some(11));
        assert_eq!(graph.node(1).unwrap().previous(), Some(0));
    }

    #[test]
    fn reset_makes_searches_repeatable() {
        let mut graph = abcd();
        graph.reset_search_state();
        graph.clear_marks();
        let first = uniform_cost_search(&mut graph, 0, 3).unwrap();

        graph.reset_search_state();
        graph.clear_marks();
        let second = uniform_cost_search(&mut graph, 0, 3).unwrap();
        assert_eq!(first, second);

        graph.reset_search_state();
        graph.reset_search_state();
        graph.clear_marks();
        let third = uniform_cost_search(&mut graph, 0, 3).unwrap();
        assert_eq!(first, third);
    }

    fn arbitrary_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
        (1usize..12).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0u32..20), 0..40),
            )
        })
    }

    // Cheapest cost by exhaustive relaxation, as a reference.
    fn bellman_ford(n: usize, graph: &Graph<usize, u32>, start: usize) -> Vec<Option<u32>> {
        let mut best = vec![None; n];
        best[start] = Some(0);
        for _ in 0..n {
            for node in graph.iter() {
                if let Some(cost) = best[node.index()] {
                    for arc in node.arcs() {
                        let candidate = cost + arc.weight();
                        if best[arc.destination()].map_or(true, |b| candidate < b) {
                            best[arc.destination()] = Some(candidate);
                        }
                    }
                }
            }
        }
        best
    }

    proptest! {
        #[test]
        fn finds_minimum_cost((n, arcs) in arbitrary_graph(), start in 0usize..12, target in 0usize..12) {
            let start = start % n;
            let target = target % n;

            let mut graph = Graph::new(n);
            for i in 0..n {
                graph.add_node(i, i).unwrap();
            }
            for (from, to, weight) in arcs {
                let _ = graph.add_arc(from, to, weight);
            }
            let expected = bellman_ford(n, &graph, start)[target];

            match graph.shortest_path(start, target) {
                Ok(path) => {
                    prop_assert_eq!(path.weight(), expected);
                    prop_assert_eq!(path.origin(), start);
                    prop_assert_eq!(path.destination(), target);
                    for (pair, weight) in path.nodes().windows(2).zip(path.weights()) {
                        let arc = graph.get_arc(pair[0], pair[1]).unwrap();
                        prop_assert_eq!(arc.weight(), *weight);
                    }
                }
                Err(e) => {
                    prop_assert_eq!(e, SearchError::NoPathFound { start, target });
                    prop_assert_eq!(expected, None);
                }
            }

            // A second run over the same graph gives the same answer.
            let first = graph.shortest_path(start, target);
            let second = graph.shortest_path(start, target);
            prop_assert_eq!(first, second);
        }
    }
}
