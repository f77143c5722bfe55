use num::{CheckedAdd, Zero};

use super::NodeIndex;

/// An ordered route through a graph, from the search start
/// to the node the search was looking for, inclusive.
///
/// A path always holds at least one node. When a search
/// finds nothing it returns an error instead of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath<W> {
    pub(crate) nodes: Vec<NodeIndex>,
    pub(crate) weights: Vec<W>,
}

impl<W> GraphPath<W>
where
    W: Copy,
{
    pub fn new(origin: NodeIndex) -> Self {
        Self {
            nodes: vec![origin],
            weights: Vec::new(),
        }
    }

    /// Number of arcs in the path.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when the path starts and ends at the same node.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// Weights of the traversed arcs, in path order.
    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    pub fn origin(&self) -> NodeIndex {
        self.nodes[0]
    }

    pub fn destination(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    // Paths are reconstructed backwards, from target to start.
    pub(crate) fn prepend(&mut self, node: NodeIndex, weight: W) {
        self.nodes.insert(0, node);
        self.weights.insert(0, weight);
    }
}

impl<W> GraphPath<W>
where
    W: Copy + Zero + CheckedAdd,
{
    /// Total weight of every arc in the path, or `None` if the
    /// sum does not fit in `W`.
    pub fn weight(&self) -> Option<W> {
        self.weights
            .iter()
            .try_fold(W::zero(), |total, w| total.checked_add(w))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_node_path() {
        let path: GraphPath<u32> = GraphPath::new(5);
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.origin(), 5);
        assert_eq!(path.destination(), 5);
        assert_eq!(path.weight(), Some(0));
    }

    #[test]
    fn prepend_builds_from_the_back() {
        let mut path: GraphPath<u32> = GraphPath::new(3);
        path.prepend(2, 1);
        path.prepend(0, 4);

        assert_eq!(path.nodes(), &[0, 2, 3]);
        assert_eq!(path.weights(), &[4, 1]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.weight(), Some(5));
    }

    #[test]
    fn weight_overflow_is_none() {
        let mut path: GraphPath<u32> = GraphPath::new(2);
        path.prepend(1, 3_000_000_000);
        path.prepend(0, 3_000_000_000);
        assert_eq!(path.len(), 2);
        assert_eq!(path.weight(), None);
        assert_eq!(path.origin(), 0);
        assert_eq!(path.destination(), 3);
    }
}
