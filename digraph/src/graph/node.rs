use super::arc::Arc;
use super::NodeIndex;

/// Transient state written by the traversal algorithms.
///
/// Kept apart from the payload so that a search never
/// overwrites application data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bookkeeping<W> {
    pub(crate) marked: bool,
    pub(crate) cost: Option<W>,
    pub(crate) previous: Option<NodeIndex>,
    pub(crate) finalized: bool,
}

impl<W> Default for Bookkeeping<W> {
    fn default() -> Self {
        Bookkeeping {
            marked: false,
            cost: None,
            previous: None,
            finalized: false,
        }
    }
}

/// A single vertex, owned by its [Graph](super::Graph).
#[derive(Debug, Clone)]
pub struct Node<T, W> {
    index: NodeIndex,
    payload: T,
    arcs: Vec<Arc<W>>,
    pub(crate) search: Bookkeeping<W>,
}

impl<T, W> Node<T, W>
where
    W: Copy,
{
    pub(crate) fn new(index: NodeIndex, payload: T) -> Self {
        Self {
            index,
            payload,
            arcs: Vec::new(),
            search: Bookkeeping::default(),
        }
    }

    /// Slot this node occupies in its graph.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    pub(crate) fn into_payload(self) -> T {
        self.payload
    }

    /// Outgoing arcs, in the order they were added.
    pub fn arcs(&self) -> &[Arc<W>] {
        &self.arcs
    }

    /// The arc from this node to `destination`, if there is one.
    pub fn arc(&self, destination: NodeIndex) -> Option<&Arc<W>> {
        self.arcs.iter().find(|a| a.destination() == destination)
    }

    pub(crate) fn push_arc(&mut self, destination: NodeIndex, weight: W) {
        self.arcs.push(Arc::new(destination, weight));
    }

    pub(crate) fn take_arc(&mut self, destination: NodeIndex) -> Option<Arc<W>> {
        let position = self
            .arcs
            .iter()
            .position(|a| a.destination() == destination)?;
        Some(self.arcs.remove(position))
    }

    pub fn is_marked(&self) -> bool {
        self.search.marked
    }

    pub fn set_marked(&mut self, marked: bool) {
        self.search.marked = marked;
    }

    /// Best known cost from the start of the last uniform-cost search.
    ///
    /// `None` means the node has not been reached (infinite cost).
    pub fn cost(&self) -> Option<W> {
        self.search.cost
    }

    /// The node this one was discovered from during the last search.
    pub fn previous(&self) -> Option<NodeIndex> {
        self.search.previous
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arcs_keep_insertion_order() {
        let mut node: Node<&str, u32> = Node::new(0, "A");
        node.push_arc(3, 1);
        node.push_arc(1, 7);
        node.push_arc(2, 4);

        let order: Vec<NodeIndex> = node.arcs().iter().map(|a| a.destination()).collect();
        assert_eq!(order, vec![3, 1, 2]);

        assert_eq!(node.take_arc(1).map(|a| a.weight()), Some(7));
        assert_eq!(node.take_arc(1), None);

        let order: Vec<NodeIndex> = node.arcs().iter().map(|a| a.destination()).collect();
        assert_eq!(order, vec![3, 2]);
    }

    #[test]
    fn fresh_node_has_no_search_state() {
        let node: Node<&str, u32> = Node::new(4, "E");
        assert_eq!(node.index(), 4);
        assert!(!node.is_marked());
        assert_eq!(node.cost(), None);
        assert_eq!(node.previous(), None);
    }
}
