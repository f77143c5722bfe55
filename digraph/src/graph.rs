//! Fixed-capacity directed graph and its building blocks.

use std::fmt::Debug;

use num::{CheckedAdd, Zero};
use tracing::debug;

use crate::algorithm::{basic, ucs};
use crate::errors::{GraphError, Result, SearchResult};

mod arc;
mod node;
mod path;

pub use arc::Arc;
pub use node::Node;
pub use path::GraphPath;

/// Identity of a node: the slot it occupies in its graph.
pub type NodeIndex = usize;

/// A directed graph with a fixed number of node slots.
///
/// The graph owns every node, and every node owns its outgoing arcs.
/// Arcs and search back references only ever hold a [NodeIndex],
/// so removing a node first purges every arc which points at it.
#[derive(Debug, Clone)]
pub struct Graph<T, W> {
    slots: Vec<Option<Node<T, W>>>,
    count: usize,
}

impl<T, W> Graph<T, W>
where
    W: Copy,
{
    /// Create an empty graph with room for `capacity` nodes.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, count: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Every slot, occupied or not, in index order.
    pub fn nodes(&self) -> &[Option<Node<T, W>>] {
        &self.slots
    }

    /// Occupied nodes in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Node<T, W>> {
        self.slots.iter().flatten()
    }

    fn check(&self, index: NodeIndex) -> Result<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                index,
                capacity: self.slots.len(),
            })
        }
    }

    pub fn contains_node(&self, index: NodeIndex) -> bool {
        self.slots.get(index).map_or(false, Option::is_some)
    }

    pub fn node(&self, index: NodeIndex) -> Result<&Node<T, W>> {
        self.check(index)?;
        self.slots[index]
            .as_ref()
            .ok_or(GraphError::NodeMissing(index))
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> Result<&mut Node<T, W>> {
        self.check(index)?;
        self.slots[index]
            .as_mut()
            .ok_or(GraphError::NodeMissing(index))
    }

    /// Place a new, unmarked node holding `payload` at `index`.
    pub fn add_node(&mut self, payload: T, index: NodeIndex) -> Result<NodeIndex> {
        self.check(index)?;
        let slot = &mut self.slots[index];
        if slot.is_some() {
            return Err(GraphError::NodeOccupied(index));
        }
        *slot = Some(Node::new(index, payload));
        self.count += 1;
        Ok(index)
    }

    /// Remove the node at `index` along with every arc leading to it.
    ///
    /// Returns the payload of the removed node, or `None` when the
    /// slot was already empty.
    pub fn remove_node(&mut self, index: NodeIndex) -> Result<Option<T>> {
        self.check(index)?;
        let removed = match self.slots[index].take() {
            Some(node) => node,
            None => return Ok(None),
        };

        let mut purged = 0;
        for node in self.slots.iter_mut().flatten() {
            if node.take_arc(index).is_some() {
                purged += 1;
            }
        }
        self.count -= 1;
        debug!(index, purged, "removed node");

        Ok(Some(removed.into_payload()))
    }

    /// Add a directed arc. The reverse arc is not created.
    pub fn add_arc(&mut self, from: NodeIndex, to: NodeIndex, weight: W) -> Result<()> {
        self.node(to)?;
        let source = self.node_mut(from)?;
        if source.arc(to).is_some() {
            return Err(GraphError::ArcExists(from, to));
        }
        source.push_arc(to, weight);
        Ok(())
    }

    /// Remove the arc from `from` to `to`, returning it if it existed.
    pub fn remove_arc(&mut self, from: NodeIndex, to: NodeIndex) -> Result<Option<Arc<W>>> {
        self.node(to)?;
        Ok(self.node_mut(from)?.take_arc(to))
    }

    pub fn get_arc(&self, from: NodeIndex, to: NodeIndex) -> Result<&Arc<W>> {
        self.node(to)?;
        self.node(from)?
            .arc(to)
            .ok_or(GraphError::ArcMissing(from, to))
    }

    /// Unmark every node, ready for another traversal.
    pub fn clear_marks(&mut self) {
        for node in self.slots.iter_mut().flatten() {
            node.search.marked = false;
        }
    }

    /// Forget costs and back references left by a previous
    /// uniform-cost or breadth-first search.
    pub fn reset_search_state(&mut self) {
        for node in self.slots.iter_mut().flatten() {
            node.search.cost = None;
            node.search.previous = None;
            node.search.finalized = false;
        }
    }

    /// Walk `previous` links back from `target` to the node which has none.
    pub(crate) fn trace_back(&self, target: NodeIndex) -> Result<GraphPath<W>> {
        let mut path = GraphPath::new(target);
        let mut current = self.node(target)?;
        while let Some(previous) = current.previous() {
            let weight = self.get_arc(previous, current.index())?.weight();
            path.prepend(previous, weight);
            current = self.node(previous)?;
        }
        Ok(path)
    }

    /// See [basic::depth_first].
    pub fn depth_first<F>(&mut self, start: NodeIndex, visitor: F) -> Result<usize>
    where
        F: FnMut(&Node<T, W>),
    {
        basic::depth_first(self, start, visitor)
    }

    /// See [basic::breadth_first].
    pub fn breadth_first<F>(&mut self, start: NodeIndex, visitor: F) -> Result<usize>
    where
        F: FnMut(&Node<T, W>),
    {
        basic::breadth_first(self, start, visitor)
    }
}

impl<T, W> Graph<T, W>
where
    T: PartialEq,
    W: Copy,
{
    /// First node, in index order, whose payload equals `payload`.
    pub fn find(&self, payload: &T) -> Option<NodeIndex> {
        self.iter().find(|n| n.payload() == payload).map(Node::index)
    }

    /// See [basic::breadth_first_search].
    pub fn breadth_first_search<F>(
        &mut self,
        start: NodeIndex,
        visitor: F,
        target: &T,
    ) -> SearchResult<GraphPath<W>>
    where
        F: FnMut(&Node<T, W>),
    {
        basic::breadth_first_search(self, start, visitor, target)
    }
}

impl<T, W> Graph<T, W>
where
    W: Copy + Ord + Zero + CheckedAdd + Debug,
{
    /// See [ucs::uniform_cost_search].
    pub fn uniform_cost_search(
        &mut self,
        start: NodeIndex,
        target: NodeIndex,
    ) -> SearchResult<GraphPath<W>> {
        ucs::uniform_cost_search(self, start, target)
    }

    /// Reset all search state, then find the cheapest path
    /// from `start` to `target`.
    pub fn shortest_path(
        &mut self,
        start: NodeIndex,
        target: NodeIndex,
    ) -> SearchResult<GraphPath<W>> {
        self.reset_search_state();
        self.clear_marks();
        self.uniform_cost_search(start, target)
    }
}
