//! Unweighted traversals: depth-first, breadth-first, and a
//! breadth-first search for a target payload.

use std::collections::VecDeque;
use std::default::Default;

use tracing::debug;

use crate::algorithm::SearchQueue;
use crate::errors::{Result, SearchError, SearchResult};
use crate::graph::{Graph, GraphPath, Node, NodeIndex};

#[derive(Debug)]
pub struct DepthQueue<S> {
    queue: VecDeque<S>,
}

impl<S> Default for DepthQueue<S> {
    fn default() -> Self {
        DepthQueue {
            queue: VecDeque::new(),
        }
    }
}

impl<S> SearchQueue for DepthQueue<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push_front(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Debug)]
pub struct BreadthQueue<S> {
    queue: VecDeque<S>,
}

impl<S> Default for BreadthQueue<S> {
    fn default() -> Self {
        BreadthQueue {
            queue: VecDeque::new(),
        }
    }
}

impl<S> SearchQueue for BreadthQueue<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push_back(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

fn destinations<T, W>(node: &Node<T, W>) -> Vec<NodeIndex>
where
    W: Copy,
{
    node.arcs().iter().map(|a| a.destination()).collect()
}

/// Pre-order depth-first traversal from `start`.
///
/// Each reachable, unmarked node is passed to `visitor` and then marked.
/// Children are explored in the order their arcs were added, exactly
/// as a recursive walk would, but on an explicit stack so deep graphs
/// cannot overflow the call stack.
///
/// Returns the number of nodes visited.
pub fn depth_first<T, W, F>(
    graph: &mut Graph<T, W>,
    start: NodeIndex,
    mut visitor: F,
) -> Result<usize>
where
    W: Copy,
    F: FnMut(&Node<T, W>),
{
    graph.node(start)?;

    let mut stack = DepthQueue::default();
    stack.push(start);

    let mut visited = 0;
    while let Some(index) = stack.pop() {
        let node = graph.node_mut(index)?;
        if node.is_marked() {
            continue;
        }
        visitor(&*node);
        node.set_marked(true);
        visited += 1;

        // Pushed in reverse so the first arc is popped first.
        for child in destinations(node).into_iter().rev() {
            if !graph.node(child)?.is_marked() {
                stack.push(child);
            }
        }
    }

    debug!(start, visited, "depth first traversal finished");
    Ok(visited)
}

/// Level-order breadth-first traversal from `start`.
///
/// Nodes are marked when they are queued, so each is visited at most once.
/// Returns the number of nodes visited.
pub fn breadth_first<T, W, F>(
    graph: &mut Graph<T, W>,
    start: NodeIndex,
    mut visitor: F,
) -> Result<usize>
where
    W: Copy,
    F: FnMut(&Node<T, W>),
{
    graph.node_mut(start)?.set_marked(true);

    let mut queue = BreadthQueue::default();
    queue.push(start);

    let mut visited = 0;
    while let Some(index) = queue.pop() {
        let node = graph.node(index)?;
        visitor(node);
        visited += 1;

        for child in destinations(node) {
            let child = graph.node_mut(child)?;
            if !child.is_marked() {
                child.set_marked(true);
                queue.push(child.index());
            }
        }
    }

    debug!(start, visited, "breadth first traversal finished");
    Ok(visited)
}

/// Breadth-first search for the nearest node whose payload equals `target`.
///
/// Every newly discovered node records the node it was reached from, and
/// the search stops as soon as a match is discovered. The returned path
/// has the fewest possible arcs; weights are ignored. `visitor` sees each
/// node as it leaves the queue.
pub fn breadth_first_search<T, W, F>(
    graph: &mut Graph<T, W>,
    start: NodeIndex,
    mut visitor: F,
    target: &T,
) -> SearchResult<GraphPath<W>>
where
    T: PartialEq,
    W: Copy,
    F: FnMut(&Node<T, W>),
{
    let origin = graph.node_mut(start)?;
    origin.set_marked(true);
    origin.search.previous = None;
    if origin.payload() == target {
        return Ok(GraphPath::new(start));
    }

    let mut queue = BreadthQueue::default();
    queue.push(start);

    while let Some(index) = queue.pop() {
        let node = graph.node(index)?;
        visitor(node);

        for child in destinations(node) {
            let node = graph.node_mut(child)?;
            if node.is_marked() {
                continue;
            }
            node.set_marked(true);
            node.search.previous = Some(index);

            if node.payload() == target {
                let path = graph.trace_back(child)?;
                debug!(
                    start,
                    found = child,
                    arcs = path.len(),
                    "breadth first search found target"
                );
                return Ok(path);
            }
            queue.push(child);
        }
    }

    debug!(start, "breadth first search exhausted the queue");
    Err(SearchError::TargetNotFound { start })
}
