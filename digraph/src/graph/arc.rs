use super::NodeIndex;

/// A directed, weighted connection to another node in the same graph.
///
/// The destination is an index into the graph which owns both ends,
/// so an arc never keeps its destination alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc<W> {
    destination: NodeIndex,
    weight: W,
}

impl<W> Arc<W>
where
    W: Copy,
{
    pub(crate) fn new(destination: NodeIndex, weight: W) -> Self {
        Self {
            destination,
            weight,
        }
    }

    pub fn destination(&self) -> NodeIndex {
        self.destination
    }

    pub fn weight(&self) -> W {
        self.weight
    }
}
