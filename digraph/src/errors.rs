use thiserror::Error;

use crate::graph::NodeIndex;

/// Error produced when the graph is asked to do something
/// which its current contents do not allow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node index {index} is outside of graph capacity {capacity}")]
    OutOfRange { index: NodeIndex, capacity: usize },

    #[error("A node already exists at index {0}")]
    NodeOccupied(NodeIndex),

    #[error("No node at index {0}")]
    NodeMissing(NodeIndex),

    #[error("An arc from {0} to {1} already exists")]
    ArcExists(NodeIndex, NodeIndex),

    #[error("No arc from {0} to {1}")]
    ArcMissing(NodeIndex, NodeIndex),
}

/// Error produced when a search fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No path found from {start} to {target}")]
    NoPathFound { start: NodeIndex, target: NodeIndex },

    #[error("No node matching the target is reachable from {start}")]
    TargetNotFound { start: NodeIndex },

    #[error("Negative arc weight from {from} to {to}")]
    NegativeWeight { from: NodeIndex, to: NodeIndex },

    #[error("Path cost overflows the weight type at the arc from {from} to {to}")]
    CostOverflow { from: NodeIndex, to: NodeIndex },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result when a graph mutation or query might fail.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Result when a search method might fail.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
