//! A fixed-capacity directed graph with depth-first, breadth-first
//! and uniform-cost traversals.
//!
//! Nodes live in numbered slots chosen by the caller. Arcs and the
//! back references written by searches refer to nodes by slot index,
//! so the graph is the only owner of its nodes.
//!
//! ```
//! use digraph::Graph;
//!
//! let mut graph: Graph<&str, u32> = Graph::new(4);
//! for (i, label) in ["A", "B", "C", "D"].iter().enumerate() {
//!     graph.add_node(*label, i).unwrap();
//! }
//! graph.add_arc(0, 1, 1).unwrap();
//! graph.add_arc(0, 2, 4).unwrap();
//! graph.add_arc(1, 2, 1).unwrap();
//! graph.add_arc(1, 3, 5).unwrap();
//! graph.add_arc(2, 3, 1).unwrap();
//!
//! let path = graph.shortest_path(0, 3).unwrap();
//! assert_eq!(path.nodes(), &[0, 1, 2, 3]);
//! assert_eq!(path.weight(), Some(3));
//! ```

pub mod algorithm;
mod errors;
pub mod graph;

pub use errors::{GraphError, Result, SearchError, SearchResult};
pub use graph::{Arc, Graph, GraphPath, Node, NodeIndex};

pub use algorithm::basic::{breadth_first, breadth_first_search, depth_first};
pub use algorithm::ucs::uniform_cost_search;
pub use algorithm::SearchQueue;
