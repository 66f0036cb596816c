//! # Include Graph Module
//!
//! Construction and serialization of the directed include graph.
//!
//! ## Key Components
//!
//! - **IncludeGraph**: insertion-ordered directed graph of include
//!   relationships
//! - **IncludeGraphBuilder**: scans a directory tree and produces the graph
//! - **GraphRenderer**: DOT and node-listing output
//!
//! ## Example
//!
//! ```
//! use header_graph::graph::IncludeGraph;
//!
//! let mut graph = IncludeGraph::new();
//! graph.add_edge("a.h", "b.h");
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::IncludeGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::IncludeGraph;
