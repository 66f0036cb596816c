//! # Cycle Detection Module
//!
//! Detects cyclic include groups in the include graph.
//!
//! ## Algorithm
//!
//! Tarjan's Strongly Connected Components algorithm, O(V + E) in the number
//! of files and includes. Every component with more than one member is a
//! cyclic include group; a file that includes itself is reported as a
//! one-member cycle. The traversal uses an explicit work stack of
//! (node, next-successor) frames instead of recursion, and all of its state
//! is local to one `detect_cycles` call, so the detector is reentrant.
//!
//! ## Example
//!
//! ```
//! use header_graph::detector::CycleDetector;
//! use header_graph::graph::IncludeGraph;
//!
//! let mut graph = IncludeGraph::new();
//! graph.add_edge("a.h", "b.h");
//! graph.add_edge("b.h", "a.h");
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycle_count(), 1);
//! ```

mod detector_impl;

pub use detector_impl::*;
