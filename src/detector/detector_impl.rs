use serde::Serialize;

use crate::graph::IncludeGraph;

/// Detector for finding include cycles
///
/// Uses Tarjan's Strongly Connected Components algorithm to find all cyclic
/// include groups in one O(V + E) pass. The depth-first walk is driven by an
/// explicit frame stack rather than recursion, so include chains of
/// arbitrary depth cannot overflow the call stack.
pub struct CycleDetector {
    cycles: Vec<IncludeCycle>,
}

/// One cyclic include group
///
/// Members are listed in the order Tarjan's algorithm pops them off the
/// component stack; component order follows the order components are closed
/// during traversal. Both orders are stable for identical input because the
/// graph iterates nodes and successors in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludeCycle {
    members: Vec<String>,
}

impl IncludeCycle {
    pub fn new(members: Vec<String>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|member| member == id)
    }
}

/// Traversal bookkeeping, scoped to a single `detect_cycles` call
struct TraversalState {
    visited: Vec<bool>,
    index: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    next_index: usize,
}

impl TraversalState {
    fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count],
            index: vec![0; node_count],
            lowlink: vec![0; node_count],
            on_stack: vec![false; node_count],
            stack: Vec::new(),
            next_index: 0,
        }
    }

    fn visit(&mut self, node: usize) {
        self.visited[node] = true;
        self.index[node] = self.next_index;
        self.lowlink[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Detect all include cycles in the graph
    ///
    /// Every strongly connected component with more than one member is
    /// recorded as a cycle. A single-member component is recorded only when
    /// the node includes itself; a self-include is a genuine cycle even
    /// though the component is a singleton.
    pub fn detect_cycles(&mut self, graph: &IncludeGraph) {
        let mut state = TraversalState::new(graph.node_count());

        for root in 0..graph.node_count() {
            if !state.visited[root] {
                self.strong_connect(graph, root, &mut state);
            }
        }
    }

    /// Explore the depth-first tree rooted at `root`, closing components as
    /// their roots finish
    fn strong_connect(&mut self, graph: &IncludeGraph, root: usize, state: &mut TraversalState) {
        // Each frame carries the node and the position of the next successor
        // to explore, replacing the recursive formulation.
        let mut frames: Vec<(usize, usize)> = Vec::new();
        state.visit(root);
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let node = frame.0;
            let successors = graph.successors(node);

            if frame.1 < successors.len() {
                let next = successors[frame.1];
                frame.1 += 1;

                if !state.visited[next] {
                    state.visit(next);
                    frames.push((next, 0));
                } else if state.on_stack[next] {
                    // Back-edge into the current path. Tighten with the
                    // successor's discovery index, not its lowlink, or
                    // unrelated components would merge.
                    state.lowlink[node] = state.lowlink[node].min(state.index[next]);
                }
                // Visited but off-stack: an already-closed component; ignore.
                continue;
            }

            frames.pop();

            if state.lowlink[node] == state.index[node] {
                let mut members = Vec::new();
                loop {
                    let popped = state
                        .stack
                        .pop()
                        .expect("component stack holds the root until it is closed");
                    state.on_stack[popped] = false;
                    members.push(graph.name(popped).to_string());
                    if popped == node {
                        break;
                    }
                }
                if members.len() > 1 || has_self_loop(graph, node) {
                    self.cycles.push(IncludeCycle::new(members));
                }
            }

            if let Some(parent) = frames.last() {
                state.lowlink[parent.0] = state.lowlink[parent.0].min(state.lowlink[node]);
            }
        }
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[IncludeCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Add a cycle to the detector (used for filtered results)
    pub fn add_cycle(&mut self, cycle: IncludeCycle) {
        self.cycles.push(cycle);
    }
}

fn has_self_loop(graph: &IncludeGraph, node: usize) -> bool {
    graph.successors(node).contains(&node)
}
