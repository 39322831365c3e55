//! Incremental directed-graph builder.
//!
//! The builder is the only mutable object in the graph layer. It interns
//! nodes in first-seen order, records edges as per-source target sets, and
//! is consumed exactly once by [`DirectedGraphBuilder::build`], which
//! freezes the index assignment and packs the adjacency matrices.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::bounds::NodeLike;
use super::digraph::{DirectedGraph, GraphCore};
use super::matrix::BitMatrix;

/// Builder for constructing a [`DirectedGraph`] incrementally.
///
/// Nodes are registered automatically by [`DirectedGraphBuilder::connect`];
/// there is no separate node-insertion call. Index assignment is the
/// first-seen insertion order, which fixes the iteration order of every
/// traversal on the built graph and all of its derived views.
///
/// # Example
/// ```rust
/// use dsm_graph::graph::DirectedGraphBuilder;
///
/// let g = DirectedGraphBuilder::new()
///     .connect("a", "b")
///     .connect("a", "b") // duplicate edges are idempotent
///     .connect("b", "c")
///     .build();
/// assert_eq!(g.order(), 3);
/// assert_eq!(g.in_out_degrees(&"a").unwrap(), (0, 1));
/// ```
#[derive(Debug)]
pub struct DirectedGraphBuilder<N: NodeLike> {
    nodes: Vec<N>,
    index_of: HashMap<N, usize>,
    targets: Vec<HashSet<usize>>,
}

impl<N: NodeLike> Default for DirectedGraphBuilder<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index_of: HashMap::new(),
            targets: Vec::new(),
        }
    }
}

impl<N: NodeLike> DirectedGraphBuilder<N> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&index) = self.index_of.get(&node) {
            return index;
        }
        let index = self.nodes.len();
        self.index_of.insert(node.clone(), index);
        self.nodes.push(node);
        self.targets.push(HashSet::new());
        index
    }

    /// Record the directed edge `source -> target`, registering both
    /// endpoints as nodes if they are new. Self-loops are permitted and
    /// recorded; duplicate edges are idempotent. Returns the builder for
    /// chained calls.
    pub fn connect(mut self, source: N, target: N) -> Self {
        let s = self.intern(source);
        let t = self.intern(target);
        self.targets[s].insert(t);
        self
    }

    /// Number of nodes registered so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freeze the index assignment, pack the adjacency matrix and its
    /// transpose, and return a graph whose live set is every registered
    /// node. The builder is consumed.
    pub fn build(self) -> DirectedGraph<N> {
        let order = self.nodes.len();
        let mut out = BitMatrix::new(order);
        let mut inc = BitMatrix::new(order);
        for (source, targets) in self.targets.iter().enumerate() {
            for &target in targets {
                out.set(source, target);
                inc.set(target, source);
            }
        }
        DirectedGraph::from_core(Arc::new(GraphCore {
            nodes: self.nodes,
            index_of: self.index_of,
            out,
            inc,
        }))
    }
}
