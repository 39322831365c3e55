//! Immutable adjacency-matrix digraph with cheap subgraph views.
//!
//! A [`DirectedGraph`] is a snapshot: the node arena, the node-to-index map,
//! and the bit matrices are fixed at build time and shared (via `Arc`) by
//! every view derived from the same builder. A view owns nothing but its
//! live-node mask, so [`DirectedGraph::remove`] costs a mask clone plus one
//! bit clear per removed node. Algorithms that peel nodes off repeatedly,
//! like the feedback-arc-set heuristic, depend on removal staying this cheap.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::bounds::NodeLike;
use super::matrix::{BitMatrix, LiveSet, masked_count};
use super::traverse::{NodeTraversal, Probe};
use crate::dsm_error::DsmError;

/// The storage every view of one built graph shares.
///
/// `out.get(i, j)` holds edge `i -> j`; `inc` is the transpose, so row `j`
/// of `inc` is the predecessor mask of `j`. Keeping both directions packed
/// makes in- and out-degree queries masked popcounts.
#[derive(Debug)]
pub(crate) struct GraphCore<N> {
    pub(crate) nodes: Vec<N>,
    pub(crate) index_of: HashMap<N, usize>,
    pub(crate) out: BitMatrix,
    pub(crate) inc: BitMatrix,
}

/// Per-view degree table, restricted to the live node set.
///
/// Computed lazily at most once per view; slots of non-live indices are
/// left at zero and must not be read.
#[derive(Clone, Debug, Default)]
pub(crate) struct DegreeCache {
    pub(crate) in_deg: Vec<u32>,
    pub(crate) out_deg: Vec<u32>,
}

/// An immutable directed graph view.
///
/// Build one with [`DirectedGraphBuilder`](super::builder::DirectedGraphBuilder),
/// then query it or derive reduced views with [`DirectedGraph::remove`].
/// All operations are pure reads; any number of threads may query the same
/// view concurrently without coordination.
///
/// # Example
/// ```rust
/// use dsm_graph::graph::DirectedGraphBuilder;
///
/// let g = DirectedGraphBuilder::new()
///     .connect("a", "b")
///     .connect("b", "c")
///     .build();
/// assert_eq!(g.order(), 3);
/// assert!(g.connects(&"a", &"b").unwrap());
/// assert!(!g.connects(&"b", &"a").unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct DirectedGraph<N: NodeLike> {
    core: Arc<GraphCore<N>>,
    live: LiveSet,
    degrees: OnceCell<DegreeCache>,
}

impl<N: NodeLike> DirectedGraph<N> {
    /// A view over `core` with every indexed node live.
    pub(crate) fn from_core(core: Arc<GraphCore<N>>) -> Self {
        let order = core.nodes.len();
        Self {
            core,
            live: LiveSet::full(order),
            degrees: OnceCell::new(),
        }
    }

    /// The order (number of live nodes) of the digraph.
    #[inline]
    pub fn order(&self) -> usize {
        self.live.len()
    }

    /// True when the view has no live nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// The live nodes, in ascending index (insertion) order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.live.iter().map(|i| &self.core.nodes[i])
    }

    /// Live-set membership test.
    pub fn contains(&self, node: &N) -> bool {
        self.core
            .index_of
            .get(node)
            .is_some_and(|&i| self.live.contains(i))
    }

    /// Index of `node`, or `NodeNotFound` if it is not live in this view.
    fn require(&self, node: &N) -> Result<usize, DsmError> {
        match self.core.index_of.get(node) {
            Some(&i) if self.live.contains(i) => Ok(i),
            _ => Err(DsmError::node_not_found(node)),
        }
    }

    /// The in-degree and out-degree of `node`, counted only against other
    /// live nodes. Edges to or from removed nodes are invisible.
    ///
    /// # Errors
    /// [`DsmError::NodeNotFound`] if `node` is not live in this view.
    pub fn in_out_degrees(&self, node: &N) -> Result<(usize, usize), DsmError> {
        let i = self.require(node)?;
        let cache = self.degree_cache();
        Ok((cache.in_deg[i] as usize, cache.out_deg[i] as usize))
    }

    /// Lazy traversal over the live successors of `node`.
    ///
    /// Each call yields an independent, restartable sequence in ascending
    /// index order. A self-loop makes `node` its own successor.
    ///
    /// # Errors
    /// [`DsmError::NodeNotFound`] if `node` is not live in this view.
    pub fn successors(&self, node: &N) -> Result<NodeTraversal<'_, N>, DsmError> {
        let i = self.require(node)?;
        Ok(NodeTraversal::new(self, Probe::Successors(i)))
    }

    /// Lazy traversal over the live predecessors of `node`.
    ///
    /// # Errors
    /// [`DsmError::NodeNotFound`] if `node` is not live in this view.
    pub fn predecessors(&self, node: &N) -> Result<NodeTraversal<'_, N>, DsmError> {
        let i = self.require(node)?;
        Ok(NodeTraversal::new(self, Probe::Predecessors(i)))
    }

    /// Lazy traversal over the sources (live nodes with zero in-degree
    /// within this view).
    pub fn sources(&self) -> NodeTraversal<'_, N> {
        NodeTraversal::new(self, Probe::Sources)
    }

    /// Lazy traversal over the sinks (live nodes with zero out-degree
    /// within this view).
    pub fn sinks(&self) -> NodeTraversal<'_, N> {
        NodeTraversal::new(self, Probe::Sinks)
    }

    /// True iff there is an edge from `a` to `b`.
    ///
    /// # Errors
    /// [`DsmError::NodeNotFound`] if either endpoint is not live.
    pub fn connects(&self, a: &N, b: &N) -> Result<bool, DsmError> {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        Ok(self.core.out.get(ia, ib))
    }

    /// A new view with the given nodes removed.
    ///
    /// Nodes absent from this view are ignored silently. The returned view
    /// shares the index assignment and adjacency matrices; only the live
    /// mask is cloned, so the cost is proportional to the number of nodes
    /// removed, not to the graph size.
    ///
    /// # Example
    /// ```rust
    /// use dsm_graph::graph::DirectedGraphBuilder;
    ///
    /// let g = DirectedGraphBuilder::new()
    ///     .connect("a", "b")
    ///     .connect("b", "c")
    ///     .build();
    /// let sub = g.remove([&"b"]);
    /// assert_eq!(sub.order(), 2);
    /// assert!(sub.successors(&"a").unwrap().next().is_none());
    /// assert_eq!(g.order(), 3); // the original view is untouched
    /// ```
    pub fn remove<'b, I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = &'b N>,
        N: 'b,
    {
        let mut live = self.live.clone();
        for node in nodes {
            if let Some(&i) = self.core.index_of.get(node) {
                live.clear(i);
            }
        }
        Self {
            core: Arc::clone(&self.core),
            live,
            degrees: OnceCell::new(),
        }
    }

    /// A new view with a single node removed. See [`DirectedGraph::remove`].
    pub fn remove_node(&self, node: &N) -> Self {
        self.remove(std::iter::once(node))
    }

    /// The live in/out degree table, computed at most once per view.
    pub(crate) fn degree_cache(&self) -> &DegreeCache {
        self.degrees.get_or_init(|| {
            let arena = self.core.nodes.len();
            let mask = self.live.words();
            let mut cache = DegreeCache {
                in_deg: vec![0; arena],
                out_deg: vec![0; arena],
            };
            for i in self.live.iter() {
                cache.out_deg[i] = masked_count(self.core.out.row(i), mask) as u32;
                cache.in_deg[i] = masked_count(self.core.inc.row(i), mask) as u32;
            }
            cache
        })
    }

    #[inline]
    pub(crate) fn core(&self) -> &GraphCore<N> {
        &self.core
    }

    #[inline]
    pub(crate) fn live(&self) -> &LiveSet {
        &self.live
    }

    /// The node stored at arena index `index`.
    #[inline]
    pub(crate) fn node_at(&self, index: usize) -> &N {
        &self.core.nodes[index]
    }
}
