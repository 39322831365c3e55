//! Dependency Structure Matrix assembly.
//!
//! A [`Dsm`] pairs a graph with a computed node ordering and materializes
//! what a matrix renderer needs: the boolean cell grid in ordering order
//! and the per-node dependency counts restricted to that ordering. The
//! ordering is expected to be a permutation of the graph's live nodes,
//! which is exactly what [`fas_ordering`](crate::algs::fas_ordering)
//! guarantees.

use serde::{Deserialize, Serialize};

use crate::dsm_error::DsmError;
use crate::graph::bounds::NodeLike;
use crate::graph::digraph::DirectedGraph;

/// A fully assembled Dependency Structure Matrix.
///
/// Row and column `i` both correspond to `order()[i]`; `cell(i, j)` is true
/// iff row `i`'s node depends on column `j`'s node. `depends_on` skips the
/// diagonal; `predecessors` counts every row, self-dependencies included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dsm<N: NodeLike> {
    order: Vec<N>,
    cells: Vec<bool>,
    depends_on: Vec<usize>,
    predecessors: Vec<usize>,
}

impl<N: NodeLike> Dsm<N> {
    /// Assemble the matrix for `graph` under `ordering`.
    ///
    /// # Errors
    /// [`DsmError::NodeNotFound`] if `ordering` names a node that is not
    /// live in `graph`.
    ///
    /// # Example
    /// ```rust
    /// use dsm_graph::algs::{fas_ordering, Dsm};
    /// use dsm_graph::graph::DirectedGraphBuilder;
    ///
    /// let g = DirectedGraphBuilder::new()
    ///     .connect("a", "b")
    ///     .connect("b", "c")
    ///     .build();
    /// let ordering = fas_ordering(&g);
    /// let dsm = Dsm::assemble(&g, &ordering).unwrap();
    /// assert!(dsm.cell(0, 1));
    /// assert_eq!(dsm.depends_on(0), 1);
    /// assert_eq!(dsm.predecessors(2), 1);
    /// ```
    pub fn assemble(graph: &DirectedGraph<N>, ordering: &[N]) -> Result<Self, DsmError> {
        let n = ordering.len();
        let mut cells = vec![false; n * n];
        for (i, row) in ordering.iter().enumerate() {
            for (j, col) in ordering.iter().enumerate() {
                cells[i * n + j] = graph.connects(row, col)?;
            }
        }
        let depends_on = (0..n)
            .map(|i| (0..n).filter(|&j| j != i && cells[i * n + j]).count())
            .collect();
        let predecessors = (0..n)
            .map(|j| (0..n).filter(|&i| cells[i * n + j]).count())
            .collect();
        Ok(Self {
            order: ordering.to_vec(),
            cells,
            depends_on,
            predecessors,
        })
    }

    /// The node ordering the matrix is laid out in.
    pub fn order(&self) -> &[N] {
        &self.order
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True for the empty matrix.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True iff `order()[i]` depends on `order()[j]`.
    pub fn cell(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.order.len() + j]
    }

    /// Off-diagonal dependency count of row `i`.
    pub fn depends_on(&self, i: usize) -> usize {
        self.depends_on[i]
    }

    /// Predecessor count of column `j`, self-dependencies included.
    pub fn predecessors(&self, j: usize) -> usize {
        self.predecessors[j]
    }
}
