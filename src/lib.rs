//! # dsm-graph
//!
//! dsm-graph is a small Rust library for analyzing directed dependency graphs
//! and ordering them for a Dependency Structure Matrix (DSM) view. It provides
//! an immutable, adjacency-matrix-backed digraph with cheap subgraph views, a
//! feedback-arc-set ordering heuristic that pushes most edges "forward", and
//! thin edge-list/report collaborators around that core.
//!
//! ## Features
//! - [`graph::DirectedGraph`]: immutable digraph over a stable node arena,
//!   with degree queries, adjacency tests, and lazy filtered traversal
//! - Cheap subgraph derivation: [`graph::DirectedGraph::remove`] shares the
//!   adjacency matrices and only narrows the live node set
//! - [`algs::fas_ordering`]: greedy feedback-arc-set ordering in the style of
//!   Eades, Lin and Smyth
//! - [`algs::Dsm`]: matrix cells and fan-in/fan-out counts for a computed
//!   ordering, ready for rendering
//! - [`io`]: `source:target` edge-list reading and CSV report writing
//!
//! ## Determinism
//!
//! Node indices are assigned in first-seen insertion order and every traversal
//! yields nodes in ascending index order, so all results (including the
//! ordering heuristic's tie-breaks) are reproducible across runs.
//!
//! ## Usage
//! Add `dsm-graph` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dsm-graph = "0.1"
//! ```
//!
//! ```rust
//! use dsm_graph::prelude::*;
//!
//! let graph = DirectedGraphBuilder::new()
//!     .connect("parser", "lexer")
//!     .connect("driver", "parser")
//!     .connect("lexer", "driver")
//!     .build();
//! let ordering = fas_ordering(&graph);
//! assert_eq!(ordering.len(), graph.order());
//! ```

pub mod algs;
pub mod dsm_error;
pub mod graph;
pub mod io;

pub use dsm_error::DsmError;

/// A convenient prelude importing the most-used types and functions.
pub mod prelude {
    pub use crate::algs::dsm::Dsm;
    pub use crate::algs::fas::fas_ordering;
    pub use crate::dsm_error::DsmError;
    pub use crate::graph::bounds::NodeLike;
    pub use crate::graph::builder::DirectedGraphBuilder;
    pub use crate::graph::digraph::DirectedGraph;
    pub use crate::graph::traverse::NodeTraversal;
    pub use crate::io::edge_list::EdgeListReader;
    pub use crate::io::report::CsvReportWriter;
}
