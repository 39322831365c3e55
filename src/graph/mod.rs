//! Top-level module for the directed-graph abstraction.
//!
//! This module provides the core types for representing directed dependency
//! graphs:
//! - [`DirectedGraph`], an immutable adjacency-matrix-backed digraph whose
//!   subgraph views share storage and differ only in their live node set
//! - [`DirectedGraphBuilder`], the mutable accumulator that assigns stable
//!   node indices and produces the initial graph
//! - [`NodeTraversal`], the lazy filtered iterator behind successor,
//!   predecessor, source, and sink queries
//!
//! Most users will build a graph with the builder, then query or derive
//! reduced views from it; the graph itself is never mutated.

pub mod bounds;
pub mod builder;
pub mod digraph;
pub(crate) mod matrix;
pub mod traverse;

pub use bounds::NodeLike;
pub use builder::DirectedGraphBuilder;
pub use digraph::DirectedGraph;
pub use traverse::NodeTraversal;
