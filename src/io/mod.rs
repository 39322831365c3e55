//! Thin I/O collaborators around the graph core.
//!
//! Parsing and rendering never leak into the graph layer: the reader
//! produces a plain [`DirectedGraphBuilder`](crate::graph::DirectedGraphBuilder)
//! and the writer consumes an assembled [`Dsm`](crate::algs::Dsm). Malformed
//! input is this layer's problem and is skipped with a warning before the
//! core is ever involved.

pub mod edge_list;
pub mod report;

pub use edge_list::EdgeListReader;
pub use report::CsvReportWriter;
