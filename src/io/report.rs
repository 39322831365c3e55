//! CSV Dependency Structure Matrix report writer.
//!
//! Renders an assembled [`Dsm`] as a plain-text matrix: rows and columns in
//! ordering order, `X` marks for dependencies, `-` on the diagonal, a
//! trailing depends-on count per row, and a predecessor-count footer.
//! With a good ordering most `X` marks end up below the diagonal.

use std::fmt::Display;
use std::io::Write;

use itertools::Itertools;

use crate::algs::dsm::Dsm;
use crate::dsm_error::DsmError;
use crate::graph::bounds::NodeLike;

/// Writer producing the CSV matrix report.
#[derive(Debug, Default, Clone)]
pub struct CsvReportWriter;

impl CsvReportWriter {
    /// Write `dsm` as CSV to `out`.
    ///
    /// # Errors
    /// [`DsmError::Io`] if the underlying writer fails.
    ///
    /// # Example
    /// ```rust
    /// use dsm_graph::algs::Dsm;
    /// use dsm_graph::graph::DirectedGraphBuilder;
    /// use dsm_graph::io::CsvReportWriter;
    ///
    /// let g = DirectedGraphBuilder::new().connect("a", "b").build();
    /// let dsm = Dsm::assemble(&g, &["a", "b"]).unwrap();
    /// let mut csv = Vec::new();
    /// CsvReportWriter.write(&dsm, &mut csv).unwrap();
    /// assert!(String::from_utf8(csv).unwrap().starts_with(",,1,2,Depends on"));
    /// ```
    pub fn write<N, W>(&self, dsm: &Dsm<N>, mut out: W) -> Result<(), DsmError>
    where
        N: NodeLike + Display,
        W: Write,
    {
        let n = dsm.len();
        let ids = (1..=n).map(|id| id.to_string()).join(",");
        writeln!(out, ",,{ids},Depends on")?;
        for (i, node) in dsm.order().iter().enumerate() {
            let cells = (0..n)
                .map(|j| {
                    if i == j {
                        "-"
                    } else if dsm.cell(i, j) {
                        "X"
                    } else {
                        ""
                    }
                })
                .join(",");
            writeln!(
                out,
                "{},{},{cells},{}",
                field(&node.to_string()),
                i + 1,
                dsm.depends_on(i)
            )?;
        }
        let counts = (0..n).map(|j| dsm.predecessors(j).to_string()).join(",");
        writeln!(out, "Predecessors,,{counts},")?;
        Ok(())
    }
}

/// Quote a CSV field when it contains a separator, quote, or newline.
fn field(raw: &str) -> String {
    if raw.contains(|c| matches!(c, ',' | '"' | '\n')) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
