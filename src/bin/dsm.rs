//! Command-line Dependency Structure Matrix generator.
//!
//! Reads a `source:target` edge-list file, computes a feedback-arc-set
//! ordering, and writes the matrix report as CSV.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dsm_graph::DsmError;
use dsm_graph::algs::{Dsm, fas_ordering};
use dsm_graph::io::{CsvReportWriter, EdgeListReader};

/// Propose a Dependency Structure Matrix for an edge-list file.
#[derive(Debug, Parser)]
#[command(name = "dsm", version, about)]
struct Args {
    /// Edge-list file: one `source:target` edge per line.
    input: PathBuf,
    /// Write the CSV report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dsm: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), DsmError> {
    let graph = EdgeListReader.read(File::open(&args.input)?)?.build();
    let ordering = fas_ordering(&graph);
    log::info!(
        "ordered {} nodes, writing {}x{} matrix",
        graph.order(),
        ordering.len(),
        ordering.len()
    );
    let dsm = Dsm::assemble(&graph, &ordering)?;
    match &args.output {
        Some(path) => CsvReportWriter.write(&dsm, BufWriter::new(File::create(path)?)),
        None => CsvReportWriter.write(&dsm, io::stdout().lock()),
    }
}
