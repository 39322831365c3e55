use dsm_graph::algs::{Dsm, fas_ordering};
use dsm_graph::io::{CsvReportWriter, EdgeListReader};

#[test]
fn edge_list_to_report_end_to_end() {
    // The cyclic example: A -> B -> C, A -> C, C -> B.
    let input = "\
A:B
A:C
B:C
C:B
";
    let graph = EdgeListReader.parse(input).build();
    let ordering = fas_ordering(&graph);
    assert_eq!(ordering, vec!["A", "C", "B"]);

    let dsm = Dsm::assemble(&graph, &ordering).unwrap();
    let mut csv = Vec::new();
    CsvReportWriter.write(&dsm, &mut csv).unwrap();
    let expected = "\
,,1,2,3,Depends on
A,1,-,X,X,2
C,2,,-,X,1
B,3,,X,-,1
Predecessors,,0,2,2,
";
    assert_eq!(String::from_utf8(csv).unwrap(), expected);
}

#[test]
fn malformed_lines_do_not_reach_the_graph() {
    let input = "ok:fine\ngarbage line\nstill:good\n";
    let graph = EdgeListReader.parse(input).build();
    assert_eq!(graph.order(), 4);
    assert!(!graph.contains(&"garbage line".to_string()));
}

#[test]
fn dsm_serializes_and_deserializes() {
    let graph = EdgeListReader.parse("a:b\nb:c\n").build();
    let ordering = fas_ordering(&graph);
    let dsm = Dsm::assemble(&graph, &ordering).unwrap();

    let json = serde_json::to_string(&dsm).unwrap();
    let back: Dsm<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dsm);
}

#[test]
fn empty_matrix_report_has_header_and_footer_only() {
    let graph = EdgeListReader.parse("").build();
    let dsm = Dsm::assemble(&graph, &fas_ordering(&graph)).unwrap();
    let mut csv = Vec::new();
    CsvReportWriter.write(&dsm, &mut csv).unwrap();
    assert_eq!(String::from_utf8(csv).unwrap(), ",,,Depends on\nPredecessors,,,\n");
}
