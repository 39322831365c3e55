use std::collections::HashSet;

use dsm_graph::DsmError;
use dsm_graph::graph::DirectedGraphBuilder;

/// A -> B -> C plus the shortcut A -> C.
fn triangle() -> dsm_graph::graph::DirectedGraph<&'static str> {
    DirectedGraphBuilder::new()
        .connect("A", "B")
        .connect("A", "C")
        .connect("B", "C")
        .build()
}

#[test]
fn builds_graph_correctly() {
    let g = triangle();
    assert_eq!(g.order(), 3);
    assert!(g.contains(&"A"));
    assert!(g.contains(&"B"));
    assert!(g.contains(&"C"));
    assert!(!g.contains(&"D"));

    let successors_of_a: HashSet<_> = g.successors(&"A").unwrap().copied().collect();
    assert_eq!(successors_of_a, HashSet::from(["B", "C"]));

    let predecessors_of_c: HashSet<_> = g.predecessors(&"C").unwrap().copied().collect();
    assert_eq!(predecessors_of_c, HashSet::from(["A", "B"]));

    let sinks: Vec<_> = g.sinks().copied().collect();
    assert_eq!(sinks, vec!["C"]);
    let sources: Vec<_> = g.sources().copied().collect();
    assert_eq!(sources, vec!["A"]);
}

#[test]
fn creates_subgraph_correctly() {
    let g = triangle().remove_node(&"B");

    assert_eq!(g.order(), 2);
    assert!(g.connects(&"A", &"C").unwrap());

    let successors_of_a: Vec<_> = g.successors(&"A").unwrap().copied().collect();
    assert_eq!(successors_of_a, vec!["C"]);

    let predecessors_of_c: Vec<_> = g.predecessors(&"C").unwrap().copied().collect();
    assert_eq!(predecessors_of_c, vec!["A"]);
}

#[test]
fn removed_node_raises_not_found() {
    let sub = triangle().remove_node(&"B");
    assert!(matches!(
        sub.in_out_degrees(&"B"),
        Err(DsmError::NodeNotFound(_))
    ));
    assert!(matches!(sub.successors(&"B"), Err(DsmError::NodeNotFound(_))));
    assert!(matches!(
        sub.predecessors(&"B"),
        Err(DsmError::NodeNotFound(_))
    ));
    assert!(matches!(
        sub.connects(&"A", &"B"),
        Err(DsmError::NodeNotFound(_))
    ));
    assert!(matches!(
        sub.connects(&"B", &"C"),
        Err(DsmError::NodeNotFound(_))
    ));
}

#[test]
fn computes_in_out_degrees_correctly() {
    let g = triangle();
    assert_eq!(g.in_out_degrees(&"A").unwrap(), (0, 2));
    assert_eq!(g.in_out_degrees(&"B").unwrap(), (1, 1));
    assert_eq!(g.in_out_degrees(&"C").unwrap(), (2, 0));
}

#[test]
fn remove_agrees_with_the_original() {
    let g = DirectedGraphBuilder::new()
        .connect(1u8, 2)
        .connect(2, 3)
        .connect(3, 1)
        .connect(3, 4)
        .connect(4, 4)
        .build();
    let removed = [2u8, 9]; // 9 was never in the graph
    let sub = g.remove(removed.iter());

    assert_eq!(sub.order(), g.order() - 1);
    let expected: HashSet<u8> = g.nodes().copied().filter(|n| *n != 2).collect();
    let actual: HashSet<u8> = sub.nodes().copied().collect();
    assert_eq!(actual, expected);

    for a in sub.nodes() {
        for b in sub.nodes() {
            assert_eq!(
                sub.connects(a, b).unwrap(),
                g.connects(a, b).unwrap(),
                "connects({a}, {b}) changed after removal"
            );
        }
    }
}

#[test]
fn edgeless_view_is_all_sources_and_all_sinks() {
    let g = DirectedGraphBuilder::new()
        .connect("a", "b")
        .connect("c", "d")
        .build();
    let bare = g.remove([&"b", &"d"]);
    let sources: Vec<_> = bare.sources().copied().collect();
    let sinks: Vec<_> = bare.sinks().copied().collect();
    assert_eq!(sources, vec!["a", "c"]);
    assert_eq!(sinks, vec!["a", "c"]);
    assert_eq!(bare.in_out_degrees(&"a").unwrap(), (0, 0));
}

#[test]
fn self_loop_disqualifies_source_and_sink() {
    let g = DirectedGraphBuilder::new()
        .connect("x", "x")
        .connect("x", "y")
        .build();
    let (in_deg, out_deg) = g.in_out_degrees(&"x").unwrap();
    assert!(in_deg > 0 && out_deg > 0);
    assert!(g.successors(&"x").unwrap().any(|n| *n == "x"));
    assert!(g.predecessors(&"x").unwrap().any(|n| *n == "x"));
    assert!(!g.sources().any(|n| *n == "x"));
    assert!(!g.sinks().any(|n| *n == "x"));
}

#[test]
fn views_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<dsm_graph::graph::DirectedGraph<String>>();

    let g = triangle();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(g.sinks().copied().collect::<Vec<_>>(), vec!["C"]);
                assert_eq!(g.in_out_degrees(&"A").unwrap(), (0, 2));
            });
        }
    });
}

#[test]
fn node_iteration_follows_insertion_order() {
    let g = DirectedGraphBuilder::new()
        .connect("z", "m")
        .connect("m", "a")
        .connect("z", "a")
        .build();
    let order: Vec<_> = g.nodes().copied().collect();
    assert_eq!(order, vec!["z", "m", "a"]);
}
