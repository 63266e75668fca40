use floorgraph::{EdgeInsert, Graph, GraphOptions, point};

fn coords_graph(explicit: bool, aggregate: bool) -> Graph {
    Graph::new(GraphOptions {
        directed: false,
        coordinates: true,
        explicit_weight: explicit,
        aggregate_weight: aggregate,
    })
}

#[test]
fn undirected_edges_are_stored_as_two_halves() {
    let mut g: Graph = Graph::new(GraphOptions::default());
    g.add_vertex("a", None).unwrap();
    g.add_vertex("b", None).unwrap();

    assert_eq!(g.add_edge("b", "a", None), Ok(EdgeInsert::Inserted));

    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "a"));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.neighbors("a").unwrap(), vec!["b"]);
    assert_eq!(g.neighbors("b").unwrap(), vec!["a"]);
}

#[test]
fn undirected_coordinate_weights_ignore_the_passed_weight() {
    let mut g = coords_graph(false, false);
    g.add_vertex("A", Some(point(0.0, 10.0))).unwrap();
    g.add_vertex("B", Some(point(0.0, 5.0))).unwrap();

    g.add_edge("A", "B", Some(30.0)).unwrap();

    assert_eq!(g.edge_weight("A", "B").unwrap(), 5.0);
    assert_eq!(g.edge_weight("B", "A").unwrap(), 5.0);
}

#[test]
fn undirected_explicit_weight_is_copied_to_both_halves() {
    let mut g = coords_graph(true, false);
    g.add_vertex("A", Some(point(0.0, 10.0))).unwrap();
    g.add_vertex("B", Some(point(0.0, 5.0))).unwrap();

    g.add_edge("A", "B", Some(30.0)).unwrap();

    assert_eq!(g.edge_weight("A", "B").unwrap(), 30.0);
    assert_eq!(g.edge_weight("B", "A").unwrap(), 30.0);
}

#[test]
fn undirected_aggregation_increments_both_halves() {
    let mut g = coords_graph(true, true);
    g.add_vertex("A", Some(point(0.0, 10.0))).unwrap();
    g.add_vertex("B", Some(point(0.0, 5.0))).unwrap();

    assert_eq!(g.add_edge("A", "B", Some(30.0)), Ok(EdgeInsert::Inserted));
    assert_eq!(g.add_edge("A", "B", Some(30.0)), Ok(EdgeInsert::Aggregated));

    assert_eq!(g.edge_weight("A", "B").unwrap(), 60.0);
    assert_eq!(g.edge_weight("B", "A").unwrap(), 60.0);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn undirected_reverse_insertion_aggregates_into_the_same_edge() {
    let mut g = coords_graph(true, true);
    g.add_vertex("A", Some(point(1.0, 1.0))).unwrap();
    g.add_vertex("B", Some(point(2.0, 2.0))).unwrap();

    g.add_edge("A", "B", Some(4.0)).unwrap();
    assert_eq!(g.add_edge("B", "A", Some(6.0)), Ok(EdgeInsert::Aggregated));

    assert_eq!(g.edge_weight("A", "B").unwrap(), 10.0);
    assert_eq!(g.edge_weight("B", "A").unwrap(), 10.0);
}

#[test]
fn undirected_duplicate_without_aggregation_is_a_no_op() {
    let mut g: Graph = Graph::new(GraphOptions::default());
    g.add_vertex("A", None).unwrap();
    g.add_vertex("B", None).unwrap();

    g.add_edge("A", "B", None).unwrap();
    assert_eq!(g.add_edge("A", "B", None), Ok(EdgeInsert::AlreadyExists));
    assert_eq!(g.add_edge("B", "A", None), Ok(EdgeInsert::AlreadyExists));
    assert_eq!(g.edge_weight("A", "B").unwrap(), 1.0);
}

#[test]
fn undirected_edges_view_collapses_mirror_halves() {
    let mut g = coords_graph(true, true);
    g.add_vertex("A", Some(point(0.0, 0.0))).unwrap();
    g.add_vertex("B", Some(point(1.0, 0.0))).unwrap();
    g.add_vertex("C", Some(point(2.0, 0.0))).unwrap();
    g.add_edge("A", "B", Some(2.0)).unwrap();
    g.add_edge("C", "B", Some(3.0)).unwrap();

    let edges: Vec<(&str, &str, f64)> = g
        .edges()
        .iter()
        .map(|e| (e.source, e.target, e.weight))
        .collect();
    assert_eq!(edges, vec![("A", "B", 2.0), ("B", "C", 3.0)]);
}

#[test]
fn directed_edges_respect_direction() {
    let mut g: Graph = Graph::new(GraphOptions {
        directed: true,
        ..Default::default()
    });
    g.add_vertex("a", None).unwrap();
    g.add_vertex("b", None).unwrap();
    g.add_edge("a", "b", None).unwrap();

    assert!(g.has_edge("a", "b"));
    assert!(!g.has_edge("b", "a"));
    assert_eq!(g.neighbors("b").unwrap(), Vec::<&str>::new());
    assert_eq!(g.edges().len(), 1);

    // The reverse direction is a distinct edge in a directed graph.
    assert_eq!(g.add_edge("b", "a", None), Ok(EdgeInsert::Inserted));
    assert_eq!(g.edge_count(), 2);
}
