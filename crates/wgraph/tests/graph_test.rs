use wgraph::graph::DEFAULT_WEIGHT;
use wgraph::{AdjacencyInput, Edge, Error, Graph, GraphOptions, Neighbor};

fn triangle() -> Graph<&'static str> {
    Graph::from_unweighted([
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "C"]),
        ("C", vec!["A", "B"]),
    ])
}

fn assert_symmetric(g: &Graph<&'static str>) {
    for u in g.vertices() {
        for v in g.vertices() {
            let there = g.find_edge(&u, &v).map(|n| n.weight);
            let back = g.find_edge(&v, &u).map(|n| n.weight);
            assert_eq!(there, back, "asymmetric link between {u} and {v}");
        }
    }
}

#[test]
fn unweighted_input_gets_unit_weights() {
    let g = triangle();
    assert!(!g.is_weighted());
    assert_eq!(g.vertices(), vec!["A", "B", "C"]);
    assert_eq!(
        g.find_edge(&"B", &"C"),
        Some(&Neighbor {
            vertex: "C",
            weight: 1
        })
    );
    assert_eq!(g.to_string(), "graph with 3 vertices and 6 edges");
}

#[test]
fn edge_pairs_list_each_edge_from_both_ends() {
    let g = triangle();
    assert_eq!(
        g.edge_pairs(),
        vec![
            ("A", "B"),
            ("A", "C"),
            ("B", "A"),
            ("B", "C"),
            ("C", "A"),
            ("C", "B"),
        ]
    );
    assert_eq!(g.edges().len(), 6);
    assert_eq!(g.edge_count(), 6);
}

#[test]
fn weighted_edges_are_sorted_with_weights() {
    let g = Graph::from_weighted([("B", vec![("A", 4)]), ("A", vec![("C", 2)])]);
    assert_eq!(
        g.edges(),
        vec![
            Edge {
                start: "A",
                end: "B",
                weight: 4
            },
            Edge {
                start: "A",
                end: "C",
                weight: 2
            },
            Edge {
                start: "B",
                end: "A",
                weight: 4
            },
            Edge {
                start: "C",
                end: "A",
                weight: 2
            },
        ]
    );
}

#[test]
fn detection_follows_the_input_shape() {
    let weighted = AdjacencyInput::weighted([("A", vec![("B", 5)])]);
    assert!(weighted.is_weighted());
    let g = Graph::new(weighted, None);
    assert!(g.is_weighted());
    assert_eq!(g.find_edge(&"B", &"A").map(|n| n.weight), Some(5));

    let g: Graph<&str> = Graph::new(AdjacencyInput::default(), None);
    assert!(!g.is_weighted());
    assert_eq!(g.vertex_count(), 0);
}

#[test]
fn declaring_unweighted_resets_weights() {
    let input = AdjacencyInput::weighted([("A", vec![("B", 5)]), ("B", vec![("A", 5)])]);
    let g = Graph::with_options(input, GraphOptions::unweighted());
    assert!(!g.is_weighted());
    assert_eq!(g.find_edge(&"A", &"B").map(|n| n.weight), Some(DEFAULT_WEIGHT));
}

#[test]
fn construction_repairs_missing_back_links_and_vertices() {
    let g = Graph::from_unweighted([("A", vec!["B"]), ("C", vec!["D"])]);
    assert_eq!(g.vertices(), vec!["A", "C", "B", "D"]);
    assert_eq!(g.adjacent(&"B").unwrap(), vec!["A"]);
    assert_eq!(g.adjacent(&"D").unwrap(), vec!["C"]);
    assert_symmetric(&g);
}

#[test]
fn construction_copies_the_input() {
    let input = AdjacencyInput::unweighted([("A", vec!["B"])]);
    let mut g = Graph::new(input.clone(), None);
    g.add_vertex("Z");
    let again = Graph::new(input, None);
    assert!(!again.contains_vertex(&"Z"));

    let fresh_a: Graph<&str> = Graph::empty();
    let mut fresh_b: Graph<&str> = Graph::default();
    fresh_b.add_vertex("X");
    assert_eq!(fresh_a.vertex_count(), 0);
    assert_eq!(fresh_b.vertex_count(), 1);
    assert!(!fresh_a.contains_vertex(&"X"));
}

#[test]
fn add_vertex_is_idempotent() {
    let mut g = triangle();
    g.add_vertex("D");
    g.add_vertex("D");
    assert_eq!(g.vertices(), vec!["A", "B", "C", "D"]);
    assert_eq!(g.degree(&"D"), Ok(0));

    g.add_edge("A", "D", 2);
    g.add_vertex("D");
    assert_eq!(g.adjacent(&"D").unwrap(), vec!["A"]);
}

#[test]
fn add_edge_creates_endpoints_and_links_both_ways() {
    let mut g: Graph<&str> = Graph::empty();
    g.add_edge("C", "D", 3);
    assert_eq!(g.vertices(), vec!["C", "D"]);
    assert_eq!(g.find_edge(&"C", &"D").map(|n| n.weight), Some(3));
    assert_eq!(g.find_edge(&"D", &"C").map(|n| n.weight), Some(3));
}

#[test]
fn add_edge_keeps_the_first_weight() {
    let mut g: Graph<&str> = Graph::empty();
    g.add_edge("A", "B", 1);
    g.add_edge("A", "B", 9);
    g.add_edge("B", "A", 7);
    assert_eq!(g.find_edge(&"A", &"B").map(|n| n.weight), Some(1));
    assert_eq!(g.find_edge(&"B", &"A").map(|n| n.weight), Some(1));
    assert_eq!(g.degree(&"A"), Ok(1));
}

#[test]
fn self_loops_are_not_stored() {
    let mut g: Graph<&str> = Graph::empty();
    g.add_edge("A", "A", 4);
    assert_eq!(g.vertices(), vec!["A"]);
    assert_eq!(g.degree(&"A"), Ok(0));
}

#[test]
fn delete_vertex_removes_every_reference() {
    let mut g = triangle();
    g.delete_vertex(&"A").unwrap();
    assert_eq!(g.vertices(), vec!["B", "C"]);
    for v in g.vertices() {
        assert!(!g.adjacent(&v).unwrap().contains(&"A"));
    }
    assert_symmetric(&g);
}

#[test]
fn delete_vertex_of_absent_vertex_fails_without_changes() {
    let mut g = triangle();
    let before = g.clone();
    assert_eq!(
        g.delete_vertex(&"Q"),
        Err(Error::VertexNotFound {
            vertex: "Q".to_string()
        })
    );
    assert_eq!(g, before);
}

#[test]
fn delete_vertices_keeps_deletions_before_a_failure() {
    let mut g = triangle();
    let err = g.delete_vertices(["B", "Q", "C"]).unwrap_err();
    assert!(matches!(err, Error::VertexNotFound { .. }));
    assert_eq!(g.vertices(), vec!["A", "C"]);
}

#[test]
fn delete_edge_unlinks_both_directions() {
    let mut g = triangle();
    g.delete_edge(&"A", &"B");
    assert_eq!(g.find_edge(&"A", &"B"), None);
    assert_eq!(g.find_edge(&"B", &"A"), None);
    assert_eq!(g.edge_count(), 4);
    assert_symmetric(&g);
}

#[test]
fn delete_edge_ignores_missing_vertices_and_links() {
    let mut g = triangle();
    g.delete_edge(&"A", &"Q");
    g.delete_edge(&"Q", &"R");
    g.add_vertex("D");
    g.delete_edge(&"A", &"D");
    assert_eq!(g.edge_count(), 6);
}

#[test]
fn batch_operations_apply_in_order() {
    let mut g: Graph<&str> = Graph::empty();
    g.add_vertices(["A", "B", "C", "D"]);
    g.add_edges([("C", "D", 3), ("D", "A", 2), ("A", "D", 8)]);
    assert_eq!(g.find_edge(&"A", &"D").map(|n| n.weight), Some(2));
    g.delete_edges([("A", "D"), ("C", "D")]);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.vertex_count(), 4);
}

#[test]
fn accessors_on_absent_vertices_fail() {
    let g = triangle();
    assert!(matches!(g.degree(&"Q"), Err(Error::VertexNotFound { .. })));
    assert!(matches!(g.adjacent(&"Q"), Err(Error::VertexNotFound { .. })));
    assert_eq!(g.find_edge(&"Q", &"A"), None);
    assert_eq!(g.find_edge(&"A", &"Q"), None);
}

#[test]
fn vertex_iteration_is_restartable_only_explicitly() {
    let g = triangle();
    let mut it = g.iter();
    assert_eq!(it.len(), 3);
    assert_eq!(it.next(), Some(&"A"));
    assert_eq!(it.next(), Some(&"B"));
    assert_eq!(it.next(), Some(&"C"));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);

    let again: Vec<&&str> = (&g).into_iter().collect();
    assert_eq!(again, vec![&"A", &"B", &"C"]);
}

#[test]
fn views_project_the_stored_adjacency() {
    let g = Graph::from_weighted([("A", vec![("B", 1), ("C", 1)]), ("B", vec![("C", 9)])]);
    let plain = g.unweighted_view();
    assert_eq!(plain.get("A"), Some(&vec!["B", "C"]));
    assert_eq!(plain.get("B"), Some(&vec!["A", "C"]));
    assert_eq!(plain.get("C"), Some(&vec!["A", "B"]));
    assert_eq!(g.weighted_view().get("B").map(Vec::len), Some(2));
}

#[test]
fn integer_vertices_work_like_labels() {
    let mut g: Graph<i64> = Graph::empty();
    g.add_edges([(1, 2, 1), (2, 3, 1)]);
    assert_eq!(g.shortest_path(&1, &3).unwrap(), Some(vec![1, 2, 3]));
    assert_eq!(g.degree(&2), Ok(2));
}
