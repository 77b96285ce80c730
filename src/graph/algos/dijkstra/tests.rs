use super::*;

/// Street grid from the neighborhood-routing dataset: two ways from A to C,
/// and a D-E component disconnected from the rest
fn street_graph() -> Graph {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 2.0, Some("Rua A-B"));
    g.add_edge("A", "C", 10.0, Some("Rua A-C"));
    g.add_edge("B", "C", 3.0, Some("Rua B-C"));
    g.add_edge("D", "E", 1.0, Some("Rua D-E"));
    g
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node: "A".to_string(),
        cost: Cost::new(1.0),
    };
    let entry2 = HeapEntry {
        node: "B".to_string(),
        cost: Cost::new(2.0),
    };
    let entry3 = HeapEntry {
        node: "C".to_string(),
        cost: Cost::new(1.0),
    };

    // Lower cost should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal costs break the tie by node id
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);
    assert_eq!(entry3.cmp(&entry1), std::cmp::Ordering::Greater);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

#[test]
fn test_shortest_path_multi_step() {
    let g = street_graph();
    let result = shortest_path(&g, "A", "C");

    assert!(result.found);
    assert_eq!(result.cost.value(), 5.0);
    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.labels, vec!["Rua A-B", "Rua B-C"]);
    assert_eq!(result.weights, vec![2.0, 3.0]);
}

#[test]
fn test_shortest_path_direct() {
    let g = street_graph();
    let result = shortest_path(&g, "A", "B");

    assert_eq!(result.cost.value(), 2.0);
    assert_eq!(result.path, vec!["A", "B"]);
    assert_eq!(result.labels, vec!["Rua A-B"]);
    assert_eq!(result.weights, vec![2.0]);
}

#[test]
fn test_no_path_found() {
    let g = street_graph();
    let result = shortest_path(&g, "A", "D");

    assert!(!result.found);
    assert!(!result.cost.is_finite());
    assert!(result.path.is_empty());
    assert!(result.labels.is_empty());
    assert!(result.weights.is_empty());
}

#[test]
fn test_absent_source() {
    let g = street_graph();
    let result = shortest_path(&g, "Z", "A");

    assert!(!result.found);
    assert!(!result.cost.is_finite());
    assert!(result.path.is_empty());
}

#[test]
fn test_absent_destination() {
    let g = street_graph();
    let result = shortest_path(&g, "A", "Z");

    assert!(!result.found);
    assert!(!result.cost.is_finite());
    assert!(result.path.is_empty());
}

#[test]
fn test_path_to_self() {
    let g = street_graph();
    let result = shortest_path(&g, "A", "A");

    assert!(result.found);
    assert_eq!(result.cost.value(), 0.0);
    assert_eq!(result.path, vec!["A"]);
    assert!(result.labels.is_empty());
    assert!(result.weights.is_empty());
}

#[test]
fn test_undirected_detour_beats_direct_edge() {
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 2.0, Some("A-B"));
    g.add_edge("A", "C", 10.0, Some("A-C"));
    g.add_edge("B", "C", 3.0, Some("B-C"));

    let result = shortest_path(&g, "A", "C");
    assert_eq!(result.cost.value(), 5.0);
    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.labels, vec!["A-B", "B-C"]);
}

#[test]
fn test_parallel_edge_tie_keeps_first_inserted() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0, Some("first"));
    g.add_edge("A", "B", 1.0, Some("second"));

    let result = shortest_path(&g, "A", "B");
    assert_eq!(result.labels, vec!["first"]);
}

#[test]
fn test_equal_cost_paths_resolve_deterministically() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0, Some("A-B"));
    g.add_edge("A", "C", 1.0, Some("A-C"));
    g.add_edge("B", "D", 1.0, Some("B-D"));
    g.add_edge("C", "D", 1.0, Some("C-D"));

    // Both A-B-D and A-C-D cost 2; the relaxation settled via B first and
    // the equal candidate through C must not displace it
    let result = shortest_path(&g, "A", "D");
    assert_eq!(result.cost.value(), 2.0);
    assert_eq!(result.path, vec!["A", "B", "D"]);
}

#[test]
fn test_weights_sum_to_cost() {
    let g = street_graph();
    let result = shortest_path(&g, "A", "C");

    let sum: f64 = result.weights.iter().sum();
    assert!((sum - result.cost.value()).abs() < 1e-9);
}

#[test]
fn test_path_length_invariant() {
    let g = street_graph();
    let result = shortest_path(&g, "A", "C");

    assert_eq!(result.path.len(), result.labels.len() + 1);
    assert_eq!(result.path.len(), result.weights.len() + 1);
}

#[test]
fn test_unlabeled_edges_report_empty_labels() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0, None);
    g.add_edge("B", "C", 1.0, None);

    let result = shortest_path(&g, "A", "C");
    assert_eq!(result.labels, vec!["", ""]);
    assert_eq!(result.weights, vec![1.0, 1.0]);
}

#[test]
fn test_shortest_path_tree_serves_all_destinations() {
    let g = street_graph();
    let tree = shortest_path_tree(&g, "A");

    assert_eq!(tree.cost_to("B").value(), 2.0);
    assert_eq!(tree.cost_to("C").value(), 5.0);
    assert!(!tree.cost_to("D").is_finite());

    let to_c = tree.path_to("C");
    assert_eq!(to_c.path, vec!["A", "B", "C"]);

    let to_d = tree.path_to("D");
    assert!(!to_d.found);
}

#[test]
fn test_shortest_path_tree_absent_source() {
    let g = street_graph();
    let tree = shortest_path_tree(&g, "Z");

    assert!(tree.is_empty());
    assert!(!tree.cost_to("A").is_finite());
    assert!(!tree.path_to("A").found);
}

#[test]
fn test_steps_follow_winning_path() {
    let g = street_graph();
    let steps = shortest_path(&g, "A", "C").steps();

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].from, "A");
    assert_eq!(steps[0].to, "B");
    assert_eq!(steps[0].label, "Rua A-B");
    assert_eq!(steps[1].weight, 3.0);
}
