//! Unit tests for core graph operations (add, stage, commit, rollback, queries).

use graphgen::{Direction, GraphError, MemoryBackend, PropertyGraph, PropertyMap};

#[test]
fn test_add_node() {
    let mut graph = PropertyGraph::in_memory().unwrap();

    let props = PropertyMap::new().with("name", "Ada Lovelace");
    let node_id = graph.add_node("Person", props).unwrap();

    assert_eq!(node_id, 0); // First node should have ID 0

    let node = graph.get_node(node_id).unwrap();
    assert_eq!(node.label, "Person");
    assert_eq!(node.properties.get_string("name"), Some("Ada Lovelace"));
}

#[test]
fn test_get_nonexistent_node() {
    let graph = PropertyGraph::in_memory().unwrap();

    let result = graph.get_node(999);
    assert!(matches!(result, Err(GraphError::NodeNotFound { .. })));
}

#[test]
fn test_add_edge_with_validation() {
    let mut graph = PropertyGraph::in_memory().unwrap();

    let source_id = graph.add_node("Person", PropertyMap::new()).unwrap();
    let target_id = graph.add_node("Person", PropertyMap::new()).unwrap();

    let props = PropertyMap::new().with("since", 2001i64);
    let edge_id = graph
        .add_edge(source_id, target_id, "FRIEND_OF", props)
        .unwrap();

    assert_eq!(edge_id, 0); // First edge should have ID 0

    let edge = graph.get_edge(edge_id).unwrap();
    assert_eq!(edge.source_id, source_id);
    assert_eq!(edge.target_id, target_id);
    assert_eq!(edge.rel_type, "FRIEND_OF");
    assert_eq!(edge.properties.get_int("since"), Some(2001));
}

#[test]
fn test_add_edge_with_missing_nodes() {
    let mut graph = PropertyGraph::in_memory().unwrap();

    // Try to add edge with non-existent nodes
    let result = graph.add_edge(100, 200, "FRIEND_OF", PropertyMap::new());
    assert!(result.is_err());
}

#[test]
fn test_get_neighbors_by_direction() {
    let mut graph = PropertyGraph::in_memory().unwrap();

    let a = graph.add_node("Person", PropertyMap::new()).unwrap();
    let b = graph.add_node("Person", PropertyMap::new()).unwrap();
    let c = graph.add_node("Person", PropertyMap::new()).unwrap();

    graph.add_edge(a, b, "FRIEND_OF", PropertyMap::new()).unwrap();
    graph.add_edge(c, a, "FRIEND_OF", PropertyMap::new()).unwrap();

    assert_eq!(graph.get_neighbors(a, Direction::Outgoing).unwrap(), vec![b]);
    assert_eq!(graph.get_neighbors(a, Direction::Incoming).unwrap(), vec![c]);

    let both = graph.get_neighbors(a, Direction::Both).unwrap();
    assert_eq!(both.len(), 2);
    assert!(both.contains(&b));
    assert!(both.contains(&c));
    assert_eq!(graph.degree(a).unwrap(), 2);
}

#[test]
fn test_staged_writes_invisible_until_commit() {
    let mut graph = PropertyGraph::in_memory().unwrap();

    let a = graph.stage_node("Person", PropertyMap::new());
    let b = graph.stage_node("Person", PropertyMap::new());
    graph
        .stage_edge(a, b, "FRIEND_OF", PropertyMap::new())
        .unwrap();

    assert_eq!(graph.pending_len(), 3);
    assert_eq!(graph.node_count(), 0);
    assert!(graph.get_node(a).is_err());

    assert_eq!(graph.commit().unwrap(), 3);
    assert_eq!(graph.pending_len(), 0);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.get_edges_between(a, b).unwrap().len(), 1);
}

#[test]
fn test_stage_edge_across_units_of_work() {
    let mut graph = PropertyGraph::in_memory().unwrap();

    let a = graph.stage_node("Person", PropertyMap::new());
    graph.commit().unwrap();

    let b = graph.stage_node("Person", PropertyMap::new());
    graph
        .stage_edge(a, b, "FRIEND_OF", PropertyMap::new())
        .unwrap();
    graph.commit().unwrap();

    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_rollback_discards_unit_of_work() {
    let mut graph = PropertyGraph::in_memory().unwrap();

    graph.stage_node("Person", PropertyMap::new());
    graph.commit().unwrap();
    graph.stage_node("Person", PropertyMap::new());
    graph.stage_node("Person", PropertyMap::new());

    assert_eq!(graph.rollback(), 2);
    assert_eq!(graph.commit().unwrap(), 0);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_reopen_from_shared_backend() {
    let backend = MemoryBackend::new();
    {
        let mut graph = PropertyGraph::with_backend(Box::new(backend.clone())).unwrap();
        let a = graph.stage_node("Person", PropertyMap::new());
        let b = graph.stage_node("Person", PropertyMap::new());
        graph
            .stage_edge(a, b, "FRIEND_OF", PropertyMap::new())
            .unwrap();
        graph.close().unwrap();
    }

    let mut graph = PropertyGraph::with_backend(Box::new(backend)).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);

    // Counters survive, so new IDs continue after the stored ones
    assert_eq!(graph.add_node("Person", PropertyMap::new()).unwrap(), 2);
}

#[test]
fn test_clear() {
    let mut graph = PropertyGraph::in_memory().unwrap();
    let a = graph.add_node("Person", PropertyMap::new()).unwrap();
    let b = graph.add_node("Person", PropertyMap::new()).unwrap();
    graph.add_edge(a, b, "FRIEND_OF", PropertyMap::new()).unwrap();

    graph.clear().unwrap();

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.add_node("Person", PropertyMap::new()).unwrap(), 0);
}

#[test]
fn test_count_by_label_and_type() {
    let mut graph = PropertyGraph::in_memory().unwrap();
    let a = graph.add_node("Person", PropertyMap::new()).unwrap();
    let b = graph.add_node("Robot", PropertyMap::new()).unwrap();
    graph.add_edge(a, b, "BUILT", PropertyMap::new()).unwrap();

    assert_eq!(graph.count_nodes_with_label("Person"), 1);
    assert_eq!(graph.count_nodes_with_label("Robot"), 1);
    assert_eq!(graph.count_edges_with_type("BUILT"), 1);
    assert_eq!(graph.count_edges_with_type("FRIEND_OF"), 0);
}
