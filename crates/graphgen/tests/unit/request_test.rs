//! Unit tests for JSON generation requests and their defaults.

use graphgen::generate::{AlgorithmRequest, GenerationRequest, RelationshipGenerator};
use graphgen::GraphError;
use rand::RngCore;

#[test]
fn test_erdos_renyi_defaults() {
    let request = GenerationRequest::from_json(r#"{"algorithm": "erdos_renyi"}"#).unwrap();
    let generator = request.build_generator().unwrap();

    assert_eq!(generator.name(), "erdos-renyi");
    assert_eq!(generator.node_count(), 1000);
    assert_eq!(generator.expected_edge_count(), 10_000);
}

#[test]
fn test_barabasi_albert_defaults() {
    let request = GenerationRequest::from_json(r#"{"algorithm": "barabasi_albert"}"#).unwrap();
    let generator = request.build_generator().unwrap();

    assert_eq!(generator.node_count(), 1000);
    assert_eq!(generator.expected_edge_count(), 1997);
}

#[test]
fn test_partial_parameters_keep_other_defaults() {
    let request =
        GenerationRequest::from_json(r#"{"algorithm": "watts_strogatz", "beta": 0.0}"#).unwrap();
    let generator = request.build_generator().unwrap();
    assert_eq!(generator.node_count(), 1000);
    assert_eq!(generator.expected_edge_count(), 2000);
}

#[test]
fn test_complete_and_simple_require_parameters() {
    assert!(GenerationRequest::from_json(r#"{"algorithm": "complete"}"#).is_err());
    assert!(GenerationRequest::from_json(r#"{"algorithm": "simple"}"#).is_err());

    let request =
        GenerationRequest::from_json(r#"{"algorithm": "simple", "degrees": [2, 2, 2, 2]}"#)
            .unwrap();
    assert_eq!(request.build_generator().unwrap().expected_edge_count(), 4);
}

#[test]
fn test_label_and_relationship_type() {
    let request = GenerationRequest::from_json(
        r#"{"algorithm": "complete", "nodes": 5, "label": "Robot", "relationship_type": "KNOWS"}"#,
    )
    .unwrap();

    assert_eq!(request.node_creator().label(), "Robot");
    assert_eq!(request.relationship_creator().rel_type(), "KNOWS");
}

#[test]
fn test_batch_size_default_and_override() {
    let request = GenerationRequest::new(AlgorithmRequest::Complete { nodes: 5 });
    assert_eq!(request.to_config().unwrap().batch_size(), 1000);

    let request = GenerationRequest::from_json(
        r#"{"algorithm": "complete", "nodes": 5, "batch_size": 7}"#,
    )
    .unwrap();
    assert_eq!(request.to_config().unwrap().batch_size(), 7);
}

#[test]
fn test_invalid_parameters_are_config_errors() {
    let request = GenerationRequest::from_json(
        r#"{"algorithm": "watts_strogatz", "nodes": 6, "mean_degree": 5}"#,
    )
    .unwrap();
    let err = request.build_generator().unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfig { .. }));
}

#[test]
fn test_malformed_json() {
    let err = GenerationRequest::from_json("{not json").unwrap_err();
    assert!(matches!(err, GraphError::Serialization { .. }));
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let mut request = GenerationRequest::new(AlgorithmRequest::Complete { nodes: 5 });
    request.seed = Some(99);
    assert_eq!(request.rng().next_u64(), request.rng().next_u64());
}

#[test]
fn test_request_round_trips_through_json() {
    let request = GenerationRequest {
        algorithm: AlgorithmRequest::ErdosRenyi {
            nodes: Some(20),
            edges: None,
        },
        label: Some("Robot".to_string()),
        relationship_type: None,
        batch_size: Some(50),
        seed: Some(1),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains(r#""algorithm":"erdos_renyi""#));
    assert_eq!(GenerationRequest::from_json(&json).unwrap(), request);
}
