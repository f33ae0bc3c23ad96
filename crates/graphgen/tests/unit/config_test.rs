//! Unit tests for generator configuration validation.

use graphgen::generate::{
    BarabasiAlbertConfig, CompleteGraphConfig, DegreeDistribution, DegreeSequenceConfig,
    ErdosRenyiConfig, GenerationRequest, GeneratorConfig, WattsStrogatzConfig,
};

#[test]
fn test_erdos_renyi_accepts_complete_boundary() {
    let config = ErdosRenyiConfig::new(20, 190).unwrap();
    assert_eq!(config.node_count(), 20);
    assert_eq!(config.edge_count(), 190);
    assert_eq!(config.max_edge_count(), 190);
    assert!(config.is_valid());
}

#[test]
fn test_erdos_renyi_rejects_too_many_edges() {
    let err = ErdosRenyiConfig::new(20, 191).unwrap_err();
    assert!(err.is_invalid_config());
}

#[test]
fn test_erdos_renyi_rejects_tiny_graphs() {
    assert!(ErdosRenyiConfig::new(0, 0).is_err());
    assert!(ErdosRenyiConfig::new(1, 0).is_err());
    assert!(ErdosRenyiConfig::new(2, 0).is_ok());
    assert!(ErdosRenyiConfig::new(2, 1).is_ok());
}

#[test]
fn test_watts_strogatz_mean_degree_bounds() {
    assert!(WattsStrogatzConfig::new(6, 4, 0.5).is_ok());
    // Odd
    assert!(WattsStrogatzConfig::new(6, 5, 0.5).is_err());
    // Not below n - 1
    assert!(WattsStrogatzConfig::new(6, 6, 0.5).is_err());
    assert!(WattsStrogatzConfig::new(6, 0, 0.5).is_err());
    assert!(WattsStrogatzConfig::new(2, 2, 0.5).is_err());
}

#[test]
fn test_watts_strogatz_beta_bounds() {
    assert!(WattsStrogatzConfig::new(10, 2, 0.0).is_ok());
    assert!(WattsStrogatzConfig::new(10, 2, 1.0).is_ok());
    assert!(WattsStrogatzConfig::new(10, 2, -0.1).is_err());
    assert!(WattsStrogatzConfig::new(10, 2, 1.1).is_err());
    assert!(WattsStrogatzConfig::new(10, 2, f64::NAN).is_err());
}

#[test]
fn test_watts_strogatz_edge_count() {
    let config = WattsStrogatzConfig::new(1000, 4, 0.5).unwrap();
    assert_eq!(config.edge_count(), 2000);
    assert_eq!(config.mean_degree(), 4);
    assert_eq!(config.beta(), 0.5);
}

fn assert_idempotent(config: &dyn GeneratorConfig) {
    let first = config.is_valid();
    for _ in 0..5 {
        assert_eq!(config.is_valid(), first);
    }
    assert!(first);
}

#[test]
fn test_is_valid_is_idempotent() {
    assert_idempotent(&ErdosRenyiConfig::new(20, 95).unwrap());
    assert_idempotent(&WattsStrogatzConfig::new(100, 4, 0.1).unwrap());
    assert_idempotent(&BarabasiAlbertConfig::new(100, 3).unwrap());
    assert_idempotent(&CompleteGraphConfig::new(10).unwrap());
    assert_idempotent(&DegreeSequenceConfig::new(vec![3, 3, 3, 3].into()).unwrap());
}

#[test]
fn test_barabasi_albert_bounds_and_edge_count() {
    assert!(BarabasiAlbertConfig::new(10, 0).is_err());
    assert!(BarabasiAlbertConfig::new(10, 10).is_err());
    assert_eq!(BarabasiAlbertConfig::new(100, 3).unwrap().edge_count(), 294);
    assert_eq!(BarabasiAlbertConfig::new(1000, 2).unwrap().edge_count(), 1997);
}

#[test]
fn test_complete_graph_config() {
    assert!(CompleteGraphConfig::new(1).is_err());
    assert_eq!(CompleteGraphConfig::new(10).unwrap().edge_count(), 45);
}

#[test]
fn test_degree_sequence_config() {
    let config = DegreeSequenceConfig::new(DegreeDistribution::new(vec![2, 2, 2, 2])).unwrap();
    assert_eq!(config.node_count(), 4);
    assert_eq!(config.edge_count(), 4);

    // Odd sum
    assert!(DegreeSequenceConfig::new(vec![1, 1, 1].into()).is_err());
    // Valid shape but not graphical
    assert!(DegreeSequenceConfig::new(vec![3, 3, 1, 1].into()).is_err());
    assert!(DegreeSequenceConfig::new(DegreeDistribution::default()).is_err());
}

#[test]
fn test_degree_sequence_rejects_huge_degree() {
    let err = DegreeSequenceConfig::new(vec![usize::MAX, 2].into()).unwrap_err();
    assert!(err.is_invalid_config());

    let err = DegreeSequenceConfig::new(vec![1, usize::MAX].into()).unwrap_err();
    assert!(err.is_invalid_config());

    let request = GenerationRequest::from_json(
        r#"{"algorithm": "simple", "degrees": [18446744073709551615, 1]}"#,
    )
    .unwrap();
    assert!(request.build_generator().unwrap_err().is_invalid_config());
}

#[test]
fn test_configs_deserialize_through_validation() {
    let config: ErdosRenyiConfig =
        serde_json::from_str(r#"{"node_count": 20, "edge_count": 190}"#).unwrap();
    assert_eq!(config.edge_count(), 190);

    let invalid = serde_json::from_str::<ErdosRenyiConfig>(r#"{"node_count": 20, "edge_count": 191}"#);
    assert!(invalid.is_err());

    let invalid = serde_json::from_str::<WattsStrogatzConfig>(
        r#"{"node_count": 6, "mean_degree": 5, "beta": 0.5}"#,
    );
    assert!(invalid.is_err());
}
