//! Unit tests for Watts-Strogatz rewiring.

use graphgen::generate::{
    DegreeDistribution, IndexEdge, RelationshipGenerator, WattsStrogatzConfig,
    WattsStrogatzGenerator,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn generator(n: usize, k: usize, beta: f64) -> WattsStrogatzGenerator {
    WattsStrogatzGenerator::new(WattsStrogatzConfig::new(n, k, beta).unwrap())
}

fn assert_simple(edges: &[IndexEdge], n: usize) {
    let distinct: HashSet<_> = edges.iter().collect();
    assert_eq!(distinct.len(), edges.len(), "duplicate edge");
    assert!(edges.iter().all(|edge| edge.second() < n));
}

#[test]
fn test_edge_count_is_half_n_times_k() {
    for (n, k, beta) in [(100, 4, 0.1), (1000, 4, 0.5), (51, 10, 1.0), (7, 4, 0.7)] {
        let edges = generator(n, k, beta)
            .generate_edges(&mut SmallRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(edges.len(), n * k / 2, "n={n} k={k} beta={beta}");
        assert_simple(&edges, n);
    }
}

#[test]
fn test_zero_beta_is_the_ring_lattice() {
    let generator = generator(20, 6, 0.0);
    let edges = generator
        .generate_edges(&mut SmallRng::seed_from_u64(2))
        .unwrap();
    assert_eq!(edges, generator.ring_lattice());

    let degrees = DegreeDistribution::from_edges(20, &edges).unwrap();
    assert!(degrees.degrees().iter().all(|&d| d == 6));
}

#[test]
fn test_rewiring_keeps_anchor_degree_sum() {
    // Each anchor keeps its k/2 lattice edges, only the far endpoint moves
    let edges = generator(200, 4, 1.0)
        .generate_edges(&mut SmallRng::seed_from_u64(3))
        .unwrap();
    let degrees = DegreeDistribution::from_edges(200, &edges).unwrap();
    assert_eq!(degrees.total_degree(), Some(800));
    assert!(degrees.degrees().iter().all(|&d| d >= 1));
}

#[test]
fn test_full_rewiring_changes_the_lattice() {
    let generator = generator(200, 4, 1.0);
    let edges: HashSet<_> = generator
        .generate_edges(&mut SmallRng::seed_from_u64(4))
        .unwrap()
        .into_iter()
        .collect();
    let lattice: HashSet<_> = generator.ring_lattice().into_iter().collect();
    assert!(edges.difference(&lattice).count() > 200);
}

#[test]
fn test_dense_small_graph_survives_dead_ends() {
    // n=5, k=2: rewiring quickly saturates some anchors
    for seed in 0..50 {
        let edges = generator(5, 2, 1.0)
            .generate_edges(&mut SmallRng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(edges.len(), 5);
        assert_simple(&edges, 5);
    }
}

#[test]
fn test_seeded_runs_are_identical() {
    let generator = generator(300, 6, 0.3);
    let a = generator
        .generate_edges(&mut SmallRng::seed_from_u64(42))
        .unwrap();
    let b = generator
        .generate_edges(&mut SmallRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(a, b);
}
