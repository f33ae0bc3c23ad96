//! Unit tests for Barabasi-Albert and complete-graph generation.

use graphgen::generate::{
    BarabasiAlbertConfig, BarabasiAlbertGenerator, CompleteGraphConfig, CompleteGraphGenerator,
    DegreeDistribution, IndexEdge, RelationshipGenerator,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn generate(n: usize, m: usize, seed: u64) -> Vec<IndexEdge> {
    BarabasiAlbertGenerator::new(BarabasiAlbertConfig::new(n, m).unwrap())
        .generate_edges(&mut SmallRng::seed_from_u64(seed))
        .unwrap()
}

#[test]
fn test_edge_counts() {
    assert_eq!(generate(100, 3, 1).len(), 294);
    assert_eq!(generate(1000, 2, 1).len(), 1997);
}

#[test]
fn test_edges_are_distinct() {
    let edges = generate(500, 4, 2);
    let distinct: HashSet<_> = edges.iter().collect();
    assert_eq!(distinct.len(), edges.len());
}

#[test]
fn test_every_new_node_attaches_m_times_to_earlier_nodes() {
    let m = 3;
    let edges = generate(200, m, 3);
    let degrees = DegreeDistribution::from_edges(200, &edges).unwrap();
    assert!(degrees.degrees().iter().all(|&d| d >= m - 1));

    for v in m..200 {
        let attached = edges.iter().filter(|edge| edge.second() == v).count();
        assert_eq!(attached, m, "node {v}");
    }
}

#[test]
fn test_preferential_attachment_produces_hubs() {
    let edges = generate(2000, 2, 4);
    let degrees = DegreeDistribution::from_edges(2000, &edges).unwrap();
    let max = degrees.degrees().iter().copied().max().unwrap_or(0);
    // Uniform attachment would keep the maximum degree far lower
    assert!(max > 30, "max degree {max}");
}

#[test]
fn test_seeded_runs_are_identical() {
    assert_eq!(generate(300, 2, 7), generate(300, 2, 7));
}

#[test]
fn test_complete_graph_has_every_pair() {
    let generator = CompleteGraphGenerator::new(CompleteGraphConfig::new(10).unwrap());
    let edges = generator
        .generate_edges(&mut SmallRng::seed_from_u64(0))
        .unwrap();
    assert_eq!(edges.len(), 45);

    let degrees = DegreeDistribution::from_edges(10, &edges).unwrap();
    assert!(degrees.degrees().iter().all(|&d| d == 9));
}
