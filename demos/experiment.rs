//! Compares tree build and query time against a brute force scan.
//!
//! Usage: `cargo run --release --example experiment [dim] [num_points]`

use std::time::{Duration, Instant};

use nalgebra::DVector;
use nearest_neighbor::{KdTree, KdTreeError};
use rand::Rng;

const NUM_QUERIES: usize = 1000;

fn squared_distance(a: &DVector<f64>, b: &DVector<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn run_experiment(
    dim: usize,
    num_points: usize,
) -> Result<(Duration, Duration, Duration), KdTreeError> {
    let mut rng = rand::thread_rng();
    let mut random_point = || DVector::<f64>::from_fn(dim, |_, _| rng.gen::<f64>());

    let points: Vec<DVector<f64>> = (0..num_points).map(|_| random_point()).collect();
    let labels: Vec<String> = (0..num_points).map(|i| i.to_string()).collect();
    let queries: Vec<DVector<f64>> = (0..NUM_QUERIES).map(|_| random_point()).collect();

    let empty = KdTree::new(dim)?;
    let start = Instant::now();
    let tree = empty.build(points, labels)?;
    let build_time = start.elapsed();

    let start = Instant::now();
    let mut found = Vec::with_capacity(NUM_QUERIES);
    for query in queries.iter() {
        found.push(tree.nearest(query)?);
    }
    let query_time = start.elapsed();

    let start = Instant::now();
    let mut expected = Vec::with_capacity(NUM_QUERIES);
    for query in queries.iter() {
        let min = tree
            .points()
            .iter()
            .map(|p| squared_distance(query, p))
            .fold(f64::INFINITY, f64::min);
        expected.push(min);
    }
    let brute_force_time = start.elapsed();

    for (found, expected) in found.iter().zip(expected.iter()) {
        let (_, distance) = found.expect("tree is not empty");
        assert_eq!(distance, *expected);
    }

    Ok((build_time, query_time, brute_force_time))
}

fn main() -> Result<(), KdTreeError> {
    let mut args = std::env::args().skip(1);
    let dim = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);
    let num_points = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100_000)
        .max(1);

    let (build, query, brute_force) = run_experiment(dim, num_points)?;
    println!(
        "dim={} points={} kd_tree_build={:?} kd_tree_query={:?} brute_force_query={:?}",
        dim, num_points, build, query, brute_force
    );
    Ok(())
}
