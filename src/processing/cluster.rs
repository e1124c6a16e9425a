//! Single-pass centroid clustering over cosine distance
//!
//! Centroids are seeded at evenly spaced input positions and never updated:
//! every embedding is assigned once to its nearest seed. Results depend only
//! on the embeddings and their order.

use crate::config::{ITEMS_PER_CLUSTER, MAX_CLUSTERS};
use crate::core::Embedding;

/// Cluster labels for one batch of embeddings
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
	/// Seed embedding per cluster, in cluster order
	pub centroids: Vec<Embedding>,
	/// Cluster index per input embedding
	pub labels: Vec<usize>,
}

impl Assignment {
	pub fn k(&self) -> usize {
		self.centroids.len()
	}

	/// Input indices grouped by cluster, each group in input order
	pub fn members(&self) -> Vec<Vec<usize>> {
		let mut groups = vec![Vec::new(); self.k()];
		for (idx, &label) in self.labels.iter().enumerate() {
			groups[label].push(idx);
		}
		groups
	}
}

/// `min(5, ceil(n / 3))`, zero for no items
pub fn cluster_count(n: usize) -> usize {
	n.div_ceil(ITEMS_PER_CLUSTER).min(MAX_CLUSTERS)
}

/// Input positions used as seeds: `i * floor(n / k)` for `i` in `0..k`
pub fn seed_indices(n: usize, k: usize) -> Vec<usize> {
	if k == 0 {
		return Vec::new();
	}

	let step = n / k;
	(0..k).map(|i| i * step).collect()
}

/// Index of the closest centroid, first minimum wins
///
/// Degenerate distances (zero-norm vectors) are never selected unless every
/// distance is degenerate, in which case cluster 0 is returned.
pub fn nearest_centroid(embedding: &Embedding, centroids: &[Embedding]) -> usize {
	let mut best: Option<(usize, f32)> = None;

	for (idx, centroid) in centroids.iter().enumerate() {
		let distance = embedding.cosine_distance(centroid);
		if !distance.is_finite() {
			continue;
		}
		match best {
			Some((_, best_distance)) if distance >= best_distance => {}
			_ => best = Some((idx, distance)),
		}
	}

	best.map(|(idx, _)| idx).unwrap_or(0)
}

/// Seed `cluster_count(n)` centroids and assign every embedding once
pub fn assign(embeddings: &[Embedding]) -> Assignment {
	let n = embeddings.len();
	let k = cluster_count(n);
	let seeds = seed_indices(n, k);

	crate::ui::debug(&format!("Clustering {} embeddings into {} clusters (seeds at {:?})", n, k, seeds));

	let centroids: Vec<Embedding> = seeds.iter().map(|&i| embeddings[i].clone()).collect();
	let labels = embeddings
		.iter()
		.map(|embedding| nearest_centroid(embedding, &centroids))
		.collect();

	Assignment { centroids, labels }
}
