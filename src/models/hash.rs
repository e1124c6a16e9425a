//! Feature-hashing text embedder
//!
//! Maps lowercase word tokens into a fixed number of buckets with signed
//! xxh3 hashes. No model files are needed and the output depends only on the
//! input text, so it is reproducible across runs and platforms.

use rayon::prelude::*;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use super::Embedder;
use crate::config::DEFAULT_HASH_DIM;
use crate::core::embedding::normalize;
use crate::error::EmbedError;

const NUM_HASHES: u64 = 4;
const SIGN_SEED_OFFSET: u64 = 1000;

pub struct HashEmbedder {
	dimension: usize,
	name: String,
}

impl HashEmbedder {
	pub fn new(dimension: usize) -> Result<Self, EmbedError> {
		if dimension == 0 {
			return Err(EmbedError::InvalidInput("dimension must be positive".to_string()));
		}

		Ok(Self {
			dimension,
			name: format!("hash-{}", dimension),
		})
	}

	pub fn dimension(&self) -> usize {
		self.dimension
	}

	/// Embed one text; texts without word tokens map to the zero vector
	pub fn embed(&self, text: &str) -> Vec<f32> {
		let tokens = tokenize(text);
		let mut vector = vec![0.0f32; self.dimension];

		for token in &tokens {
			for seed in 0..NUM_HASHES {
				let idx = (xxh3_64_with_seed(token.as_bytes(), seed) % self.dimension as u64) as usize;
				let sign = if xxh3_64_with_seed(token.as_bytes(), seed + SIGN_SEED_OFFSET) % 2 == 0 {
					1.0
				} else {
					-1.0
				};
				vector[idx] += sign;
			}
		}

		normalize(&vector)
	}
}

impl Default for HashEmbedder {
	fn default() -> Self {
		Self {
			dimension: DEFAULT_HASH_DIM,
			name: format!("hash-{}", DEFAULT_HASH_DIM),
		}
	}
}

impl Embedder for HashEmbedder {
	fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		Ok(texts.par_iter().map(|text| self.embed(text)).collect())
	}

	fn model_name(&self) -> &str {
		&self.name
	}
}

fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| !c.is_alphanumeric())
		.filter(|s| s.chars().count() > 1)
		.map(str::to_string)
		.collect()
}
