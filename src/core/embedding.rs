//! Embedding vectors and cosine geometry

#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(Vec<f32>);

impl Embedding {
	/// Wrap a raw vector as returned by the embedder (no normalization)
	pub fn raw(data: Vec<f32>) -> Self {
		Self(data)
	}

	/// Create a unit-length embedding
	pub fn normalized(data: Vec<f32>) -> Self {
		Self(normalize(&data))
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	pub fn norm(&self) -> f32 {
		self.0.iter().map(|x| x * x).sum::<f32>().sqrt()
	}

	/// Cosine similarity in [-1.0, 1.0], `None` when either vector has zero norm
	pub fn cosine_similarity(&self, other: &Self) -> Option<f32> {
		let norm_a = self.norm();
		let norm_b = other.norm();
		if norm_a == 0.0 || norm_b == 0.0 {
			return None;
		}

		let dot: f32 = self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum();
		Some(dot / (norm_a * norm_b))
	}

	/// `1 - cosine_similarity`, or `+inf` for degenerate (zero or non-finite) vectors
	pub fn cosine_distance(&self, other: &Self) -> f32 {
		match self.cosine_similarity(other) {
			Some(sim) if sim.is_finite() => 1.0 - sim,
			_ => f32::INFINITY,
		}
	}

	pub fn into_inner(self) -> Vec<f32> {
		self.0
	}
}

impl From<Vec<f32>> for Embedding {
	fn from(data: Vec<f32>) -> Self {
		Self::raw(data)
	}
}

/// Scale a vector to unit length; zero vectors are returned unchanged
pub fn normalize(v: &[f32]) -> Vec<f32> {
	let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
	if norm > 0.0 {
		v.iter().map(|x| x / norm).collect()
	} else {
		v.to_vec()
	}
}
