//! Content hashing for embedding cache keys

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use xxhash_rust::xxh3::{xxh3_64, Xxh3};

const HASH_BUFFER_SIZE: usize = 65536; // 64KB

/// xxh3 hash of the embedding input, scoped to the model that embeds it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(u64);

impl ContentHash {
	pub fn compute(model: &str, text: &str) -> Self {
		let mut buffer = Vec::with_capacity(model.len() + text.len() + 1);
		buffer.extend_from_slice(model.as_bytes());
		buffer.push(0);
		buffer.extend_from_slice(text.as_bytes());
		Self(xxh3_64(&buffer))
	}

	pub fn value(&self) -> u64 {
		self.0
	}
}

impl std::fmt::Display for ContentHash {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:016x}", self.0)
	}
}

/// xxh3 over the full contents of every file, in order
///
/// Identifies model weights so cached vectors never outlive the model that made them.
pub fn fingerprint_files(paths: &[&Path]) -> std::io::Result<u64> {
	let mut hasher = Xxh3::new();
	let mut buffer = vec![0u8; HASH_BUFFER_SIZE];

	for path in paths {
		let mut file = File::open(path)?;
		loop {
			let n = file.read(&mut buffer)?;
			if n == 0 {
				break;
			}
			hasher.update(&buffer[..n]);
		}
		hasher.update(&[0]);
	}

	Ok(hasher.digest())
}
