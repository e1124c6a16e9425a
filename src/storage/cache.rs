//! Content-hash keyed embedding cache
//!
//! Wraps any [`Embedder`] and only forwards texts it has not embedded before.
//! Entries are keyed by model name and text, so a cached vector is exactly
//! what the inner embedder returned for that input.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::core::ContentHash;
use crate::error::EmbedError;
use crate::models::Embedder;
use crate::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
	version: String,
	entries: HashMap<ContentHash, Vec<f32>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
	pub hits: usize,
	pub misses: usize,
	pub entries: usize,
}

pub struct CachedEmbedder<E> {
	inner: E,
	entries: Mutex<HashMap<ContentHash, Vec<f32>>>,
	hits: AtomicUsize,
	misses: AtomicUsize,
}

impl<E: Embedder> CachedEmbedder<E> {
	pub fn new(inner: E) -> Self {
		Self::with_entries(inner, HashMap::new())
	}

	fn with_entries(inner: E, entries: HashMap<ContentHash, Vec<f32>>) -> Self {
		Self {
			inner,
			entries: Mutex::new(entries),
			hits: AtomicUsize::new(0),
			misses: AtomicUsize::new(0),
		}
	}

	/// Open a persisted cache; a missing or unreadable file starts empty
	pub fn load(inner: E, path: &Path) -> Self {
		if !path.exists() {
			ui::debug(&format!("No embedding cache at {}", path.display()));
			return Self::new(inner);
		}

		match read_cache(path) {
			Ok(file) => {
				ui::debug(&format!("Loaded {} cached embeddings (v{})", file.entries.len(), file.version));
				Self::with_entries(inner, file.entries)
			}
			Err(e) => {
				ui::warn(&format!("Ignoring unreadable embedding cache {}: {:#}", path.display(), e));
				Self::new(inner)
			}
		}
	}

	pub fn save(&self, path: &Path) -> Result<()> {
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).context("Failed to create cache directory")?;
		}

		let entries = self
			.entries
			.lock()
			.map_err(|e| anyhow::anyhow!("Cache lock poisoned: {}", e))?;
		let file = CacheFile {
			version: VERSION.to_string(),
			entries: entries.clone(),
		};

		let bytes = rmp_serde::to_vec(&file).context("Failed to serialize embedding cache")?;
		fs::write(path, bytes).context("Failed to write embedding cache")?;

		ui::debug(&format!("Saved {} embeddings to {}", file.entries.len(), path.display()));
		Ok(())
	}

	pub fn stats(&self) -> CacheStats {
		CacheStats {
			hits: self.hits.load(Ordering::Relaxed),
			misses: self.misses.load(Ordering::Relaxed),
			entries: self.entries.lock().map(|e| e.len()).unwrap_or(0),
		}
	}

	pub fn inner(&self) -> &E {
		&self.inner
	}
}

fn read_cache(path: &Path) -> Result<CacheFile> {
	let bytes = fs::read(path).context("Failed to read embedding cache")?;
	rmp_serde::from_slice(&bytes).context("Failed to deserialize embedding cache")
}

fn lock_err<T>(e: std::sync::PoisonError<T>) -> EmbedError {
	EmbedError::Inference(format!("cache lock poisoned: {}", e))
}

impl<E: Embedder> Embedder for CachedEmbedder<E> {
	fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		let model = self.inner.model_name();
		let keys: Vec<ContentHash> = texts.iter().map(|t| ContentHash::compute(model, t)).collect();

		let mut resolved: Vec<Option<Vec<f32>>> = {
			let entries = self.entries.lock().map_err(lock_err)?;
			keys.iter().map(|k| entries.get(k).cloned()).collect()
		};

		// Unique misses in first-seen order
		let mut miss_keys: Vec<ContentHash> = Vec::new();
		let mut miss_texts: Vec<&str> = Vec::new();
		for (idx, key) in keys.iter().enumerate() {
			if resolved[idx].is_none() && !miss_keys.contains(key) {
				miss_keys.push(*key);
				miss_texts.push(texts[idx]);
			}
		}

		let hits = resolved.iter().filter(|r| r.is_some()).count();
		self.hits.fetch_add(hits, Ordering::Relaxed);
		self.misses.fetch_add(miss_texts.len(), Ordering::Relaxed);
		ui::debug(&format!("Embedding cache: {} hits, {} misses", hits, miss_texts.len()));

		if miss_texts.is_empty() {
			return Ok(resolved.into_iter().flatten().collect());
		}

		let fresh = self.inner.embed_batch(&miss_texts)?;
		if fresh.len() != miss_texts.len() {
			// Nothing is cached from a malformed batch
			return Err(EmbedError::CountMismatch {
				expected: miss_texts.len(),
				got: fresh.len(),
			});
		}

		let fresh: HashMap<ContentHash, Vec<f32>> = miss_keys.into_iter().zip(fresh).collect();
		for (idx, key) in keys.iter().enumerate() {
			if resolved[idx].is_none() {
				resolved[idx] = fresh.get(key).cloned();
			}
		}

		self.entries.lock().map_err(lock_err)?.extend(fresh);

		Ok(resolved.into_iter().flatten().collect())
	}

	fn model_name(&self) -> &str {
		self.inner.model_name()
	}
}
