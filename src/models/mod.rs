//! # Embedding Models
//!
//! The [`Embedder`] seam plus the built-in backends: a deterministic
//! feature-hashing embedder and (with the `onnx` feature) a local ONNX text encoder.

pub mod hash;
#[cfg(feature = "onnx")]
pub mod text;

use std::sync::Arc;

use crate::error::EmbedError;

pub use hash::HashEmbedder;
#[cfg(feature = "onnx")]
pub use text::OnnxEmbedder;

/// Converts text into fixed-length vectors
///
/// Implementations must return one vector per input, in input order. They are
/// shared across concurrent organization calls and hold no per-call state.
pub trait Embedder: Send + Sync {
	fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError>;

	/// Identifier used to scope cached embeddings
	fn model_name(&self) -> &str;
}

impl<E: Embedder + ?Sized> Embedder for &E {
	fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		(**self).embed_batch(texts)
	}

	fn model_name(&self) -> &str {
		(**self).model_name()
	}
}

impl<E: Embedder + ?Sized> Embedder for Box<E> {
	fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		(**self).embed_batch(texts)
	}

	fn model_name(&self) -> &str {
		(**self).model_name()
	}
}

impl<E: Embedder + ?Sized> Embedder for Arc<E> {
	fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		(**self).embed_batch(texts)
	}

	fn model_name(&self) -> &str {
		(**self).model_name()
	}
}
