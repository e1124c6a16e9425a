//! Error types for embedding and organization

use thiserror::Error;

/// Failure inside an embedding backend
#[derive(Debug, Error)]
pub enum EmbedError {
	#[error("model not loaded: {0}")]
	ModelNotLoaded(String),

	#[error("tokenization failed: {0}")]
	Tokenization(String),

	#[error("inference failed: {0}")]
	Inference(String),

	#[error("invalid input: {0}")]
	InvalidInput(String),

	/// A wrapped backend returned a different number of vectors than texts
	#[error("backend returned {got} vectors for {expected} texts")]
	CountMismatch { expected: usize, got: usize },

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

/// Errors returned by [`crate::processing::Organizer::organize`]
///
/// Embedder failures propagate unmodified; no partial result is ever produced.
#[derive(Debug, Error)]
pub enum OrganizeError {
	/// The embedder could not be loaded or invoked
	#[error("embedding unavailable: {0}")]
	EmbeddingUnavailable(#[source] EmbedError),

	/// The embedder returned a different number of vectors than texts submitted
	#[error("embedder returned {got} vectors for {expected} items")]
	EmbeddingCountMismatch { expected: usize, got: usize },

	/// The embedder returned vectors of differing length
	#[error("embedding {index} has dimension {found}, expected {expected}")]
	InconsistentDimension {
		index: usize,
		expected: usize,
		found: usize,
	},
}

pub type Result<T> = std::result::Result<T, OrganizeError>;
