//! The organization pipeline: embed, cluster, name, tag, suggest

use crate::core::{Cluster, ContentItem, Embedding, OrganizationResult};
use crate::error::{EmbedError, OrganizeError, Result};
use crate::models::Embedder;
use crate::ui;

use super::{cluster, naming, suggest, tags};

/// Groups content items into named collections using an injected embedder
///
/// Holds no state between calls; concurrent calls are independent as long as
/// the embedder is.
pub struct Organizer<E> {
	embedder: E,
}

impl<E: Embedder> Organizer<E> {
	pub fn new(embedder: E) -> Self {
		Self { embedder }
	}

	pub fn embedder(&self) -> &E {
		&self.embedder
	}

	pub fn into_embedder(self) -> E {
		self.embedder
	}

	/// Organize items into clusters with tags and suggestions
	///
	/// Items without any text are excluded before embedding and listed in
	/// [`OrganizationResult::excluded`]. An empty input yields an empty result.
	pub fn organize(&self, items: &[ContentItem]) -> Result<OrganizationResult> {
		let mut excluded = Vec::new();
		let mut kept: Vec<&ContentItem> = Vec::with_capacity(items.len());
		let mut texts: Vec<String> = Vec::with_capacity(items.len());

		for item in items {
			match item.embedding_text() {
				Some(text) => {
					kept.push(item);
					texts.push(text);
				}
				None => excluded.push(item.id.clone()),
			}
		}

		if !excluded.is_empty() {
			ui::debug(&format!("Excluded {} items without text", excluded.len()));
		}

		if kept.is_empty() {
			return Ok(OrganizationResult {
				excluded,
				..Default::default()
			});
		}

		let embeddings = self.embed(&texts)?;
		let assignment = cluster::assign(&embeddings);

		let categories: Vec<Cluster> = assignment
			.members()
			.into_iter()
			.zip(assignment.centroids.iter().cloned())
			.enumerate()
			.map(|(id, (members, centroid))| {
				let items: Vec<ContentItem> = members.iter().map(|&idx| kept[idx].clone()).collect();
				let name = naming::cluster_name(&items);
				ui::debug(&format!("Cluster {} \"{}\": {} items", id, name, items.len()));
				Cluster {
					id,
					items,
					centroid,
					name,
				}
			})
			.collect();

		let tags = tags::extract_tags(kept.iter().copied(), &categories);
		let suggestions = suggest::suggestions(&categories);

		Ok(OrganizationResult {
			categories,
			tags,
			suggestions,
			excluded,
		})
	}

	/// One batched embedder call, validated against the submitted texts
	fn embed(&self, texts: &[String]) -> Result<Vec<Embedding>> {
		let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
		let vectors = self
			.embedder
			.embed_batch(&refs)
			.map_err(|e| match e {
				EmbedError::CountMismatch { expected, got } => OrganizeError::EmbeddingCountMismatch { expected, got },
				other => OrganizeError::EmbeddingUnavailable(other),
			})?;

		if vectors.len() != texts.len() {
			return Err(OrganizeError::EmbeddingCountMismatch {
				expected: texts.len(),
				got: vectors.len(),
			});
		}

		let expected = vectors.first().map(Vec::len).unwrap_or(0);
		if let Some((index, found)) = vectors
			.iter()
			.map(Vec::len)
			.enumerate()
			.find(|&(_, len)| len != expected)
		{
			return Err(OrganizeError::InconsistentDimension { index, expected, found });
		}

		Ok(vectors.into_iter().map(Embedding::raw).collect())
	}
}
