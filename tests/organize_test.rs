// Scenario tests for the organization pipeline

use smartsort::core::Embedding;
use smartsort::{ContentItem, EmbedError, Embedder, HashEmbedder, ItemKind, OrganizeError, Organizer};

/// Places "topicN" into group N / 3 with a one-hot vector
struct TopicEmbedder;

impl Embedder for TopicEmbedder {
	fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		texts
			.iter()
			.map(|t| {
				let n: usize = t
					.trim_start_matches("topic")
					.parse()
					.map_err(|_| EmbedError::InvalidInput(t.to_string()))?;
				let mut v = vec![0.0; 4];
				v[n / 3] = 1.0;
				Ok(v)
			})
			.collect()
	}

	fn model_name(&self) -> &str {
		"topic"
	}
}

struct Unavailable;

impl Embedder for Unavailable {
	fn embed_batch(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		Err(EmbedError::ModelNotLoaded("offline".to_string()))
	}

	fn model_name(&self) -> &str {
		"unavailable"
	}
}

/// Always drops the last vector
struct Short;

impl Embedder for Short {
	fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		Ok(texts.iter().skip(1).map(|_| vec![1.0, 0.0]).collect())
	}

	fn model_name(&self) -> &str {
		"short"
	}
}

/// Returns two vectors no matter how many texts it receives
struct TwoAlways;

impl Embedder for TwoAlways {
	fn embed_batch(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		Ok(vec![vec![1.0, 0.0], vec![0.0, 1.0]])
	}

	fn model_name(&self) -> &str {
		"two"
	}
}

fn documents(n: usize, text: impl Fn(usize) -> String) -> Vec<ContentItem> {
	(0..n).map(|i| ContentItem::document(format!("doc-{}", i), text(i))).collect()
}

#[test]
fn three_documents_form_one_cluster() {
	let items = vec![
		ContentItem::document("a", "mitochondria produce cellular energy"),
		ContentItem::document("b", "the french revolution began in 1789"),
		ContentItem::document("c", "integrals measure area under curves"),
	];
	let result = Organizer::new(HashEmbedder::default()).organize(&items).unwrap();

	assert_eq!(result.categories.len(), 1);
	assert_eq!(result.categories[0].len(), 3);
	assert_eq!(result.suggestions[0].item_count, 3);
	assert_eq!(result.suggestions[0].preview_items, items);
}

#[test]
fn nine_topics_split_evenly() {
	let items = documents(9, |i| format!("topic{}", i));
	let result = Organizer::new(TopicEmbedder).organize(&items).unwrap();

	assert_eq!(result.categories.len(), 3);
	for (c, cluster) in result.categories.iter().enumerate() {
		let ids: Vec<String> = cluster.items.iter().map(|i| i.id.to_string()).collect();
		let expected: Vec<String> = (c * 3..c * 3 + 3).map(|i| format!("doc-{}", i)).collect();
		assert_eq!(ids, expected);
		assert_eq!(cluster.centroid.as_slice()[c], 1.0);
	}

	assert_eq!(result.categories[1].name, "topic3 Collection");
	assert_eq!(
		result.suggestions[1].description,
		"A collection of 3 document items with similar content and themes."
	);
}

#[test]
fn empty_input_gives_empty_result() {
	let result = Organizer::new(Unavailable).organize(&[]).unwrap();

	assert!(result.categories.is_empty());
	assert!(result.tags.is_empty());
	assert!(result.suggestions.is_empty());

	let json = serde_json::to_value(&result).unwrap();
	assert_eq!(json["categories"], serde_json::json!([]));
	assert_eq!(json["suggestions"], serde_json::json!([]));
}

#[test]
fn embedder_failure_is_embedding_unavailable() {
	let items = documents(4, |i| format!("page {}", i));
	let err = Organizer::new(Unavailable).organize(&items).unwrap_err();

	assert!(matches!(err, OrganizeError::EmbeddingUnavailable(EmbedError::ModelNotLoaded(_))));
}

#[test]
fn wrong_vector_count_is_fatal() {
	let items = documents(4, |i| format!("page {}", i));
	let err = Organizer::new(Short).organize(&items).unwrap_err();

	assert!(matches!(
		err,
		OrganizeError::EmbeddingCountMismatch { expected: 4, got: 3 }
	));
}

#[test]
fn object_labels_become_tags_verbatim() {
	let items = vec![ContentItem::object("o1", ["book", "pen"])];
	let result = Organizer::new(HashEmbedder::default()).organize(&items).unwrap();

	assert!(result.tags.contains(&"book".to_string()));
	assert!(result.tags.contains(&"pen".to_string()));
	assert_eq!(result.categories[0].name, "book Collection");

	let items = vec![ContentItem::object("o2", ["Notebook", "Pen"])];
	let result = Organizer::new(HashEmbedder::default()).organize(&items).unwrap();
	assert_eq!(result.tags, vec!["Notebook", "Pen", "notebook"]);
}

#[test]
fn document_contributes_long_tokens() {
	let items = vec![ContentItem::document(
		"d1",
		"important significant finding about clustering algorithms",
	)];
	let result = Organizer::new(HashEmbedder::default()).organize(&items).unwrap();

	assert!(result.tags.contains(&"important".to_string()));
	assert!(result.tags.iter().all(|t| t.chars().count() > 3));
	assert!(!result.tags.contains(&"algorithms".to_string()));
}

#[test]
fn mixed_cluster_description_lists_types_in_order() {
	let items = vec![
		ContentItem::object("o1", ["microscope"]),
		ContentItem::document("d1", "microscope lab handout"),
	];
	let result = Organizer::new(HashEmbedder::default()).organize(&items).unwrap();

	assert_eq!(result.categories[0].name, "microscope Collection");
	assert_eq!(
		result.suggestions[0].description,
		"A collection of 2 object and document items with similar content and themes."
	);
}

#[test]
fn repeated_calls_are_identical() {
	let items: Vec<ContentItem> = documents(14, |i| format!("chapter {} of the biology textbook section {}", i % 4, i))
		.into_iter()
		.chain([ContentItem::object("obj", ["calculator", "ruler"])])
		.collect();
	let organizer = Organizer::new(HashEmbedder::new(64).unwrap());

	let first = organizer.organize(&items).unwrap();
	let second = organizer.organize(&items).unwrap();

	let shape = |r: &smartsort::OrganizationResult| -> Vec<(String, Vec<String>)> {
		r.categories
			.iter()
			.map(|c| (c.name.clone(), c.items.iter().map(|i| i.id.to_string()).collect()))
			.collect()
	};

	assert_eq!(shape(&first), shape(&second));
	assert_eq!(first.tags, second.tags);
	assert_eq!(first.suggestions, second.suggestions);
	assert_eq!(first.categories.len(), 5);
	assert_eq!(first.total_items(), 15);
}

#[test]
fn items_are_nearest_to_their_own_centroid() {
	let items = documents(12, |i| format!("{} notes on {}", ["algebra", "poetry", "cells"][i % 3], i));
	let embedder = HashEmbedder::new(128).unwrap();
	let result = Organizer::new(&embedder).organize(&items).unwrap();

	for (own, cluster) in result.categories.iter().enumerate() {
		for item in &cluster.items {
			let text = item.embedding_text().unwrap();
			let e = Embedding::raw(embedder.embed(&text));
			let d_own = e.cosine_distance(&cluster.centroid);
			for (other, c) in result.categories.iter().enumerate() {
				let d = e.cosine_distance(&c.centroid);
				assert!(d_own <= d, "item {} closer to cluster {} than {}", item.id, other, own);
				if other < own {
					assert!(d_own < d);
				}
			}
		}
	}
}

#[test]
fn items_without_text_are_excluded() {
	let items = vec![
		ContentItem::document("blank", "   "),
		ContentItem::object("unlabeled", Vec::<String>::new()),
		ContentItem::document("d", "photosynthesis"),
	];
	let result = Organizer::new(HashEmbedder::default()).organize(&items).unwrap();

	assert_eq!(result.total_items(), 1);
	let excluded: Vec<&str> = result.excluded.iter().map(|id| id.as_str()).collect();
	assert_eq!(excluded, vec!["blank", "unlabeled"]);
	assert!(matches!(result.categories[0].items[0].kind, ItemKind::Document { .. }));
}

#[test]
fn cached_embedder_gives_same_result() {
	let items = documents(7, |i| format!("scan {} of worksheet {}", i, i % 2));
	let plain = Organizer::new(HashEmbedder::new(32).unwrap()).organize(&items).unwrap();
	let cached = Organizer::new(smartsort::CachedEmbedder::new(HashEmbedder::new(32).unwrap()));

	cached.organize(&items[..3]).unwrap();
	let result = cached.organize(&items).unwrap();

	assert_eq!(result.tags, plain.tags);
	assert_eq!(result.suggestions, plain.suggestions);
	assert!(cached.embedder().stats().hits >= 3);
}

#[test]
fn cached_wrong_count_with_duplicate_texts_is_fatal() {
	let items = vec![
		ContentItem::document("a", "same text"),
		ContentItem::document("b", "same text"),
	];
	let err = Organizer::new(smartsort::CachedEmbedder::new(TwoAlways))
		.organize(&items)
		.unwrap_err();

	assert!(matches!(
		err,
		OrganizeError::EmbeddingCountMismatch { expected: 1, got: 2 }
	));
}
