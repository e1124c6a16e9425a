//! Tag extraction from items and cluster names

use std::collections::HashSet;

use crate::config::{COLLECTION_SUFFIX, TAGS_PER_DOCUMENT, TAG_MIN_LEN};
use crate::core::{Cluster, ContentItem, ItemKind};

/// Insertion-ordered set of tags
#[derive(Debug, Default)]
struct TagSet {
	seen: HashSet<String>,
	ordered: Vec<String>,
}

impl TagSet {
	fn insert(&mut self, tag: String) {
		if tag.is_empty() {
			return;
		}
		if self.seen.insert(tag.clone()) {
			self.ordered.push(tag);
		}
	}

	fn into_vec(self) -> Vec<String> {
		self.ordered
	}
}

/// Tags contributed by a single item
///
/// Documents: first five lowercase tokens longer than three characters.
/// Objects: every detected label, unchanged. Empty labels are returned here
/// but never become tags in [`extract_tags`].
pub fn item_tags(item: &ContentItem) -> Vec<String> {
	match &item.kind {
		ItemKind::Document { text } => text
			.to_lowercase()
			.split_whitespace()
			.filter(|token| token.chars().count() > TAG_MIN_LEN)
			.take(TAGS_PER_DOCUMENT)
			.map(str::to_string)
			.collect(),
		ItemKind::Object { detected_labels } => detected_labels.clone(),
	}
}

/// Cluster name with the collection suffix removed, lowercased
pub fn name_tag(name: &str) -> String {
	name.strip_suffix(COLLECTION_SUFFIX).unwrap_or(name).to_lowercase()
}

/// Deduplicated tags in first-occurrence order: item tags, then cluster names
pub fn extract_tags<'a>(items: impl IntoIterator<Item = &'a ContentItem>, clusters: &[Cluster]) -> Vec<String> {
	let mut tags = TagSet::default();

	for item in items {
		for tag in item_tags(item) {
			tags.insert(tag);
		}
	}

	for cluster in clusters {
		tags.insert(name_tag(&cluster.name));
	}

	tags.into_vec()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_document_tags() {
		let item = ContentItem::document("1", "Important significant finding about clustering algorithms today");
		assert_eq!(
			item_tags(&item),
			vec!["important", "significant", "finding", "about", "clustering"]
		);
	}

	#[test]
	fn test_short_tokens_dropped() {
		let item = ContentItem::document("1", "the cat sat on a mat");
		assert!(item_tags(&item).is_empty());
	}

	#[test]
	fn test_object_labels_verbatim() {
		let item = ContentItem::object("1", ["Book", "pen"]);
		assert_eq!(item_tags(&item), vec!["Book", "pen"]);
	}

	#[test]
	fn test_empty_label_never_a_tag() {
		let items = vec![ContentItem::object("1", ["", "lamp"])];
		assert_eq!(item_tags(&items[0]), vec!["", "lamp"]);
		assert_eq!(extract_tags(&items, &[]), vec!["lamp"]);
	}

	#[test]
	fn test_name_tag() {
		assert_eq!(name_tag("Invoice Collection"), "invoice");
		assert_eq!(name_tag("Untitled Collection"), "untitled");
		assert_eq!(name_tag("Misc"), "misc");
	}

	#[test]
	fn test_dedup_keeps_first_occurrence() {
		let items = vec![
			ContentItem::document("1", "receipt grocery receipt"),
			ContentItem::object("2", ["grocery", "bag"]),
		];
		let tags = extract_tags(&items, &[]);
		assert_eq!(tags, vec!["receipt", "grocery", "bag"]);
	}
}
