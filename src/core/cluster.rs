//! Collections produced by one organization call

use serde::Serialize;

use super::{ContentItem, Embedding, ItemId};

/// A group of items assigned to the same centroid
#[derive(Debug, Clone)]
pub struct Cluster {
	/// Position in creation order
	pub id: usize,
	/// Members in assignment order
	pub items: Vec<ContentItem>,
	/// Seed embedding; never moved after initialization
	pub centroid: Embedding,
	/// Derived once all items are assigned
	pub name: String,
}

impl Cluster {
	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Distinct item type labels in order of first appearance
	pub fn type_labels(&self) -> Vec<&'static str> {
		let mut labels = Vec::new();
		for item in &self.items {
			let label = item.kind.label();
			if !labels.contains(&label) {
				labels.push(label);
			}
		}
		labels
	}
}

impl Serialize for Cluster {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		use serde::ser::SerializeStruct;

		let mut state = serializer.serialize_struct("Cluster", 3)?;
		state.serialize_field("id", &self.id)?;
		state.serialize_field("name", &self.name)?;
		state.serialize_field("items", &self.items)?;
		state.end()
	}
}

/// Caller-facing summary of one cluster
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
	pub name: String,
	pub description: String,
	pub item_count: usize,
	pub preview_items: Vec<ContentItem>,
}

/// Output of [`crate::processing::Organizer::organize`]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResult {
	pub categories: Vec<Cluster>,
	/// Lowercased/deduplicated labels in first-seen order
	pub tags: Vec<String>,
	pub suggestions: Vec<Suggestion>,
	/// Items dropped before embedding because they had no text
	pub excluded: Vec<ItemId>,
}

impl OrganizationResult {
	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}

	/// Total number of items placed into clusters
	pub fn total_items(&self) -> usize {
		self.categories.iter().map(Cluster::len).sum()
	}
}
