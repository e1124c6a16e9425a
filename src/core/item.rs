//! Scanned content items submitted for organization

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque caller-assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for ItemId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for ItemId {
	fn from(s: &str) -> Self {
		Self(s.to_string())
	}
}

/// What was scanned: OCR'd document text or labels from object detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
	Document {
		text: String,
	},
	Object {
		#[serde(rename = "detectedLabels")]
		detected_labels: Vec<String>,
	},
}

impl ItemKind {
	/// Label used in suggestion descriptions
	pub fn label(&self) -> &'static str {
		match self {
			ItemKind::Document { .. } => "document",
			ItemKind::Object { .. } => "object",
		}
	}
}

/// One scanned unit to be organized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
	pub id: ItemId,
	#[serde(flatten)]
	pub kind: ItemKind,
	#[serde(default = "Utc::now")]
	created_at: DateTime<Utc>,
}

impl ContentItem {
	pub fn new(id: impl Into<ItemId>, kind: ItemKind) -> Self {
		Self {
			id: id.into(),
			kind,
			created_at: Utc::now(),
		}
	}

	pub fn document(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
		Self::new(id, ItemKind::Document { text: text.into() })
	}

	pub fn object<S: Into<String>>(id: impl Into<ItemId>, labels: impl IntoIterator<Item = S>) -> Self {
		Self::new(
			id,
			ItemKind::Object {
				detected_labels: labels.into_iter().map(Into::into).collect(),
			},
		)
	}

	/// Override the creation time (items restored from storage)
	pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
		self.created_at = created_at;
		self
	}

	pub fn created_at(&self) -> DateTime<Utc> {
		self.created_at
	}

	/// Text handed to the embedder, or `None` if the item has nothing to embed
	///
	/// Documents are used verbatim; object labels are joined with spaces.
	pub fn embedding_text(&self) -> Option<String> {
		let text = match &self.kind {
			ItemKind::Document { text } => text.clone(),
			ItemKind::Object { detected_labels } => detected_labels.join(" "),
		};

		if text.trim().is_empty() {
			None
		} else {
			Some(text)
		}
	}
}

impl From<String> for ItemId {
	fn from(s: String) -> Self {
		Self(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_embedding_text() {
		let doc = ContentItem::document("a", "quarterly report");
		assert_eq!(doc.embedding_text().as_deref(), Some("quarterly report"));

		let obj = ContentItem::object("b", ["book", "pen"]);
		assert_eq!(obj.embedding_text().as_deref(), Some("book pen"));
	}

	#[test]
	fn test_items_without_text() {
		assert!(ContentItem::document("a", "   ").embedding_text().is_none());
		assert!(ContentItem::object("b", Vec::<String>::new()).embedding_text().is_none());
		assert!(ContentItem::object("c", [""]).embedding_text().is_none());
	}

	#[test]
	fn test_json_shape() {
		let json = r#"[
			{"id": "d1", "type": "document", "text": "hello", "createdAt": "2024-03-01T10:00:00Z"},
			{"id": "o1", "type": "object", "detectedLabels": ["cup"]}
		]"#;
		let items: Vec<ContentItem> = serde_json::from_str(json).unwrap();

		assert_eq!(items[0].id.as_str(), "d1");
		assert_eq!(items[0].kind, ItemKind::Document { text: "hello".into() });
		assert_eq!(items[0].created_at().to_rfc3339(), "2024-03-01T10:00:00+00:00");
		assert_eq!(items[1].kind.label(), "object");
	}
}
