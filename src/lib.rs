//! # SmartSort Library
//!
//! Organizes scanned content (OCR'd documents and detected objects) into
//! named collections. Items are embedded through a pluggable [`Embedder`],
//! grouped by single-pass cosine clustering, then named, tagged and
//! summarized as collection suggestions.
//!
//! ```
//! use smartsort::{ContentItem, HashEmbedder, Organizer};
//!
//! let organizer = Organizer::new(HashEmbedder::default());
//! let items = vec![
//!     ContentItem::document("d1", "photosynthesis lecture notes"),
//!     ContentItem::object("o1", ["book", "pen"]),
//! ];
//!
//! let result = organizer.organize(&items).unwrap();
//! assert_eq!(result.categories.len(), 1);
//! assert!(result.tags.contains(&"book".to_string()));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod processing;
pub mod runtime;
pub mod storage;
pub mod ui;

pub use crate::core::{Cluster, ContentItem, ItemId, ItemKind, OrganizationResult, Suggestion};
pub use error::{EmbedError, OrganizeError};
pub use models::{Embedder, HashEmbedder};
pub use processing::Organizer;
pub use storage::CachedEmbedder;
