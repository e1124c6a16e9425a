//! Core domain types

pub mod cluster;
pub mod embedding;
pub mod hash;
pub mod item;

pub use cluster::{Cluster, OrganizationResult, Suggestion};
pub use embedding::Embedding;
pub use hash::ContentHash;
pub use item::{ContentItem, ItemId, ItemKind};
