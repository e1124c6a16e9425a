//! Embedding cache and item file storage

pub mod cache;
pub mod items;

pub use cache::{CacheStats, CachedEmbedder};
pub use items::{export, find_item_files, load_dir, load_file};
