//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_MODEL_DIR: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_CACHE_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Clustering ===
pub const MAX_CLUSTERS: usize = 5;
pub const ITEMS_PER_CLUSTER: usize = 3;

// === Naming & Tagging ===
pub const NAME_TOKEN_LIMIT: usize = 10;
pub const TAG_MIN_LEN: usize = 3;
pub const TAGS_PER_DOCUMENT: usize = 5;
pub const COLLECTION_SUFFIX: &str = " Collection";
pub const UNTITLED_NAME: &str = "Untitled Collection";

// === Suggestions ===
pub const PREVIEW_ITEMS: usize = 3;

// === Embedders ===
pub const DEFAULT_HASH_DIM: usize = 256;
pub const TEXT_MODEL: &str = "text_model.onnx";
pub const TOKENIZER: &str = "tokenizer.json";

// === Storage ===
pub const CACHE_FILE: &str = "embeddings.msgpack";
pub const ITEM_EXT: &str = "json";

pub const MODELS_DIR_ENV: &str = "SMARTSORT_MODELS_DIR";
pub const CACHE_DIR_ENV: &str = "SMARTSORT_CACHE_DIR";

pub fn set_model_dir(path: PathBuf) {
	let _ = CUSTOM_MODEL_DIR.set(path);
}

pub fn set_cache_dir(path: PathBuf) {
	let _ = CUSTOM_CACHE_DIR.set(path);
}

/// Models directory: `--model-dir`, then SMARTSORT_MODELS_DIR, then `models/` next to the executable
pub fn models_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_MODEL_DIR.get() {
		crate::ui::debug(&format!("Using custom model dir: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var(MODELS_DIR_ENV) {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using {}: {}", MODELS_DIR_ENV, env_path));
			return Some(path);
		}
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let models = dir.join("models");
			if models.is_dir() {
				crate::ui::debug(&format!("Found models at: {}", models.display()));
				return Some(models);
			}
		}
	}

	None
}

pub fn text_model_path() -> Option<PathBuf> {
	models_dir().map(|d| d.join(TEXT_MODEL))
}

pub fn tokenizer_path() -> Option<PathBuf> {
	models_dir().map(|d| d.join(TOKENIZER))
}

/// Embedding cache file, if a cache directory is configured
pub fn cache_path() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_CACHE_DIR.get() {
		return Some(custom.join(CACHE_FILE));
	}

	std::env::var(CACHE_DIR_ENV)
		.ok()
		.filter(|p| !p.is_empty())
		.map(|p| PathBuf::from(p).join(CACHE_FILE))
}
