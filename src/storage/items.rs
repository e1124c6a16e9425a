//! Item files and result export

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ITEM_EXT;
use crate::core::{ContentItem, OrganizationResult};
use crate::ui;

/// A JSON item file holds either one item or an array of items
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemFile {
	Many(Vec<ContentItem>),
	One(ContentItem),
}

pub fn load_file(path: &Path) -> Result<Vec<ContentItem>> {
	let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let file: ItemFile =
		serde_json::from_str(&text).with_context(|| format!("Invalid item file {}", path.display()))?;

	Ok(match file {
		ItemFile::Many(items) => items,
		ItemFile::One(item) => vec![item],
	})
}

/// Item files under `dir`, sorted by path
pub fn find_item_files(dir: &Path, recursive: bool) -> Vec<PathBuf> {
	let max_depth = if recursive { usize::MAX } else { 1 };

	let mut files: Vec<PathBuf> = WalkDir::new(dir)
		.max_depth(max_depth)
		.into_iter()
		.filter_map(|e| e.ok())
		.filter(|e| e.file_type().is_file())
		.map(|e| e.into_path())
		.filter(|p| p.extension().and_then(|s| s.to_str()) == Some(ITEM_EXT))
		.collect();

	files.sort();
	files
}

/// Load every item file under `dir`; unreadable files are skipped with a warning
pub fn load_dir(dir: &Path, recursive: bool) -> Vec<ContentItem> {
	let mut items = Vec::new();

	for path in find_item_files(dir, recursive) {
		match load_file(&path) {
			Ok(mut loaded) => {
				ui::debug(&format!("Loaded {} items from {}", loaded.len(), path.display()));
				items.append(&mut loaded);
			}
			Err(e) => ui::warn(&format!("Skipping {}: {:#}", path.display(), e)),
		}
	}

	items
}

/// Write the result as pretty JSON to `path`, or stdout for `-`
pub fn export(result: &OrganizationResult, path: &Path) -> Result<()> {
	let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;

	if path.to_str() == Some("-") || path.as_os_str().is_empty() {
		println!("{}", json);
	} else {
		fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
		ui::success(&format!("Exported to {}", path.display()));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::ItemKind;

	#[test]
	fn test_load_single_and_array() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(
			dir.path().join("a.json"),
			r#"{"id": "d1", "type": "document", "text": "lab report"}"#,
		)
		.unwrap();
		fs::write(
			dir.path().join("b.json"),
			r#"[{"id": "o1", "type": "object", "detectedLabels": ["beaker"]},
			    {"id": "o2", "type": "object", "detectedLabels": ["flask"]}]"#,
		)
		.unwrap();
		fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

		let items = load_dir(dir.path(), false);
		let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();

		assert_eq!(ids, vec!["d1", "o1", "o2"]);
		assert!(matches!(items[1].kind, ItemKind::Object { .. }));
	}

	#[test]
	fn test_recursive_walk() {
		let dir = tempfile::tempdir().unwrap();
		let nested = dir.path().join("class").join("week1");
		fs::create_dir_all(&nested).unwrap();
		fs::write(nested.join("scan.json"), r#"{"id": "n1", "type": "document", "text": "notes"}"#).unwrap();

		assert!(load_dir(dir.path(), false).is_empty());
		assert_eq!(load_dir(dir.path(), true).len(), 1);
	}

	#[test]
	fn test_invalid_file_skipped() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("bad.json"), "{ nope").unwrap();
		fs::write(dir.path().join("good.json"), r#"{"id": "g", "type": "document", "text": "ok"}"#).unwrap();

		assert!(load_file(&dir.path().join("bad.json")).is_err());
		assert_eq!(load_dir(dir.path(), false).len(), 1);
	}

	#[test]
	fn test_export_to_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("result.json");

		export(&OrganizationResult::default(), &path).unwrap();
		let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

		assert_eq!(written["categories"], serde_json::json!([]));
		assert_eq!(written["tags"], serde_json::json!([]));
		assert_eq!(written["suggestions"], serde_json::json!([]));
	}
}
