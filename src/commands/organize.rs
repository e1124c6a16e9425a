//! Organize command - group items into collections

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use colored::*;

use crate::config;
use crate::core::OrganizationResult;
use crate::models::{Embedder, HashEmbedder};
use crate::processing::Organizer;
use crate::storage::{self, CachedEmbedder};
use crate::ui;

pub struct OrganizeArgs<'a> {
	pub inputs: &'a [PathBuf],
	pub directory: Option<&'a Path>,
	pub recursive: bool,
	pub dim: usize,
	pub onnx: bool,
	pub no_cache: bool,
	pub preview: usize,
	pub export: Option<&'a Path>,
}

pub fn run(args: OrganizeArgs<'_>) -> Result<()> {
	let start = Instant::now();

	if args.inputs.is_empty() && args.directory.is_none() {
		anyhow::bail!("Provide at least one --input file or a --dir");
	}

	let mut items = Vec::new();
	for input in args.inputs {
		items.extend(storage::load_file(input)?);
	}
	if let Some(dir) = args.directory {
		ui::info(&format!("Loading items from {}", dir.display()));
		items.extend(storage::load_dir(dir, args.recursive));
	}

	if items.is_empty() {
		ui::warn("No items found");
	} else {
		ui::success(&format!("Loaded {} items", items.len()));
	}

	let embedder = build_embedder(args.onnx, args.dim)?;
	ui::debug(&format!("Embedder: {}", embedder.model_name()));

	let cache_path = if args.no_cache { None } else { config::cache_path() };
	let result = match cache_path {
		Some(path) => {
			let cached = CachedEmbedder::load(embedder, &path);
			let organizer = Organizer::new(cached);
			let result = organizer.organize(&items).context("Organization failed")?;

			let stats = organizer.embedder().stats();
			ui::debug(&format!(
				"Cache: {} hits, {} misses, {} entries",
				stats.hits, stats.misses, stats.entries
			));
			organizer.embedder().save(&path)?;
			result
		}
		None => Organizer::new(embedder)
			.organize(&items)
			.context("Organization failed")?,
	};

	if !result.excluded.is_empty() {
		ui::warn(&format!("{} items had no text and were skipped", result.excluded.len()));
	}

	if let Some(export_path) = args.export {
		return storage::export(&result, export_path);
	}

	print_result(&result, args.preview);
	eprintln!(
		"\n{}",
		format!("Completed in {:.1}s", start.elapsed().as_secs_f32()).dimmed()
	);

	Ok(())
}

fn build_embedder(onnx: bool, dim: usize) -> Result<Box<dyn Embedder>> {
	if onnx {
		#[cfg(feature = "onnx")]
		{
			let embedder = crate::models::OnnxEmbedder::from_config().context("ONNX embedder unavailable")?;
			return Ok(Box::new(embedder));
		}
		#[cfg(not(feature = "onnx"))]
		anyhow::bail!("Built without ONNX support; rebuild with --features onnx");
	}

	Ok(Box::new(HashEmbedder::new(dim)?))
}

fn print_result(result: &OrganizationResult, preview_count: usize) {
	if result.is_empty() {
		ui::info("Nothing to organize");
		return;
	}

	ui::success(&format!(
		"{} collections, {} items, {} tags",
		result.categories.len(),
		result.total_items(),
		result.tags.len()
	));

	for (cluster, suggestion) in result.categories.iter().zip(&result.suggestions) {
		eprintln!(
			"\n{} {} ({} items: {})",
			"Collection".bright_white(),
			cluster.name.bright_cyan(),
			suggestion.item_count,
			cluster.type_labels().join(", ")
		);
		eprintln!("  {}", suggestion.description.dimmed());

		for (i, item) in cluster.items.iter().take(preview_count).enumerate() {
			let text = item.embedding_text().unwrap_or_default();
			eprintln!(
				"  {} {} {}",
				format!("[{}]", i + 1).dimmed(),
				item.id.as_str().bright_white(),
				ui::truncate(&text, 60).dimmed()
			);
		}

		if cluster.len() > preview_count {
			eprintln!(
				"  {}",
				format!("... and {} more", cluster.len() - preview_count).dimmed()
			);
		}
	}

	ui::header("Tags");
	eprintln!("  {}", result.tags.join(", "));
}
