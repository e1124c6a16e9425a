//! Cluster naming by term frequency

use std::collections::HashMap;

use crate::config::{COLLECTION_SUFFIX, NAME_TOKEN_LIMIT, UNTITLED_NAME};
use crate::core::{ContentItem, ItemKind};

/// Tokens an item contributes to its cluster's name
///
/// Documents contribute their first whitespace-delimited tokens, objects all labels.
fn name_tokens(item: &ContentItem) -> Vec<&str> {
	match &item.kind {
		ItemKind::Document { text } => text.split_whitespace().take(NAME_TOKEN_LIMIT).collect(),
		ItemKind::Object { detected_labels } => detected_labels.iter().map(String::as_str).collect(),
	}
}

/// Most frequent token (case-sensitive), first-seen wins ties
pub fn dominant_token<'a>(items: impl IntoIterator<Item = &'a ContentItem>) -> Option<&'a str> {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	let mut order: Vec<&str> = Vec::new();

	for item in items {
		for token in name_tokens(item) {
			let count = counts.entry(token).or_insert(0);
			if *count == 0 {
				order.push(token);
			}
			*count += 1;
		}
	}

	let mut best: Option<(&str, usize)> = None;
	for token in order {
		let count = counts[token];
		if best.map_or(true, |(_, best_count)| count > best_count) {
			best = Some((token, count));
		}
	}

	best.map(|(token, _)| token)
}

/// `"<token> Collection"`, or `"Untitled Collection"` when there are no tokens
pub fn cluster_name<'a>(items: impl IntoIterator<Item = &'a ContentItem>) -> String {
	match dominant_token(items) {
		Some(token) => format!("{}{}", token, COLLECTION_SUFFIX),
		None => UNTITLED_NAME.to_string(),
	}
}
