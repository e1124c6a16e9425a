//! Collection suggestions, one per cluster

use crate::config::PREVIEW_ITEMS;
use crate::core::{Cluster, Suggestion};

pub fn describe(cluster: &Cluster) -> String {
	format!(
		"A collection of {} {} items with similar content and themes.",
		cluster.len(),
		cluster.type_labels().join(" and ")
	)
}

pub fn suggest(cluster: &Cluster) -> Suggestion {
	Suggestion {
		name: cluster.name.clone(),
		description: describe(cluster),
		item_count: cluster.len(),
		preview_items: cluster.items.iter().take(PREVIEW_ITEMS).cloned().collect(),
	}
}

/// Suggestions in cluster order
pub fn suggestions(clusters: &[Cluster]) -> Vec<Suggestion> {
	clusters.iter().map(suggest).collect()
}
