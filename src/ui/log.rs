//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	eprintln!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	eprintln!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	eprintln!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	eprintln!("\n{}", format!("─── {} ───", text).bright_blue().bold());
}

/// Shorten long labels for single-line display
pub fn truncate(text: &str, max_len: usize) -> String {
	let count = text.chars().count();
	if count <= max_len {
		return text.to_string();
	}

	let keep = max_len.saturating_sub(3);
	format!("{}...", text.chars().take(keep).collect::<String>())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truncate() {
		assert_eq!(truncate("receipt", 10), "receipt");
		assert_eq!(truncate("a very long document title", 10), "a very ...");
		assert_eq!(truncate("ééééé", 4), "é...");
	}

	#[test]
	fn test_verbose_toggle() {
		Log::set_verbose(true);
		assert!(Log::is_verbose());
		Log::set_verbose(false);
		assert!(!Log::is_verbose());
	}
}
