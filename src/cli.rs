use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_HASH_DIM, PREVIEW_ITEMS};

/// Execution provider for ONNX Runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Provider {
	/// Auto-detect best available (CUDA → CoreML → CPU)
	#[default]
	Auto,
	/// CPU only
	Cpu,
	/// NVIDIA CUDA GPU
	Cuda,
	/// Apple CoreML (macOS only)
	Coreml,
}

fn parse_dim(s: &str) -> Result<usize, String> {
	let val: usize = s.parse().map_err(|_| format!("'{}' is not a valid dimension", s))?;
	if val == 0 {
		Err("dimension must be greater than 0".to_string())
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	let blue = Some(Color::Ansi(AnsiColor::Blue));
	Styles::styled()
		.header(Style::new().bold().fg_color(blue))
		.usage(Style::new().bold().fg_color(blue))
		.literal(Style::new().fg_color(blue))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(blue))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "smartsort",
	author,
	version,
	about = "Organize scanned documents and objects into collections",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {organize} {organize_args}        {organize_desc}
  {bin} {organize} {dir_args}         {dir_desc}
  {bin} {organize} {export_args}  {export_desc}
  {bin} {help} {help_args}                 {help_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "smartsort".bright_blue(),
		organize = "organize".yellow(),
		organize_args = "-i scans.json",
		organize_desc = "Group items from a file".dimmed(),
		dir_args = "-d ./scans/ -r",
		dir_desc = "Group every item file in a tree".dimmed(),
		export_args = "-i scans.json --export -",
		export_desc = "Print the result as JSON".dimmed(),
		help = "help".yellow(),
		help_args = "organize",
		help_desc = "Show help for organize".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Execution provider for the ONNX embedder: auto, cpu, cuda, coreml
	#[arg(short = 'p', long = "provider", global = true, default_value = "auto")]
	pub provider: Provider,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Group items into named collections with tags and suggestions
	Organize {
		/// Item file (JSON item or array of items); repeatable
		#[arg(short = 'i', long = "input", value_name = "FILE")]
		inputs: Vec<PathBuf>,

		/// Directory of item files
		#[arg(short = 'd', long = "dir")]
		directory: Option<PathBuf>,

		/// Walk the directory recursively
		#[arg(short = 'r', long = "recursive")]
		recursive: bool,

		/// Dimension of the built-in hash embedder
		#[arg(long = "dim", default_value_t = DEFAULT_HASH_DIM, value_parser = parse_dim)]
		dim: usize,

		/// Use the ONNX text model instead of the hash embedder
		#[arg(long = "onnx")]
		onnx: bool,

		/// Directory containing text_model.onnx and tokenizer.json
		#[arg(long = "model-dir", value_name = "DIR")]
		model_dir: Option<PathBuf>,

		/// Directory for the persistent embedding cache
		#[arg(long = "cache-dir", value_name = "DIR")]
		cache_dir: Option<PathBuf>,

		/// Do not read or write the embedding cache
		#[arg(long = "no-cache")]
		no_cache: bool,

		/// Number of items previewed per collection
		#[arg(short = 'n', long = "preview", default_value_t = PREVIEW_ITEMS)]
		preview: usize,

		/// Write the result as JSON to a file ('-' for stdout)
		#[arg(long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
