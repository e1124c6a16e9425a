//! SmartSort - organize scanned content into collections
//!
//! Reads content items from JSON, groups them by embedding similarity and
//! prints (or exports) the resulting collections, tags and suggestions.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use smartsort::cli::{Cli, Command};
use smartsort::commands::organize::{self, OrganizeArgs};
use smartsort::{config, runtime, ui};

fn main() {
	if let Err(e) = run() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	runtime::set_provider(cli.provider);

	match cli.command {
		Command::Organize {
			inputs,
			directory,
			recursive,
			dim,
			onnx,
			model_dir,
			cache_dir,
			no_cache,
			preview,
			export,
		} => {
			if let Some(dir) = model_dir {
				config::set_model_dir(dir);
			}
			if let Some(dir) = cache_dir {
				config::set_cache_dir(dir);
			}

			if export.is_none() {
				print_header();
			}

			organize::run(OrganizeArgs {
				inputs: &inputs,
				directory: directory.as_deref(),
				recursive,
				dim,
				onnx,
				no_cache,
				preview,
				export: export.as_deref(),
			})
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand {
				Some(sub) => match cmd.find_subcommand_mut(&sub) {
					Some(sub_cmd) => sub_cmd.print_help()?,
					None => {
						ui::warn(&format!("Unknown subcommand: {}", sub));
						cmd.print_help()?;
					}
				},
				None => cmd.print_help()?,
			}
			Ok(())
		}
	}
}

fn print_header() {
	eprintln!();
	eprintln!(
		"{}",
		format!("─── SmartSort v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
