//! Execution provider selection

use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{provider, Provider};
use crate::error::EmbedError;
use crate::ui;

static PROVIDER_LOGGED: AtomicBool = AtomicBool::new(false);

fn log_provider_once(msg: &str) {
	if !PROVIDER_LOGGED.swap(true, Ordering::Relaxed) {
		ui::debug(msg);
	}
}

pub fn create_session(model_path: &Path) -> Result<Session, EmbedError> {
	let mut builder = Session::builder().map_err(|e| EmbedError::ModelNotLoaded(e.to_string()))?;

	match provider() {
		Provider::Auto => register_best(&mut builder),
		Provider::Cpu => log_provider_once("Using CPU execution provider (forced)"),
		Provider::Cuda => {
			if !try_cuda(&mut builder) {
				ui::warn("CUDA requested but unavailable, falling back to CPU");
			}
		}
		Provider::Coreml => {
			if !try_coreml(&mut builder) {
				ui::warn("CoreML requested but unavailable, falling back to CPU");
			}
		}
	}

	let load_err = |e: &dyn std::fmt::Display| EmbedError::ModelNotLoaded(format!("{}: {}", model_path.display(), e));

	builder
		.with_optimization_level(GraphOptimizationLevel::Level3)
		.map_err(|e| load_err(&e))?
		.with_intra_threads(4)
		.map_err(|e| load_err(&e))?
		.commit_from_file(model_path)
		.map_err(|e| load_err(&e))
}

fn register_best(builder: &mut SessionBuilder) {
	if try_cuda(builder) {
		return;
	}
	if try_coreml(builder) {
		return;
	}
	log_provider_once("Using CPU execution provider");
}

fn try_cuda(builder: &mut SessionBuilder) -> bool {
	use ort::ep::{ExecutionProvider, CUDA};

	let cuda = CUDA::default();
	if !cuda.is_available().unwrap_or(false) {
		ui::debug("CUDA not available");
		return false;
	}
	match cuda.register(builder) {
		Ok(_) => {
			log_provider_once("Using CUDA execution provider");
			true
		}
		Err(e) => {
			ui::debug(&format!("CUDA registration failed: {}", e));
			false
		}
	}
}

fn try_coreml(builder: &mut SessionBuilder) -> bool {
	#[cfg(target_os = "macos")]
	{
		use ort::ep::{CoreML, ExecutionProvider};

		let coreml = CoreML::default();
		if !coreml.is_available().unwrap_or(false) {
			ui::debug("CoreML not available");
			return false;
		}
		match coreml.register(builder) {
			Ok(_) => {
				log_provider_once("Using CoreML execution provider");
				return true;
			}
			Err(e) => ui::debug(&format!("CoreML registration failed: {}", e)),
		}
	}
	#[cfg(not(target_os = "macos"))]
	{
		let _ = builder;
	}
	false
}
