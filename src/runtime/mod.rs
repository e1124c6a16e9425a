//! # ONNX Runtime
//!
//! Execution provider preference and (with the `onnx` feature) session creation.

#[cfg(feature = "onnx")]
pub mod providers;

use std::sync::OnceLock;

pub use crate::cli::Provider;
#[cfg(feature = "onnx")]
pub use providers::create_session;

static SELECTED_PROVIDER: OnceLock<Provider> = OnceLock::new();

pub fn set_provider(provider: Provider) {
	let _ = SELECTED_PROVIDER.set(provider);
}

pub fn provider() -> Provider {
	SELECTED_PROVIDER.get().copied().unwrap_or_default()
}
