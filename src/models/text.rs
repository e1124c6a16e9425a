//! Local ONNX text encoder
//!
//! Tokenizes with a HuggingFace tokenizer and runs a sentence-embedding model
//! through ONNX Runtime. The model is loaded lazily on the first batch.

use ort::session::Session;
use ort::value::Value;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokenizers::Tokenizer;

use super::Embedder;
use crate::config;
use crate::core::embedding::normalize;
use crate::core::hash::fingerprint_files;
use crate::error::EmbedError;

struct TextModel {
	session: Session,
	tokenizer: Tokenizer,
}

impl TextModel {
	fn load(model_path: &Path, tokenizer_path: &Path) -> Result<Self, EmbedError> {
		let session = crate::runtime::create_session(model_path)?;
		let tokenizer = Tokenizer::from_file(tokenizer_path)
			.map_err(|e| EmbedError::ModelNotLoaded(format!("tokenizer: {}", e)))?;

		Ok(Self { session, tokenizer })
	}

	fn encode(&mut self, text: &str) -> Result<Vec<f32>, EmbedError> {
		let encoding = self
			.tokenizer
			.encode(text, true)
			.map_err(|e| EmbedError::Tokenization(e.to_string()))?;

		let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&x| x as i64).collect();
		let attention_mask: Vec<i64> = encoding.get_attention_mask().iter().map(|&x| x as i64).collect();
		let seq_len = input_ids.len();
		let inference = |e: ort::Error| EmbedError::Inference(e.to_string());

		let input_ids_val = Value::from_array((vec![1, seq_len], input_ids)).map_err(inference)?;
		let attention_mask_val = Value::from_array((vec![1, seq_len], attention_mask.clone())).map_err(inference)?;

		let outputs = self
			.session
			.run(ort::inputs![
				"input_ids" => input_ids_val,
				"attention_mask" => attention_mask_val,
			])
			.map_err(inference)?;

		let output = outputs
			.get("pooler_output")
			.or_else(|| outputs.get("sentence_embedding"))
			.or_else(|| outputs.get("last_hidden_state"))
			.ok_or_else(|| EmbedError::Inference("model output not found".to_string()))?;

		let (shape, data) = output.try_extract_tensor::<f32>().map_err(inference)?;
		let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();

		let embedding = match dims.as_slice() {
			[1, _] => data.to_vec(),
			[1, seq, hidden] => mean_pool(data, *seq, *hidden, &attention_mask)?,
			_ => return Err(EmbedError::Inference(format!("unexpected output shape: {:?}", dims))),
		};

		Ok(normalize(&embedding))
	}
}

/// Mean pooling with attention mask over flat `[seq_len, hidden]` data
fn mean_pool(data: &[f32], seq_len: usize, hidden_size: usize, attention_mask: &[i64]) -> Result<Vec<f32>, EmbedError> {
	let needed = seq_len.saturating_mul(hidden_size);
	if data.len() < needed {
		return Err(EmbedError::Inference(format!(
			"hidden state has {} values, expected {}x{}",
			data.len(),
			seq_len,
			hidden_size
		)));
	}

	let mut sum = vec![0.0f32; hidden_size];
	let mut count = 0.0f32;

	for i in 0..seq_len {
		if attention_mask.get(i).copied().unwrap_or(0) == 1 {
			let offset = i * hidden_size;
			for (j, s) in sum.iter_mut().enumerate() {
				*s += data[offset + j];
			}
			count += 1.0;
		}
	}

	if count > 0.0 {
		sum.iter_mut().for_each(|x| *x /= count);
	}

	Ok(sum)
}

/// `onnx-{stem}-{fingerprint}`, so a different model under the same file name gets its own cache keys
fn scoped_name(model_path: &Path, tokenizer_path: &Path) -> Result<String, EmbedError> {
	let stem = model_path
		.file_stem()
		.map(|s| s.to_string_lossy().into_owned())
		.unwrap_or_else(|| "model".to_string());
	let fingerprint = fingerprint_files(&[model_path, tokenizer_path])?;

	Ok(format!("onnx-{}-{:016x}", stem, fingerprint))
}

pub struct OnnxEmbedder {
	model: Mutex<Option<TextModel>>,
	model_path: PathBuf,
	tokenizer_path: PathBuf,
	name: String,
}

impl OnnxEmbedder {
	pub fn new(model_path: PathBuf, tokenizer_path: PathBuf) -> Result<Self, EmbedError> {
		if !model_path.exists() {
			return Err(EmbedError::ModelNotLoaded(format!(
				"text model file does not exist: {}",
				model_path.display()
			)));
		}
		if !tokenizer_path.exists() {
			return Err(EmbedError::ModelNotLoaded(format!(
				"tokenizer file does not exist: {}",
				tokenizer_path.display()
			)));
		}

		let name = scoped_name(&model_path, &tokenizer_path)?;

		Ok(Self {
			model: Mutex::new(None),
			model_path,
			tokenizer_path,
			name,
		})
	}

	/// Resolve model files from the configured models directory
	pub fn from_config() -> Result<Self, EmbedError> {
		let model_path = config::text_model_path().ok_or_else(|| {
			EmbedError::ModelNotLoaded(format!("models directory not found; set {}", config::MODELS_DIR_ENV))
		})?;
		let tokenizer_path = config::tokenizer_path().ok_or_else(|| {
			EmbedError::ModelNotLoaded(format!("models directory not found; set {}", config::MODELS_DIR_ENV))
		})?;

		Self::new(model_path, tokenizer_path)
	}
}

impl Embedder for OnnxEmbedder {
	fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
		let mut guard = self
			.model
			.lock()
			.map_err(|e| EmbedError::Inference(format!("session lock: {}", e)))?;

		if guard.is_none() {
			crate::ui::debug(&format!("Loading text model: {}", self.model_path.display()));
			*guard = Some(TextModel::load(&self.model_path, &self.tokenizer_path)?);
		}

		let model = guard
			.as_mut()
			.ok_or_else(|| EmbedError::ModelNotLoaded(self.model_path.display().to_string()))?;

		texts.iter().map(|text| model.encode(text)).collect()
	}

	fn model_name(&self) -> &str {
		&self.name
	}
}
