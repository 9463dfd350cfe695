use std::path::PathBuf;

use crate::constants::{DEFAULT_MODEL_ID, MAX_SEQ_LEN};

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Directory with `config.json`, `model.safetensors` and `tokenizer.json`.
    /// `None` runs the classifier in stub mode.
    pub model_path: Option<PathBuf>,

    /// Identity reported to clients; does not affect which weights load.
    pub model_id: String,

    pub max_seq_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_seq_len: MAX_SEQ_LEN,
        }
    }
}

impl ClassifierConfig {
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    pub fn stub() -> Self {
        Self::default()
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.model_id.trim().is_empty() {
            return Err("model_id cannot be empty".to_string());
        }

        if self.max_seq_len == 0 {
            return Err("max_seq_len must be at least 1".to_string());
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err("model_path cannot be empty when provided".to_string());
        }

        Ok(())
    }
}
