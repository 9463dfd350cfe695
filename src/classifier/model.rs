use std::path::Path;
use std::sync::Arc;

use candle_core::{DType, Device, Result, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::xlm_roberta::{Config, XLMRobertaForSequenceClassification};

/// RoBERTa-family sequence classifier (`roberta.*` + `classifier.*` weights).
///
/// XLM-R and RoBERTa share the same architecture, including the padding-offset
/// position ids, so RoBERTa checkpoints load through the XLM-R implementation.
#[derive(Clone)]
pub struct SequenceClassifier(Arc<XLMRobertaForSequenceClassification>);

impl SequenceClassifier {
    pub fn load<P: AsRef<Path>>(model_dir: P, num_labels: usize, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let model = XLMRobertaForSequenceClassification::new(num_labels, &config, vb)?;

        Ok(Self(Arc::new(model)))
    }

    /// Returns logits of shape `(batch, num_labels)`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        attention_mask: &Tensor,
        token_type_ids: &Tensor,
    ) -> Result<Tensor> {
        self.0.forward(input_ids, attention_mask, token_type_ids)
    }
}
