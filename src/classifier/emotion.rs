use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use crate::constants::DEFAULT_EMOTION_LABELS;
use crate::ranking::EmotionScore;

use super::config::ClassifierConfig;
use super::device::select_device;
use super::error::ClassifierError;
use super::labels::read_label_vocabulary;
use super::lexicon::lexicon_scores;
use super::model::SequenceClassifier;
use super::tokenizer::load_tokenizer;
use super::Classifier;

pub struct EmotionClassifier {
    device: Device,
    config: ClassifierConfig,
    labels: Vec<String>,
    model: Option<SequenceClassifier>,
    tokenizer: Option<Tokenizer>,
}

impl std::fmt::Debug for EmotionClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmotionClassifier")
            .field("device", &format!("{:?}", self.device))
            .field("config", &self.config)
            .field("labels", &self.labels)
            .field("model_loaded", &self.model.is_some())
            .finish()
    }
}

impl EmotionClassifier {
    pub fn load(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        if let Err(msg) = config.validate() {
            return Err(ClassifierError::InvalidConfig { reason: msg });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for classifier");

        let Some(model_path) = config.model_path.clone() else {
            info!(
                model_id = %config.model_id,
                "No classifier model path configured, operating in stub mode"
            );
            return Ok(Self::create_stub(device, config));
        };

        if !model_path.exists() {
            return Err(ClassifierError::ModelNotFound { path: model_path });
        }

        let config_path = model_path.join("config.json");
        if !config_path.exists() {
            return Err(ClassifierError::ModelLoadFailed {
                reason: format!("Missing config.json in {}", model_path.display()),
            });
        }

        let weights_path = model_path.join("model.safetensors");
        if !weights_path.exists() {
            return Err(ClassifierError::ModelLoadFailed {
                reason: format!("Missing model.safetensors in {}", model_path.display()),
            });
        }

        let labels = read_label_vocabulary(&config_path)?;

        info!(
            model_path = %model_path.display(),
            model_id = %config.model_id,
            num_labels = labels.len(),
            "Loading emotion classifier"
        );

        let model = SequenceClassifier::load(&model_path, labels.len(), &device).map_err(|e| {
            ClassifierError::ModelLoadFailed {
                reason: format!("Failed to load classifier weights: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer(&model_path, config.max_seq_len)?;

        info!(labels = ?labels, "Emotion classifier loaded successfully");

        Ok(Self {
            device,
            config,
            labels,
            model: Some(model),
            tokenizer: Some(tokenizer),
        })
    }

    pub fn stub() -> Result<Self, ClassifierError> {
        Self::load(ClassifierConfig::stub())
    }

    fn create_stub(device: Device, config: ClassifierConfig) -> Self {
        Self {
            device,
            config,
            labels: DEFAULT_EMOTION_LABELS.iter().map(|l| l.to_string()).collect(),
            model: None,
            tokenizer: None,
        }
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    fn infer(
        &self,
        model: &SequenceClassifier,
        tokenizer: &Tokenizer,
        text: &str,
    ) -> Result<Vec<f32>, ClassifierError> {
        let tokens =
            tokenizer
                .encode(text, true)
                .map_err(|e| ClassifierError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        // Tokenizers without a special-token post-processor encode empty text to
        // nothing; zero scores rank to the fallback label.
        if tokens.get_ids().is_empty() {
            debug!("Text encoded to no tokens, reporting zero scores");
            return Ok(vec![0.0; self.labels.len()]);
        }

        let input_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        let logits = model.forward(&input_ids, &attention_mask, &token_type_ids)?;
        let probs = candle_nn::ops::softmax_last_dim(&logits)?
            .squeeze(0)?
            .to_vec1::<f32>()?;

        Ok(probs)
    }
}

impl Classifier for EmotionClassifier {
    fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        debug!(
            text_len = text.len(),
            model_loaded = self.model.is_some(),
            "Classifying text"
        );

        let (Some(model), Some(tokenizer)) = (&self.model, &self.tokenizer) else {
            return Ok(lexicon_scores(text));
        };

        let probs = self.infer(model, tokenizer, text)?;

        if probs.len() != self.labels.len() {
            return Err(ClassifierError::LabelMismatch {
                expected: self.labels.len(),
                actual: probs.len(),
            });
        }

        Ok(self
            .labels
            .iter()
            .zip(probs)
            .map(|(label, score)| EmotionScore::new(label.clone(), score))
            .collect())
    }

    fn model_id(&self) -> &str {
        &self.config.model_id
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn is_stub(&self) -> bool {
        self.model.is_none()
    }
}
