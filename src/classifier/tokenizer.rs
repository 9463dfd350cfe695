use std::path::Path;

use tokenizers::{Tokenizer, TruncationParams};

use super::error::ClassifierError;

/// Loads `tokenizer.json` from a model directory with truncation to `max_len` tokens.
///
/// Classifier heads have a fixed position budget; longer journal entries are cut
/// rather than rejected.
pub fn load_tokenizer(model_dir: &Path, max_len: usize) -> Result<Tokenizer, ClassifierError> {
    let tokenizer_path = model_dir.join("tokenizer.json");
    if !tokenizer_path.exists() {
        return Err(ClassifierError::ModelLoadFailed {
            reason: format!("Missing tokenizer.json in {}", model_dir.display()),
        });
    }

    let mut tokenizer =
        Tokenizer::from_file(&tokenizer_path).map_err(|e| ClassifierError::ModelLoadFailed {
            reason: format!("Failed to load tokenizer: {}", e),
        })?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| ClassifierError::ModelLoadFailed {
            reason: format!("Failed to configure truncation: {}", e),
        })?;

    // Single-sequence inference; padding would only add masked positions.
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
