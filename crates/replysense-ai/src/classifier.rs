//! ONNX Runtime inference for the three-class reply sentiment model.
//!
//! The model directory must contain `model.onnx` and `tokenizer.json`
//! (a DistilBERT sequence-classification export).

use std::path::Path;

use ort::session::Session;
use ort::value::Tensor;
use replysense_core::LABEL_COUNT;
use tokenizers::Tokenizer;
use tracing::info;

use crate::ClassifierError;

/// DistilBERT sequence length cap.
const MAX_SEQ_LEN: usize = 512;

/// Raw model output before translation to a domain label.
///
/// `label` is the model's own tag (`LABEL_{index}`), not a domain label;
/// callers translate it through the static label map.
#[derive(Debug, Clone)]
pub struct RawPrediction {
    pub label: String,
    pub score: f32,
}

/// Three-class sentiment classifier using ONNX Runtime.
///
/// Loaded once at startup and held for the process lifetime. `predict`
/// takes `&mut self` because the underlying session does; callers that
/// share a classifier across threads wrap it in a lock.
#[derive(Debug)]
pub struct SentimentClassifier {
    session: Session,
    tokenizer: Tokenizer,
}

impl SentimentClassifier {
    /// Load a classifier from a directory containing `model.onnx` and `tokenizer.json`.
    ///
    /// Fails when either artifact is missing, and fails loudly when the
    /// export statically declares a class count other than [`LABEL_COUNT`],
    /// since a mismatched head would silently mis-map labels. Exports with
    /// a dynamic class dimension are checked per inference call instead.
    pub fn load(model_dir: &Path) -> Result<Self, ClassifierError> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            return Err(ClassifierError::MissingArtifact(model_path));
        }
        if !tokenizer_path.exists() {
            return Err(ClassifierError::MissingArtifact(tokenizer_path));
        }

        let session = Session::builder()?.commit_from_file(&model_path)?;

        check_class_count(declared_class_count(session.outputs()[0].dtype()))?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;

        // Truncate to the model's max length; single-input calls need no padding.
        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;

        info!(model = %model_path.display(), classes = LABEL_COUNT, "loaded sentiment model");
        Ok(Self { session, tokenizer })
    }

    /// Classify one text, returning the top class tag and its softmax score.
    pub fn predict(&mut self, text: &str) -> Result<RawPrediction, ClassifierError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;

        let seq_len = encoding.get_ids().len();
        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();

        let shape = [1i64, seq_len as i64];
        let ids_tensor = Tensor::from_array((shape, input_ids.into_boxed_slice()))?;
        let mask_tensor = Tensor::from_array((shape, attention_mask.into_boxed_slice()))?;

        let outputs = self.session.run(ort::inputs![
            "input_ids" => ids_tensor,
            "attention_mask" => mask_tensor,
        ])?;

        // Logits: [1, LABEL_COUNT].
        let (logits_shape, logits) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: &[i64] = logits_shape;
        if dims.len() != 2 || dims[0] != 1 || dims[1] as usize != LABEL_COUNT {
            return Err(ClassifierError::UnexpectedOutput {
                expected: LABEL_COUNT,
                got: format!("{dims:?}"),
            });
        }

        let probs = softmax(logits);
        let (top_index, top_score) = argmax(&probs);

        Ok(RawPrediction {
            label: format!("LABEL_{top_index}"),
            score: top_score,
        })
    }
}

/// Numerically stable softmax over one logits row.
fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}

/// Index and value of the highest-probability class.
fn argmax(probs: &[f32]) -> (usize, f32) {
    probs
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, &p)| (i, p))
        .unwrap_or((0, 0.0))
}

/// Statically declared class count from the model's logits output, if any.
fn declared_class_count(output_type: &ort::value::ValueType) -> Option<usize> {
    match output_type {
        ort::value::ValueType::Tensor { shape, .. } => {
            // Last dimension is the class dim; dynamic dims are negative.
            shape
                .last()
                .and_then(|&d| if d > 0 { Some(d as usize) } else { None })
        }
        _ => None,
    }
}

/// Reject a statically declared class count that differs from [`LABEL_COUNT`].
fn check_class_count(declared: Option<usize>) -> Result<(), ClassifierError> {
    match declared {
        Some(got) if got != LABEL_COUNT => Err(ClassifierError::ClassCountMismatch {
            expected: LABEL_COUNT,
            got,
        }),
        _ => Ok(()),
    }
}
