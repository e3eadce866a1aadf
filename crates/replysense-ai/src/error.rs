use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model artifact not found: {0}")]
    MissingArtifact(PathBuf),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("onnx runtime error: {0}")]
    Ort(#[from] ort::Error),

    #[error("model declares {got} output classes, expected {expected}")]
    ClassCountMismatch { expected: usize, got: usize },

    #[error("unexpected logits shape {got}, expected [1, {expected}]")]
    UnexpectedOutput { expected: usize, got: String },
}
