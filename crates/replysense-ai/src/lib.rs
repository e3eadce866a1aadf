//! AI inference layer: ONNX Runtime sequence classification for reply sentiment.

#[cfg(feature = "onnx")]
mod classifier;
#[cfg(feature = "onnx")]
mod error;

#[cfg(feature = "onnx")]
pub use classifier::{RawPrediction, SentimentClassifier};
#[cfg(feature = "onnx")]
pub use error::ClassifierError;
