//! Process-wide model state, built once at startup.

use std::path::Path;
use std::sync::Mutex;

use replysense_ai::SentimentClassifier;
use tracing::{error, info};

/// Which model variant is active, reported verbatim by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Pre-initialization default; not observable once startup completes.
    NotLoaded,
    /// No model directory, or loading failed.
    None,
    /// Fine-tuned DistilBERT sequence-classification model.
    DistilBert,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotLoaded => "Not Loaded",
            Self::None => "None",
            Self::DistilBert => "DistilBERT",
        }
    }
}

/// Shared request-handler state: the classifier handle plus its load status.
///
/// Written once at startup, read-only afterwards. The `Mutex` exists only
/// because the session's inference call takes `&mut self`.
pub struct AppState {
    model: Option<Mutex<SentimentClassifier>>,
    kind: ModelKind,
}

impl AppState {
    /// Attempt to load the classifier from `model_dir`.
    ///
    /// Never fails: an absent directory or a load error is logged and the
    /// service starts in the no-model state, where `/predict` serves the
    /// fixed placeholder response.
    pub fn initialize(model_dir: &Path) -> Self {
        let mut state = Self {
            model: None,
            kind: ModelKind::NotLoaded,
        };

        if !model_dir.is_dir() {
            info!(dir = %model_dir.display(), "no model directory, serving default responses");
            state.kind = ModelKind::None;
            return state;
        }

        match SentimentClassifier::load(model_dir) {
            Ok(model) => {
                state.model = Some(Mutex::new(model));
                state.kind = ModelKind::DistilBert;
            }
            Err(e) => {
                error!(error = %e, dir = %model_dir.display(), "failed to load sentiment model");
                state.kind = ModelKind::None;
            }
        }
        state
    }

    pub fn model(&self) -> Option<&Mutex<SentimentClassifier>> {
        self.model.as_ref()
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }
}
