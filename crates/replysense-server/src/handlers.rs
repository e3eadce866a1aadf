//! HTTP request handlers for the predict and health endpoints.

use actix_web::{HttpResponse, Responder, get, post, web};
use replysense_core::api::{HealthResponse, PredictionResponse, TextInput};
use replysense_core::sentiment::Sentiment;
use tracing::error;

use crate::state::AppState;

/// Classify one reply as positive, neutral, or negative.
///
/// Failure modes never surface as HTTP errors: with no model loaded the
/// response is the fixed `{neutral, 0.0}` placeholder, and an inference
/// failure is logged and replaced by the fixed `{neutral, 0.5}` placeholder.
#[post("/predict")]
pub async fn predict(state: web::Data<AppState>, input: web::Json<TextInput>) -> impl Responder {
    let Some(model) = state.model() else {
        return HttpResponse::Ok().json(PredictionResponse::no_model());
    };

    let response = match model.lock() {
        Ok(mut model) => match model.predict(&input.text) {
            Ok(raw) => {
                PredictionResponse::predicted(Sentiment::from_internal_tag(&raw.label), raw.score)
            }
            Err(e) => {
                error!(error = %e, "inference failed, returning placeholder");
                PredictionResponse::inference_failed()
            }
        },
        Err(_) => {
            error!("classifier lock poisoned, returning placeholder");
            PredictionResponse::inference_failed()
        }
    };

    HttpResponse::Ok().json(response)
}

/// Report process status and the active model variant.
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok(state.kind().as_str()))
}
