pub mod api;
pub mod sentiment;

pub use api::{HealthResponse, PredictionResponse, TextInput};
pub use sentiment::{LABEL_COUNT, Sentiment};
