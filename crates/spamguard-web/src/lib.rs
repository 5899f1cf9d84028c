//! # SpamGuard Web
//!
//! Single-page web front-end. The detector is loaded once before the
//! listener starts and shared read-only by every request.

pub mod handler;
pub mod page;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use spamguard_core::{ArtifactPaths, Classify, Prediction, SpamDetector, SpamGuardError};
use thiserror::Error;
use tracing::info;

pub use handler::{handle_submission, Outcome};

/// Process-lifetime, read-only state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<dyn Classify>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classify>) -> Self {
        Self { classifier }
    }

    /// Loads the persisted detector.
    ///
    /// # Errors
    ///
    /// Any artifact problem (missing, unreadable, corrupt, mismatched) is
    /// returned as-is; the caller is expected to abort startup.
    pub fn load(paths: &ArtifactPaths) -> spamguard_core::Result<Self> {
        let detector = SpamDetector::load(paths)?;
        info!(
            vocabulary = detector.vectorizer().vocabulary_len(),
            "detector loaded"
        );
        Ok(Self::new(Arc::new(detector)))
    }
}

/// Body of a form submission.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub message: String,
}

/// Body of a JSON prediction request.
#[derive(Debug, Deserialize, Serialize)]
pub struct PredictRequest {
    pub text: String,
}

/// Failures of the JSON API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Classifier(#[from] SpamGuardError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Classifier(SpamGuardError::EmptyInput) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Classifier(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// `GET /`
pub async fn index() -> Html<String> {
    Html(page::render(None, ""))
}

/// `POST /`
pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Html<String> {
    let outcome = handle_submission(state.classifier.as_ref(), &form.message);
    Html(page::render(Some(&outcome), &form.message))
}

/// `POST /api/predict`
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<Prediction>, ApiError> {
    Ok(Json(state.classifier.classify(&request.text)?))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/api/predict", post(predict))
        .with_state(state)
}
