//! Axum route handlers for the localization API.

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LocalizeRequest {
    pub strings: HashMap<String, String>,
    pub language: String,
    /// Falls back to the service-wide default category when omitted.
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocalizeResponse {
    pub strings: HashMap<String, String>,
    pub language: String,
    pub category: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/translate
///
/// Bare key → text object in, transformed object out. Language and category
/// come from the service configuration.
pub async fn handle_translate(
    State(state): State<AppState>,
    Json(strings): Json<HashMap<String, String>>,
) -> Result<Json<HashMap<String, String>>, AppError> {
    let transformed = state.transformer.transform(
        &strings,
        &state.config.default_language,
        &state.config.default_category,
    )?;

    Ok(Json(transformed))
}

/// POST /api/v1/localize
///
/// Structured request carrying the string table plus explicit language and
/// optional category. Unknown languages fail the whole request with a 400.
pub async fn handle_localize(
    State(state): State<AppState>,
    Json(request): Json<LocalizeRequest>,
) -> Result<Json<LocalizeResponse>, AppError> {
    if request.language.trim().is_empty() {
        return Err(AppError::Validation("language cannot be empty".to_string()));
    }

    let category = request
        .category
        .unwrap_or_else(|| state.config.default_category.clone());

    let strings = state
        .transformer
        .transform(&request.strings, &request.language, &category)?;

    Ok(Json(LocalizeResponse {
        strings,
        language: request.language,
        category,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
