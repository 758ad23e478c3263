//! Localized string table API routes
//!
//! Serves the same string tables the frontend bundles, so non-browser
//! clients can render localized copy without shipping the wasm bundle.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::Path, routing::get, Json, Router};
use coach_landing_shared::i18n::{Language, Translations};

/// Create i18n routes
pub fn i18n_routes() -> Router<AppState> {
    Router::new().route("/:lang", get(get_translations))
}

/// GET /api/v1/i18n/:lang - Fetch the string table for a language
///
/// Accepts the two supported language codes, `ua` and `pl`.
async fn get_translations(
    Path(lang): Path<String>,
) -> Result<Json<&'static Translations>, ApiError> {
    let language = lang
        .parse::<Language>()
        .map_err(|e| ApiError::NotFound(e.to_string()))?;

    Ok(Json(Translations::get(language)))
}
