//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{
    generate_cover_letter, today_string, GenerateRequest, GenerationResult,
};
use crate::state::AppState;

/// POST /generate
///
/// Validates the request, then generates a cover letter. Remote mode is used when
/// the service was started with a writer; any remote failure yields a local letter.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let today = today_string();
    let result = generate_cover_letter(
        state.writer.as_deref(),
        &request,
        &state.generation_options(),
        &today,
    )
    .await;

    Ok(Json(result))
}
