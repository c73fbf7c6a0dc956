use axum::{
    body::to_bytes,
    extract::{Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{CreateItem, Item},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list().await;

    info!(count = items.len(), "Listed items");

    (StatusCode::OK, Json(items))
}

// ── Get by id ─────────────────────────────────────────────────────────────────

/// Single-item lookup. The literal id `random` delegates to the redirect
/// behavior instead of a map lookup.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    if id == "random" {
        return redirect_to_random_item(&state).await;
    }

    let item = state
        .store
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("item {} not found", id)))?;

    Ok((StatusCode::OK, Json(item)).into_response())
}

// ── Random redirect ───────────────────────────────────────────────────────────

/// 302 Found pointing at a uniformly picked existing item. An empty store is
/// a plain 404 with no Location header.
async fn redirect_to_random_item(state: &AppState) -> AppResult<Response> {
    let id = state
        .store
        .random_id()
        .await
        .ok_or_else(|| AppError::NotFound("no items to redirect to".to_string()))?;

    info!(target = %id, "Redirecting to random item");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, format!("/items/{}", id))],
    )
        .into_response())
}

// ── Create ────────────────────────────────────────────────────────────────────

/// Checks run in a fixed order: read the whole body, then the content-type
/// declaration, then the JSON parse, then validation. The content-type must
/// equal `application/json` exactly; values with parameters are rejected.
pub async fn create_item(State(state): State<AppState>, request: Request) -> AppResult<StatusCode> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(anyhow::Error::from)?;

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    if content_type != Some("application/json") {
        return Err(AppError::UnsupportedMediaType);
    }

    let candidate: CreateItem =
        serde_json::from_slice(&bytes).map_err(|err| AppError::BadRequest(err.to_string()))?;

    let item = state.store.create(candidate).await?;

    info!(id = %item.id, name = %item.name, quantity = item.quantity, "Created item");

    Ok(StatusCode::OK)
}
