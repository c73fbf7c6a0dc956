use axum::{
    extract::State,
    http::{header, HeaderMap},
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Basic-Auth-gated static page. Username must be exactly `admin`; the
/// password is the one configured at startup.
pub async fn admin_portal(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<&'static str> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if !state.admin.authorize(authorization) {
        return Err(AppError::Unauthorized);
    }

    info!("Admin portal accessed");

    Ok("Super secret admin portal")
}
