use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, StatsResponse};
use crate::state::AppState;
use crate::validation::validate_url;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_core::ShortCode;
use serde_json::Value;
use tracing::info;

pub async fn create_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUrlResponse>)> {
    let Ok(Json(request)) = payload else {
        return Err(AppError::MissingUrl);
    };
    let original_url = match request.url {
        None => return Err(AppError::MissingUrl),
        Some(Value::String(url)) => url,
        Some(other) => {
            return Err(AppError::InvalidUrl(format!(
                "URL must be a string, got {other}"
            )))
        }
    };
    validate_url(&original_url)?;

    let code = state.shortener().allocate(&original_url)?;
    let short_url = code.to_url(&state.public_base_url(&headers));
    info!(code = %code, url = %original_url, "created short url");

    Ok((
        StatusCode::CREATED,
        Json(CreateUrlResponse {
            short_code: code.into(),
            short_url,
        }),
    ))
}

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = parse_code(short_code)?;
    let record = state.shortener().lookup(&code).ok_or(AppError::NotFound)?;
    state.shortener().record_click(&code);

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url)],
    )
        .into_response())
}

pub async fn stats_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>> {
    let code = parse_code(short_code)?;
    let stats = state.shortener().stats(&code).ok_or(AppError::NotFound)?;

    Ok(Json(stats.into()))
}

/// A path segment that is not a well-formed code cannot be registered,
/// so it is reported the same way as an unknown code.
fn parse_code(short_code: String) -> Result<ShortCode> {
    ShortCode::new(short_code).map_err(|_| AppError::NotFound)
}
