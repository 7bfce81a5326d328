//! Requests against the dashboard API, compiled for the browser only.

use dioxus_logger::tracing;
use reqwasm::http::Request;
use serde::Serialize;

use crate::{
    client::{
        api::{response, with_timeout, Resource},
        config::Config,
        error::ApiError,
        table::RowId,
    },
    model::auth::{RegisterDto, RegisterResponseDto},
};

const REGISTER_PATH: &str = "/api/auth/register";

/// Sends a request and reads the whole body, bounded by the configured timeout.
async fn send(request: Request, config: &Config) -> Result<(u16, String), ApiError> {
    with_timeout(
        async move {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            Ok((status, body))
        },
        config.request_timeout,
    )
    .await
}

fn json_request<B: Serialize>(request: Request, body: &B) -> Result<Request, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;

    Ok(request
        .header("Content-Type", "application/json")
        .body(body))
}

/// Retrieve every record of a collection
pub async fn fetch_all<R: Resource>(config: &Config) -> Result<Vec<R>, ApiError> {
    let url = config.url(R::PATH);
    tracing::debug!("GET {}", url);

    let (status, body) = send(Request::get(&url), config).await?;
    response::expect_success(status, &body)?;

    response::decode(&body)
}

/// Create a record, returning it as stored by the server
pub async fn create<R: Resource>(config: &Config, payload: &R::Payload) -> Result<R, ApiError> {
    let url = config.url(R::PATH);
    tracing::debug!("POST {}", url);

    let (status, body) = send(json_request(Request::post(&url), payload)?, config).await?;
    response::expect_success(status, &body)?;

    response::decode(&body)
}

/// Replace a record, returning it as stored by the server
pub async fn update<R: Resource>(
    config: &Config,
    id: RowId,
    payload: &R::Payload,
) -> Result<R, ApiError> {
    let url = config.url(&R::item_path(id));
    tracing::debug!("PUT {}", url);

    let (status, body) = send(json_request(Request::put(&url), payload)?, config).await?;
    response::expect_success(status, &body)?;

    response::decode(&body)
}

/// Delete a record
pub async fn delete<R: Resource>(config: &Config, id: RowId) -> Result<(), ApiError> {
    let url = config.url(&R::item_path(id));
    tracing::debug!("DELETE {}", url);

    let (status, body) = send(Request::delete(&url), config).await?;
    response::expect_success(status, &body)
}

/// Register a new account
///
/// A 2xx response whose body still carries an `error` is treated as a failure.
pub async fn register(config: &Config, dto: &RegisterDto) -> Result<(), ApiError> {
    let url = config.url(REGISTER_PATH);
    tracing::debug!("POST {}", url);

    let (status, body) = send(json_request(Request::post(&url), dto)?, config).await?;
    response::expect_success(status, &body)?;

    // Any success body without an `error` field counts as success
    let registered = serde_json::from_str::<RegisterResponseDto>(&body).unwrap_or_default();

    match registered.error {
        Some(message) => Err(ApiError::Status { status, message }),
        None => Ok(()),
    }
}
