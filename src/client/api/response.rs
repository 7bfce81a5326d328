//! Interpretation of raw HTTP responses.

use serde::de::DeserializeOwned;

use crate::{client::error::ApiError, model::api::ErrorDto};

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extracts the message of a failed response.
///
/// Prefers the `error` field of an [`ErrorDto`] body, then the raw body text, then
/// `"Unknown error"` for an empty body.
pub fn error_message(body: &str) -> String {
    if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(body) {
        return error_dto.error;
    }

    let body = body.trim();
    if body.is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}

/// Maps a non-2xx status to [`ApiError::Status`].
pub fn expect_success(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            status,
            message: error_message(body),
        })
    }
}

/// Decodes a successful response body.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
