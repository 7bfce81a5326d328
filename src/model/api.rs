use serde::{Deserialize, Serialize};

/// The response body when an API request fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
