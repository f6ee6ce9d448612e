use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong talking to the backend, plus the local
/// validation rejections that never reach it.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid backend URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Non-success response from the backend, carrying whatever message the
    /// error body held.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("Please enter a coupon code")]
    EmptyCouponCode,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("session store error: {0}")]
    SessionStore(#[from] std::io::Error),
}

/// The backend is not consistent about its error key; some handlers return
/// `{"message": ...}`, others `{"error": ...}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ClientError {
    pub(crate) async fn from_response(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };

        ClientError::Api { status, message }
    }
}
