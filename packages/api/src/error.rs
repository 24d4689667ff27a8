//! Error taxonomy for API calls and session operations.

use store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// Parsed JSON body, `Null` when the body was empty or not JSON.
        body: serde_json::Value,
    },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("session storage error: {0}")]
    Storage(#[from] StoreError),

    /// `refresh()` was called with no refresh token in the session.
    #[error("no refresh token available")]
    NoRefreshToken,

    /// The refresh token is expired or was rejected; the session was torn down.
    #[error("session expired, please sign in again")]
    SessionExpired,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The human-readable message the backend put in the error body, if any.
    ///
    /// Looks at `message`, `detail` and `error`, then the first field error of
    /// a validation response (`{"email": ["already registered"]}`).
    pub fn server_message(&self) -> Option<String> {
        let ApiError::Status { body, .. } = self else {
            return None;
        };
        let obj = body.as_object()?;
        for key in ["message", "detail", "error"] {
            if let Some(text) = obj.get(key).and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
        obj.values().find_map(|value| match value {
            serde_json::Value::Array(items) => items
                .first()
                .and_then(|item| item.as_str())
                .map(str::to_string),
            _ => None,
        })
    }

    /// [`server_message`](Self::server_message) or the given fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
