use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use crate::errors::YtDlpError;
use serde_json::{json, Value};

/// The failure half of every handler result. Failures still travel as
/// `200 OK`; callers tell them apart by the `error` key. Only request
/// validation uses a distinct status.
#[derive(Debug)]
pub enum ApiError {
    Plain(String),
    Detailed { error: String, detail: Value },
    InvalidRequest(String),
}

impl ApiError {
    /// The `{"error", "detail"}` form used by `/youtube`.
    pub fn detailed(err: YtDlpError) -> Self {
        match err {
            YtDlpError::Execution { command, code, stderr } => ApiError::Detailed {
                error: "yt-dlp failed".to_string(),
                detail: json!({
                    "command": command,
                    "returncode": code,
                    "stderr": stderr,
                }),
            },
            YtDlpError::Decode { message, .. } => ApiError::Detailed {
                error: "Failed to parse yt-dlp output".to_string(),
                detail: Value::String(message),
            },
            other => ApiError::unexpected(other),
        }
    }

    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        ApiError::Detailed {
            error: "Unexpected error".to_string(),
            detail: Value::String(err.to_string()),
        }
    }
}

impl From<YtDlpError> for ApiError {
    fn from(err: YtDlpError) -> Self {
        match err {
            YtDlpError::Execution { stderr, .. } => ApiError::Plain(stderr),
            YtDlpError::MissingField("channel_id") => {
                ApiError::Plain("Unable to fetch channel ID".to_string())
            }
            other => ApiError::Plain(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Plain(message) => {
                (StatusCode::OK, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Detailed { error, detail } => {
                (StatusCode::OK, Json(json!({
                    "error": error,
                    "detail": detail
                }))).into_response()
            }
            ApiError::InvalidRequest(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({
                    "detail": msg
                }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execution() -> YtDlpError {
        YtDlpError::Execution {
            command: vec!["yt-dlp".to_string(), "--version".to_string()],
            code: Some(1),
            stderr: "ERROR: boom".to_string(),
        }
    }

    #[test]
    fn test_plain_mapping() {
        assert!(matches!(ApiError::from(execution()), ApiError::Plain(m) if m == "ERROR: boom"));
        assert!(matches!(
            ApiError::from(YtDlpError::MissingField("channel_id")),
            ApiError::Plain(m) if m == "Unable to fetch channel ID"
        ));
    }

    #[test]
    fn test_detailed_mapping() {
        let ApiError::Detailed { error, detail } = ApiError::detailed(execution()) else {
            panic!("Expected detailed error");
        };
        assert_eq!(error, "yt-dlp failed");
        assert_eq!(detail["returncode"], 1);
        assert_eq!(detail["command"][1], "--version");
        assert_eq!(detail["stderr"], "ERROR: boom");

        let decode = YtDlpError::Decode { message: "expected value".to_string(), output: "x".to_string() };
        let ApiError::Detailed { error, detail } = ApiError::detailed(decode) else {
            panic!("Expected detailed error");
        };
        assert_eq!(error, "Failed to parse yt-dlp output");
        assert_eq!(detail, "expected value");

        let ApiError::Detailed { error, .. } = ApiError::detailed(YtDlpError::MissingField("id")) else {
            panic!("Expected detailed error");
        };
        assert_eq!(error, "Unexpected error");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Plain("x".into()).into_response().status(), StatusCode::OK);
        assert_eq!(
            ApiError::InvalidRequest("x".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
