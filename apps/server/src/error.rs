use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use citation_ai::AiError;
use citation_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Ai(#[from] AiError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::NotFound(_) | CoreError::EmptyStore => StatusCode::NOT_FOUND,
                CoreError::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
                CoreError::Database(DatabaseError::UniqueViolation(_)) => StatusCode::CONFLICT,
                CoreError::Database(_) | CoreError::Unexpected(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Ai(AiError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Ai(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Server-side failures are logged in full; clients get a generic message.
        let message = if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
            match status {
                StatusCode::BAD_GATEWAY => "Upstream generator unavailable".to_string(),
                _ => INTERNAL_MESSAGE.to_string(),
            }
        } else {
            self.to_string()
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use citation_core::errors::ValidationError;

    #[test]
    fn core_errors_map_to_status() {
        let cases = [
            (
                CoreError::Validation(ValidationError::MissingField("text".into())),
                StatusCode::BAD_REQUEST,
            ),
            (CoreError::NotFound("Quote q1".into()), StatusCode::NOT_FOUND),
            (CoreError::EmptyStore, StatusCode::NOT_FOUND),
            (
                CoreError::Database(DatabaseError::NotFound("q1".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                CoreError::Database(DatabaseError::UniqueViolation("date".into())),
                StatusCode::CONFLICT,
            ),
            (
                CoreError::Database(DatabaseError::PoolFailed("timeout".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::Unexpected("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status(), expected);
        }
    }

    #[test]
    fn ai_errors_map_to_status() {
        assert_eq!(
            ApiError::from(AiError::invalid_input("Theme must not be empty")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(AiError::QuotaExceeded).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn server_errors_hide_details() {
        let response =
            ApiError::from(CoreError::Database(DatabaseError::QueryFailed("secret sql".into())))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 500);
        assert_eq!(body["message"], INTERNAL_MESSAGE);
    }
}
