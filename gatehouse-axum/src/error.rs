use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatehouse_core::error::{AuthError, Error, StorageError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream failure: {0}")]
    BadGateway(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(e) => ApiError::BadRequest(e.to_string()),

            // Invalid credentials covers unknown email and wrong password
            // alike; the message must not distinguish them.
            Error::Auth(AuthError::InvalidCredentials) => {
                ApiError::BadRequest("invalid email or password".to_string())
            }
            Error::Auth(AuthError::NotVerified) => ApiError::Unauthorized(
                "you are not verified, please verify your email to login".to_string(),
            ),
            Error::Auth(AuthError::AlreadyVerified) => {
                ApiError::Unauthorized("account was already verified".to_string())
            }
            Error::Auth(e @ AuthError::AccountNotFound)
            | Error::Auth(e @ AuthError::CodeNotFound)
            | Error::Auth(e @ AuthError::ResetTokenNotFound) => ApiError::NotFound(e.to_string()),

            // One unauthorized outcome for every token failure; the
            // expired/invalid/malformed distinction stays in the logs.
            Error::Token(e) => {
                tracing::debug!(error = %e, "token validation failed");
                ApiError::Forbidden("could not refresh access token".to_string())
            }

            Error::Storage(StorageError::Duplicate(_)) => {
                ApiError::Conflict("name or email already exist".to_string())
            }
            Error::Storage(StorageError::NotFound) => {
                ApiError::NotFound("account not found".to_string())
            }
            Error::Storage(e) => ApiError::BadGateway(e.to_string()),

            Error::Mail(e) => ApiError::BadGateway(format!("there was an error sending email: {e}")),

            Error::Crypto(e) => ApiError::InternalError(e.to_string()),
            Error::Config(e) => ApiError::InternalError(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::BadGateway(msg) => msg.clone(),
            // Never leak internal failure details to the client.
            ApiError::InternalError(msg) => {
                tracing::error!(error = %msg, "internal error");
                "failed to process request".to_string()
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::error::{CryptoError, MailError, TokenError, ValidationError};

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = Error::Validation(ValidationError::PasswordMismatch).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let err: ApiError = Error::Storage(StorageError::Duplicate("email".to_string())).into();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_all_token_errors_collapse_to_one_outcome() {
        let expired: ApiError = Error::Token(TokenError::Expired).into();
        let invalid: ApiError = Error::Token(TokenError::InvalidSignature).into();
        let malformed: ApiError = Error::Token(TokenError::Malformed).into();

        for err in [&expired, &invalid, &malformed] {
            match err {
                ApiError::Forbidden(msg) => {
                    assert_eq!(msg, "could not refresh access token")
                }
                other => panic!("expected Forbidden, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unverified_maps_to_unauthorized() {
        let err: ApiError = Error::Auth(AuthError::NotVerified).into();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_mail_failure_maps_to_bad_gateway() {
        let err: ApiError = Error::Mail(MailError::Delivery("smtp down".to_string())).into();
        assert!(matches!(err, ApiError::BadGateway(_)));
    }

    #[test]
    fn test_hashing_failure_maps_to_internal() {
        let err: ApiError = Error::Crypto(CryptoError::PasswordHash("too long".to_string())).into();
        assert!(matches!(err, ApiError::InternalError(_)));
    }
}
