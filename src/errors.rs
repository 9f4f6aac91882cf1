use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::auth::token::AuthError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} is required")]
    MissingParameter(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid action specified")]
    InvalidOperation,

    #[error("{0}")]
    Unauthenticated(String),

    #[error("Access denied")]
    Forbidden,

    #[error("Cart item not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::MissingParameter(field) => AppError::MissingParameter(field),
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::InvalidOperation => AppError::InvalidOperation,
            DomainError::NotFound => AppError::NotFound,
            DomainError::Forbidden => AppError::Forbidden,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Issue(_) => AppError::Internal(e.to_string()),
            other => AppError::Unauthenticated(other.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) | AppError::BadRequest(_) | AppError::InvalidOperation => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Internal(detail) => {
                log::error!("request failed: {}", detail);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "message": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (AppError::MissingParameter("Customer ID"), StatusCode::BAD_REQUEST),
            (AppError::BadRequest("bad".to_string()), StatusCode::BAD_REQUEST),
            (AppError::InvalidOperation, StatusCode::BAD_REQUEST),
            (AppError::Unauthenticated("no".to_string()), StatusCode::UNAUTHORIZED),
            (AppError::Forbidden, StatusCode::FORBIDDEN),
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (AppError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.error_response().status(), status, "{:?}", err);
        }
    }

    #[test]
    fn messages_match_api_contract() {
        assert_eq!(
            AppError::MissingParameter("Customer ID").to_string(),
            "Customer ID is required"
        );
        assert_eq!(AppError::InvalidOperation.to_string(), "Invalid action specified");
        assert_eq!(AppError::NotFound.to_string(), "Cart item not found");
    }

    #[actix_web::test]
    async fn internal_error_hides_detail() {
        let resp = AppError::Internal("connection refused on 10.0.0.3".to_string()).error_response();
        let body = to_bytes(resp.into_body()).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(json["message"], "Internal server error");
    }

    #[test]
    fn domain_errors_map_to_app_errors() {
        assert!(matches!(
            AppError::from(DomainError::MissingParameter("Customer ID")),
            AppError::MissingParameter("Customer ID")
        ));
        assert!(matches!(
            AppError::from(DomainError::InvalidInput("q".to_string())),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(DomainError::InvalidOperation),
            AppError::InvalidOperation
        ));
        assert!(matches!(AppError::from(DomainError::NotFound), AppError::NotFound));
        assert!(matches!(AppError::from(DomainError::Forbidden), AppError::Forbidden));
        assert!(matches!(
            AppError::from(DomainError::Internal("x".to_string())),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn auth_errors_are_unauthenticated() {
        assert!(matches!(
            AppError::from(AuthError::MissingCredentials),
            AppError::Unauthenticated(_)
        ));
    }
}
