use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::{web, Error, HttpMessage, ResponseError};

use super::token::{bearer_token, Authenticator};
use crate::errors::AppError;

/// Authentication stage: resolve the caller from the bearer token.
///
/// Short-circuits with a 401 JSON body when the token is missing or invalid;
/// otherwise stores the `Identity` in the request extensions for the
/// authorization stage.
pub async fn authenticate<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    match resolve(&req) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        }
        Err(err) => {
            log::debug!("rejecting {} {}: {}", req.method(), req.path(), err);
            let response = err.error_response();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

fn resolve(req: &ServiceRequest) -> Result<crate::domain::cart::Identity, AppError> {
    let authenticator = req
        .app_data::<web::Data<Authenticator>>()
        .ok_or_else(|| AppError::Internal("authenticator is not configured".to_string()))?;
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    let token = bearer_token(header)?;
    Ok(authenticator.verify(token)?)
}
