use std::future::{ready, Ready};
use std::marker::PhantomData;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::domain::cart::{Identity, Role};
use crate::errors::AppError;

/// Set of roles allowed on a route.
pub trait RolePolicy {
    const ALLOWED: &'static [Role];
}

#[derive(Debug)]
pub struct CustomerOnly;

impl RolePolicy for CustomerOnly {
    const ALLOWED: &'static [Role] = &[Role::Customer];
}

#[derive(Debug)]
pub struct CustomerOrAdmin;

impl RolePolicy for CustomerOrAdmin {
    const ALLOWED: &'static [Role] = &[Role::Customer, Role::Admin];
}

#[derive(Debug)]
pub struct AdminOnly;

impl RolePolicy for AdminOnly {
    const ALLOWED: &'static [Role] = &[Role::Admin];
}

/// Authorization stage, as an extractor.
///
/// Extraction fails with 401 when the authentication stage did not run or
/// left no identity, and with 403 when the caller's role is not in `P`.
#[derive(Debug)]
pub struct Authorized<P> {
    identity: Identity,
    _policy: PhantomData<P>,
}

impl<P> Authorized<P> {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn into_identity(self) -> Identity {
        self.identity
    }
}

impl<P: RolePolicy> FromRequest for Authorized<P> {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authorize::<P>(req))
    }
}

fn authorize<P: RolePolicy>(req: &HttpRequest) -> Result<Authorized<P>, AppError> {
    let identity = req
        .extensions()
        .get::<Identity>()
        .cloned()
        .ok_or_else(|| AppError::Unauthenticated("Authentication required".to_string()))?;

    if !P::ALLOWED.contains(&identity.role) {
        log::debug!(
            "{} {} denied for role {}",
            req.method(),
            req.path(),
            identity.role
        );
        return Err(AppError::Forbidden);
    }

    Ok(Authorized {
        identity,
        _policy: PhantomData,
    })
}
