//! Request authentication and role checks.
//!
//! Two stages run in front of every cart handler: [`middleware::authenticate`]
//! turns the bearer token into an [`Identity`](crate::domain::cart::Identity)
//! stored in the request extensions, and the [`guard::Authorized`] extractor
//! rejects callers whose role is not allowed on the route.

pub mod guard;
pub mod middleware;
pub mod token;

pub use guard::{AdminOnly, Authorized, CustomerOnly, CustomerOrAdmin};
pub use token::{AuthError, Authenticator, Claims};
