//! Authentication and authorization.
//!
//! `AuthenticationService` turns credentials into access tokens,
//! `IdentityResolver` turns a bearer token back into an `AuthContext`, and
//! `AuthorizationPolicy` decides whether that context may touch a resource.

pub mod authentication;
pub mod errors;
pub mod models;
pub mod policy;
pub mod ports;
pub mod resolver;

pub use authentication::AuthenticationService;
pub use errors::AuthError;
pub use models::AccessToken;
pub use models::AuthContext;
pub use models::Credential;
pub use policy::AuthorizationPolicy;
pub use resolver::IdentityResolver;
