pub mod claims;
pub mod jwt;

pub use claims::{GameClaims, RoleClaim};
pub use jwt::JwtSigner;

use crate::errors::domain::DomainError;

/// Turns a role claim into a bearer credential.
///
/// The session coordinator mints through this seam so it never depends on
/// a concrete token format.
pub trait ClaimSigner: Send + Sync {
    fn mint(&self, claim: &RoleClaim) -> Result<String, DomainError>;
}
