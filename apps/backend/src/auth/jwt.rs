use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::claims::{GameClaims, RoleClaim};
use super::ClaimSigner;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// HS256 game-token signer and verifier.
#[derive(Debug, Clone)]
pub struct JwtSigner {
    security: SecurityConfig,
}

impl JwtSigner {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }

    pub fn security(&self) -> &SecurityConfig {
        &self.security
    }

    /// Mint a token as if issued at `now`. Expiry is `now + token_ttl`.
    pub fn mint_at(&self, claim: &RoleClaim, now: SystemTime) -> Result<String, DomainError> {
        let iat = now
            .duration_since(UNIX_EPOCH)
            .map_err(|_| DomainError::infra(InfraErrorKind::Signing, "clock before epoch"))?
            .as_secs() as i64;
        let exp = iat + self.security.token_ttl.as_secs() as i64;

        let claims = GameClaims {
            game_id: claim.game_id.clone(),
            player_id: claim.participant_id.clone(),
            role: claim.role,
            iat,
            exp,
        };

        encode(
            &Header::new(self.security.algorithm),
            &claims,
            &EncodingKey::from_secret(&self.security.jwt_secret),
        )
        .map_err(|e| DomainError::infra(InfraErrorKind::Signing, format!("encode JWT: {e}")))
    }

    /// Verify signature, algorithm and expiry, then hand back the claim.
    pub fn verify(&self, token: &str) -> Result<RoleClaim, AppError> {
        let mut validation = Validation::new(self.security.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<GameClaims>(
            token,
            &DecodingKey::from_secret(&self.security.jwt_secret),
            &validation,
        )
        .map(|data| RoleClaim::from(data.claims))
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
            _ => AppError::unauthorized_invalid_jwt(),
        })
    }
}

impl ClaimSigner for JwtSigner {
    fn mint(&self, claim: &RoleClaim) -> Result<String, DomainError> {
        self.mint_at(claim, SystemTime::now())
    }
}
