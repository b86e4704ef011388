use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::RoleClaim;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Verified game token from `Authorization: Bearer <jwt>`.
///
/// Yields the role claim the token carries. The game id used by the handler
/// comes from here, never from the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameToken(pub RoleClaim);

impl GameToken {
    pub fn into_inner(self) -> RoleClaim {
        self.0
    }
}

impl FromRequest for GameToken {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<GameToken, AppError> {
    let token = bearer_token(req).ok_or_else(AppError::unauthorized_missing_bearer)?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    state.signer.verify(token).map(GameToken)
}

/// Parse "Bearer <token>"; anything else counts as missing.
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}
