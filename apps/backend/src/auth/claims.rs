//! Claims carried by game tokens.

use serde::{Deserialize, Serialize};

use crate::domain::Mark;

/// Authenticated assertion that `participant_id` holds `role` in `game_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleClaim {
    pub game_id: String,
    pub participant_id: String,
    pub role: Mark,
}

/// Signed JWT payload. One token is scoped to one game and one mark.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameClaims {
    pub game_id: String,
    pub player_id: String,
    pub role: Mark,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl From<GameClaims> for RoleClaim {
    fn from(claims: GameClaims) -> Self {
        Self {
            game_id: claims.game_id,
            participant_id: claims.player_id,
            role: claims.role,
        }
    }
}
