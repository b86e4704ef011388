//! Game HTTP routes.
//!
//! `initiate` and `join` are open; `state` and `move` require the game token
//! issued by one of them and act on the game named inside it.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::ids::ID_LEN;
use crate::domain::{GameRecord, GameStatus, Mark, BOARD_CELLS};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::validated_json::Validate;
use crate::extractors::{GameToken, ValidatedJson};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InitiateResponse {
    game_id: String,
    token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub game_id: String,
}

impl Validate for JoinRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.game_id.trim().len() < ID_LEN {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("gameId must be at least {ID_LEN} characters"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct JoinResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    /// Signed so that negative input is a validation error rather than a parse error.
    pub position: i64,
}

impl Validate for MoveRequest {
    fn validate(&self) -> Result<(), AppError> {
        if !(0..BOARD_CELLS as i64).contains(&self.position) {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("position must be between 0 and {}", BOARD_CELLS - 1),
            ));
        }
        Ok(())
    }
}

impl MoveRequest {
    /// Board index; only meaningful once `validate` has passed.
    fn cell(&self) -> usize {
        self.position as usize
    }
}

/// Public view of a game record, plus the caller's own role.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameStateResponse {
    #[serde(flatten)]
    record: GameRecord,
    status: GameStatus,
    your_role: Mark,
}

impl GameStateResponse {
    fn new(record: GameRecord, your_role: Mark) -> Self {
        Self {
            status: record.status(),
            record,
            your_role,
        }
    }
}

/// POST /game/initiate
async fn initiate(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let initiated = app_state.sessions.initiate().await?;

    Ok(HttpResponse::Ok().json(InitiateResponse {
        game_id: initiated.game_id,
        token: initiated.token,
    }))
}

/// POST /game/join
async fn join(
    body: ValidatedJson<JoinRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = body.into_inner().game_id;
    let token = app_state.sessions.join(game_id.trim()).await?;

    Ok(HttpResponse::Ok().json(JoinResponse { token }))
}

/// GET /game/state
async fn state(
    token: GameToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let claim = token.into_inner();
    let record = app_state.sessions.get_state(&claim.game_id).await?;

    Ok(HttpResponse::Ok().json(GameStateResponse::new(record, claim.role)))
}

/// POST /game/move
async fn make_move(
    token: GameToken,
    body: ValidatedJson<MoveRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let claim = token.into_inner();
    let record = app_state
        .sessions
        .make_move(&claim.game_id, claim.role, body.cell())
        .await?;

    Ok(HttpResponse::Ok().json(GameStateResponse::new(record, claim.role)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/initiate", web::post().to(initiate))
        .route("/join", web::post().to(join))
        .route("/state", web::get().to(state))
        .route("/move", web::post().to(make_move));
}
