use std::time::{Duration, SystemTime};

use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::json;
use tictactoe_backend::auth::{JwtSigner, RoleClaim};
use tictactoe_backend::domain::Mark;
use tictactoe_backend::state::{build_state, SecurityConfig};

use crate::support::app_builder::create_test_app;
use crate::support::coordinator::TEST_SECRET;
use crate::support::http::{get_with_token, json_body, post_json, start_game};

fn claim(game_id: &str, role: Mark) -> RoleClaim {
    RoleClaim {
        game_id: game_id.to_string(),
        participant_id: "0badf00d".to_string(),
        role,
    }
}

#[actix_web::test]
async fn missing_bearer_is_rejected() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let resp = get_with_token(&app, "/game/state", None).await;
    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_MISSING_BEARER",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;

    let resp = post_json(&app, "/game/move", json!({ "position": 0 }), None).await;
    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_MISSING_BEARER",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}

#[actix_web::test]
async fn token_signed_with_other_key_is_invalid() {
    let app = create_test_app(build_state().with_security(SecurityConfig::new(TEST_SECRET)).build())
        .with_prod_routes()
        .build()
        .await;
    let (game_id, _, _) = start_game(&app).await;

    let forged = JwtSigner::new(SecurityConfig::new(b"some-other-key".as_slice()))
        .mint_at(&claim(&game_id, Mark::X), SystemTime::now())
        .unwrap();

    let resp = post_json(&app, "/game/move", json!({ "position": 0 }), Some(&forged)).await;
    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_INVALID_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;

    let resp = get_with_token(&app, "/game/state", Some("not-a-jwt")).await;
    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_INVALID_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}

#[actix_web::test]
async fn expired_token_is_rejected() {
    let security = SecurityConfig::new(TEST_SECRET).with_token_ttl(Duration::from_secs(60));
    let app = create_test_app(build_state().with_security(security.clone()).build())
        .with_prod_routes()
        .build()
        .await;
    let (game_id, _, _) = start_game(&app).await;

    let stale = JwtSigner::new(security)
        .mint_at(
            &claim(&game_id, Mark::X),
            SystemTime::now() - Duration::from_secs(3600),
        )
        .unwrap();

    let resp = get_with_token(&app, "/game/state", Some(&stale)).await;
    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_EXPIRED_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}

#[actix_web::test]
async fn token_scopes_the_game() {
    let app = create_test_app(build_state().with_security(SecurityConfig::new(TEST_SECRET)).build())
        .with_prod_routes()
        .build()
        .await;
    let (first, first_x, _) = start_game(&app).await;
    let (second, _, _) = start_game(&app).await;

    // A body-supplied game id is ignored; the move lands in the token's game.
    let resp = post_json(
        &app,
        "/game/move",
        json!({ "position": 4, "gameId": second }),
        Some(&first_x),
    )
    .await;
    let body = json_body(resp, StatusCode::OK).await;
    assert_eq!(body["gameId"], first.as_str());

    let untouched_token = JwtSigner::new(SecurityConfig::new(TEST_SECRET))
        .mint_at(&claim(&second, Mark::X), SystemTime::now())
        .unwrap();
    let untouched = json_body(
        get_with_token(&app, "/game/state", Some(&untouched_token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(untouched["moveCount"], 0);
}
