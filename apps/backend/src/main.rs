use std::time::Duration;

use actix_web::{web, App, HttpServer};
use tictactoe_backend::config::ServerConfig;
use tictactoe_backend::middleware::{RequestTrace, TraceSpan};
use tictactoe_backend::routes;
use tictactoe_backend::state::{build_state, SecurityConfig};
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let security = SecurityConfig::new(config.jwt_secret.as_bytes())
        .with_token_ttl(Duration::from_secs(config.token_ttl_secs));

    let app_state = build_state()
        .with_security(security)
        .with_max_attempts(config.max_attempts)
        .build();

    info!(
        host = %config.host,
        port = config.port,
        max_attempts = config.max_attempts,
        "Starting tic-tac-toe backend"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
