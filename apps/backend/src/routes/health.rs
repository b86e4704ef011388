use actix_web::{web, HttpResponse};

use crate::error::AppError;

/// Liveness check. The store is in-process, so there is nothing else to check.
async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().content_type("text/plain").body("ok"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
