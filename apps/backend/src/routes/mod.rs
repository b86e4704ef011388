use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod games;
pub mod health;

/// Register every route. `main.rs` and the HTTP tests both go through here.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/game").configure(games::configure_routes));
    cfg.default_service(web::to(not_found));
}

/// Fallback for unmatched paths so they still answer with problem details.
async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}
