//! Per-request span and completion log.
//!
//! Opens a `request` span carrying `trace_id`, `method` and `path`, runs the
//! handler inside it, and emits one `request_completed` event with the status
//! and latency. Client errors log at `warn`, server errors at `error`.
//!
//! Reads the trace id `RequestTrace` stored in request extensions, so it
//! must run inside it. Actix applies `wrap` calls outside-in from the last
//! one, hence `.wrap(TraceSpan).wrap(RequestTrace)`.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, info_span, warn, Instrument};

use super::request_trace::TraceId;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "missing-trace-id".to_string());

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path()
        );

        let fut = self.service.call(req);

        Box::pin(
            async move {
                let result = fut.await;

                let status = match &result {
                    Ok(res) => res.status(),
                    Err(err) => err.as_response_error().status_code(),
                };
                let status_code = status.as_u16();
                let duration_us = start.elapsed().as_micros() as u64;

                if status.is_server_error() {
                    error!(status_code, duration_us, "request_completed");
                } else if status.is_client_error() {
                    warn!(status_code, duration_us, "request_completed");
                } else {
                    info!(status_code, duration_us, "request_completed");
                }

                result
            }
            .instrument(span),
        )
    }
}
