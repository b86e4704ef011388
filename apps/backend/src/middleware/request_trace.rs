//! Trace id assignment.
//!
//! Outermost middleware. Mints one id per request, stores it as a [`TraceId`]
//! extension for `TraceSpan`, scopes `trace_ctx` to it for the handler, and
//! returns it to the client as `x-request-id`. Problem bodies carry the same
//! id, so a client report can be matched to the server log line.

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use crate::trace_ctx;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request extension holding the id minted by [`RequestTrace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

#[derive(Clone, Default)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(TraceId(trace_id.clone()));

        // Hyphenated UUIDs are plain ASCII, so this only fails if the format changes.
        let header_value = HeaderValue::from_str(&trace_id).ok();
        let handled = trace_ctx::with_trace_id(trace_id, self.service.call(req));

        Box::pin(async move {
            let mut res = handled.await?;
            if let Some(value) = header_value {
                res.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Ok(res)
        })
    }
}
