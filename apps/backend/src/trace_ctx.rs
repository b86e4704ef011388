//! Task-local trace id for the request being served.
//!
//! Set by `RequestTrace`, read when rendering problem+json error bodies.
//! Service and domain code never depend on it.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or `"unknown"` outside one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
