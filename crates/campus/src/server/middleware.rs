//! Request logging middleware.
//!
//! Tags every request with a uuid and logs start/finish with method, path,
//! status, and duration.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use uuid::Uuid;

pub async fn request_context_middleware(request: Request, next: Next) -> Response {
  let request_id = Uuid::new_v4();
  let method = request.method().clone();
  let path = request.uri().path().to_string();

  tracing::info!(%request_id, %method, %path, "request started");
  let start = Instant::now();

  let response = next.run(request).await;

  let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
  tracing::info!(
    %request_id,
    status = response.status().as_u16(),
    duration_ms = format!("{duration_ms:.2}"),
    "request completed"
  );

  response
}
