use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Human readable body size: `512 B`, `3.4 KB`, `1.2 MB`.
pub fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Logs method, path, status, duration and body size of every request.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} ({}ms, body unreadable: {})",
                method,
                path,
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed = start.elapsed().as_millis();
    if parts.status.is_success() || parts.status.is_redirection() {
        tracing::info!(
            "{} {} -> {} ({}ms, {})",
            method,
            path,
            parts.status.as_u16(),
            elapsed,
            format_size(bytes.len())
        );
    } else {
        tracing::warn!(
            "{} {} -> {} ({}ms, {})",
            method,
            path,
            parts.status.as_u16(),
            elapsed,
            format_size(bytes.len())
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
