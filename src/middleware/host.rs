use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::ApiError;
use crate::config::Settings;

/// Reject requests whose `Host` header is not in the configured allowlist.
///
/// A `*` entry disables the check. The port is stripped before comparison,
/// so `ALLOWED_HOSTS=example.com` accepts `example.com:8000`.
pub async fn host_allowlist(
    State(settings): State<Arc<Settings>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if settings.allowed_hosts.iter().any(|host| host == "*") {
        return next.run(req).await;
    }

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(strip_port);

    match host {
        Some(host) if settings.allowed_hosts.iter().any(|allowed| allowed == host) => {
            next.run(req).await
        }
        _ => ApiError::BadRequest("Invalid host header".to_string()).into_response(),
    }
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literals keep their colons.
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(host);
    }
    host.split(':').next().unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::strip_port;

    #[test]
    fn strips_port_from_host_header() {
        assert_eq!(strip_port("example.com:8000"), "example.com");
        assert_eq!(strip_port("example.com"), "example.com");
        assert_eq!(strip_port("[::1]:8000"), "::1");
    }
}
